//! 编译后模式模型
//! 正则编译后的结构，构建完成后只读，可跨线程共享

use regex::{Captures, Regex};
use rustc_hash::FxHashMap;

/// 编译后的单条规则；空模式编译为 None，匹配时跳过
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub name: String,
    pub regex: Option<Regex>,
}

impl CompiledRule {
    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(input))
    }

    /// 匹配输入，返回捕获结果
    pub fn captures<'a>(&self, input: &'a str) -> Option<Captures<'a>> {
        self.regex.as_ref().and_then(|re| re.captures(input))
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        self.regex.as_ref().map(Regex::as_str).unwrap_or("")
    }
}

/// 编译后的规则表，保持合并后的顺序
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleTable {
    pub(crate) rules: Vec<CompiledRule>,
    // 小写规则名 -> 位置，重名时后者生效
    pub(crate) lower_index: FxHashMap<String, usize>,
}

impl CompiledRuleTable {
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// 按规则名查找（忽略大小写）
    pub fn get_ignore_case(&self, name: &str) -> Option<&CompiledRule> {
        self.lower_index
            .get(&name.to_lowercase())
            .map(|&pos| &self.rules[pos])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// 编译后的版本模板
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    pub template: String,
    pub regex: Regex,
}

/// 编译后的版本属性表：属性名 -> 有序候选模板
#[derive(Debug, Clone, Default)]
pub struct CompiledPropertyTable {
    pub(crate) properties: FxHashMap<String, Vec<CompiledTemplate>>,
}

impl CompiledPropertyTable {
    pub fn get(&self, name: &str) -> Option<&[CompiledTemplate]> {
        self.properties.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
