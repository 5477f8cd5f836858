//! 规则编译器核心
//! 仅负责将合并后的规则表编译为可执行的正则模式

use regex::Regex;
use rustc_hash::FxHashMap;

use super::pattern::{CompiledPropertyTable, CompiledRule, CompiledRuleTable, CompiledTemplate};
use crate::error::AgentResult;
use crate::rule::RuleTable;

/// 版本号占位符
pub const VERSION_PLACEHOLDER: &str = "[VER]";
/// 占位符替换后的捕获分组：任何"看起来像版本号"的字符
pub const VERSION_CAPTURE: &str = r"([\w._\+]+)";

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译布尔匹配规则表；多候选模式以 "|" 拼接
    pub fn compile_table(table: &RuleTable) -> AgentResult<CompiledRuleTable> {
        let mut rules = Vec::with_capacity(table.len());
        let mut lower_index = FxHashMap::default();

        for rule in table.iter() {
            let regex = if rule.pattern.is_empty() {
                None
            } else {
                Some(Self::compile_pattern(&rule.pattern.joined())?)
            };

            lower_index.insert(rule.name.to_lowercase(), rules.len());
            rules.push(CompiledRule {
                name: rule.name.clone(),
                regex,
            });
        }

        Ok(CompiledRuleTable { rules, lower_index })
    }

    /// 编译版本属性表；每个候选模板单独编译，保持顺序
    pub fn compile_properties(table: &RuleTable) -> AgentResult<CompiledPropertyTable> {
        let mut properties = FxHashMap::default();

        for rule in table.iter() {
            let mut templates = Vec::new();
            for template in rule.pattern.alternatives() {
                let pattern = template.replace(VERSION_PLACEHOLDER, VERSION_CAPTURE);
                templates.push(CompiledTemplate {
                    template: template.to_string(),
                    regex: Self::compile_pattern(&pattern)?,
                });
            }
            properties.insert(rule.name.clone(), templates);
        }

        Ok(CompiledPropertyTable { properties })
    }

    /// 编译单个模式：忽略大小写，点号匹配换行
    pub fn compile_pattern(pattern: &str) -> AgentResult<Regex> {
        Ok(Regex::new(&format!("(?is){}", pattern))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgentError;
    use crate::rule::PatternSpec;

    #[test]
    fn test_compile_table_skips_empty_patterns() {
        let mut table = RuleTable::new();
        table.insert("Empty", "");
        table.insert("iPhone", r"\biPhone\b");

        let compiled = RuleCompiler::compile_table(&table).unwrap();
        assert_eq!(compiled.len(), 2);
        assert!(compiled.get_ignore_case("empty").unwrap().regex.is_none());
        assert!(compiled.get_ignore_case("IPHONE").unwrap().is_match("Mozilla (iphone)"));
    }

    #[test]
    fn test_compile_table_joins_lists() {
        let mut table = RuleTable::new();
        table.insert("Edge", PatternSpec::List(vec!["Edge".into(), "Edg/".into()]));
        let compiled = RuleCompiler::compile_table(&table).unwrap();
        assert_eq!(compiled.get_ignore_case("edge").unwrap().describe(), "(?is)Edge|Edg/");
    }

    #[test]
    fn test_invalid_pattern_is_a_hard_failure() {
        let table = RuleTable::from_pairs(&[("Broken", "Chrome(")]);
        let err = RuleCompiler::compile_table(&table).unwrap_err();
        assert!(matches!(err, AgentError::RegexCompileError(_)));
    }

    #[test]
    fn test_compile_properties_substitutes_placeholder() {
        let table = RuleTable::from_list_pairs(&[("Edge", &["Edge/[VER]", "Edg/[VER]"])]);
        let compiled = RuleCompiler::compile_properties(&table).unwrap();

        let templates = compiled.get("Edge").unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[1].template, "Edg/[VER]");
        let caps = templates[1].regex.captures("Edg/120.0.2210.91").unwrap();
        assert_eq!(&caps[1], "120.0.2210.91");
    }
}
