//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AgentResult;

/// 单条规则的模式定义：单个正则，或按顺序排列的候选正则列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Single(String),
    List(Vec<String>),
}

impl PatternSpec {
    /// 空字符串 / 空列表视为"无模式"，匹配时直接跳过
    pub fn is_empty(&self) -> bool {
        match self {
            PatternSpec::Single(s) => s.is_empty(),
            PatternSpec::List(list) => list.iter().all(|s| s.is_empty()),
        }
    }

    /// 按顺序返回所有非空候选模式
    pub fn alternatives(&self) -> Vec<&str> {
        match self {
            PatternSpec::Single(s) if s.is_empty() => Vec::new(),
            PatternSpec::Single(s) => vec![s.as_str()],
            PatternSpec::List(list) => list
                .iter()
                .filter(|s| !s.is_empty())
                .map(String::as_str)
                .collect(),
        }
    }

    /// 用 "|" 拼接成单个正则（布尔匹配用）
    pub fn joined(&self) -> String {
        self.alternatives().join("|")
    }

    /// 展开为候选列表（版本提取用）
    pub fn into_list(self) -> Vec<String> {
        match self {
            PatternSpec::Single(s) if s.is_empty() => Vec::new(),
            PatternSpec::Single(s) => vec![s],
            PatternSpec::List(list) => list.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }
}

impl From<&str> for PatternSpec {
    fn from(value: &str) -> Self {
        PatternSpec::Single(value.to_string())
    }
}

impl From<String> for PatternSpec {
    fn from(value: String) -> Self {
        PatternSpec::Single(value)
    }
}

impl From<Vec<String>> for PatternSpec {
    fn from(value: Vec<String>) -> Self {
        PatternSpec::List(value)
    }
}

impl From<&[&str]> for PatternSpec {
    fn from(value: &[&str]) -> Self {
        PatternSpec::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// 命名规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub pattern: PatternSpec,
}

/// 规则表：规则名唯一，保留插入顺序（first match wins 依赖该顺序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    index: FxHashMap<String, usize>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从静态 (名称, 正则) 表构建
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(name, pattern)| (name.to_string(), PatternSpec::from(*pattern)))
            .collect()
    }

    /// 从静态 (名称, 候选模板列表) 表构建，单元素列表也保持列表形态
    pub fn from_list_pairs(pairs: &[(&str, &[&str])]) -> Self {
        pairs
            .iter()
            .map(|(name, patterns)| (name.to_string(), PatternSpec::from(*patterns)))
            .collect()
    }

    /// 插入规则；同名规则原位替换，位置不变
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<PatternSpec>) {
        let name = name.into();
        let pattern = pattern.into();
        match self.index.get(&name) {
            Some(&pos) => self.rules[pos].pattern = pattern,
            None => {
                self.index.insert(name.clone(), self.rules.len());
                self.rules.push(Rule { name, pattern });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PatternSpec> {
        self.index.get(name).map(|&pos| &self.rules[pos].pattern)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut PatternSpec> {
        self.index.get(name).map(|&pos| &mut self.rules[pos].pattern)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(String, PatternSpec)> for RuleTable {
    fn from_iter<T: IntoIterator<Item = (String, PatternSpec)>>(iter: T) -> Self {
        let mut table = RuleTable::new();
        for (name, pattern) in iter {
            table.insert(name, pattern);
        }
        table
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// ======== 序列化：JSON 对象，按文档顺序读写 ========
impl Serialize for RuleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.name, &rule.pattern)?;
        }
        map.end()
    }
}

struct RuleTableVisitor;

impl<'de> Visitor<'de> for RuleTableVisitor {
    type Value = RuleTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of rule name to pattern string or pattern list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RuleTable, A::Error> {
        let mut table = RuleTable::new();
        while let Some((name, pattern)) = access.next_entry::<String, PatternSpec>()? {
            table.insert(name, pattern);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RuleTableVisitor)
    }
}

/// 完整规则集（基础库或扩展库）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub desktop_devices: RuleTable,
    #[serde(default)]
    pub phone_devices: RuleTable,
    #[serde(default)]
    pub tablet_devices: RuleTable,
    #[serde(default)]
    pub operating_systems: RuleTable,
    #[serde(default)]
    pub browsers: RuleTable,
    /// 版本属性模板，值中包含 [VER] 占位符
    #[serde(default)]
    pub properties: RuleTable,
}

impl RuleSet {
    /// 从 JSON 文本加载规则集
    pub fn from_json(json: &str) -> AgentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 规则总数
    pub fn rule_count(&self) -> usize {
        self.desktop_devices.len()
            + self.phone_devices.len()
            + self.tablet_devices.len()
            + self.operating_systems.len()
            + self.browsers.len()
            + self.properties.len()
    }
}

/// 设备类型判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Phone,
    Tablet,
    Robot,
    Other,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Phone => "phone",
            DeviceType::Tablet => "tablet",
            DeviceType::Robot => "robot",
            DeviceType::Other => "other",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单次识别的汇总结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    pub user_agent: String,
    pub device_type: DeviceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

// ======== 为 AgentReport 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for AgentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn named(name: &Option<String>, version: &Option<String>) -> String {
            match (name, version) {
                (Some(n), Some(v)) if !v.is_empty() => format!("{} {}", n, v),
                (Some(n), _) => n.clone(),
                (None, _) => "-".to_string(),
            }
        }

        writeln!(f, "type:     {}", self.device_type)?;
        writeln!(f, "device:   {}", self.device.as_deref().unwrap_or("-"))?;
        writeln!(f, "platform: {}", named(&self.platform, &self.platform_version))?;
        writeln!(f, "browser:  {}", named(&self.browser, &self.browser_version))?;
        writeln!(f, "robot:    {}", self.robot.as_deref().unwrap_or("-"))?;
        write!(f, "languages: {}", self.languages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_keeps_insertion_order_and_replaces_in_place() {
        let mut table = RuleTable::from_pairs(&[("Macintosh", "Macintosh"), ("iPhone", "iPhone")]);
        table.insert("Macintosh", "PPC");
        table.insert("Kindle", "Kindle");

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["Macintosh", "iPhone", "Kindle"]);
        assert_eq!(table.get("Macintosh"), Some(&PatternSpec::from("PPC")));
    }

    #[test]
    fn test_pattern_spec_alternatives_skip_empty() {
        let spec = PatternSpec::List(vec!["Edge/[VER]".into(), "".into(), "Edg/[VER]".into()]);
        assert_eq!(spec.alternatives(), vec!["Edge/[VER]", "Edg/[VER]"]);
        assert_eq!(spec.joined(), "Edge/[VER]|Edg/[VER]");
        assert!(PatternSpec::from("").is_empty());
        assert!(PatternSpec::List(vec![]).is_empty());
    }

    #[test]
    fn test_rule_set_from_json_preserves_document_order() {
        let json = r#"{
            "browsers": { "Zeta": "zeta", "Alpha": "alpha", "Mid": ["m1", "m2"] },
            "properties": { "Zeta": "Zeta/[VER]" }
        }"#;
        let set = RuleSet::from_json(json).unwrap();

        let names: Vec<&str> = set.browsers.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(
            set.browsers.get("Mid"),
            Some(&PatternSpec::List(vec!["m1".into(), "m2".into()]))
        );
        assert!(set.phone_devices.is_empty());
        assert_eq!(set.rule_count(), 4);
    }

    #[test]
    fn test_rule_set_from_json_rejects_garbage() {
        assert!(RuleSet::from_json(r#"{ "browsers": { "X": 42 } }"#).is_err());
    }

    #[test]
    fn test_device_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DeviceType::Tablet).unwrap(), "\"tablet\"");
        assert_eq!(DeviceType::Other.to_string(), "other");
    }
}
