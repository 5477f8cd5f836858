//! 版本提取工具模块
//! 负责按属性模板顺序尝试匹配，从第一个有效捕获分组中提取版本号
//! 支持文本输出与 major.minor 数值输出

use std::fmt;
use std::str::FromStr;

use crate::compiler::CompiledTemplate;

/// 版本输出类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionKind {
    #[default]
    Text,
    Float,
}

impl FromStr for VersionKind {
    type Err = std::convert::Infallible;

    /// 无法识别的类型一律回落为 Text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "float" => VersionKind::Float,
            _ => VersionKind::Text,
        })
    }
}

/// 提取到的版本值
#[derive(Debug, Clone, PartialEq)]
pub enum VersionValue {
    Text(String),
    Float(f64),
}

impl VersionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VersionValue::Text(s) => Some(s),
            VersionValue::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            VersionValue::Float(v) => Some(*v),
            VersionValue::Text(_) => None,
        }
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionValue::Text(s) => f.write_str(s),
            VersionValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// 版本提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 依次尝试候选模板，返回第一个非空的捕获分组
    pub fn extract(templates: &[CompiledTemplate], subject: &str) -> Option<String> {
        templates.iter().find_map(|template| {
            template
                .regex
                .captures(subject)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
    }

    /// 按指定类型提取
    pub fn extract_as(
        templates: &[CompiledTemplate],
        subject: &str,
        kind: VersionKind,
    ) -> Option<VersionValue> {
        let version = Self::extract(templates, subject)?;
        Some(match kind {
            VersionKind::Text => VersionValue::Text(version),
            VersionKind::Float => VersionValue::Float(Self::normalize(&version)),
        })
    }

    /// 版本号归一化为 major.minor 浮点数
    ///
    /// `_`、空格、`/` 视为分隔符；仅取前两段的前导数字，
    /// 例如 `10.15.7` -> 10.15，`14_0` -> 14.0，`11` -> 11.0。
    /// 首段没有数字时返回 0.0。
    pub fn normalize(version: &str) -> f64 {
        let unified: String = version
            .chars()
            .map(|c| if matches!(c, '_' | ' ' | '/') { '.' } else { c })
            .collect();
        let mut segments = unified.split('.');

        let major = segments.next().map(leading_digits).unwrap_or("");
        if major.is_empty() {
            return 0.0;
        }
        let minor = segments.next().map(leading_digits).unwrap_or("");

        let numeric = if minor.is_empty() {
            major.to_string()
        } else {
            format!("{}.{}", major, minor)
        };
        numeric.parse().unwrap_or(0.0)
    }
}

fn leading_digits(segment: &str) -> &str {
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    &segment[..end]
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::rule::RuleTable;

    fn templates(list: &[&str]) -> Vec<CompiledTemplate> {
        let table = RuleTable::from_list_pairs(&[("P", list)]);
        let compiled = RuleCompiler::compile_properties(&table).unwrap();
        compiled.get("P").unwrap().to_vec()
    }

    #[test]
    fn test_first_matching_template_wins() {
        let t = templates(&[" OPR/[VER]", "Opera Mini/[VER]", "Version/[VER]"]);
        let ua = "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en) Presto/2.5.25 Version/10.54";
        assert_eq!(VersionExtractor::extract(&t, ua), Some("9.80".to_string()));
    }

    #[test]
    fn test_case_insensitive_match() {
        let t = templates(&["Android [VER]"]);
        assert_eq!(
            VersionExtractor::extract(&t, "mozilla/5.0 (linux; android 11; pixel 5)"),
            Some("11".to_string())
        );
    }

    #[test]
    fn test_no_template_matches() {
        let t = templates(&["Edge/[VER]", "Edg/[VER]"]);
        assert_eq!(VersionExtractor::extract(&t, "Mozilla/5.0 Firefox/99.0"), None);
        assert_eq!(VersionExtractor::extract(&[], "anything"), None);
    }

    #[test]
    fn test_template_without_placeholder_degrades_to_no_match() {
        let t = templates(&["Firefox"]);
        assert_eq!(VersionExtractor::extract(&t, "Firefox/99.0"), None);
    }

    #[test]
    fn test_extract_as_float() {
        let t = templates(&[r" \bi?OS\b [VER][ ;]{1}"]);
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X)";
        assert_eq!(
            VersionExtractor::extract_as(&t, ua, VersionKind::Text),
            Some(VersionValue::Text("14_0".to_string()))
        );
        assert_eq!(
            VersionExtractor::extract_as(&t, ua, VersionKind::Float),
            Some(VersionValue::Float(14.0))
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(VersionExtractor::normalize("11"), 11.0);
        assert_eq!(VersionExtractor::normalize("14_0"), 14.0);
        assert!((VersionExtractor::normalize("10.15.7") - 10.15).abs() < 1e-9);
        assert!((VersionExtractor::normalize("120.0.6099.109") - 120.0).abs() < 1e-9);
        assert!((VersionExtractor::normalize("4.0b2") - 4.0).abs() < 1e-9);
        assert!((VersionExtractor::normalize("9.80") - 9.8).abs() < 1e-9);
        assert_eq!(VersionExtractor::normalize("beta"), 0.0);
    }

    #[test]
    fn test_version_kind_parse() {
        assert_eq!("float".parse::<VersionKind>().unwrap(), VersionKind::Float);
        assert_eq!("FLOAT".parse::<VersionKind>().unwrap(), VersionKind::Float);
        assert_eq!("text".parse::<VersionKind>().unwrap(), VersionKind::Text);
        assert_eq!("number".parse::<VersionKind>().unwrap(), VersionKind::Text);
    }
}
