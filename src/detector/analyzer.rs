//! 规则匹配分析器：按规则表顺序扫描，第一个命中的规则即为结果
use tracing::trace;

use crate::compiler::CompiledRuleTable;

/// 首次命中分类器
pub struct Classifier;

impl Classifier {
    /// 返回第一个命中的规则名；规则名为空时返回整段匹配文本
    pub fn classify(rules: &CompiledRuleTable, subject: &str) -> Option<String> {
        // 空模式编译为 None，is_match / captures 均不会命中
        for rule in rules.iter() {
            if rule.name.is_empty() {
                if let Some(captures) = rule.captures(subject) {
                    let matched = captures.get(0).map(|m| m.as_str().to_string());
                    trace!("Anonymous rule matched: text={:?}, rule={}", matched, rule.describe());
                    return matched;
                }
                continue;
            }

            if rule.is_match(subject) {
                trace!("Rule matched: name={}, rule={}", rule.name, rule.describe());
                return Some(rule.name.clone());
            }
        }

        None
    }

    /// 按规则名（忽略大小写）查找并匹配；未知名称与空模式均返回 false
    pub fn matches_key(rules: &CompiledRuleTable, key: &str, subject: &str) -> bool {
        rules
            .get_ignore_case(key)
            .is_some_and(|rule| rule.is_match(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::rule::RuleTable;

    fn compile(pairs: &[(&str, &str)]) -> CompiledRuleTable {
        RuleCompiler::compile_table(&RuleTable::from_pairs(pairs)).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let rules = compile(&[("Macintosh", "Macintosh"), ("iPhone", r"\biPhone\b"), ("Generic", "Mozilla")]);
        assert_eq!(
            Classifier::classify(&rules, "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X)"),
            Some("iPhone".to_string())
        );
        assert_eq!(
            Classifier::classify(&rules, "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15)"),
            Some("Macintosh".to_string())
        );
    }

    #[test]
    fn test_no_match_and_empty_patterns() {
        let rules = compile(&[("Empty", ""), ("Kindle", "Kindle")]);
        assert_eq!(Classifier::classify(&rules, "curl/8.0"), None);
        assert_eq!(Classifier::classify(&rules, ""), None);
        assert!(!Classifier::matches_key(&rules, "empty", "anything"));
    }

    #[test]
    fn test_anonymous_rule_returns_whole_match() {
        let rules = compile(&[("Empty", ""), ("", r"Nintendo (3DS|Switch)")]);
        assert_eq!(
            Classifier::classify(&rules, "Mozilla/5.0 (Nintendo Switch; WifiWebAuthApplet)"),
            Some("Nintendo Switch".to_string())
        );
        assert_eq!(Classifier::classify(&rules, "Mozilla/5.0 (Macintosh)"), None);
    }

    #[test]
    fn test_matches_key_is_case_insensitive() {
        let rules = compile(&[("iPhone", r"\biPhone\b")]);
        assert!(Classifier::matches_key(&rules, "IPHONE", "Mozilla/5.0 (iphone)"));
        assert!(Classifier::matches_key(&rules, "iphone", "Mozilla/5.0 (iPhone)"));
        assert!(!Classifier::matches_key(&rules, "iPhonez", "Mozilla/5.0 (iPhone)"));
    }
}
