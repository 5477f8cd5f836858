//! 规则合并器
//! 将多张规则表按顺序合并为一张，同名规则的所有候选模式都会被保留，绝不静默覆盖

use tracing::trace;

use super::model::{PatternSpec, RuleTable};

/// 合并方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// 标量与标量用 "|" 拼接为单个正则（纯布尔匹配表）
    Alternation,
    /// 始终保留为有序候选列表（带 [VER] 占位符的版本属性表）
    List,
}

/// 规则合并工具
pub struct RuleMerger;

impl RuleMerger {
    /// 按顺序合并规则表
    pub fn merge(tables: &[&RuleTable], mode: MergeMode) -> RuleTable {
        let mut merged = RuleTable::new();

        for table in tables {
            for rule in table.iter() {
                Self::merge_one(&mut merged, &rule.name, &rule.pattern, mode);
            }
        }

        trace!(
            "Merged {} tables into {} rules ({:?})",
            tables.len(),
            merged.len(),
            mode
        );
        merged
    }

    fn merge_one(merged: &mut RuleTable, name: &str, incoming: &PatternSpec, mode: MergeMode) {
        // 空输入不贡献任何内容
        if incoming.is_empty() {
            if !merged.contains(name) {
                merged.insert(name, incoming.clone());
            }
            return;
        }

        let Some(current) = merged.get_mut(name) else {
            merged.insert(name, Self::normalize(incoming.clone(), mode));
            return;
        };

        if current.is_empty() {
            *current = Self::normalize(incoming.clone(), mode);
            return;
        }

        let incoming_alternatives = incoming.alternatives();
        match current {
            PatternSpec::List(list) => {
                list.extend(incoming_alternatives.into_iter().map(str::to_string));
            }
            PatternSpec::Single(existing) => match mode {
                MergeMode::Alternation => {
                    existing.push('|');
                    existing.push_str(&incoming_alternatives.join("|"));
                }
                MergeMode::List => {
                    let mut list = vec![std::mem::take(existing)];
                    list.extend(incoming_alternatives.into_iter().map(str::to_string));
                    *current = PatternSpec::List(list);
                }
            },
        }
    }

    fn normalize(spec: PatternSpec, mode: MergeMode) -> PatternSpec {
        match mode {
            MergeMode::Alternation => spec,
            MergeMode::List => PatternSpec::List(spec.into_list()),
        }
    }
}
