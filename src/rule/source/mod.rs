//! 内置规则源：进程启动即确定的静态规则表
pub mod base;
pub mod extended;

use super::model::{RuleSet, RuleTable};

/// 内置规则库
pub struct RuleStore;

impl RuleStore {
    /// 基础规则集（移动端）
    pub fn base() -> RuleSet {
        RuleSet {
            desktop_devices: RuleTable::new(),
            phone_devices: RuleTable::from_pairs(base::PHONE_DEVICES),
            tablet_devices: RuleTable::from_pairs(base::TABLET_DEVICES),
            operating_systems: RuleTable::from_pairs(base::OPERATING_SYSTEMS),
            browsers: RuleTable::from_pairs(base::BROWSERS),
            properties: RuleTable::from_list_pairs(base::PROPERTIES),
        }
    }

    /// 扩展规则集（桌面端）
    pub fn extended() -> RuleSet {
        RuleSet {
            desktop_devices: RuleTable::from_pairs(extended::DESKTOP_DEVICES),
            phone_devices: RuleTable::new(),
            tablet_devices: RuleTable::new(),
            operating_systems: RuleTable::from_pairs(extended::OPERATING_SYSTEMS),
            browsers: RuleTable::from_pairs(extended::BROWSERS),
            properties: RuleTable::from_list_pairs(extended::PROPERTIES),
        }
    }
}
