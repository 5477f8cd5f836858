//! 规则模块：负责规则的数据模型、内置规则源与规则合并
pub mod model;
pub mod merger;
pub mod source;

// 导出核心接口
pub use self::model::{AgentReport, DeviceType, PatternSpec, Rule, RuleSet, RuleTable};
pub use self::merger::{MergeMode, RuleMerger};
pub use self::source::RuleStore;
