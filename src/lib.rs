//! rsagent - Rust User-Agent 识别工具
//! 基于规则表识别设备 / 操作系统 / 浏览器 / 版本号 / 爬虫，并按优先级解析 Accept-Language

// 导出全局错误类型
pub use self::error::{AgentError, AgentResult};

// 导出配置模块
pub use self::config::{AgentConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    AgentReport, DeviceType, MergeMode, PatternSpec, Rule, RuleMerger, RuleSet, RuleStore, RuleTable,
};

// 导出工具模块核心接口
pub use self::utils::{
    HeaderConverter, LanguageEntry, LanguageRanker, VersionExtractor, VersionKind, VersionValue,
};

// 导出编译模块核心接口
pub use self::compiler::{
    CompiledPropertyTable, CompiledRule, CompiledRuleTable, CompiledTemplate, RuleCompiler,
};

// 导出检测模块核心接口
pub use self::detector::{
    Agent, Classifier, CrawlerDetector, RuleEngine, SignatureCrawlerDetector,
    global_engine, init_agent, init_agent_with_config,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
