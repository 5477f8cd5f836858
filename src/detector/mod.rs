//! 检测模块：规则匹配、规则引擎、爬虫识别与识别会话
pub mod agent;
pub mod analyzer;
pub mod crawler;
pub mod engine;
pub mod global;

// 导出核心接口
pub use self::agent::Agent;
pub use self::analyzer::Classifier;
pub use self::crawler::{CrawlerDetector, SignatureCrawlerDetector};
pub use self::engine::RuleEngine;
pub use self::global::{global_engine, init_agent, init_agent_with_config};
