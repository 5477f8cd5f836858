//! 全局错误类型定义
//! 未知规则名/属性名不属于错误，统一以 false / None 返回

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    // 规则相关错误
    #[error("Rule load failed: {0}")]
    RuleLoadError(String),

    // 编译相关错误（规则表损坏，不做恢复，直接上抛）
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    // 引擎相关错误
    #[error("Engine initialization failed: {0}")]
    EngineInitError(String),

    /// 动态能力查询名称不符合 is<Name> 约定（调用方编程错误）
    #[error("No such method exists: {0}")]
    InvalidInvocation(String),

    // 序列化/反序列化错误
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type AgentResult<T> = Result<T, AgentError>;
