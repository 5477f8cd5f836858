//! 编译模块：将合并后的规则编译为可执行的正则模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledPropertyTable, CompiledRule, CompiledRuleTable, CompiledTemplate};
pub use self::compiler::{RuleCompiler, VERSION_CAPTURE, VERSION_PLACEHOLDER};
