//! 全局引擎单例管理
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::engine::RuleEngine;
use crate::config::{AgentConfig, ConfigManager};
use crate::error::AgentResult;

/// 全局规则引擎实例
static GLOBAL_ENGINE: OnceCell<Arc<RuleEngine>> = OnceCell::new();

/// 初始化全局引擎（默认配置）
pub fn init_agent() -> AgentResult<()> {
    init_agent_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局引擎，已初始化时忽略本次配置
pub fn init_agent_with_config(config: AgentConfig) -> AgentResult<()> {
    if GLOBAL_ENGINE.get().is_some() {
        debug!("Global rule engine already initialized, ignoring new config");
        return Ok(());
    }

    GLOBAL_ENGINE.get_or_try_init(|| {
        let engine = RuleEngine::new(config)?;
        info!("Global rule engine initialized");
        Ok::<_, crate::error::AgentError>(Arc::new(engine))
    })?;

    Ok(())
}

/// 获取全局引擎，首次调用时按默认配置构建
pub fn global_engine() -> AgentResult<Arc<RuleEngine>> {
    GLOBAL_ENGINE
        .get_or_try_init(|| RuleEngine::new(ConfigManager::get_default()).map(Arc::new))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_engine_is_shared() {
        init_agent().unwrap();
        // 重复初始化不报错
        init_agent_with_config(ConfigManager::custom().use_extended_rules(false).build()).unwrap();

        let a = global_engine().unwrap();
        let b = global_engine().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_concurrent_first_calls_share_one_engine() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| global_engine().unwrap()))
            .collect();
        let engines: Vec<Arc<RuleEngine>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = &engines[0];
        assert!(engines.iter().all(|e| Arc::ptr_eq(first, e)));
        assert!(Arc::ptr_eq(first, &global_engine().unwrap()));
    }
}
