//! 全局配置管理,存储所有可配置项

use crate::rule::RuleSet;

/// CDN 转发时使用的默认 User-Agent
pub const DEFAULT_CDN_USER_AGENT: &str = "Amazon CloudFront";

/// 全局配置
#[derive(Debug, Clone)]
pub struct AgentConfig {
    // CDN 转发身份，命中时信任上游的 viewer 头
    pub cdn_user_agent: String,
    // is_mobile 是否检查移动网关请求头
    pub check_mobile_headers: bool,
    // 是否在基础规则之上叠加扩展规则（桌面设备/桌面系统/桌面浏览器）
    pub use_extended_rules: bool,
    // 调用方追加的扩展规则，在内置扩展之后合并
    pub extension: Option<RuleSet>,
    // 是否输出引擎构建摘要
    pub verbose: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            cdn_user_agent: DEFAULT_CDN_USER_AGENT.to_string(),
            check_mobile_headers: true,
            use_extended_rules: true,
            extension: None,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> AgentConfig {
        AgentConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: AgentConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cdn_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.cdn_user_agent = user_agent.into();
        self
    }

    pub fn check_mobile_headers(mut self, enabled: bool) -> Self {
        self.config.check_mobile_headers = enabled;
        self
    }

    pub fn use_extended_rules(mut self, enabled: bool) -> Self {
        self.config.use_extended_rules = enabled;
        self
    }

    pub fn extension(mut self, rules: RuleSet) -> Self {
        self.config.extension = Some(rules);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> AgentConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = ConfigManager::custom()
            .cdn_user_agent("Edge CDN")
            .check_mobile_headers(false)
            .verbose(true)
            .build();

        assert_eq!(config.cdn_user_agent, "Edge CDN");
        assert!(!config.check_mobile_headers);
        assert!(config.use_extended_rules);
        assert!(config.verbose);
        assert!(config.extension.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.cdn_user_agent, DEFAULT_CDN_USER_AGENT);
        assert!(config.check_mobile_headers);
    }
}
