//! User-Agent 识别会话
//! 持有一个 User-Agent 与请求头，所有判定委托给共享的只读 RuleEngine

use std::sync::Arc;

use http::header::HeaderMap;
use rustc_hash::FxHashMap;
use tracing::warn;

use super::engine::RuleEngine;
use super::global::global_engine;
use crate::error::{AgentError, AgentResult};
use crate::rule::source::base::{MOBILE_HEADERS, USER_AGENT_HEADERS};
use crate::rule::{AgentReport, DeviceType};
use crate::utils::{HeaderConverter, LanguageRanker, VersionKind, VersionValue};

// CDN 转发时用于判定设备的上游请求头
const CDN_MOBILE_VIEWER: &str = "cloudfront-is-mobile-viewer";
const CDN_TABLET_VIEWER: &str = "cloudfront-is-tablet-viewer";
const CDN_DESKTOP_VIEWER: &str = "cloudfront-is-desktop-viewer";

const ACCEPT_LANGUAGE: &str = "accept-language";

/// 识别会话
#[derive(Debug, Clone)]
pub struct Agent {
    engine: Arc<RuleEngine>,
    user_agent: Option<String>,
    http_headers: FxHashMap<String, String>,
}

impl Agent {
    /// 使用全局引擎创建会话
    pub fn new() -> AgentResult<Self> {
        Ok(Self::with_engine(global_engine()?))
    }

    /// 使用指定引擎创建会话
    pub fn with_engine(engine: Arc<RuleEngine>) -> Self {
        Self {
            engine,
            user_agent: None,
            http_headers: FxHashMap::default(),
        }
    }

    /// 从请求头创建会话，User-Agent 由请求头推导
    pub fn from_headers<I, K, V>(engine: Arc<RuleEngine>, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut agent = Self::with_engine(engine);
        agent.set_http_headers(headers);
        agent.set_user_agent(None);
        agent
    }

    /// 从 http::HeaderMap 创建会话
    pub fn from_header_map(engine: Arc<RuleEngine>, headers: &HeaderMap) -> Self {
        Self::from_headers(engine, HeaderConverter::from_header_map(headers))
    }

    /// 链式设置 User-Agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// 设置 User-Agent；传入 None 时从已设置的请求头推导
    pub fn set_user_agent(&mut self, user_agent: Option<&str>) {
        self.user_agent = match user_agent {
            Some(ua) => Some(ua.trim().to_string()),
            None => self.user_agent_from_headers(),
        };
    }

    /// 替换请求头，名称统一归一化
    pub fn set_http_headers<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.http_headers = HeaderConverter::from_pairs(headers);
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("")
    }

    /// 按名称读取请求头（名称格式不限）
    pub fn http_header(&self, name: &str) -> Option<&str> {
        self.http_headers
            .get(&HeaderConverter::normalize_name(name))
            .map(String::as_str)
    }

    pub fn http_headers(&self) -> &FxHashMap<String, String> {
        &self.http_headers
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    fn user_agent_from_headers(&self) -> Option<String> {
        let parts: Vec<&str> = USER_AGENT_HEADERS
            .iter()
            .filter_map(|name| self.http_headers.get(*name))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    // ========== 分类 ==========

    pub fn browser(&self) -> Option<String> {
        self.engine.browser(self.user_agent())
    }

    pub fn platform(&self) -> Option<String> {
        self.engine.platform(self.user_agent())
    }

    pub fn device(&self) -> Option<String> {
        self.engine.device(self.user_agent())
    }

    /// 爬虫签名（首字母大写）
    pub fn robot(&self) -> Option<String> {
        self.engine.robot(self.user_agent()).map(|name| capitalize(&name))
    }

    // ========== 设备判定 ==========

    /// 请求是否经由 CDN 转发（User-Agent 恰为 CDN 标识）
    fn via_cdn(&self) -> bool {
        self.user_agent() == self.engine.config().cdn_user_agent
    }

    /// CDN 转发时读取上游 viewer 头
    fn cdn_viewer_flag(&self, header: &str) -> Option<bool> {
        if !self.via_cdn() {
            return None;
        }
        self.http_headers.get(header).map(|value| value == "true")
    }

    /// 移动网关请求头检查
    fn has_mobile_headers(&self) -> bool {
        MOBILE_HEADERS.iter().any(|(name, needles)| {
            self.http_headers
                .get(*name)
                .is_some_and(|value| needles.is_empty() || needles.iter().any(|needle| value.contains(needle)))
        })
    }

    /// 手机或平板
    pub fn is_mobile(&self) -> bool {
        if self.cdn_viewer_flag(CDN_MOBILE_VIEWER) == Some(true) {
            return true;
        }
        if self.engine.config().check_mobile_headers && self.has_mobile_headers() {
            return true;
        }
        self.engine.matches_mobile(self.user_agent())
    }

    pub fn is_tablet(&self) -> bool {
        if self.cdn_viewer_flag(CDN_TABLET_VIEWER) == Some(true) {
            return true;
        }
        self.engine.matches_tablet(self.user_agent())
    }

    /// 非移动端、非平板、非爬虫；CDN 转发时直接信任上游 desktop viewer 头
    pub fn is_desktop(&self) -> bool {
        if let Some(flag) = self.cdn_viewer_flag(CDN_DESKTOP_VIEWER) {
            return flag;
        }
        !self.is_mobile() && !self.is_tablet() && !self.is_robot()
    }

    pub fn is_phone(&self) -> bool {
        self.is_mobile() && !self.is_tablet()
    }

    pub fn is_robot(&self) -> bool {
        self.engine.crawler().is_crawler(self.user_agent())
    }

    /// 设备类型，按 desktop → phone → tablet → robot 顺序判定
    pub fn device_type(&self) -> DeviceType {
        if self.is_desktop() {
            DeviceType::Desktop
        } else if self.is_phone() {
            DeviceType::Phone
        } else if self.is_tablet() {
            DeviceType::Tablet
        } else if self.is_robot() {
            DeviceType::Robot
        } else {
            DeviceType::Other
        }
    }

    // ========== 动态能力查询 ==========

    /// 按名称查询（忽略大小写）；未知名称返回 false
    pub fn is(&self, key: &str) -> bool {
        match key.to_ascii_lowercase().as_str() {
            "mobile" => self.is_mobile(),
            "tablet" => self.is_tablet(),
            "desktop" => self.is_desktop(),
            "phone" => self.is_phone(),
            "robot" => self.is_robot(),
            _ => self.engine.matches_key(key, self.user_agent()),
        }
    }

    /// 处理 is<Name> 形式的调用，例如 "isAndroidOS"、"isiPhone"
    pub fn call(&self, method: &str) -> AgentResult<bool> {
        match method.strip_prefix("is") {
            Some(key) => Ok(self.is(key)),
            None => {
                warn!("Rejected capability call: {}", method);
                Err(AgentError::InvalidInvocation(method.to_string()))
            }
        }
    }

    // ========== 版本与语言 ==========

    /// 提取版本号；属性未知或未匹配返回 None
    pub fn version(&self, property: &str, kind: VersionKind) -> Option<VersionValue> {
        self.engine.version(property, self.user_agent(), kind)
    }

    pub fn version_text(&self, property: &str) -> Option<String> {
        self.version(property, VersionKind::Text)?
            .as_text()
            .map(str::to_string)
    }

    pub fn version_float(&self, property: &str) -> Option<f64> {
        self.version(property, VersionKind::Float)?.as_float()
    }

    /// 按优先级排序的语言列表；未传入时读取 accept-language 头
    pub fn languages(&self, accept_language: Option<&str>) -> Vec<String> {
        let header = accept_language.or_else(|| self.http_header(ACCEPT_LANGUAGE));
        LanguageRanker::rank(header)
    }

    /// 汇总识别结果
    pub fn report(&self) -> AgentReport {
        let platform = self.platform();
        let browser = self.browser();

        AgentReport {
            user_agent: self.user_agent().to_string(),
            device_type: self.device_type(),
            device: self.device(),
            platform_version: platform.as_deref().and_then(|p| self.version_text(p)),
            platform,
            browser_version: browser.as_deref().and_then(|b| self.version_text(b)),
            browser,
            robot: self.robot(),
            languages: self.languages(None),
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use http::header::{HeaderName, HeaderValue};
    use once_cell::sync::Lazy;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15 Mobile Safari/604.1";
    const MAC_CHROME: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15) AppleWebKit/537.36 Chrome/90.0 Safari/537.36";
    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 12_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1 Mobile/15E148 Safari/604.1";
    const GOOGLEBOT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 11; Pixel 5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.91 Mobile Safari/537.36";

    static ENGINE: Lazy<Arc<RuleEngine>> =
        Lazy::new(|| Arc::new(RuleEngine::new(ConfigManager::get_default()).unwrap()));

    fn agent(ua: &str) -> Agent {
        Agent::with_engine(ENGINE.clone()).with_user_agent(ua)
    }

    #[test]
    fn test_iphone() {
        let a = agent(IPHONE);
        assert_eq!(a.device().as_deref(), Some("iPhone"));
        assert_eq!(a.device_type(), DeviceType::Phone);
        assert_eq!(a.browser().as_deref(), Some("Safari"));
        assert_eq!(a.platform().as_deref(), Some("iOS"));
        assert!(a.is_mobile());
        assert!(!a.is_desktop());
    }

    #[test]
    fn test_mac_chrome() {
        let a = agent(MAC_CHROME);
        assert_eq!(a.device_type(), DeviceType::Desktop);
        assert_eq!(a.browser().as_deref(), Some("Chrome"));
        assert!(!a.is_robot());
    }

    #[test]
    fn test_tablet() {
        let a = agent(IPAD);
        assert_eq!(a.device_type(), DeviceType::Tablet);
        assert!(a.is_mobile());
        assert!(!a.is_phone());
    }

    #[test]
    fn test_robot() {
        let a = agent(GOOGLEBOT);
        assert!(a.is_robot());
        assert_eq!(a.robot().as_deref(), Some("Googlebot"));
        assert_eq!(a.device_type(), DeviceType::Robot);
        assert!(!a.is_desktop());

        let curl = agent("curl/8.4.0");
        assert_eq!(curl.robot().as_deref(), Some("Curl"));

        let cubot = agent(
            "Mozilla/5.0 (Linux; Android 10; CUBOT NOTE 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.91 Mobile Safari/537.36",
        );
        assert!(!cubot.is_robot());
        assert_eq!(cubot.robot(), None);
        assert_eq!(cubot.device_type(), DeviceType::Phone);
    }

    #[test]
    fn test_device_type_is_exclusive() {
        for ua in [IPHONE, MAC_CHROME, IPAD, GOOGLEBOT, ANDROID, "", "???"] {
            let a = agent(ua);
            let flags = [
                a.device_type() == DeviceType::Desktop,
                a.device_type() == DeviceType::Phone,
                a.device_type() == DeviceType::Tablet,
                a.device_type() == DeviceType::Robot,
                a.device_type() == DeviceType::Other,
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "ua={}", ua);
        }
        assert_eq!(agent("").device_type(), DeviceType::Desktop);
    }

    #[test]
    fn test_dynamic_calls() {
        let a = agent(IPHONE);
        assert!(a.call("isiPhone").unwrap());
        assert!(a.call("isIOS").unwrap());
        assert!(a.call("isMobile").unwrap());
        assert!(!a.call("isTablet").unwrap());
        assert!(a.call("isPhone").unwrap());
        assert!(!a.call("isAndroidOS").unwrap());
        // 未知名称不报错
        assert!(!a.call("isNoSuchThing").unwrap());
        assert!(matches!(a.call("getBrowser"), Err(AgentError::InvalidInvocation(_))));
        assert!(a.is("safari"));
    }

    #[test]
    fn test_versions() {
        let a = agent(ANDROID);
        assert_eq!(a.version_float("AndroidOS"), Some(11.0));
        assert_eq!(a.version_text("Chrome").as_deref(), Some("90.0.4430.91"));
        assert_eq!(a.version("NoSuchProperty", VersionKind::Float), None);
        assert_eq!(a.version("", VersionKind::Text), None);
        // 重复调用结果一致
        assert_eq!(a.version_float("AndroidOS"), a.version_float("AndroidOS"));
    }

    #[test]
    fn test_languages() {
        let a = agent(IPHONE);
        assert_eq!(a.languages(Some("en-US,en;q=0.9,fr;q=0.8")), vec!["en-us", "en", "fr"]);
        assert!(a.languages(None).is_empty());

        let with_header = Agent::from_headers(
            ENGINE.clone(),
            [("User-Agent", IPHONE), ("Accept-Language", "de;q=bogus,nl")],
        );
        assert_eq!(with_header.languages(None), vec!["nl", "de"]);
    }

    #[test]
    fn test_user_agent_from_headers() {
        let a = Agent::from_headers(
            ENGINE.clone(),
            [("HTTP_USER_AGENT", "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"), ("HTTP_X_OPERAMINI_PHONE_UA", "Nokia6300")],
        );
        assert_eq!(a.user_agent(), "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80) Nokia6300");
        assert_eq!(a.http_header("X-OperaMini-Phone-UA"), Some("Nokia6300"));
        // x-operamini-phone-ua 属于移动网关请求头
        assert!(a.is_mobile());

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("user-agent"), HeaderValue::from_static(MAC_CHROME));
        let b = Agent::from_header_map(ENGINE.clone(), &headers);
        assert_eq!(b.user_agent(), MAC_CHROME);
        assert_eq!(b.device_type(), DeviceType::Desktop);
    }

    #[test]
    fn test_mobile_headers() {
        let mut a = agent(MAC_CHROME);
        a.set_http_headers([("Accept", "text/html,application/vnd.wap.xhtml+xml")]);
        assert!(a.is_mobile());

        let engine = Arc::new(
            RuleEngine::new(ConfigManager::custom().check_mobile_headers(false).build()).unwrap(),
        );
        let mut b = Agent::with_engine(engine).with_user_agent(MAC_CHROME);
        b.set_http_headers([("Accept", "text/html,application/vnd.wap.xhtml+xml")]);
        assert!(!b.is_mobile());
    }

    #[test]
    fn test_cdn_viewer_headers() {
        let desktop = Agent::from_headers(
            ENGINE.clone(),
            [("HTTP_USER_AGENT", "Amazon CloudFront"), ("HTTP_CLOUDFRONT_IS_DESKTOP_VIEWER", "true")],
        );
        assert!(desktop.is_desktop());
        assert_eq!(desktop.device_type(), DeviceType::Desktop);

        let not_desktop = Agent::from_headers(
            ENGINE.clone(),
            [("User-Agent", "Amazon CloudFront"), ("CloudFront-Is-Desktop-Viewer", "false")],
        );
        assert!(!not_desktop.is_desktop());
        assert_eq!(not_desktop.device_type(), DeviceType::Other);

        let tablet = Agent::from_headers(
            ENGINE.clone(),
            [
                ("User-Agent", "Amazon CloudFront"),
                ("CloudFront-Is-Desktop-Viewer", "false"),
                ("CloudFront-Is-Mobile-Viewer", "true"),
                ("CloudFront-Is-Tablet-Viewer", "true"),
            ],
        );
        assert_eq!(tablet.device_type(), DeviceType::Tablet);

        // 非 CDN 请求忽略 viewer 头
        let mut spoofed = agent(IPHONE);
        spoofed.set_http_headers([("CloudFront-Is-Desktop-Viewer", "true")]);
        assert_eq!(spoofed.device_type(), DeviceType::Phone);
    }

    #[test]
    fn test_report() {
        let a = Agent::from_headers(
            ENGINE.clone(),
            [("User-Agent", ANDROID), ("Accept-Language", "en-US,en;q=0.9")],
        );
        let report = a.report();
        assert_eq!(report.device_type, DeviceType::Phone);
        assert_eq!(report.device.as_deref(), Some("Pixel"));
        assert_eq!(report.platform.as_deref(), Some("AndroidOS"));
        assert_eq!(report.platform_version.as_deref(), Some("11"));
        assert_eq!(report.browser.as_deref(), Some("Chrome"));
        assert_eq!(report.browser_version.as_deref(), Some("90.0.4430.91"));
        assert_eq!(report.robot, None);
        assert_eq!(report.languages, vec!["en-us", "en"]);
    }
}
