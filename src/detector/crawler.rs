//! 爬虫识别
//! 核心只依赖 CrawlerDetector 接口；内置 SignatureCrawlerDetector 作为默认实现：
//! 先剔除通用浏览器标识，再在剩余文本中查找爬虫/工具签名

use std::fmt;

use regex::Regex;

use crate::compiler::RuleCompiler;
use crate::error::AgentResult;

/// 爬虫识别接口
pub trait CrawlerDetector: Send + Sync + fmt::Debug {
    /// 命中时返回匹配到的签名文本
    fn detect(&self, user_agent: &str) -> Option<String>;

    fn is_crawler(&self, user_agent: &str) -> bool {
        self.detect(user_agent).is_some()
    }
}

/// 通用浏览器标识，匹配前剔除，避免误判
pub const EXCLUSIONS: &[&str] = &[
    r"Safari.[\d\.]*",
    r"Firefox.[\d\.]*",
    r" Chrome.[\d\.]*",
    r"Chromium.[\d\.]*",
    r"MSIE.[\d\.]",
    r"Opera/[\d\.]*",
    r"Mozilla.[\d\.]*",
    r"AppleWebKit.[\d\.]*",
    r"Trident.[\d\.]*",
    r"Windows NT.[\d\.]*",
    r"Android [\d\.]*",
    r"Macintosh.",
    r"Ubuntu",
    r"Linux",
    r"[ ]Intel",
    r"Mac OS X [\d_]*",
    r"\(KHTML, like Gecko\)",
    r"KHTML,",
    r"X11",
    r"Gecko.[\d\.]*",
    r"compatible",
    r"Win64",
    r"x64",
    r"WOW64",
    r"like Gecko",
    r"Version.[\d\.]*",
    r"en-US",
    // 手机品牌，名称含 bot
    r"Cubot",
];

/// 爬虫 / 脚本工具签名
pub const SIGNATURES: &[&str] = &[
    r"[a-z0-9\-_]*bot\b",
    r"[a-z0-9\-_]*(crawler|spider|scraper)",
    r"facebookexternalhit",
    r"facebookcatalog",
    r"slurp",
    r"ia_archiver",
    r"archive\.org",
    r"mediapartners-google",
    r"feedfetcher-google",
    r"google-read-aloud",
    r"google-inspectiontool",
    r"headlesschrome",
    r"phantomjs",
    r"lighthouse",
    r"pingdom",
    r"embedly",
    r"skypeuripreview",
    r"whatsapp",
    r"chatgpt-user",
    r"anthropic-ai",
    r"cohere-ai",
    r"curl",
    r"wget",
    r"python-requests",
    r"python-urllib",
    r"aiohttp",
    r"httpx",
    r"go-http-client",
    r"\bjava/",
    r"libwww-perl",
    r"apache-httpclient",
    r"okhttp",
    r"node-fetch",
    r"axios",
    r"postmanruntime",
    r"scrapy",
    r"nutch",
    r"heritrix",
    r"w3c_validator",
    r"yeti",
];

/// 基于签名表的爬虫识别器
#[derive(Debug, Clone)]
pub struct SignatureCrawlerDetector {
    exclusions: Regex,
    signatures: Regex,
}

impl SignatureCrawlerDetector {
    /// 使用内置签名表
    pub fn new() -> AgentResult<Self> {
        Self::with_signatures(SIGNATURES, EXCLUSIONS)
    }

    /// 使用自定义签名表
    pub fn with_signatures(signatures: &[&str], exclusions: &[&str]) -> AgentResult<Self> {
        Ok(Self {
            exclusions: RuleCompiler::compile_pattern(&exclusions.join("|"))?,
            signatures: RuleCompiler::compile_pattern(&signatures.join("|"))?,
        })
    }
}

impl CrawlerDetector for SignatureCrawlerDetector {
    fn detect(&self, user_agent: &str) -> Option<String> {
        let stripped = self.exclusions.replace_all(user_agent, "");
        let stripped = stripped.trim();
        if stripped.is_empty() {
            return None;
        }

        self.signatures
            .find(stripped)
            .map(|m| m.as_str().trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
