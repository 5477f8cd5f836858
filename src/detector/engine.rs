//! 规则引擎：基础规则集 + 扩展规则集组合
//! 各逻辑分组（浏览器/平台/设备/移动端/平板/全量/版本属性）在构建时合并并编译一次，之后只读

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::analyzer::Classifier;
use super::crawler::{CrawlerDetector, SignatureCrawlerDetector};
use crate::compiler::{CompiledPropertyTable, CompiledRuleTable, RuleCompiler};
use crate::config::AgentConfig;
use crate::error::AgentResult;
use crate::rule::{MergeMode, RuleMerger, RuleSet, RuleStore, RuleTable};
use crate::utils::{VersionExtractor, VersionKind, VersionValue};

/// User-Agent 规则引擎
#[derive(Debug, Clone)]
pub struct RuleEngine {
    browsers: CompiledRuleTable,
    platforms: CompiledRuleTable,
    devices: CompiledRuleTable,
    mobile: CompiledRuleTable,
    tablets: CompiledRuleTable,
    // 全量规则（设备/系统/浏览器/扩展），供 is<Name> 动态查询
    unified: CompiledRuleTable,
    properties: CompiledPropertyTable,
    crawler: Arc<dyn CrawlerDetector>,
    config: AgentConfig,
}

impl RuleEngine {
    /// 使用内置规则库创建引擎
    pub fn new(config: AgentConfig) -> AgentResult<Self> {
        let mut extensions = Vec::new();
        if config.use_extended_rules {
            extensions.push(RuleStore::extended());
        }
        if let Some(custom) = &config.extension {
            extensions.push(custom.clone());
        }

        Self::with_rules(RuleStore::base(), &extensions, config)
    }

    /// 注入基础规则集与扩展规则集创建引擎（扩展按顺序合并在基础之上）
    pub fn with_rules(base: RuleSet, extensions: &[RuleSet], config: AgentConfig) -> AgentResult<Self> {
        let start = Instant::now();

        let all_sets: Vec<&RuleSet> = std::iter::once(&base).chain(extensions.iter()).collect();
        let ext_sets: Vec<&RuleSet> = extensions.iter().collect();

        let desktops = pick_tables(&all_sets, |s| &s.desktop_devices);
        let phones = pick_tables(&all_sets, |s| &s.phone_devices);
        let tablets = pick_tables(&all_sets, |s| &s.tablet_devices);
        let ext_systems = pick_tables(&ext_sets, |s| &s.operating_systems);
        let ext_browsers = pick_tables(&ext_sets, |s| &s.browsers);
        let ext_properties = pick_tables(&ext_sets, |s| &s.properties);

        // 浏览器：扩展优先，基础规则追加在后
        let browsers: Vec<&RuleTable> = ext_browsers
            .iter()
            .copied()
            .chain(std::iter::once(&base.browsers))
            .collect();
        // 平台：基础在前，扩展追加
        let platforms: Vec<&RuleTable> = std::iter::once(&base.operating_systems)
            .chain(ext_systems.iter().copied())
            .collect();
        // 设备：桌面设备优先于手机/平板
        let devices: Vec<&RuleTable> = desktops
            .iter()
            .chain(phones.iter())
            .chain(tablets.iter())
            .copied()
            .collect();
        // 移动端：手机 + 平板 + 基础系统 + 基础浏览器（扩展的桌面系统/浏览器不参与）
        let mobile: Vec<&RuleTable> = phones
            .iter()
            .chain(tablets.iter())
            .copied()
            .chain([&base.operating_systems, &base.browsers])
            .collect();
        let unified: Vec<&RuleTable> = desktops
            .iter()
            .chain(phones.iter())
            .chain(tablets.iter())
            .copied()
            .chain(std::iter::once(&base.operating_systems))
            .chain(ext_systems.iter().copied())
            .chain(std::iter::once(&base.browsers))
            .chain(ext_browsers.iter().copied())
            .collect();
        // 版本属性：扩展优先，列表合并保留每个模板
        let properties: Vec<&RuleTable> = ext_properties
            .iter()
            .copied()
            .chain(std::iter::once(&base.properties))
            .collect();

        let engine = Self {
            browsers: RuleCompiler::compile_table(&RuleMerger::merge(&browsers, MergeMode::Alternation))?,
            platforms: RuleCompiler::compile_table(&RuleMerger::merge(&platforms, MergeMode::Alternation))?,
            devices: RuleCompiler::compile_table(&RuleMerger::merge(&devices, MergeMode::Alternation))?,
            mobile: RuleCompiler::compile_table(&RuleMerger::merge(&mobile, MergeMode::Alternation))?,
            tablets: RuleCompiler::compile_table(&RuleMerger::merge(&tablets, MergeMode::Alternation))?,
            unified: RuleCompiler::compile_table(&RuleMerger::merge(&unified, MergeMode::Alternation))?,
            properties: RuleCompiler::compile_properties(&RuleMerger::merge(&properties, MergeMode::List))?,
            crawler: Arc::new(SignatureCrawlerDetector::new()?),
            config,
        };

        debug!(
            "Rule engine built in {:?}: browsers={}, platforms={}, devices={}, mobile={}, tablets={}, unified={}, properties={}",
            start.elapsed(),
            engine.browsers.len(),
            engine.platforms.len(),
            engine.devices.len(),
            engine.mobile.len(),
            engine.tablets.len(),
            engine.unified.len(),
            engine.properties.len()
        );
        if engine.config.verbose {
            info!(
                "Rule engine ready: base rules={}, extension sets={}, extension rules={}, unified rules={}",
                base.rule_count(),
                extensions.len(),
                extensions.iter().map(RuleSet::rule_count).sum::<usize>(),
                engine.unified.len()
            );
        }

        Ok(engine)
    }

    /// 替换爬虫识别实现
    pub fn with_crawler_detector(mut self, crawler: Arc<dyn CrawlerDetector>) -> Self {
        self.crawler = crawler;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn crawler(&self) -> &dyn CrawlerDetector {
        self.crawler.as_ref()
    }

    /// 浏览器名称
    pub fn browser(&self, subject: &str) -> Option<String> {
        Classifier::classify(&self.browsers, subject)
    }

    /// 平台（操作系统）名称
    pub fn platform(&self, subject: &str) -> Option<String> {
        Classifier::classify(&self.platforms, subject)
    }

    /// 设备名称（桌面设备优先）
    pub fn device(&self, subject: &str) -> Option<String> {
        Classifier::classify(&self.devices, subject)
    }

    /// 是否命中移动端规则（手机或平板）
    pub fn matches_mobile(&self, subject: &str) -> bool {
        Classifier::classify(&self.mobile, subject).is_some()
    }

    /// 是否命中平板规则
    pub fn matches_tablet(&self, subject: &str) -> bool {
        Classifier::classify(&self.tablets, subject).is_some()
    }

    /// 按规则名查询（忽略大小写），未知名称返回 false
    pub fn matches_key(&self, key: &str, subject: &str) -> bool {
        Classifier::matches_key(&self.unified, key, subject)
    }

    /// 是否存在该规则名
    pub fn has_rule(&self, key: &str) -> bool {
        self.unified.get_ignore_case(key).is_some()
    }

    /// 提取版本号；属性名未知或未捕获到版本时返回 None
    pub fn version(&self, property: &str, subject: &str, kind: VersionKind) -> Option<VersionValue> {
        if property.is_empty() {
            return None;
        }
        let templates = self.properties.get(property)?;
        VersionExtractor::extract_as(templates, subject, kind)
    }

    /// 爬虫签名
    pub fn robot(&self, subject: &str) -> Option<String> {
        self.crawler.detect(subject)
    }
}

/// 从多个规则集中取出同一类规则表
fn pick_tables<'a>(sets: &[&'a RuleSet], pick: fn(&RuleSet) -> &RuleTable) -> Vec<&'a RuleTable> {
    sets.iter().map(|set| pick(set)).collect()
}
