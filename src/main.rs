//! rsagent 命令行：识别单个 User-Agent 并输出结果
//!
//! 运行示例：
//! cargo run --features cli -- "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X)" --accept-language "en-US,en;q=0.9" --json

use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use rsagent::{Agent, ConfigManager, RuleEngine, RuleSet, VersionKind};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Classify a user-agent string into device, platform, browser and versions.
#[derive(Parser, Debug)]
#[command(name = "rsagent", version, about)]
struct Cli {
    /// User-agent string; derived from --header values when omitted.
    user_agent: Option<String>,

    /// Accept-Language header value used for language ranking.
    #[arg(long)]
    accept_language: Option<String>,

    /// Extra request header as NAME=VALUE (repeatable).
    #[arg(long = "header", value_name = "NAME=VALUE")]
    headers: Vec<String>,

    /// Extract the version of a property, e.g. Chrome or AndroidOS (repeatable).
    #[arg(long = "version-of", value_name = "NAME")]
    version_of: Vec<String>,

    /// JSON rule set merged on top of the built-in rules.
    #[arg(long, value_name = "PATH")]
    rules: Option<String>,

    /// Use the base (mobile) rules only.
    #[arg(long)]
    base_only: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_header(raw: &str) -> anyhow::Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim().to_string(), value.trim().to_string())),
        _ => bail!("invalid header '{}', expected NAME=VALUE", raw),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut builder = ConfigManager::custom()
        .use_extended_rules(!cli.base_only)
        .verbose(cli.verbose > 0);
    if let Some(path) = &cli.rules {
        let json = std::fs::read_to_string(path).with_context(|| format!("failed to read rule file {}", path))?;
        builder = builder.extension(RuleSet::from_json(&json)?);
    }
    let engine = Arc::new(RuleEngine::new(builder.build())?);

    let mut headers = cli
        .headers
        .iter()
        .map(|raw| parse_header(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if let Some(accept_language) = &cli.accept_language {
        headers.push(("accept-language".to_string(), accept_language.clone()));
    }

    let mut agent = Agent::from_headers(engine, headers);
    if let Some(user_agent) = cli.user_agent.as_deref() {
        agent.set_user_agent(Some(user_agent));
    }
    if agent.user_agent().is_empty() {
        bail!("no user agent given, pass it as an argument or via --header User-Agent=...");
    }

    let report = agent.report();
    let versions: Vec<(String, Option<String>)> = cli
        .version_of
        .iter()
        .map(|name| (name.clone(), agent.version(name, VersionKind::Text).map(|v| v.to_string())))
        .collect();

    if cli.json {
        let mut value = serde_json::to_value(&report)?;
        if !versions.is_empty() {
            let map: serde_json::Map<String, serde_json::Value> =
                versions.into_iter().map(|(name, version)| (name, json!(version))).collect();
            value["versions"] = serde_json::Value::Object(map);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", report);
        for (name, version) in versions {
            println!("{}: {}", name, version.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}
