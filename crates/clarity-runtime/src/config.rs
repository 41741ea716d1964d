use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Every `CLARITY_*`/`OPENAI_*`/`ANTHROPIC_*` environment variable the host
/// reads, loaded once at runtime construction (spec.md §6 "Host
/// environment variables"). Mirrors the teacher's single
/// `wasmtime-cli-flags::CommonOptions` entry point: one struct, one
/// `from_env`, no scattered `env::var` calls downstream.
#[derive(Debug, Clone)]
pub struct Config {
    pub allow_hosts: Vec<String>,
    pub deny_effects: Vec<String>,
    pub audit_log: Option<PathBuf>,
    pub checkpoint_dir: PathBuf,
    pub hitl_dir: PathBuf,
    pub hitl_timeout: Duration,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub embed_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let list = |var: &str| -> Vec<String> {
            env::var(var)
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        };

        Config {
            allow_hosts: list("CLARITY_ALLOW_HOSTS"),
            deny_effects: list("CLARITY_DENY_EFFECTS"),
            audit_log: env::var("CLARITY_AUDIT_LOG").ok().map(PathBuf::from),
            checkpoint_dir: env::var("CLARITY_CHECKPOINT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".clarity-checkpoints")),
            hitl_dir: env::var("CLARITY_HITL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".clarity-hitl")),
            hitl_timeout: Duration::from_secs(
                env::var("CLARITY_HITL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(600),
            ),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok(),
            anthropic_base_url: env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| "https://api.anthropic.com/v1".to_string()),
            embed_model: env::var("CLARITY_EMBED_MODEL")
                .unwrap_or_else(|_| "text-embedding-ada-002".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            allow_hosts: Vec::new(),
            deny_effects: Vec::new(),
            audit_log: None,
            checkpoint_dir: PathBuf::from(".clarity-checkpoints"),
            hitl_dir: PathBuf::from(".clarity-hitl"),
            hitl_timeout: Duration::from_secs(600),
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            anthropic_api_key: None,
            anthropic_base_url: "https://api.anthropic.com/v1".to_string(),
            embed_model: "text-embedding-ada-002".to_string(),
        }
    }
}
