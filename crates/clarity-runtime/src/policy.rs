use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::config::Config;

/// The effect families spec.md §4.4 names for `CLARITY_DENY_EFFECTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Model,
    Mcp,
    A2a,
    Secret,
    Trace,
    Persist,
    HumanInLoop,
    Embed,
    Eval,
}

impl Effect {
    fn name(self) -> &'static str {
        match self {
            Effect::Model => "Model",
            Effect::Mcp => "MCP",
            Effect::A2a => "A2A",
            Effect::Secret => "Secret",
            Effect::Trace => "Trace",
            Effect::Persist => "Persist",
            Effect::HumanInLoop => "HumanInLoop",
            Effect::Embed => "Embed",
            Effect::Eval => "Eval",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Policy: effect {0} is denied by CLARITY_DENY_EFFECTS")]
    EffectDenied(String),
    #[error("Policy: host {0} is not in CLARITY_ALLOW_HOSTS")]
    HostDenied(String),
}

#[derive(Serialize)]
struct AuditRecord<'a> {
    timestamp: i64,
    effect: &'a str,
    op: &'a str,
    result: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
}

/// The single place deny-list/allow-list logic lives (design note: "weave
/// into a single helper; do not duplicate the decision logic"). Every
/// effect-performing primitive in the other submodules calls `check`
/// before doing anything observable, then `audit` regardless of outcome.
pub struct Gate {
    allow_hosts: Vec<String>,
    deny_effects: Vec<String>,
    audit_log: Option<PathBuf>,
}

impl Gate {
    pub fn from_config(config: &Config) -> Self {
        Gate {
            allow_hosts: config.allow_hosts.clone(),
            deny_effects: config.deny_effects.clone(),
            audit_log: config.audit_log.clone(),
        }
    }

    /// Checks `effect` against the deny set, and — when `host` is
    /// `Some` — the target host against the allowlist (empty allowlist
    /// permits any host). Returns `Err` on the first violation found.
    pub fn check(&self, effect: Effect, host: Option<&str>) -> Result<(), PolicyError> {
        if self
            .deny_effects
            .iter()
            .any(|d| d.eq_ignore_ascii_case(effect.name()))
        {
            return Err(PolicyError::EffectDenied(effect.name().to_string()));
        }
        if let Some(host) = host {
            if !self.allow_hosts.is_empty() && !self.host_allowed(host) {
                return Err(PolicyError::HostDenied(host.to_string()));
            }
        }
        Ok(())
    }

    /// Host-allowlist check with no effect family attached, for the raw
    /// HTTP primitives (`http_get`/`http_post`/`http_request`). Spec.md's
    /// `CLARITY_DENY_EFFECTS` vocabulary (Model, MCP, A2A, Secret, Trace,
    /// Persist, HumanInLoop, Embed, Eval) has no generic "Network" entry,
    /// so plain HTTP calls are never effect-denied — only host-gated.
    pub fn check_network_host(&self, host: Option<&str>) -> Result<(), PolicyError> {
        if let Some(host) = host {
            if !self.allow_hosts.is_empty() && !self.host_allowed(host) {
                return Err(PolicyError::HostDenied(host.to_string()));
            }
        }
        Ok(())
    }

    fn host_allowed(&self, host: &str) -> bool {
        self.allow_hosts.iter().any(|pattern| {
            if let Some(suffix) = pattern.strip_prefix("*.") {
                host.len() > suffix.len()
                    && host.ends_with(suffix)
                    && host.as_bytes()[host.len() - suffix.len() - 1] == b'.'
            } else {
                pattern == host
            }
        })
    }

    /// Appends one JSON-lines audit record. Best-effort: I/O failure here
    /// is swallowed, matching spec.md §5 ("audit writes are ... best
    /// effort; I/O errors are swallowed for audit").
    #[allow(clippy::too_many_arguments)]
    pub fn audit(
        &self,
        effect: Effect,
        op: &str,
        result: &str,
        url: Option<&str>,
        duration_ms: Option<u64>,
        id: Option<&str>,
    ) {
        self.audit_raw(effect.name(), op, result, url, duration_ms, id)
    }

    /// Network calls outside the named effect families (plain
    /// `http_get`/`http_post`/`http_request`) still get one audit line,
    /// labeled "Network" even though it is not a `CLARITY_DENY_EFFECTS`
    /// member.
    pub fn audit_network(&self, op: &str, result: &str, url: Option<&str>, duration_ms: Option<u64>) {
        self.audit_raw("Network", op, result, url, duration_ms, None)
    }

    fn audit_raw(
        &self,
        effect: &str,
        op: &str,
        result: &str,
        url: Option<&str>,
        duration_ms: Option<u64>,
        id: Option<&str>,
    ) {
        let Some(path) = &self.audit_log else {
            return;
        };
        let record = AuditRecord {
            timestamp: now_millis(),
            effect,
            op,
            result,
            url,
            duration_ms,
            id,
        };
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{line}");
        }
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
