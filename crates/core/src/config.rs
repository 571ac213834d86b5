use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key).as_deref() {
        Some("true") | Some("1") | Some("yes") => true,
        Some("false") | Some("0") | Some("no") => false,
        _ => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub output: OutputConfig,
    pub input: InputConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `STUDYPLAN_PROFILE`. When set (e.g. `STAGING`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("STUDYPLAN_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            output: OutputConfig::from_env_profiled(p),
            input: InputConfig::from_env_profiled(p),
            log: LogConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  output:  pretty={}", self.output.pretty);
        tracing::info!("  input:   max_bytes={}", self.input.max_bytes);
        tracing::info!("  log:     default_filter={}", self.log.default_filter);
    }
}

// ── Output ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print encoded JSON.
    pub pretty: bool,
}

impl OutputConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            pretty: profiled_env_bool(p, "OUTPUT_PRETTY", true),
        }
    }
}

// ── Input ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Largest payload accepted for decoding.
    pub max_bytes: u64,
}

impl InputConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            max_bytes: profiled_env_u64(p, "INPUT_MAX_BYTES", 1024 * 1024),
        }
    }
}

// ── Logging ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl LogConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            default_filter: profiled_env_or(p, "LOG_DEFAULT_FILTER", "warn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keys are unique per test so parallel tests don't race on the environment.

    #[test]
    fn profiled_lookup_prefers_prefixed_key() {
        env::set_var("CFGTEST_A_INPUT_MAX_BYTES", "2048");
        assert_eq!(profiled_env_u64("CFGTEST_A", "INPUT_MAX_BYTES", 7), 2048);
        env::remove_var("CFGTEST_A_INPUT_MAX_BYTES");
    }

    #[test]
    fn missing_keys_use_defaults() {
        assert_eq!(profiled_env_u64("CFGTEST_B", "CFGTEST_B_NOPE", 42), 42);
        assert!(profiled_env_bool("CFGTEST_B", "CFGTEST_B_NOPE", true));
        assert_eq!(profiled_env_or("CFGTEST_B", "CFGTEST_B_NOPE", "warn"), "warn");
    }

    #[test]
    fn bool_accepts_common_spellings() {
        env::set_var("CFGTEST_C_FLAG", "no");
        assert!(!profiled_env_bool("", "CFGTEST_C_FLAG", true));
        env::set_var("CFGTEST_C_FLAG", "1");
        assert!(profiled_env_bool("", "CFGTEST_C_FLAG", false));
        env::remove_var("CFGTEST_C_FLAG");
    }

    #[test]
    fn profile_label_defaults() {
        let cfg = Config::for_profile("");
        assert_eq!(cfg.profile_label(), "default");
        let cfg = Config::for_profile("staging");
        assert_eq!(cfg.profile_label(), "STAGING");
    }
}
