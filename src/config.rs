//! Environment-driven service configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Static document roots, searched in order. The first one holds `index.html`.
    pub doc_roots: Vec<PathBuf>,
    /// Daily rolling log files are written here when set.
    pub log_dir: Option<PathBuf>,
    pub debug_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            doc_roots: vec![PathBuf::from("public")],
            log_dir: None,
            debug_mode: false,
        }
    }
}

impl AppConfig {
    /// Load from `STATSVIEW_*` variables, reading a `.env` file first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match var("STATSVIEW_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("STATSVIEW_PORT is not a valid port: {raw}"))?,
            None => defaults.port,
        };

        let doc_roots = var("STATSVIEW_DOC_ROOTS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
                    .collect::<Vec<_>>()
            })
            .filter(|roots| !roots.is_empty())
            .unwrap_or(defaults.doc_roots);

        Ok(Self {
            host: var("STATSVIEW_HOST").unwrap_or(defaults.host),
            port,
            doc_roots,
            log_dir: var("STATSVIEW_LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            debug_mode: var("STATSVIEW_DEBUG_MODE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.debug_mode),
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.doc_roots, vec![PathBuf::from("public")]);
        assert!(cfg.log_dir.is_none());
        assert!(!cfg.debug_mode);
        assert_eq!(cfg.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_overrides() {
        let cfg = load(&[
            ("STATSVIEW_HOST", "127.0.0.1"),
            ("STATSVIEW_PORT", "8081"),
            ("STATSVIEW_DOC_ROOTS", "public, build/assets ,"),
            ("STATSVIEW_LOG_DIR", "/var/log/statsview"),
            ("STATSVIEW_DEBUG_MODE", "true"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:8081");
        assert_eq!(
            cfg.doc_roots,
            vec![PathBuf::from("public"), PathBuf::from("build/assets")]
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/statsview")));
        assert!(cfg.debug_mode);
    }

    #[test]
    fn test_bad_port_fails() {
        let err = load(&[("STATSVIEW_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("STATSVIEW_PORT"));
    }
}
