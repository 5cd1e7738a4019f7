use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STORE_PATH: &str = "data/store.json";
pub const DEFAULT_SENTENCES_PATH: &str = "static/sentences.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub store_path: PathBuf,
    pub sentences_path: PathBuf,
}

impl Config {
    /// Reads `PORT`, `ADVENT_STORE_PATH` and `ADVENT_SENTENCES_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT {value:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
        };

        Self {
            port,
            store_path: lookup("ADVENT_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            sentences_path: lookup("ADVENT_SENTENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SENTENCES_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(config.sentences_path, PathBuf::from(DEFAULT_SENTENCES_PATH));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9090"),
            ("ADVENT_STORE_PATH", "/tmp/advent.json"),
            ("ADVENT_SENTENCES_PATH", "/srv/sentences.json"),
        ]));
        assert_eq!(config.port, 9090);
        assert_eq!(config.store_path, PathBuf::from("/tmp/advent.json"));
        assert_eq!(config.sentences_path, PathBuf::from("/srv/sentences.json"));
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = Config::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
