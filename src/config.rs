use std::path::PathBuf;

use crate::error::Result;
use crate::quiz::MixPreset;

pub const SCENARIOS_PATH_VAR: &str = "QUIZ_SCENARIOS_PATH";
pub const HISTORY_PATH_VAR: &str = "QUIZ_HISTORY_PATH";
pub const MIX_VAR: &str = "QUIZ_MIX";

const DEFAULT_SCENARIOS_PATH: &str = "scenarios.json";
const DEFAULT_HISTORY_PATH: &str = "results.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub scenarios_path: PathBuf,
    pub history_path: PathBuf,
    pub mix: MixPreset,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mix = match value(MIX_VAR) {
            Some(raw) => raw.parse()?,
            None => MixPreset::default(),
        };
        Ok(Self {
            scenarios_path: value(SCENARIOS_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENARIOS_PATH)),
            history_path: value(HISTORY_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_PATH)),
            mix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.scenarios_path, PathBuf::from("scenarios.json"));
        assert_eq!(config.history_path, PathBuf::from("results.json"));
        assert_eq!(config.mix, MixPreset::Full);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (SCENARIOS_PATH_VAR, "/etc/quiz/scenarios.json"),
            (HISTORY_PATH_VAR, "/var/lib/quiz/results.json"),
            (MIX_VAR, "classic"),
        ]))
        .unwrap();
        assert_eq!(config.scenarios_path, PathBuf::from("/etc/quiz/scenarios.json"));
        assert_eq!(config.history_path, PathBuf::from("/var/lib/quiz/results.json"));
        assert_eq!(config.mix, MixPreset::Classic);
    }

    #[test]
    fn rejects_unknown_mix() {
        let err = AppConfig::from_lookup(lookup(&[(MIX_VAR, "expert")])).unwrap_err();
        assert!(matches!(err, QuizError::UnknownMix(ref m) if m == "expert"));
    }
}
