use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Bar charts draw distinct values from the eight multiples of ten in [20, 90],
/// so a topic can hold at most that many labels.
pub const MAX_CHART_LABELS: usize = 8;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkScenario {
    pub actor: String,
    pub task: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartTopic {
    pub title: String,
    pub labels: Vec<String>,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SufficiencyProblem {
    pub question: String,
    pub stat1: String,
    pub stat2: String,
    pub correct: SufficiencyLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SufficiencyLabel {
    OnlyI,
    OnlyII,
    Both,
    Neither,
}

impl SufficiencyLabel {
    pub const ALL: [SufficiencyLabel; 4] = [
        SufficiencyLabel::OnlyI,
        SufficiencyLabel::OnlyII,
        SufficiencyLabel::Both,
        SufficiencyLabel::Neither,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SufficiencyLabel::OnlyI => "Only I",
            SufficiencyLabel::OnlyII => "Only II",
            SufficiencyLabel::Both => "Both",
            SufficiencyLabel::Neither => "Neither",
        }
    }

    /// Accepts the canonical labels and the usual shorthands found in
    /// hand-written catalogs ("I", "A", "both I and II", ...).
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .trim()
            .to_lowercase()
            .replace("statements", "")
            .replace("statement", "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "only i" | "i" | "i alone" | "i only" | "a" | "1" => Some(SufficiencyLabel::OnlyI),
            "only ii" | "ii" | "ii alone" | "ii only" | "b" | "2" => Some(SufficiencyLabel::OnlyII),
            "both" | "both i and ii" | "i and ii" | "c" | "3" => Some(SufficiencyLabel::Both),
            "neither" | "none" | "neither i nor ii" | "d" | "4" => Some(SufficiencyLabel::Neither),
            _ => None,
        }
    }
}

impl TryFrom<String> for SufficiencyLabel {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        SufficiencyLabel::parse(&raw).ok_or_else(|| format!("unknown sufficiency label '{}'", raw))
    }
}

impl From<SufficiencyLabel> for String {
    fn from(label: SufficiencyLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for SufficiencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word-problem templates, one list per catalog key. Every list is non-empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScenarioCatalog {
    pub unitary_work_scenarios: Vec<WorkScenario>,
    pub profit_loss_items: Vec<String>,
    pub profit_loss_names: Vec<String>,
    pub unitary_cost_items: Vec<String>,
    pub di_topics: Vec<ChartTopic>,
    pub ds_problems: Vec<SufficiencyProblem>,
    pub lr_coding_words: Vec<String>,
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self {
            unitary_work_scenarios: default_work_scenarios(),
            profit_loss_items: default_profit_loss_items(),
            profit_loss_names: default_profit_loss_names(),
            unitary_cost_items: default_unitary_cost_items(),
            di_topics: default_di_topics(),
            ds_problems: default_ds_problems(),
            lr_coding_words: default_coding_words(),
        }
    }
}

impl ScenarioCatalog {
    /// Reads the catalog from a JSON file. A missing or unparsable file yields
    /// the built-in catalog.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                log::info!("Loading scenario catalog from {}", path.display());
                Self::from_json_str(&contents)
            }
            Err(err) => {
                log::warn!(
                    "Scenario catalog {} unavailable ({}), using built-in scenarios",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn from_json_str(contents: &str) -> Self {
        match serde_json::from_str::<Value>(contents) {
            Ok(root) => Self::from_value(&root),
            Err(err) => {
                log::warn!("Scenario catalog is not valid JSON ({}), using built-in scenarios", err);
                Self::default()
            }
        }
    }

    /// Validates each key on its own: a missing, malformed or empty key falls
    /// back to its default without discarding the others.
    pub fn from_value(root: &Value) -> Self {
        if !root.is_object() {
            log::warn!("Scenario catalog root is not an object, using built-in scenarios");
            return Self::default();
        }

        Self {
            unitary_work_scenarios: section(
                root,
                "unitary_work_scenarios",
                |s: &WorkScenario| !s.actor.trim().is_empty() && !s.task.trim().is_empty(),
                default_work_scenarios,
            ),
            profit_loss_items: section(root, "profit_loss_items", not_blank, default_profit_loss_items),
            profit_loss_names: section(root, "profit_loss_names", not_blank, default_profit_loss_names),
            unitary_cost_items: section(root, "unitary_cost_items", not_blank, default_unitary_cost_items),
            di_topics: section(root, "di_topics", valid_topic, default_di_topics),
            ds_problems: section(
                root,
                "ds_problems",
                |p: &SufficiencyProblem| !p.question.trim().is_empty(),
                default_ds_problems,
            ),
            lr_coding_words: section(
                root,
                "lr_coding_words",
                |w: &String| w.chars().any(|c| c.is_ascii_alphabetic()),
                default_coding_words,
            ),
        }
    }
}

fn section<T: DeserializeOwned>(
    root: &Value,
    key: &str,
    is_valid: impl Fn(&T) -> bool,
    default: fn() -> Vec<T>,
) -> Vec<T> {
    let Some(raw) = root.get(key) else {
        log::warn!("Scenario key '{}' missing, using default", key);
        return default();
    };
    let Some(entries) = raw.as_array() else {
        log::warn!("Scenario key '{}' is not a list, using default", key);
        return default();
    };

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<T>(entry.clone()) {
            Ok(item) if is_valid(&item) => items.push(item),
            Ok(_) => log::warn!("Skipping invalid entry in '{}'", key),
            Err(err) => log::warn!("Skipping malformed entry in '{}': {}", key, err),
        }
    }

    if items.is_empty() {
        log::warn!("Scenario key '{}' has no usable entries, using default", key);
        return default();
    }
    log::debug!("Loaded {} entries for '{}'", items.len(), key);
    items
}

fn not_blank(value: &String) -> bool {
    !value.trim().is_empty()
}

/// 2 to 8 unique labels under a non-empty title.
pub(crate) fn valid_topic(topic: &ChartTopic) -> bool {
    let unique: HashSet<&str> = topic.labels.iter().map(|l| l.as_str()).collect();
    !topic.title.trim().is_empty()
        && (2..=MAX_CHART_LABELS).contains(&topic.labels.len())
        && unique.len() == topic.labels.len()
}

pub(crate) fn default_work_scenarios() -> Vec<WorkScenario> {
    vec![WorkScenario {
        actor: "workers".to_string(),
        task: "build a wall".to_string(),
    }]
}

pub(crate) fn default_profit_loss_items() -> Vec<String> {
    vec!["bicycle".to_string()]
}

pub(crate) fn default_profit_loss_names() -> Vec<String> {
    vec!["Ravi".to_string()]
}

pub(crate) fn default_unitary_cost_items() -> Vec<String> {
    vec!["notebooks".to_string()]
}

pub(crate) fn default_di_topics() -> Vec<ChartTopic> {
    vec![ChartTopic {
        title: "Books sold in a week".to_string(),
        labels: ["Mon", "Tue", "Wed", "Thu", "Fri"]
            .iter()
            .map(|l| l.to_string())
            .collect(),
        unit: "books".to_string(),
    }]
}

pub(crate) fn default_ds_problems() -> Vec<SufficiencyProblem> {
    vec![SufficiencyProblem {
        question: "What is the value of x?".to_string(),
        stat1: "x + 3 = 10".to_string(),
        stat2: "x is a positive integer".to_string(),
        correct: SufficiencyLabel::OnlyI,
    }]
}

pub(crate) fn default_coding_words() -> Vec<String> {
    vec!["MATH".to_string()]
}
