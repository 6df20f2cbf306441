//! Framework and task-category selectors.
//!
//! Each variant has a stable machine key (what travels over the wire and what
//! code matches on) and a display label (what the page shows and what gets
//! embedded in the prompt). Both come from exhaustive `match` tables, so
//! relabelling never touches logic and a new variant cannot ship without a row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum OptimizationFramework {
    #[default]
    Auto,
    Ptcf,
    Crispe,
    CoStar,
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum TaskCategory {
    #[default]
    General,
    Writing,
    Coding,
    Analysis,
    Reasoning,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

/// One `{key, label}` row as served to selector widgets.
#[derive(Debug, Clone, Serialize)]
pub struct LabelOption {
    pub key: &'static str,
    pub label: &'static str,
}

impl OptimizationFramework {
    /// Selector order.
    pub const ALL: [OptimizationFramework; 5] = [
        Self::Auto,
        Self::Ptcf,
        Self::Crispe,
        Self::CoStar,
        Self::Simple,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Ptcf => "PTCF",
            Self::Crispe => "CRISPE",
            Self::CoStar => "CO_STAR",
            Self::Simple => "SIMPLE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "自动选择 (Automatic)",
            Self::Ptcf => "PTCF (角色、任务、背景、格式)",
            Self::Crispe => "CRISPE (背景、角色、意图、结构、提示、评估)",
            Self::CoStar => "CO-STAR (背景、目标、风格、语气、受众、响应)",
            Self::Simple => "基础版 (目标、背景、期望)",
        }
    }

    pub fn options() -> Vec<LabelOption> {
        Self::ALL
            .iter()
            .map(|fw| LabelOption {
                key: fw.key(),
                label: fw.label(),
            })
            .collect()
    }
}

impl TaskCategory {
    /// Selector order.
    pub const ALL: [TaskCategory; 5] = [
        Self::General,
        Self::Writing,
        Self::Coding,
        Self::Analysis,
        Self::Reasoning,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Writing => "WRITING",
            Self::Coding => "CODING",
            Self::Analysis => "ANALYSIS",
            Self::Reasoning => "REASONING",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "通用任务",
            Self::Writing => "内容创作",
            Self::Coding => "编程开发",
            Self::Analysis => "数据分析",
            Self::Reasoning => "逻辑推理",
        }
    }

    pub fn options() -> Vec<LabelOption> {
        Self::ALL
            .iter()
            .map(|cat| LabelOption {
                key: cat.key(),
                label: cat.label(),
            })
            .collect()
    }
}

impl FromStr for OptimizationFramework {
    type Err = UnknownLabel;

    /// Accepts the machine key (any case) or the exact display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|fw| fw.key().eq_ignore_ascii_case(s) || fw.label() == s)
            .ok_or_else(|| UnknownLabel {
                kind: "framework",
                value: s.to_string(),
            })
    }
}

impl FromStr for TaskCategory {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|cat| cat.key().eq_ignore_ascii_case(s) || cat.label() == s)
            .ok_or_else(|| UnknownLabel {
                kind: "task category",
                value: s.to_string(),
            })
    }
}

// Deserialization goes through `FromStr` so clients may send either form.
impl TryFrom<String> for OptimizationFramework {
    type Error = UnknownLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TaskCategory {
    type Error = UnknownLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OptimizationFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<&str> =
            OptimizationFramework::ALL.iter().map(|fw| fw.label()).collect();
        assert_eq!(labels.len(), OptimizationFramework::ALL.len());
        let labels: std::collections::HashSet<&str> =
            TaskCategory::ALL.iter().map(|cat| cat.label()).collect();
        assert_eq!(labels.len(), TaskCategory::ALL.len());
    }

    #[test]
    fn test_serde_key_matches_table_key() {
        for fw in OptimizationFramework::ALL {
            assert_eq!(serde_json::to_value(fw).unwrap(), fw.key());
        }
        for cat in TaskCategory::ALL {
            assert_eq!(serde_json::to_value(cat).unwrap(), cat.key());
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(OptimizationFramework::Auto.label(), "自动选择 (Automatic)");
        assert_eq!(OptimizationFramework::CoStar.key(), "CO_STAR");
        assert_eq!(TaskCategory::Writing.label(), "内容创作");
        assert_eq!(TaskCategory::Reasoning.to_string(), "逻辑推理");
    }

    #[test]
    fn test_from_str_accepts_key_and_label() {
        assert_eq!(
            "co_star".parse::<OptimizationFramework>(),
            Ok(OptimizationFramework::CoStar)
        );
        assert_eq!(
            "基础版 (目标、背景、期望)".parse::<OptimizationFramework>(),
            Ok(OptimizationFramework::Simple)
        );
        assert_eq!("CODING".parse::<TaskCategory>(), Ok(TaskCategory::Coding));
        assert_eq!("数据分析".parse::<TaskCategory>(), Ok(TaskCategory::Analysis));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "RTF".parse::<OptimizationFramework>().unwrap_err();
        assert_eq!(err.kind, "framework");
        assert_eq!(err.value, "RTF");
    }

    #[test]
    fn test_deserialize_accepts_key_or_label() {
        let fw: OptimizationFramework = serde_json::from_str("\"CO_STAR\"").unwrap();
        assert_eq!(fw, OptimizationFramework::CoStar);
        let fw: OptimizationFramework =
            serde_json::from_str("\"自动选择 (Automatic)\"").unwrap();
        assert_eq!(fw, OptimizationFramework::Auto);
        let cat: TaskCategory = serde_json::from_str("\"内容创作\"").unwrap();
        assert_eq!(cat, TaskCategory::Writing);
        let cat: TaskCategory = serde_json::from_str("\"reasoning\"").unwrap();
        assert_eq!(cat, TaskCategory::Reasoning);
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let err = serde_json::from_str::<OptimizationFramework>("\"RTF\"").unwrap_err();
        assert!(err.to_string().contains("unknown framework: RTF"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OptimizationFramework::default(), OptimizationFramework::Auto);
        assert_eq!(TaskCategory::default(), TaskCategory::General);
    }

    #[test]
    fn test_options_preserve_selector_order() {
        let keys: Vec<&str> = OptimizationFramework::options().iter().map(|o| o.key).collect();
        assert_eq!(keys, ["AUTO", "PTCF", "CRISPE", "CO_STAR", "SIMPLE"]);
        assert_eq!(TaskCategory::options().len(), 5);
    }
}
