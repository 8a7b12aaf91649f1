//! Handler output: notices, formatted statistics and an optional chart.

use serde::{Deserialize, Serialize};

use crate::chart::ChartRequest;

/// Banner severity, mirrored by the shell's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Text,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    pub fn text(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Text, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// A labelled, already formatted statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Everything one handler invocation asks the shell to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoOutput {
    pub heading: String,
    pub stats: Vec<Stat>,
    pub notices: Vec<Notice>,
    pub chart: Option<ChartRequest>,
}

impl DemoOutput {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            stats: Vec::new(),
            notices: Vec::new(),
            chart: None,
        }
    }

    pub fn stat(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.stats.push(Stat { label: label.into(), value: value.into() });
        self
    }

    pub fn notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn chart(mut self, chart: ChartRequest) -> Self {
        self.chart = Some(chart);
        self
    }

    /// Looks up a statistic by label.
    pub fn stat_value(&self, label: &str) -> Option<&str> {
        self.stats.iter().find(|s| s.label == label).map(|s| s.value.as_str())
    }

    pub fn has_level(&self, level: NoticeLevel) -> bool {
        self.notices.iter().any(|n| n.level == level)
    }
}
