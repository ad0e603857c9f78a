//! Frontend Models
//!
//! Data structures matching the REST backend's JSON.

use serde::{Deserialize, Serialize};
use soft_delete_list::ListItem;

use crate::filters::Filterable;

/// Processing state of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleState {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl SampleState {
    pub const ALL: [SampleState; 4] = [
        SampleState::Pending,
        SampleState::InProgress,
        SampleState::Completed,
        SampleState::Rejected,
    ];

    /// Wire name, also used as the filter value
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleState::Pending => "pending",
            SampleState::InProgress => "in_progress",
            SampleState::Completed => "completed",
            SampleState::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SampleState::Pending => "Pending",
            SampleState::InProgress => "In progress",
            SampleState::Completed => "Completed",
            SampleState::Rejected => "Rejected",
        }
    }
}

/// Sample data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: u32,
    pub code: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub center_name: Option<String>,
    pub state: SampleState,
}

impl Filterable for Sample {
    fn search_text(&self) -> String {
        let mut text = self.code.clone();
        for extra in [&self.patient_name, &self.center_name].into_iter().flatten() {
            text.push(' ');
            text.push_str(extra);
        }
        text
    }

    fn status(&self) -> Option<&str> {
        Some(self.state.as_str())
    }
}

/// A technique-process step bound to a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueProcess {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl ListItem for TechniqueProcess {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> String {
        match &self.code {
            Some(code) => format!("{} · {}", code, self.name),
            None => self.name.clone(),
        }
    }
}
