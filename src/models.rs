//! Frontend Models
//!
//! Data structures matching backend entities, plus the draft and health state of the view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown in place of a missing or empty description
pub const NO_DESCRIPTION: &str = "No description provided";

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

impl Item {
    /// Description for display, falling back to a placeholder
    pub fn description_text(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_DESCRIPTION,
        }
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

/// Draft form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
}

impl DraftField {
    /// The `name` attribute of the matching form control
    pub fn input_name(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Description => "description",
        }
    }
}

/// The user's unsaved input for a new item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub description: String,
}

impl Draft {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Replace one field, leaving the other untouched
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Request body for this draft, or None while the name is empty
    pub fn submission(&self) -> Option<NewItem> {
        if self.name.is_empty() {
            return None;
        }
        Some(NewItem {
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }
}

/// Backend liveness as last observed by the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HealthStatus {
    /// Probe not settled yet
    #[default]
    Unknown,
    /// Probe answered; carries the `status` field exactly as received
    Reported(Option<String>),
    /// Probe failed
    Down,
}

impl HealthStatus {
    /// Read the `status` field of a probe payload without validating it
    pub fn from_payload(payload: &Value) -> Self {
        let status = match payload.get("status") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        HealthStatus::Reported(status)
    }

    pub fn is_online(&self) -> bool {
        matches!(self, HealthStatus::Reported(Some(status)) if status == "healthy")
    }

    pub fn label(&self) -> &'static str {
        if self.is_online() { "Online" } else { "Offline" }
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_online() { "status online" } else { "status offline" }
    }
}
