//! Domain types for the portal catalog
//!
//! Every entity is a plain record. Enum values serialize with the upper-case
//! names used throughout the portal (`PUBLISHED`, `RUNNING`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Apps
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of configured app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppType {
    View,
    Agent,
    Analysis,
    Workflow,
}

impl AppType {
    pub const ALL: [AppType; 4] = [
        AppType::View,
        AppType::Agent,
        AppType::Analysis,
        AppType::Workflow,
    ];

    /// Upper-case identifier (`VIEW`, `AGENT`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::View => "VIEW",
            AppType::Agent => "AGENT",
            AppType::Analysis => "ANALYSIS",
            AppType::Workflow => "WORKFLOW",
        }
    }

    /// Human-readable label shown on badges
    pub fn label(&self) -> &'static str {
        match self {
            AppType::View => "View",
            AppType::Agent => "Agent",
            AppType::Analysis => "Analysis",
            AppType::Workflow => "Workflow",
        }
    }
}

/// Publication state of an app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppStatus {
    Draft,
    Published,
    Archived,
}

impl AppStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppStatus::Draft => "DRAFT",
            AppStatus::Published => "PUBLISHED",
            AppStatus::Archived => "ARCHIVED",
        }
    }
}

/// How an app or workflow can be started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    Manual,
    Schedule,
    Event,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Manual => "MANUAL",
            Trigger::Schedule => "SCHEDULE",
            Trigger::Event => "EVENT",
        }
    }
}

/// Status of a run (app, workflow, ingest or validation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl RunStatus {
    pub const ALL: [RunStatus; 4] = [
        RunStatus::Running,
        RunStatus::Succeeded,
        RunStatus::Failed,
        RunStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Running => "RUNNING",
            RunStatus::Succeeded => "SUCCEEDED",
            RunStatus::Failed => "FAILED",
            RunStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Running => "Running",
            RunStatus::Succeeded => "Succeeded",
            RunStatus::Failed => "Failed",
            RunStatus::Cancelled => "Cancelled",
        }
    }
}

/// Status and timestamp of the most recent run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRun {
    pub status: RunStatus,
    pub at: String,
}

impl LastRun {
    pub fn new(status: RunStatus, at: impl Into<String>) -> Self {
        Self {
            status,
            at: at.into(),
        }
    }
}

/// A configured unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCard {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub app_type: AppType,
    pub status: AppStatus,
    pub description: String,
    pub inputs_summary: String,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub last_run: Option<LastRun>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub pinned_app_ids: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Documents
// ─────────────────────────────────────────────────────────────────────────────

/// Processing state of one bundle version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionStatus {
    Completed,
    Processing,
    Failed,
}

impl VersionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionStatus::Completed => "COMPLETED",
            VersionStatus::Processing => "PROCESSING",
            VersionStatus::Failed => "FAILED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleVersion {
    pub v: u32,
    pub status: VersionStatus,
    pub created_at: String,
}

/// A named, versioned document package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub bundle_type: String,
    #[serde(default)]
    pub versions: Vec<BundleVersion>,
}

// ─────────────────────────────────────────────────────────────────────────────
// CRM
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrmEntityType {
    Company,
    Person,
    Asset,
}

impl CrmEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrmEntityType::Company => "COMPANY",
            CrmEntityType::Person => "PERSON",
            CrmEntityType::Asset => "ASSET",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: CrmEntityType,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_updated: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Models
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelStatus {
    Active,
    Draft,
}

impl ModelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Active => "ACTIVE",
            ModelStatus::Draft => "DRAFT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Pass,
    Fail,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pass => "PASS",
            ValidationStatus::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub status: ValidationStatus,
    pub at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub version: u32,
    pub status: ModelStatus,
    pub last_validation: Validation,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboards & Workflows
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    pub tiles: u32,
    pub last_refresh: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub last_run: Option<LastRun>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Runs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunKind {
    App,
    Workflow,
    Ingest,
    Validation,
}

impl RunKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunKind::App => "APP",
            RunKind::Workflow => "WORKFLOW",
            RunKind::Ingest => "INGEST",
            RunKind::Validation => "VALIDATION",
        }
    }
}

/// Read-only audit row for one execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub name: String,
    pub kind: RunKind,
    pub status: RunStatus,
    pub started_at: String,
    pub duration: String,
    pub cost: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Studio
// ─────────────────────────────────────────────────────────────────────────────

/// A block pinned to the Studio canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub title: String,
    pub meta: String,
}

/// State of one row in a live-progress checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::Pending => "PENDING",
            ProgressStatus::Running => "RUNNING",
            ProgressStatus::Succeeded => "SUCCEEDED",
            ProgressStatus::Failed => "FAILED",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    AppType,
    AppStatus,
    Trigger,
    RunStatus,
    VersionStatus,
    CrmEntityType,
    ModelStatus,
    ValidationStatus,
    RunKind,
    ProgressStatus,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_type_labels() {
        assert_eq!(AppType::Agent.label(), "Agent");
        assert_eq!(AppType::Analysis.label(), "Analysis");
        assert_eq!(AppType::Workflow.label(), "Workflow");
        assert_eq!(AppType::View.label(), "View");
    }

    #[test]
    fn test_display_uses_upper_case_names() {
        assert_eq!(AppStatus::Published.to_string(), "PUBLISHED");
        assert_eq!(RunKind::Ingest.to_string(), "INGEST");
        assert_eq!(VersionStatus::Processing.to_string(), "PROCESSING");
        assert_eq!(ValidationStatus::Fail.to_string(), "FAIL");
    }

    #[test]
    fn test_run_status_label_differs_from_identifier() {
        for status in RunStatus::ALL {
            assert_eq!(status.label().to_uppercase(), status.as_str());
        }
    }

    #[test]
    fn test_app_card_deserializes_type_field() {
        let card: AppCard = toml::from_str(
            r#"
            id = "app_x"
            name = "X"
            type = "ANALYSIS"
            status = "DRAFT"
            description = "d"
            inputs_summary = "i"
            triggers = ["MANUAL", "EVENT"]
            "#,
        )
        .unwrap();
        assert_eq!(card.app_type, AppType::Analysis);
        assert_eq!(card.triggers, vec![Trigger::Manual, Trigger::Event]);
        assert!(card.last_run.is_none());
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: std::result::Result<AppCard, _> = toml::from_str(
            r#"
            id = "app_x"
            name = "X"
            type = "ROBOT"
            status = "DRAFT"
            description = "d"
            inputs_summary = "i"
            "#,
        );
        assert!(result.is_err());
    }
}
