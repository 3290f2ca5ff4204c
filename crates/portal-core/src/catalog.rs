//! The catalog of entities rendered by the portal
//!
//! A [`Catalog`] owns one table per entity kind. It is built either from the
//! seeded sample data or from a TOML fixture, validated once at startup, and
//! never mutated afterwards.
//!
//! Lookups return `Option`; callers decide how to handle an id that does not
//! resolve instead of silently getting the first row.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::seed;
use crate::types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub apps: Vec<AppCard>,
    pub bundles: Vec<Bundle>,
    pub crm: Vec<CrmEntity>,
    pub models: Vec<Model>,
    pub dashboards: Vec<Dashboard>,
    pub workflows: Vec<WorkflowDef>,
    pub runs: Vec<Run>,
    pub canvas_blocks: Vec<CanvasBlock>,
}

impl Catalog {
    /// The built-in sample data
    pub fn seeded() -> Self {
        Self {
            projects: seed::projects(),
            apps: seed::apps(),
            bundles: seed::bundles(),
            crm: seed::crm(),
            models: seed::models(),
            dashboards: seed::dashboards(),
            workflows: seed::workflows(),
            runs: seed::runs(),
            canvas_blocks: seed::canvas_blocks(),
        }
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog fixture file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded catalog from {}: {} projects, {} apps, {} bundles",
            path.display(),
            catalog.projects.len(),
            catalog.apps.len(),
            catalog.bundles.len()
        );
        Ok(catalog)
    }

    /// Check the cross-table invariants the views rely on
    ///
    /// - at least one project exists (the top bar always shows one)
    /// - every pinned app id resolves to an app
    pub fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(Error::catalog_invalid("catalog must contain at least one project"));
        }

        for project in &self.projects {
            for app_id in &project.pinned_app_ids {
                if self.app(app_id).is_none() {
                    return Err(Error::unknown_reference(
                        "app",
                        app_id.clone(),
                        format!("project {}", project.id),
                    ));
                }
            }
        }

        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn app(&self, id: &str) -> Option<&AppCard> {
        self.apps.iter().find(|a| a.id == id)
    }

    pub fn bundle(&self, id: &str) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    pub fn first_project(&self) -> Option<&Project> {
        self.projects.first()
    }

    /// Apps pinned to a project, in catalog order
    pub fn pinned_apps(&self, project: &Project) -> Vec<&AppCard> {
        self.apps
            .iter()
            .filter(|a| project.pinned_app_ids.contains(&a.id))
            .collect()
    }

    /// Apps matching a type, or all apps when `app_type` is `None`
    pub fn apps_of_type(&self, app_type: Option<AppType>) -> Vec<&AppCard> {
        self.apps
            .iter()
            .filter(|a| app_type.map_or(true, |t| a.app_type == t))
            .collect()
    }

    /// The `n` most recent bundles, in catalog order
    pub fn recent_bundles(&self, n: usize) -> &[Bundle] {
        &self.bundles[..n.min(self.bundles.len())]
    }

    /// The `n` most recent runs, in catalog order
    pub fn recent_runs(&self, n: usize) -> &[Run] {
        &self.runs[..n.min(self.runs.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
        [[projects]]
        id = "p1"
        name = "Only"
        description = "Single project"
        pinned_app_ids = ["a1"]

        [[apps]]
        id = "a1"
        name = "Viewer"
        type = "VIEW"
        status = "ARCHIVED"
        description = "Shows things"
        inputs_summary = "None"
        triggers = ["MANUAL"]
        last_run = { status = "CANCELLED", at = "2026-01-01 00:00" }
    "#;

    #[test]
    fn test_seeded_catalog_validates() {
        assert!(Catalog::seeded().validate().is_ok());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.project("prj_002").unwrap().name, "RegOps - UK");
        assert_eq!(catalog.app("app_reg_mapper").unwrap().name, "Obligation Mapper");
        assert_eq!(catalog.bundle("bun_003").unwrap().bundle_type, "Reg Pack");
    }

    #[test]
    fn test_lookup_missing_returns_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.project("prj_999").is_none());
        assert!(catalog.app("").is_none());
    }

    #[test]
    fn test_pinned_apps_follow_catalog_order() {
        let catalog = Catalog::seeded();
        let project = catalog.project("prj_001").unwrap();
        let names: Vec<&str> = catalog
            .pinned_apps(project)
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Research Notebook", "Lease Review", "Weekly Regulatory Refresh"]
        );
    }

    #[test]
    fn test_apps_of_type() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.apps_of_type(None).len(), 5);
        assert_eq!(catalog.apps_of_type(Some(AppType::Agent)).len(), 2);
        assert!(catalog.apps_of_type(Some(AppType::View)).is_empty());
    }

    #[test]
    fn test_recent_slices_clamp() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.recent_runs(3).len(), 3);
        assert_eq!(catalog.recent_bundles(10).len(), 3);
        assert!(Catalog::default().recent_runs(3).is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_projects() {
        let err = Catalog::default().validate().unwrap_err();
        assert!(matches!(err, Error::CatalogInvalid { .. }));
    }

    #[test]
    fn test_validate_rejects_dangling_pin() {
        let mut catalog = Catalog::seeded();
        catalog.projects[1].pinned_app_ids.push("app_ghost".into());
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, Error::UnknownReference { kind: "app", .. }));
        assert!(err.to_string().contains("app_ghost"));
    }

    #[test]
    fn test_from_toml_minimal_fixture() {
        let catalog = Catalog::from_toml_str(MINIMAL).unwrap();
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.apps[0].app_type, AppType::View);
        assert_eq!(
            catalog.apps[0].last_run.as_ref().map(|r| r.status),
            Some(RunStatus::Cancelled)
        );
        assert!(catalog.bundles.is_empty());
        assert!(catalog.runs.is_empty());
    }

    #[test]
    fn test_from_toml_rejects_dangling_pin() {
        let fixture = MINIMAL.replace("pinned_app_ids = [\"a1\"]", "pinned_app_ids = [\"a2\"]");
        assert!(Catalog::from_toml_str(&fixture).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.first_project().unwrap().id, "p1");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_seeded_catalog_survives_toml_round_trip() {
        let catalog = Catalog::seeded();
        let text = toml::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_toml_str(&text).unwrap(), catalog);
    }
}
