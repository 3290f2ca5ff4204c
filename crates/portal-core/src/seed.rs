//! Seeded sample data shown when no catalog fixture is configured

use crate::types::*;

fn s(value: &str) -> String {
    value.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: s("prj_001"),
            name: s("CRE Tech 2026"),
            description: s(
                "Commercial real estate technology tracking, vendor diligence, and dashboard refresh.",
            ),
            pinned_app_ids: strings(&[
                "app_lease_review",
                "app_weekly_refresh",
                "app_research_notebook",
            ]),
        },
        Project {
            id: s("prj_002"),
            name: s("RegOps - UK"),
            description: s("Regulatory obligations, evidence, and validation workflows."),
            pinned_app_ids: strings(&["app_reg_mapper", "app_vendor_dd"]),
        },
    ]
}

pub fn apps() -> Vec<AppCard> {
    vec![
        AppCard {
            id: s("app_research_notebook"),
            name: s("Research Notebook"),
            app_type: AppType::Agent,
            status: AppStatus::Published,
            description: s("NotebookLM-style research assistant over web + project docs."),
            inputs_summary: s("Question, optional bundle(s), date range"),
            triggers: vec![Trigger::Manual],
            last_run: Some(LastRun::new(RunStatus::Succeeded, "2026-02-19 16:12")),
        },
        AppCard {
            id: s("app_lease_review"),
            name: s("Lease Review"),
            app_type: AppType::Analysis,
            status: AppStatus::Published,
            description: s("Extract key terms + risks, generate evidence + insight candidates."),
            inputs_summary: s("Bundle (Lease Pack), focus questions"),
            triggers: vec![Trigger::Manual, Trigger::Event],
            last_run: Some(LastRun::new(RunStatus::Failed, "2026-02-18 10:03")),
        },
        AppCard {
            id: s("app_weekly_refresh"),
            name: s("Weekly Regulatory Refresh"),
            app_type: AppType::Workflow,
            status: AppStatus::Published,
            description: s(
                "Weekly refresh → ingest → extract → validate → dashboard → notify.",
            ),
            inputs_summary: s("None (uses project defaults)"),
            triggers: vec![Trigger::Schedule],
            last_run: Some(LastRun::new(RunStatus::Succeeded, "2026-02-16 09:00")),
        },
        AppCard {
            id: s("app_vendor_dd"),
            name: s("Vendor Due Diligence"),
            app_type: AppType::Agent,
            status: AppStatus::Draft,
            description: s("Run a diligence checklist and produce a report + evidence set."),
            inputs_summary: s("Company, bundle(s), scope"),
            triggers: vec![Trigger::Manual],
            last_run: None,
        },
        AppCard {
            id: s("app_reg_mapper"),
            name: s("Obligation Mapper"),
            app_type: AppType::Analysis,
            status: AppStatus::Published,
            description: s("Map obligations to controls, evidence, and model fields."),
            inputs_summary: s("Reg pack bundle(s), target model"),
            triggers: vec![Trigger::Manual, Trigger::Event],
            last_run: Some(LastRun::new(RunStatus::Running, "2026-02-20 09:41")),
        },
    ]
}

fn version(v: u32, status: VersionStatus, created_at: &str) -> BundleVersion {
    BundleVersion {
        v,
        status,
        created_at: s(created_at),
    }
}

pub fn bundles() -> Vec<Bundle> {
    vec![
        Bundle {
            id: s("bun_001"),
            name: s("Lease Pack - Riverside"),
            bundle_type: s("Lease Pack"),
            versions: vec![
                version(1, VersionStatus::Completed, "2026-02-12 11:10"),
                version(2, VersionStatus::Processing, "2026-02-20 09:10"),
            ],
        },
        Bundle {
            id: s("bun_002"),
            name: s("Vendor Pack - RiskCo"),
            bundle_type: s("Vendor Pack"),
            versions: vec![version(1, VersionStatus::Completed, "2026-02-10 15:42")],
        },
        Bundle {
            id: s("bun_003"),
            name: s("Reg Pack - FCA Updates"),
            bundle_type: s("Reg Pack"),
            versions: vec![version(1, VersionStatus::Failed, "2026-02-18 08:00")],
        },
    ]
}

pub fn crm() -> Vec<CrmEntity> {
    let entity = |id: &str, entity_type, name: &str, tags: &[&str], at: &str| CrmEntity {
        id: s(id),
        entity_type,
        name: s(name),
        tags: strings(tags),
        last_updated: s(at),
    };
    vec![
        entity(
            "crm_001",
            CrmEntityType::Company,
            "RiskCo",
            &["vendor", "security"],
            "2026-02-18 12:03",
        ),
        entity(
            "crm_002",
            CrmEntityType::Company,
            "PropTechX",
            &["cre-tech"],
            "2026-02-19 09:22",
        ),
        entity(
            "crm_003",
            CrmEntityType::Asset,
            "Riverside Office",
            &["asset", "lease"],
            "2026-02-12 11:30",
        ),
    ]
}

pub fn models() -> Vec<Model> {
    vec![
        Model {
            id: s("mdl_001"),
            name: s("Lease Risk Model"),
            version: 3,
            status: ModelStatus::Active,
            last_validation: Validation {
                status: ValidationStatus::Fail,
                at: s("2026-02-20 09:15"),
            },
        },
        Model {
            id: s("mdl_002"),
            name: s("Vendor Risk Model"),
            version: 2,
            status: ModelStatus::Active,
            last_validation: Validation {
                status: ValidationStatus::Pass,
                at: s("2026-02-19 18:40"),
            },
        },
    ]
}

pub fn dashboards() -> Vec<Dashboard> {
    vec![
        Dashboard {
            id: s("dsh_001"),
            name: s("CRE Tech Trends"),
            tiles: 12,
            last_refresh: s("2026-02-19 07:00"),
        },
        Dashboard {
            id: s("dsh_002"),
            name: s("RegOps Exceptions"),
            tiles: 8,
            last_refresh: s("2026-02-20 09:20"),
        },
    ]
}

pub fn workflows() -> Vec<WorkflowDef> {
    vec![
        WorkflowDef {
            id: s("wf_001"),
            name: s("New Bundle Version → Re-extract → Validate → Notify"),
            triggers: strings(&["BUNDLE_VERSION_CREATED"]),
            last_run: Some(LastRun::new(RunStatus::Running, "2026-02-20 09:10")),
        },
        WorkflowDef {
            id: s("wf_002"),
            name: s("Weekly Refresh"),
            triggers: strings(&["SCHEDULE: 0 9 * * 1"]),
            last_run: Some(LastRun::new(RunStatus::Succeeded, "2026-02-16 09:00")),
        },
    ]
}

pub fn runs() -> Vec<Run> {
    let run = |id: &str, name: &str, kind, status, started_at: &str, duration: &str, cost: &str| {
        Run {
            id: s(id),
            name: s(name),
            kind,
            status,
            started_at: s(started_at),
            duration: s(duration),
            cost: s(cost),
        }
    };
    vec![
        run(
            "run_101",
            "Lease Review (Riverside v2)",
            RunKind::App,
            RunStatus::Running,
            "2026-02-20 09:11",
            "00:04:12",
            "$0.62",
        ),
        run(
            "run_100",
            "Weekly Refresh",
            RunKind::Workflow,
            RunStatus::Succeeded,
            "2026-02-16 09:00",
            "00:06:22",
            "$1.48",
        ),
        run(
            "run_099",
            "Ingest Bundle (Lease Pack Riverside v1)",
            RunKind::Ingest,
            RunStatus::Succeeded,
            "2026-02-12 11:10",
            "00:02:55",
            "$0.00",
        ),
    ]
}

pub fn canvas_blocks() -> Vec<CanvasBlock> {
    let block = |id: &str, block_type: &str, title: &str, meta: &str| CanvasBlock {
        id: s(id),
        block_type: s(block_type),
        title: s(title),
        meta: s(meta),
    };
    vec![
        block("b1", "App Output", "Lease Review Output", "run_101 • Riverside v2"),
        block("b2", "Evidence", "Break clause change", "Lease Pack v2 • p.12"),
        block("b3", "Insight", "Increased termination risk", "draft"),
        block("b4", "Model Field", "LeaseRisk.break_clause_risk", "changed"),
        block("b5", "Diff", "v1 ↔ v2 Extraction Delta", "37 changes"),
    ]
}
