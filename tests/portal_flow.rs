//! End-to-end flows through the update loop and the full-frame renderer
//!
//! Run with: cargo test --test portal_flow

use std::io::Write;

use portal_app::config::{self, Settings};
use portal_app::process::process_message;
use portal_app::state::{AppFilter, DetailTab, UiMode};
use portal_app::{AppState, InputKey, Message, NavKey};
use portal_core::AppType;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::NamedTempFile;

// ─────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────

fn seeded_state() -> AppState {
    AppState::seeded()
}

fn press(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

fn press_all(state: &mut AppState, keys: &[InputKey]) {
    for key in keys {
        press(state, key.clone());
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

/// Render one frame at 160x50 and return it as text, one line per row
fn screen(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 50)).expect("test terminal");
    terminal
        .draw(|frame| portal_tui::render::view(frame, state))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Open the Apps screen with focus on the app list
fn open_apps(state: &mut AppState) {
    press_all(state, &[InputKey::Char('2'), InputKey::Enter]);
    assert_eq!(state.active, NavKey::Apps);
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn every_section_shows_its_heading() {
    let headings = [
        (NavKey::Projects, "Project home"),
        (NavKey::Apps, "Configured units of work (Dify-style)."),
        (NavKey::Studio, "Notebook + infinite canvas."),
        (NavKey::Documents, "Bundles, versions, ingest, and diffs."),
        (NavKey::Crm, "Entities, relationships, timeline"),
        (NavKey::Models, "Domain models, rules, validation runs"),
        (NavKey::Dashboards, "Provenance-first KPIs"),
        (NavKey::Workflows, "Automation builder (n8n-like)"),
        (NavKey::Runs, "Audit logs for apps, workflows"),
        (NavKey::Settings, "Project settings, permissions"),
    ];
    for (key, text) in headings {
        let mut state = seeded_state();
        process_message(&mut state, Message::SelectNav(key));
        assert!(screen(&state).contains(text), "{} should show '{}'", key, text);
    }
}

#[test]
fn sidebar_arrows_walk_sections_in_order() {
    let mut state = seeded_state();
    press_all(&mut state, &[InputKey::Down, InputKey::Down, InputKey::Down]);
    assert_eq!(state.active, NavKey::Documents);
    assert!(screen(&state).contains("Upload bundle"));
}

// ─────────────────────────────────────────────────────────
// Project selector
// ─────────────────────────────────────────────────────────

#[test]
fn switching_project_updates_description_and_pins() {
    let mut state = seeded_state();
    press_all(
        &mut state,
        &[InputKey::Char('p'), InputKey::Down, InputKey::Enter],
    );
    assert_eq!(state.project_id, "prj_002");
    assert_eq!(state.ui_mode, UiMode::Normal);

    let text = screen(&state);
    assert!(text.contains("Regulatory obligations, evidence, and validation workflows."));
    assert!(text.contains("Obligation Mapper"));
}

#[test]
fn cancelled_picker_keeps_project() {
    let mut state = seeded_state();
    press_all(
        &mut state,
        &[InputKey::Char('p'), InputKey::Down, InputKey::Esc],
    );
    assert_eq!(state.project_id, "prj_001");
}

// ─────────────────────────────────────────────────────────
// Apps screen
// ─────────────────────────────────────────────────────────

#[test]
fn analysis_filter_shows_exactly_analysis_apps() {
    let mut state = seeded_state();
    open_apps(&mut state);
    process_message(
        &mut state,
        Message::SetAppFilter(AppFilter::Type(AppType::Analysis)),
    );

    let names: Vec<&str> = state.visible_apps().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Lease Review", "Obligation Mapper"]);
    assert!(!screen(&state).contains("Research Notebook"));
}

#[test]
fn filter_key_cycles_to_analysis() {
    let mut state = seeded_state();
    open_apps(&mut state);
    // ALL -> VIEW -> AGENT -> ANALYSIS
    press_all(
        &mut state,
        &[InputKey::Char('f'), InputKey::Char('f'), InputKey::Char('f')],
    );
    assert_eq!(state.apps_view.filter, AppFilter::Type(AppType::Analysis));
    assert_eq!(
        state.selected_app().map(|a| a.name.as_str()),
        Some("Lease Review")
    );
}

#[test]
fn selecting_app_changes_detail_title() {
    let mut state = seeded_state();
    open_apps(&mut state);
    press_all(&mut state, &[InputKey::Down, InputKey::Down]);

    assert_eq!(
        state.selected_app().map(|a| a.name.as_str()),
        Some("Weekly Regulatory Refresh")
    );
    let text = screen(&state);
    assert!(text.contains(" Weekly Regulatory Refresh "));
    assert!(text.contains("Weekly Regulatory Refresh run"));
}

#[test]
fn run_name_edit_round_trips() {
    let mut state = seeded_state();
    open_apps(&mut state);
    // Into the detail, begin editing the run name, clear it and type
    press_all(&mut state, &[InputKey::Enter, InputKey::Enter, InputKey::CharCtrl('u')]);
    assert_eq!(state.ui_mode, UiMode::TextInput);
    type_text(&mut state, "Q1 lease sweep");
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    let detail = state.detail().expect("detail");
    assert_eq!(detail.form.run_name, "Q1 lease sweep");
    assert!(screen(&state).contains("Q1 lease sweep"));
}

#[test]
fn typing_past_input_width_keeps_cursor_visible() {
    let mut state = seeded_state();
    open_apps(&mut state);
    press_all(&mut state, &[InputKey::Enter, InputKey::Enter]);
    assert_eq!(state.ui_mode, UiMode::TextInput);
    type_text(&mut state, " for Q1 2026 Riverside portfolio");

    let detail = state.detail().expect("detail");
    assert_eq!(
        detail.form.run_name,
        "Research Notebook run for Q1 2026 Riverside portfolio"
    );
    assert!(screen(&state).contains("Riverside portfolio▏"));
}

#[test]
fn detail_tabs_show_one_panel_at_a_time() {
    let mut state = seeded_state();
    open_apps(&mut state);
    press(&mut state, InputKey::Enter);

    let panels = [
        (DetailTab::Run, "Live progress"),
        (DetailTab::Configure, "Configuration wizard (placeholder)"),
        (DetailTab::Runs, "00:06:22"),
        (DetailTab::Outputs, "Open outputs"),
        (DetailTab::Permissions, "Permissions (v1-lite)"),
    ];
    for (i, (tab, _)) in panels.iter().enumerate() {
        assert_eq!(state.detail().map(|d| d.tab), Some(*tab));
        let text = screen(&state);
        for (j, (_, marker)) in panels.iter().enumerate() {
            assert_eq!(text.contains(marker), i == j, "tab {:?}, marker {}", tab, marker);
        }
        press(&mut state, InputKey::Tab);
    }
    // Wrapped back to Run
    assert_eq!(state.detail().map(|d| d.tab), Some(DetailTab::Run));
}

#[test]
fn leaving_apps_discards_form_edits() {
    let mut state = seeded_state();
    open_apps(&mut state);
    press_all(&mut state, &[InputKey::Enter, InputKey::Enter]);
    type_text(&mut state, " edited");
    press_all(&mut state, &[InputKey::Enter, InputKey::Char('1'), InputKey::Char('2')]);

    let detail = state.detail().expect("detail");
    assert_eq!(detail.form.run_name, "Research Notebook run");
}

// ─────────────────────────────────────────────────────────
// Configuration and fixtures
// ─────────────────────────────────────────────────────────

#[test]
fn settings_file_picks_start_screen() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "[behavior]\nstart_screen = \"runs\"").expect("write");

    let settings = config::load_explicit_settings(file.path()).expect("settings");
    let catalog = config::load_catalog(&settings, None).expect("catalog");
    let state = AppState::new(catalog, settings);

    assert_eq!(state.active, NavKey::Runs);
    assert!(screen(&state).contains("Recent runs"));
}

#[test]
fn catalog_fixture_replaces_seed_data() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
[[projects]]
id = "p1"
name = "Fixture Project"
description = "Loaded from a fixture"
pinned_app_ids = []
"#
    )
    .expect("write");

    let catalog = config::load_catalog(&Settings::default(), Some(file.path())).expect("catalog");
    assert_eq!(catalog.projects.len(), 1);
    assert!(catalog.apps.is_empty());

    let mut state = AppState::new(catalog, Settings::default());
    let text = screen(&state);
    assert!(text.contains("Fixture Project"));
    assert!(text.contains("No pinned apps"));

    open_apps(&mut state);
    assert!(screen(&state).contains("No apps match this filter"));
}

#[test]
fn quit_key_stops_the_loop() {
    let mut state = seeded_state();
    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}
