//! Application state (Model in TEA pattern)

use chrono::Local;
use portal_core::prelude::*;
use portal_core::{AppCard, AppType, Catalog, Project};

use crate::config::Settings;
use crate::nav::NavKey;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Sidebar and content, keys navigate
    #[default]
    Normal,

    /// Project picker popup over the top bar
    ProjectPicker,

    /// A Run-tab text input is capturing typed characters
    TextInput,
}

/// Which half of the shell receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

/// Type filter on the Apps screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppFilter {
    #[default]
    All,
    Type(AppType),
}

impl AppFilter {
    /// Filter chips in display order
    pub const ALL: [AppFilter; 5] = [
        AppFilter::All,
        AppFilter::Type(AppType::View),
        AppFilter::Type(AppType::Agent),
        AppFilter::Type(AppType::Analysis),
        AppFilter::Type(AppType::Workflow),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppFilter::All => "ALL",
            AppFilter::Type(t) => t.as_str(),
        }
    }

    pub fn app_type(&self) -> Option<AppType> {
        match self {
            AppFilter::All => None,
            AppFilter::Type(t) => Some(*t),
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> AppFilter {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> AppFilter {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which pane of the Apps screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppsPane {
    #[default]
    List,
    Detail,
}

/// Tabs of the app detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Run,
    Configure,
    Runs,
    Outputs,
    Permissions,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Run,
        DetailTab::Configure,
        DetailTab::Runs,
        DetailTab::Outputs,
        DetailTab::Permissions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Run => "Run",
            DetailTab::Configure => "Configure",
            DetailTab::Runs => "Runs",
            DetailTab::Outputs => "Outputs",
            DetailTab::Permissions => "Permissions",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> DetailTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> DetailTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Inputs on the Run tab, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunField {
    #[default]
    RunName,
    Bundle,
    Question,
}

impl RunField {
    pub fn next(&self) -> RunField {
        match self {
            RunField::RunName => RunField::Bundle,
            RunField::Bundle | RunField::Question => RunField::Question,
        }
    }

    pub fn prev(&self) -> RunField {
        match self {
            RunField::RunName | RunField::Bundle => RunField::RunName,
            RunField::Question => RunField::Bundle,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, RunField::RunName | RunField::Question)
    }
}

pub const DEFAULT_QUESTION: &str = "What changed and what does it impact?";

/// Values of the Run tab inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunForm {
    pub run_name: String,
    /// `None` only when the catalog has no bundles
    pub bundle_id: Option<String>,
    pub question: String,
}

impl RunForm {
    pub fn for_app(app: &AppCard, catalog: &Catalog) -> Self {
        Self {
            run_name: format!("{} run", app.name),
            bundle_id: catalog.bundles.first().map(|b| b.id.clone()),
            question: DEFAULT_QUESTION.to_string(),
        }
    }

    pub fn text(&self, field: RunField) -> Option<&str> {
        match field {
            RunField::RunName => Some(&self.run_name),
            RunField::Question => Some(&self.question),
            RunField::Bundle => None,
        }
    }

    pub fn text_mut(&mut self, field: RunField) -> Option<&mut String> {
        match field {
            RunField::RunName => Some(&mut self.run_name),
            RunField::Question => Some(&mut self.question),
            RunField::Bundle => None,
        }
    }
}

/// Per-app detail state, rebuilt whenever the shown app changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDetailState {
    pub app_id: String,
    pub tab: DetailTab,
    pub field: RunField,
    pub form: RunForm,
    /// Local time the mock run "started", fixed for the life of this detail
    pub started_at: String,
}

impl AppDetailState {
    pub fn new(app: &AppCard, catalog: &Catalog) -> Self {
        Self {
            app_id: app.id.clone(),
            tab: DetailTab::default(),
            field: RunField::default(),
            form: RunForm::for_app(app, catalog),
            started_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// State of the Apps screen
#[derive(Debug, Clone, Default)]
pub struct AppsViewState {
    pub filter: AppFilter,
    pub pane: AppsPane,
    pub detail: Option<AppDetailState>,
}

/// Project picker popup state
#[derive(Debug, Clone, Default)]
pub struct ProjectPickerState {
    pub index: usize,
}

/// Vertical scroll of the content area on card screens
///
/// `max` and `viewport` come from the last layout pass, so scrolling stops
/// at the bottom of the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentScroll {
    pub offset: u16,
    pub max: u16,
    pub viewport: u16,
}

impl ContentScroll {
    pub fn scroll_up(&mut self, n: u16) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.offset = self.offset.saturating_add(n).min(self.max);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max;
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    /// Record the content and viewport heights, clamping the offset
    pub fn update_content_size(&mut self, total: u16, visible: u16) {
        self.viewport = visible;
        self.max = total.saturating_sub(visible);
        self.offset = self.offset.min(self.max);
    }

    fn page(&self) -> u16 {
        self.viewport.saturating_sub(2).max(1)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub settings: Settings,
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub focus: Focus,

    /// Section shown in the content area
    pub active: NavKey,

    /// Id from the project selector; may not resolve, see [`AppState::active_project`]
    pub project_id: String,

    /// Id chosen in the app list; resolved against the filtered list
    pub selected_app_id: Option<String>,

    pub apps_view: AppsViewState,
    pub project_picker: ProjectPickerState,

    /// Scroll position of the active card screen; reset on navigation
    pub scroll: ContentScroll,
}

impl AppState {
    /// Build the initial state over a validated catalog
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let project_id = catalog
            .first_project()
            .map(|p| p.id.clone())
            .unwrap_or_default();
        let active = settings.behavior.start_screen;

        let mut state = Self {
            catalog,
            settings,
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            focus: Focus::Sidebar,
            active,
            project_id,
            selected_app_id: None,
            apps_view: AppsViewState::default(),
            project_picker: ProjectPickerState::default(),
            scroll: ContentScroll::default(),
        };
        state.sync_detail();
        state
    }

    /// State over the seeded catalog with default settings
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(), Settings::default())
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    /// The project named by the selector, or the first project
    pub fn active_project(&self) -> Option<&Project> {
        match self.catalog.project(&self.project_id) {
            Some(project) => Some(project),
            None => {
                warn!(
                    "Project '{}' not in catalog, falling back to first project",
                    self.project_id
                );
                self.catalog.first_project()
            }
        }
    }

    /// Apps passing the current type filter
    pub fn visible_apps(&self) -> Vec<&AppCard> {
        self.catalog.apps_of_type(self.apps_view.filter.app_type())
    }

    /// The app shown in the detail pane
    ///
    /// The chosen id when it is in the filtered list, otherwise the first
    /// filtered app. `None` when the filter matches nothing.
    pub fn selected_app(&self) -> Option<&AppCard> {
        let visible = self.visible_apps();
        self.selected_app_id
            .as_deref()
            .and_then(|id| visible.iter().find(|a| a.id == id).copied())
            .or_else(|| visible.first().copied())
    }

    /// Position of the selected app in the filtered list
    pub fn selected_app_index(&self) -> Option<usize> {
        let selected = self.selected_app()?;
        self.visible_apps().iter().position(|a| a.id == selected.id)
    }

    pub fn detail(&self) -> Option<&AppDetailState> {
        self.apps_view.detail.as_ref()
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    pub fn select_nav(&mut self, key: NavKey) {
        if key == self.active {
            return;
        }
        debug!("Navigating {} -> {}", self.active, key);

        if self.active == NavKey::Apps {
            self.apps_view.filter = AppFilter::All;
            self.apps_view.pane = AppsPane::List;
        }
        if key == NavKey::Apps {
            // Re-entering Apps starts from a fresh detail form
            self.apps_view.detail = None;
        }
        if self.ui_mode == UiMode::TextInput {
            self.ui_mode = UiMode::Normal;
        }

        self.active = key;
        self.scroll = ContentScroll::default();
        self.sync_detail();
    }

    /// Set the project selector; unknown ids are ignored
    pub fn select_project(&mut self, id: &str) {
        if self.catalog.project(id).is_some() {
            info!("Active project: {}", id);
            self.project_id = id.to_string();
        } else {
            warn!("Ignoring unknown project id '{}'", id);
        }
    }

    pub fn select_app(&mut self, id: &str) {
        self.selected_app_id = Some(id.to_string());
        self.sync_detail();
    }

    /// Move the app selection within the filtered list, clamped at the ends
    pub fn move_app_selection(&mut self, delta: isize) {
        let visible = self.visible_apps();
        if visible.is_empty() {
            return;
        }
        let current = self.selected_app_index().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, visible.len() as isize - 1) as usize;
        let id = visible[target].id.clone();
        self.select_app(&id);
    }

    pub fn set_filter(&mut self, filter: AppFilter) {
        self.apps_view.filter = filter;
        self.sync_detail();
    }

    /// Rebuild the detail state when the effective selected app changes
    pub fn sync_detail(&mut self) {
        let selected = self.selected_app().map(|a| a.id.clone());
        let current = self.apps_view.detail.as_ref().map(|d| d.app_id.clone());
        if selected == current {
            return;
        }

        self.apps_view.detail = selected
            .as_deref()
            .and_then(|id| self.catalog.app(id))
            .map(|app| AppDetailState::new(app, &self.catalog));
        if self.apps_view.detail.is_none() {
            self.apps_view.pane = AppsPane::List;
        }
        if self.ui_mode == UiMode::TextInput {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Advance the bundle selector, wrapping
    pub fn cycle_bundle(&mut self, forward: bool) {
        let bundles = &self.catalog.bundles;
        let Some(detail) = self.apps_view.detail.as_mut() else {
            return;
        };
        if bundles.is_empty() {
            return;
        }
        let len = bundles.len();
        let current = detail
            .form
            .bundle_id
            .as_deref()
            .and_then(|id| bundles.iter().position(|b| b.id == id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        detail.form.bundle_id = Some(bundles[next].id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::seeded();
        assert_eq!(state.active, NavKey::Projects);
        assert_eq!(state.focus, Focus::Sidebar);
        assert_eq!(state.project_id, "prj_001");
        assert_eq!(state.apps_view.filter, AppFilter::All);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_start_screen_from_settings() {
        let mut settings = Settings::default();
        settings.behavior.start_screen = NavKey::Runs;
        let state = AppState::new(Catalog::seeded(), settings);
        assert_eq!(state.active, NavKey::Runs);
    }

    #[test]
    fn test_selected_app_defaults_to_first() {
        let state = AppState::seeded();
        assert_eq!(state.selected_app().unwrap().id, "app_research_notebook");
        let detail = state.detail().unwrap();
        assert_eq!(detail.form.run_name, "Research Notebook run");
        assert_eq!(detail.form.bundle_id.as_deref(), Some("bun_001"));
        assert_eq!(detail.form.question, DEFAULT_QUESTION);
    }

    #[test]
    fn test_selection_outside_filter_falls_back_to_first_filtered() {
        let mut state = AppState::seeded();
        state.select_app("app_weekly_refresh");
        state.set_filter(AppFilter::Type(AppType::Analysis));
        assert_eq!(state.selected_app().unwrap().id, "app_lease_review");
        assert_eq!(state.detail().unwrap().app_id, "app_lease_review");
    }

    #[test]
    fn test_empty_filter_has_no_selection() {
        let mut state = AppState::seeded();
        state.set_filter(AppFilter::Type(AppType::View));
        assert!(state.selected_app().is_none());
        assert!(state.detail().is_none());
        assert_eq!(state.apps_view.pane, AppsPane::List);
    }

    #[test]
    fn test_move_app_selection_clamps() {
        let mut state = AppState::seeded();
        state.move_app_selection(-1);
        assert_eq!(state.selected_app_index(), Some(0));
        state.move_app_selection(10);
        assert_eq!(state.selected_app().unwrap().id, "app_reg_mapper");
    }

    #[test]
    fn test_detail_resets_when_app_changes() {
        let mut state = AppState::seeded();
        if let Some(detail) = state.apps_view.detail.as_mut() {
            detail.tab = DetailTab::Outputs;
            detail.form.run_name.push_str(" edited");
        }
        state.select_app("app_lease_review");
        let detail = state.detail().unwrap();
        assert_eq!(detail.tab, DetailTab::Run);
        assert_eq!(detail.form.run_name, "Lease Review run");
    }

    #[test]
    fn test_detail_kept_when_same_app_reselected() {
        let mut state = AppState::seeded();
        if let Some(detail) = state.apps_view.detail.as_mut() {
            detail.tab = DetailTab::Runs;
        }
        state.select_app("app_research_notebook");
        assert_eq!(state.detail().unwrap().tab, DetailTab::Runs);
    }

    #[test]
    fn test_leaving_apps_resets_filter() {
        let mut state = AppState::seeded();
        state.select_nav(NavKey::Apps);
        state.set_filter(AppFilter::Type(AppType::Agent));
        state.select_nav(NavKey::Runs);
        assert_eq!(state.apps_view.filter, AppFilter::All);
    }

    #[test]
    fn test_reentering_apps_resets_detail() {
        let mut state = AppState::seeded();
        state.select_nav(NavKey::Apps);
        if let Some(detail) = state.apps_view.detail.as_mut() {
            detail.form.question.clear();
        }
        state.select_nav(NavKey::Models);
        state.select_nav(NavKey::Apps);
        assert_eq!(state.detail().unwrap().form.question, DEFAULT_QUESTION);
    }

    #[test]
    fn test_select_project() {
        let mut state = AppState::seeded();
        state.select_project("prj_002");
        assert_eq!(state.active_project().unwrap().name, "RegOps - UK");

        state.select_project("prj_404");
        assert_eq!(state.project_id, "prj_002");
    }

    #[test]
    fn test_active_project_falls_back_to_first() {
        let mut state = AppState::seeded();
        state.project_id = "gone".into();
        assert_eq!(state.active_project().unwrap().id, "prj_001");
    }

    #[test]
    fn test_cycle_bundle_wraps() {
        let mut state = AppState::seeded();
        state.cycle_bundle(false);
        assert_eq!(state.detail().unwrap().form.bundle_id.as_deref(), Some("bun_003"));
        state.cycle_bundle(true);
        assert_eq!(state.detail().unwrap().form.bundle_id.as_deref(), Some("bun_001"));
    }

    #[test]
    fn test_no_bundles_leaves_selector_empty() {
        let mut catalog = Catalog::seeded();
        catalog.bundles.clear();
        let mut state = AppState::new(catalog, Settings::default());
        assert!(state.detail().unwrap().form.bundle_id.is_none());
        state.cycle_bundle(true);
        assert!(state.detail().unwrap().form.bundle_id.is_none());
    }

    #[test]
    fn test_content_scroll_clamps_to_content() {
        let mut scroll = ContentScroll::default();
        scroll.update_content_size(40, 15);
        assert_eq!(scroll.max, 25);

        scroll.scroll_down(3);
        assert_eq!(scroll.offset, 3);
        scroll.page_down();
        assert_eq!(scroll.offset, 16);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset, 25);
        scroll.scroll_up(30);
        assert_eq!(scroll.offset, 0);

        scroll.scroll_to_bottom();
        scroll.update_content_size(30, 15);
        assert_eq!(scroll.offset, 15);
    }

    #[test]
    fn test_content_that_fits_never_scrolls() {
        let mut scroll = ContentScroll::default();
        scroll.update_content_size(10, 20);
        scroll.scroll_down(5);
        scroll.page_down();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_navigation_resets_scroll() {
        let mut state = AppState::seeded();
        state.scroll.update_content_size(60, 20);
        state.scroll.scroll_down(10);
        state.select_nav(NavKey::Documents);
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn test_filter_cycle() {
        assert_eq!(AppFilter::All.next(), AppFilter::Type(AppType::View));
        assert_eq!(AppFilter::All.prev(), AppFilter::Type(AppType::Workflow));
        assert_eq!(AppFilter::Type(AppType::Analysis).label(), "ANALYSIS");
    }

    #[test]
    fn test_run_field_order() {
        assert_eq!(RunField::RunName.next(), RunField::Bundle);
        assert_eq!(RunField::Question.next(), RunField::Question);
        assert_eq!(RunField::Question.prev(), RunField::Bundle);
        assert!(!RunField::Bundle.is_text());
    }

    #[test]
    fn test_detail_tab_wraps() {
        assert_eq!(DetailTab::Permissions.next(), DetailTab::Run);
        assert_eq!(DetailTab::Run.prev(), DetailTab::Permissions);
    }
}
