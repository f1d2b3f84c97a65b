//! Application state for the TUI
//!
//! The App struct holds the wizard controller plus everything the step
//! panel needs: which field has focus, the editing buffer for text fields,
//! and the provider suggestion selection.

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{OnboardPaths, Settings};
use crate::models::{
    Choice, FieldKind, FieldValue, NotificationMethod, PrimaryGoal, ProfileField,
    ReportFrequency, WizardStep,
};
use crate::providers::ProviderCatalog;
use crate::storage::SubmittedProfile;
use crate::submission::{ProfileSubmitter, RouteRecorder};
use crate::wizard::{CompletedOnboarding, WizardController};

use super::widgets::TextInput;

/// How many provider suggestions are listed under the input
pub const SUGGESTION_LIMIT: usize = 5;

/// Longest accepted `YYYY-MM-DD` input
const DATE_INPUT_LEN: usize = 10;

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Wizard,
    Dashboard,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings; updated when onboarding completes
    pub settings: Settings,

    /// Paths configuration
    pub paths: &'a OnboardPaths,

    /// Provider names for the autocomplete
    pub catalog: &'a ProviderCatalog,

    /// The onboarding state machine
    pub wizard: WizardController,

    /// Routes opened by the wizard
    pub navigator: RouteRecorder,

    submitter: Box<dyn ProfileSubmitter + 'a>,

    audit: AuditLogger,

    pub screen: Screen,

    pub active_dialog: ActiveDialog,

    /// Index into the current step's visible fields
    pub focus: usize,

    /// Editing buffer for the focused text field
    pub editor: TextInput,

    /// Highlighted provider suggestion
    pub suggestion: Option<usize>,

    /// Informational message for the status bar
    pub status_message: Option<String>,

    /// Error message for the status bar
    pub error_message: Option<String>,

    /// The submission shown on the dashboard
    pub submission: Option<SubmittedProfile>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Start a fresh wizard
    pub fn new(
        settings: Settings,
        paths: &'a OnboardPaths,
        catalog: &'a ProviderCatalog,
        submitter: Box<dyn ProfileSubmitter + 'a>,
    ) -> Self {
        let wizard = WizardController::new(settings.dashboard_path.clone());
        let audit = AuditLogger::new(paths.audit_log());
        audit.record(&AuditEntry::started("tui"));

        let mut app = Self {
            settings,
            paths,
            catalog,
            wizard,
            navigator: RouteRecorder::new(),
            submitter,
            audit,
            screen: Screen::Wizard,
            active_dialog: ActiveDialog::None,
            focus: 0,
            editor: TextInput::new(),
            suggestion: None,
            status_message: None,
            error_message: None,
            submission: None,
            should_quit: false,
        };
        app.load_editor();
        app
    }

    /// Open straight on the dashboard for an earlier submission
    pub fn resume(
        settings: Settings,
        paths: &'a OnboardPaths,
        catalog: &'a ProviderCatalog,
        submitter: Box<dyn ProfileSubmitter + 'a>,
        submission: SubmittedProfile,
    ) -> Self {
        Self {
            settings,
            paths,
            catalog,
            wizard: WizardController::default(),
            navigator: RouteRecorder::new(),
            submitter,
            audit: AuditLogger::new(paths.audit_log()),
            screen: Screen::Dashboard,
            active_dialog: ActiveDialog::None,
            focus: 0,
            editor: TextInput::new(),
            suggestion: None,
            status_message: Some("Onboarding already completed".into()),
            error_message: None,
            submission: Some(submission),
            should_quit: false,
        }
    }

    /// Quit; an unfinished wizard is recorded as abandoned
    pub fn quit(&mut self) {
        if self.screen == Screen::Wizard && !self.wizard.is_finished() {
            self.audit
                .record(&AuditEntry::abandoned(self.wizard.step()));
            tracing::info!(step = %self.wizard.step(), "onboarding abandoned");
        }
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    // Focus

    /// Fields shown on the current step
    pub fn fields(&self) -> Vec<ProfileField> {
        self.wizard.visible_fields()
    }

    pub fn focused_field(&self) -> Option<ProfileField> {
        self.fields().get(self.focus).copied()
    }

    /// Whether typing goes into the editing buffer
    pub fn is_editing_text(&self) -> bool {
        self.focused_field().is_some_and(|f| is_text_kind(f.kind()))
    }

    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
        self.load_editor();
    }

    pub fn focus_prev(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
        self.load_editor();
    }

    fn focus_on(&mut self, field: ProfileField) {
        if let Some(index) = self.fields().iter().position(|f| *f == field) {
            self.focus = index;
        }
        self.load_editor();
    }

    /// Keep focus in range after fields hide
    fn clamp_focus(&mut self) {
        let count = self.fields().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }

    fn load_editor(&mut self) {
        self.suggestion = None;
        self.editor = match self.focused_field() {
            Some(field) if is_text_kind(field.kind()) => {
                TextInput::with_content(self.wizard.profile().text_of(field))
            }
            _ => TextInput::new(),
        };
    }

    // Editing

    /// Apply an edit to the buffer and write it back to the profile
    pub fn edit(&mut self, change: impl FnOnce(&mut TextInput)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if !is_text_kind(field.kind()) {
            return;
        }
        change(&mut self.editor);
        self.suggestion = None;
        self.error_message = None;
        let value = FieldValue::Text(self.editor.value().to_string());
        if let Err(e) = self.wizard.update_field(field, value) {
            self.set_error(e.to_string());
        }
    }

    /// A printable key on the focused field
    pub fn type_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Text => self.edit(|input| input.insert(c)),
            FieldKind::Number => {
                let accepted =
                    c.is_ascii_digit() || (c == '.' && !self.editor.value().contains('.'));
                if accepted {
                    self.edit(|input| input.insert(c));
                }
            }
            FieldKind::Date => {
                let accepted = (c.is_ascii_digit() || c == '-')
                    && self.editor.value().chars().count() < DATE_INPUT_LEN;
                if accepted {
                    self.edit(|input| input.insert(c));
                }
            }
            FieldKind::Flag => match c {
                ' ' => self.toggle_flag(),
                'y' | 'Y' => self.set_flag(true),
                'n' | 'N' => self.set_flag(false),
                _ => {}
            },
            FieldKind::Choice => {
                if let Some(n) = c.to_digit(10) {
                    self.select_choice(n as usize);
                }
            }
        }
    }

    fn current_flag(&self) -> Option<(ProfileField, bool)> {
        let field = self.focused_field()?;
        self.wizard.profile().flag_of(field).map(|v| (field, v))
    }

    /// Flip the focused yes/no field
    pub fn toggle_flag(&mut self) {
        if let Some((_, value)) = self.current_flag() {
            self.set_flag(!value);
        }
    }

    fn set_flag(&mut self, value: bool) {
        let Some((field, current)) = self.current_flag() else {
            return;
        };
        if current == value {
            return;
        }
        let result = match field {
            ProfileField::Device(device) => self.wizard.toggle_device(device).map(|_| ()),
            _ => self.wizard.update_field(field, value.into()),
        };
        if let Err(e) = result {
            self.set_error(e.to_string());
        }
        self.clamp_focus();
    }

    /// Step the focused single-choice field to its neighbour
    pub fn cycle_choice(&mut self, forward: bool) {
        let profile = self.wizard.profile();
        let result = match self.focused_field() {
            Some(ProfileField::PrimaryGoal) => {
                let next = PrimaryGoal::cycle(profile.primary_goal, forward);
                self.wizard.set_primary_goal(Some(next))
            }
            Some(ProfileField::NotificationMethod) => {
                let next = NotificationMethod::cycle(profile.notification_method, forward);
                self.wizard.set_notification_method(Some(next))
            }
            Some(ProfileField::ReportFrequency) => {
                let next = ReportFrequency::cycle(profile.report_frequency, forward);
                self.wizard.set_report_frequency(Some(next))
            }
            _ => Ok(()),
        };
        if let Err(e) = result {
            self.set_error(e.to_string());
        }
    }

    /// Pick option `number` (1-based) of the focused single-choice field
    fn select_choice(&mut self, number: usize) {
        let result = match self.focused_field() {
            Some(ProfileField::PrimaryGoal) => match PrimaryGoal::from_number(number) {
                Some(goal) => self.wizard.set_primary_goal(Some(goal)),
                None => Ok(()),
            },
            Some(ProfileField::NotificationMethod) => {
                match NotificationMethod::from_number(number) {
                    Some(method) => self.wizard.set_notification_method(Some(method)),
                    None => Ok(()),
                }
            }
            Some(ProfileField::ReportFrequency) => match ReportFrequency::from_number(number) {
                Some(frequency) => self.wizard.set_report_frequency(Some(frequency)),
                None => Ok(()),
            },
            _ => Ok(()),
        };
        if let Err(e) = result {
            self.set_error(e.to_string());
        }
    }

    // Provider suggestions

    /// Catalog names matching the provider being typed
    pub fn suggestions(&self) -> Vec<&'a str> {
        if self.focused_field() != Some(ProfileField::ElectricityProvider) {
            return Vec::new();
        }
        let query = self.editor.value().trim();
        if query.is_empty() {
            return Vec::new();
        }
        let catalog: &'a ProviderCatalog = self.catalog;
        catalog
            .suggest(query, SUGGESTION_LIMIT)
            .into_iter()
            .filter(|name| !name.eq_ignore_ascii_case(query))
            .collect()
    }

    /// Move the suggestion highlight. Returns `false` when there is nothing
    /// to highlight.
    pub fn move_suggestion(&mut self, down: bool) -> bool {
        let count = self.suggestions().len();
        if count == 0 {
            return false;
        }
        self.suggestion = match (self.suggestion, down) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        true
    }

    /// Take the highlighted suggestion as the provider
    pub fn accept_suggestion(&mut self) -> bool {
        let Some(name) = self.suggestion.and_then(|i| self.suggestions().get(i).copied()) else {
            return false;
        };
        self.edit(|input| *input = TextInput::with_content(name));
        true
    }

    // Navigation

    /// Next step, or complete on the last one
    pub fn next_step(&mut self) {
        if self.accept_suggestion() {
            return;
        }
        if self.wizard.can_complete() {
            self.complete();
            return;
        }

        if self.wizard.step().is_first() {
            if let Err(e) = self.wizard.check_required() {
                self.set_error(e.to_string());
                if let Some(missing) = self.wizard.missing_required().first().copied() {
                    self.focus_on(missing);
                }
                return;
            }
        }

        let from = self.wizard.step();
        if self.wizard.advance() {
            self.entered_step(from);
        }
    }

    pub fn prev_step(&mut self) {
        if self.suggestion.take().is_some() {
            return;
        }
        let from = self.wizard.step();
        if self.wizard.retreat() {
            self.entered_step(from);
        }
    }

    fn entered_step(&mut self, from: WizardStep) {
        let to = self.wizard.step();
        self.audit.record(&AuditEntry::step_changed(from, to));
        self.focus = 0;
        self.load_editor();
        self.set_status(format!("Step {}: {}", to.number(), to.title()));
    }

    /// Submit the profile and switch to the dashboard
    pub fn complete(&mut self) {
        let outcome = self
            .wizard
            .complete(self.submitter.as_mut(), &mut self.navigator);

        match outcome {
            Ok(done) => self.show_dashboard(done),
            Err(e) if self.wizard.is_finished() => {
                tracing::warn!(error = %e, "profile submitted but navigation failed");
                self.screen = Screen::Dashboard;
                self.set_error(format!("Profile saved, but: {}", e));
            }
            Err(e) => {
                self.audit
                    .record(&AuditEntry::submission_failed(self.wizard.step(), &e));
                tracing::error!(error = %e, "profile submission failed");
                self.set_error(format!("Could not save profile: {}", e));
            }
        }
    }

    fn show_dashboard(&mut self, done: CompletedOnboarding) {
        if let Err(e) = self.settings.mark_onboarded(self.paths) {
            tracing::warn!(error = %e, "could not record onboarding in settings");
        }
        self.set_status(format!(
            "Profile saved ({}). Opened {}",
            done.receipt.short_id(),
            done.route
        ));
        self.submission = Some(SubmittedProfile {
            id: done.receipt.id,
            submitted_at: done.receipt.submitted_at,
            profile: done.profile,
        });
        self.screen = Screen::Dashboard;
    }
}

fn is_text_kind(kind: FieldKind) -> bool {
    matches!(kind, FieldKind::Text | FieldKind::Number | FieldKind::Date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SmartDevice;
    use crate::storage::ProfileStore;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, OnboardPaths, ProviderCatalog) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        let catalog = ProviderCatalog::new(vec![
            "BSES Rajdhani".into(),
            "BSES Yamuna".into(),
            "Tata Power-DDL".into(),
        ]);
        (temp_dir, paths, catalog)
    }

    fn app<'a>(paths: &'a OnboardPaths, catalog: &'a ProviderCatalog) -> App<'a> {
        let store = ProfileStore::at(paths.profile_file());
        App::new(Settings::default(), paths, catalog, Box::new(store))
    }

    fn type_str(app: &mut App, text: &str) {
        text.chars().for_each(|c| app.type_char(c));
    }

    #[test]
    fn test_blank_bill_blocks_step_one() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);

        app.next_step();

        assert_eq!(app.wizard.step(), WizardStep::EnergyProfile);
        assert_eq!(app.focused_field(), Some(ProfileField::MonthlyBill));
        assert_eq!(
            app.error_message.as_deref(),
            Some("Required field missing: monthlyBill")
        );

        type_str(&mut app, "25a0.0.");
        assert_eq!(app.wizard.profile().monthly_bill, "250.0");
        app.next_step();
        assert_eq!(app.wizard.step(), WizardStep::SmartHome);
    }

    #[test]
    fn test_provider_suggestion_accepted() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);

        type_str(&mut app, "yam");
        assert_eq!(app.suggestions(), vec!["BSES Yamuna"]);
        assert!(app.move_suggestion(true));
        app.next_step();

        assert_eq!(app.wizard.profile().electricity_provider, "BSES Yamuna");
        assert_eq!(app.wizard.step(), WizardStep::EnergyProfile);
        assert!(app.suggestions().is_empty());
    }

    #[test]
    fn test_exact_provider_name_is_not_suggested_in_any_case() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);

        type_str(&mut app, "bses yamuna");
        assert!(app.suggestions().is_empty());

        app.edit(|input| input.backspace());
        assert_eq!(app.suggestions(), vec!["BSES Yamuna"]);
    }

    #[test]
    fn test_solar_toggle_reveals_and_hides_fields() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);

        app.focus_on(ProfileField::HasSolarPanels);
        app.toggle_flag();
        assert!(app.fields().contains(&ProfileField::SolarCapacity));

        app.focus_on(ProfileField::SolarCapacity);
        type_str(&mut app, "3.5");
        app.focus_on(ProfileField::HasSolarPanels);
        app.toggle_flag();

        assert!(!app.fields().contains(&ProfileField::SolarCapacity));
        assert_eq!(app.wizard.profile().solar_capacity, "3.5");
    }

    #[test]
    fn test_focus_clamped_when_fields_hide() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);

        app.focus_on(ProfileField::HasSolarPanels);
        app.toggle_flag();
        app.focus_on(ProfileField::HasBatteryStorage);
        app.toggle_flag();
        app.focus_on(ProfileField::StorageCapacity);
        app.wizard
            .update_field(ProfileField::HasSolarPanels, false.into())
            .unwrap();
        app.clamp_focus();

        assert_eq!(app.focused_field(), Some(ProfileField::HasSolarPanels));
    }

    #[test]
    fn test_device_flags_and_choices() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);
        app.focus_on(ProfileField::MonthlyBill);
        type_str(&mut app, "1200");
        app.next_step();

        app.type_char('y');
        assert!(app.wizard.profile().smart_devices.has(SmartDevice::Thermostat));
        app.type_char(' ');
        assert!(!app.wizard.profile().smart_devices.has(SmartDevice::Thermostat));

        app.next_step();
        app.cycle_choice(true);
        assert_eq!(app.wizard.profile().primary_goal, Some(PrimaryGoal::ReduceBills));
        app.type_char('3');
        assert_eq!(app.wizard.profile().primary_goal, Some(PrimaryGoal::ReduceCarbon));
    }

    #[test]
    fn test_completion_switches_to_dashboard() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);
        app.focus_on(ProfileField::MonthlyBill);
        type_str(&mut app, "2500");
        app.next_step();
        app.next_step();
        app.next_step();
        app.type_char('1');
        app.focus_next();
        app.cycle_choice(true);
        app.cycle_choice(true);

        app.next_step();

        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.navigator.routes(), ["/dashboard".to_string()]);
        let submission = app.submission.as_ref().unwrap();
        assert_eq!(submission.profile.notification_method, Some(NotificationMethod::Email));
        assert_eq!(submission.profile.report_frequency, Some(ReportFrequency::Weekly));
        assert!(app.settings.onboarding_completed);

        let stored = ProfileStore::at(paths.profile_file()).load_required().unwrap();
        assert_eq!(stored.id, submission.id);
    }

    #[test]
    fn test_quit_mid_wizard_is_abandoned() {
        let (_temp, paths, catalog) = fixture();
        let mut app = app(&paths, &catalog);
        app.quit();

        assert!(app.should_quit);
        let entries = AuditLogger::new(paths.audit_log()).read_all().unwrap();
        assert_eq!(
            entries.iter().map(|e| e.event).collect::<Vec<_>>(),
            vec![crate::audit::EventKind::Started, crate::audit::EventKind::Abandoned]
        );
    }
}
