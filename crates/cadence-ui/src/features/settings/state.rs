//! Settings feature state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing; validate only on submit.
//! - Model modal and edit state as enums instead of nullable flags.
//! - Derive panel rendering state from the list query instead of storing it.

use cadence_api_models::{ActivityType, ActivityTypeInput, RecordId, TimeSlotInput};
use std::collections::BTreeMap;
use std::rc::Rc;
use validator::{Validate, ValidationErrors};
use yew::Reducible;

/// Color preselected for new activity types.
pub const DEFAULT_ACTIVITY_COLOR: &str = "#3b82f6";

/// Tabs shown on the settings screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    /// Activity type management.
    #[default]
    ActivityTypes,
    /// Time slot management.
    TimeSlots,
}

impl SettingsTab {
    /// Tabs in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::ActivityTypes, Self::TimeSlots]
    }

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ActivityTypes => "Activity types",
            Self::TimeSlots => "Time slots",
        }
    }
}

/// Field-level validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    /// Message for a field, if it failed validation.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failed fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, failures) in errors.field_errors() {
            let message = failures
                .iter()
                .find_map(|failure| failure.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| format!("{field} is invalid"));
            fields.insert(field, message);
        }
        Self(fields)
    }
}

/// Whether the activity type modal creates or edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    /// Creating a new record.
    New,
    /// Editing the record with this id.
    Existing(RecordId),
}

/// Validated request produced by the activity type modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivityTypeSubmission {
    /// Create a new activity type.
    Create(ActivityTypeInput),
    /// Replace an existing activity type.
    Update(RecordId, ActivityTypeInput),
}

/// Editable activity type form.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct ActivityTypeForm {
    /// Display name.
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Unique short code.
    #[validate(length(min = 2, message = "Code must be at least 2 characters"))]
    pub code: String,
    /// Hex color.
    #[validate(length(min = 1, message = "Color is required"))]
    pub color: String,
}

impl Default for ActivityTypeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            color: DEFAULT_ACTIVITY_COLOR.to_string(),
        }
    }
}

impl ActivityTypeForm {
    /// Prefill the form from an existing record.
    #[must_use]
    pub fn from_entry(entry: &ActivityType) -> Self {
        Self {
            name: entry.name.clone(),
            code: entry.code.clone(),
            color: entry.color.clone(),
        }
    }

    /// Validate and convert into the request body.
    ///
    /// # Errors
    /// Returns field-level messages when any field fails validation.
    pub fn to_input(&self) -> Result<ActivityTypeInput, FormErrors> {
        self.validate()?;
        Ok(ActivityTypeInput {
            name: self.name.clone(),
            code: self.code.clone(),
            color: self.color.clone(),
        })
    }

    /// Validate and build the create/update request for `target`.
    ///
    /// # Errors
    /// Returns field-level messages when any field fails validation.
    pub fn submission(&self, target: EditTarget) -> Result<ActivityTypeSubmission, FormErrors> {
        let input = self.to_input()?;
        Ok(match target {
            EditTarget::New => ActivityTypeSubmission::Create(input),
            EditTarget::Existing(id) => ActivityTypeSubmission::Update(id, input),
        })
    }
}

/// Editable time slot form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct TimeSlotForm {
    /// Start time, `HH:MM`.
    #[validate(length(min = 5, message = "Start time must use the HH:MM format"))]
    pub start_time: String,
    /// End time, `HH:MM`.
    #[validate(length(min = 5, message = "End time must use the HH:MM format"))]
    pub end_time: String,
}

impl TimeSlotForm {
    /// Validate and convert into the request body.
    ///
    /// # Errors
    /// Returns field-level messages when either time is too short.
    pub fn to_input(&self) -> Result<TimeSlotInput, FormErrors> {
        self.validate()?;
        Ok(TimeSlotInput {
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        })
    }
}

/// Activity type create/edit modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivityTypeModal {
    /// Not shown.
    #[default]
    Closed,
    /// Shown with the form bound to `target`.
    Open {
        /// Create or edit.
        target: EditTarget,
        /// Current field values.
        form: ActivityTypeForm,
    },
}

impl ActivityTypeModal {
    /// Open with an empty form for a new record.
    #[must_use]
    pub fn create() -> Self {
        Self::Open {
            target: EditTarget::New,
            form: ActivityTypeForm::default(),
        }
    }

    /// Open prefilled for editing `entry`.
    #[must_use]
    pub fn edit(entry: &ActivityType) -> Self {
        Self::Open {
            target: EditTarget::Existing(entry.id),
            form: ActivityTypeForm::from_entry(entry),
        }
    }

    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Current edit target.
    #[must_use]
    pub const fn target(&self) -> Option<EditTarget> {
        match self {
            Self::Open { target, .. } => Some(*target),
            Self::Closed => None,
        }
    }

    /// Apply a field edit; ignored while closed.
    pub fn update_form(&mut self, update: impl FnOnce(&mut ActivityTypeForm)) {
        if let Self::Open { form, .. } = self {
            update(form);
        }
    }

    /// Validate the open form.
    ///
    /// Returns `None` while the modal is closed.
    #[must_use]
    pub fn submission(&self) -> Option<Result<ActivityTypeSubmission, FormErrors>> {
        match self {
            Self::Open { target, form } => Some(form.submission(*target)),
            Self::Closed => None,
        }
    }
}

/// Time slot create modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TimeSlotModal {
    /// Not shown.
    #[default]
    Closed,
    /// Shown with the current field values.
    Open(TimeSlotForm),
}

impl TimeSlotModal {
    /// Open with an empty form.
    #[must_use]
    pub fn create() -> Self {
        Self::Open(TimeSlotForm::default())
    }

    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Apply a field edit; ignored while closed.
    pub fn update_form(&mut self, update: impl FnOnce(&mut TimeSlotForm)) {
        if let Self::Open(form) = self {
            update(form);
        }
    }

    /// Validate the open form.
    ///
    /// Returns `None` while the modal is closed.
    #[must_use]
    pub fn submission(&self) -> Option<Result<TimeSlotInput, FormErrors>> {
        match self {
            Self::Open(form) => Some(form.to_input()),
            Self::Closed => None,
        }
    }
}

/// List query state held by a panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    /// Most recent records (possibly stale).
    pub data: Option<Rc<Vec<T>>>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Message from the last failed fetch.
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    /// State seeded with cached records, if any.
    #[must_use]
    pub fn seeded(data: Option<Rc<Vec<T>>>) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    /// Mark a fetch as started, keeping any cached records.
    #[must_use]
    pub fn fetching(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: true,
            error: None,
        }
    }

    /// Record a successful fetch.
    #[must_use]
    pub fn loaded(data: Rc<Vec<T>>) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    /// Record a failed fetch, keeping any cached records.
    #[must_use]
    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            data: self.data.clone(),
            loading: false,
            error: Some(message.into()),
        }
    }

    /// Which of the four panel states to render.
    #[must_use]
    pub fn view(&self) -> PanelView<T> {
        if let Some(message) = &self.error {
            return PanelView::Failed(message.clone());
        }
        match &self.data {
            None => PanelView::Loading,
            Some(rows) if rows.is_empty() => PanelView::Empty,
            Some(rows) => PanelView::Rows(Rc::clone(rows)),
        }
    }
}

/// Monotonic counter that retriggers a panel's list fetch.
///
/// Driven through `use_reducer` so each completed write bumps the latest value,
/// even when several writes were started from the same render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReloadCounter(u32);

impl ReloadCounter {
    /// Current value, used as the fetch effect dependency.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Request another fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reload;

impl Reducible for ReloadCounter {
    type Action = Reload;

    fn reduce(self: Rc<Self>, _: Reload) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

/// Rendering state for a management panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelView<T> {
    /// Fetch in flight with nothing cached.
    Loading,
    /// The list query failed.
    Failed(String),
    /// The collection is empty.
    Empty,
    /// Records to show in the table.
    Rows(Rc<Vec<T>>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture() -> ActivityType {
        ActivityType {
            id: 4,
            name: "Lecture".into(),
            code: "LEC".into(),
            color: "#ff0000".into(),
        }
    }

    #[test]
    fn short_name_is_rejected_with_field_message() {
        let form = ActivityTypeForm {
            name: "A".into(),
            code: "AB".into(),
            ..ActivityTypeForm::default()
        };
        let errors = form.to_input().expect_err("name too short");
        assert_eq!(
            errors.get("name"),
            Some("Name must be at least 2 characters")
        );
        assert!(errors.get("code").is_none());
    }

    #[test]
    fn empty_color_and_code_are_reported_together() {
        let form = ActivityTypeForm {
            name: "Lab".into(),
            code: "L".into(),
            color: String::new(),
        };
        let errors = form.to_input().expect_err("invalid");
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["code", "color"]);
    }

    #[test]
    fn submission_follows_edit_target() {
        let form = ActivityTypeForm::from_entry(&lecture());
        assert!(matches!(
            form.submission(EditTarget::New),
            Ok(ActivityTypeSubmission::Create(_))
        ));
        let update = form.submission(EditTarget::Existing(4)).expect("valid");
        assert_eq!(
            update,
            ActivityTypeSubmission::Update(4, ActivityTypeInput::from(&lecture()))
        );
    }

    #[test]
    fn modal_transitions_reset_state() {
        let mut modal = ActivityTypeModal::edit(&lecture());
        assert_eq!(modal.target(), Some(EditTarget::Existing(4)));
        modal.update_form(|form| form.name = "Seminar".into());
        assert!(matches!(
            modal.submission(),
            Some(Ok(ActivityTypeSubmission::Update(4, ref input))) if input.name == "Seminar"
        ));

        modal = ActivityTypeModal::Closed;
        assert!(!modal.is_open());
        assert!(modal.submission().is_none());

        modal = ActivityTypeModal::create();
        assert_eq!(modal.target(), Some(EditTarget::New));
        assert_eq!(
            modal,
            ActivityTypeModal::Open {
                target: EditTarget::New,
                form: ActivityTypeForm::default(),
            }
        );
    }

    #[test]
    fn time_slot_requires_five_characters() {
        let mut modal = TimeSlotModal::create();
        modal.update_form(|form| {
            form.start_time = "8:00".into();
            form.end_time = "09:00".into();
        });
        let errors = modal
            .submission()
            .expect("open")
            .expect_err("start too short");
        assert!(errors.get("start_time").is_some());
        assert!(errors.get("end_time").is_none());

        modal.update_form(|form| form.start_time = "08:00".into());
        let input = modal.submission().expect("open").expect("valid");
        assert_eq!(input.start_time, "08:00");
    }

    #[test]
    fn time_slot_order_is_not_validated() {
        let form = TimeSlotForm {
            start_time: "10:00".into(),
            end_time: "09:00".into(),
        };
        assert!(form.to_input().is_ok());
    }

    #[test]
    fn panel_view_covers_all_states() {
        let idle: ListState<u8> = ListState::default();
        assert_eq!(idle.fetching().view(), PanelView::Loading);

        let empty = ListState::loaded(Rc::new(Vec::<u8>::new()));
        assert_eq!(empty.view(), PanelView::Empty);

        let rows = ListState::loaded(Rc::new(vec![1_u8, 2]));
        assert_eq!(rows.fetching().view(), PanelView::Rows(Rc::new(vec![1, 2])));

        let failed = rows.failed("offline");
        assert_eq!(failed.view(), PanelView::Failed("offline".into()));
        assert_eq!(failed.data.as_deref(), Some(&vec![1, 2]));
    }

    #[test]
    fn tabs_are_listed_in_display_order() {
        assert_eq!(
            SettingsTab::all().map(SettingsTab::label),
            ["Activity types", "Time slots"]
        );
        assert_eq!(SettingsTab::default(), SettingsTab::ActivityTypes);
    }

    #[test]
    fn reloads_from_the_same_snapshot_each_advance_the_counter() {
        let snapshot = Rc::new(ReloadCounter::default());
        let first = Rc::clone(&snapshot).reduce(Reload);
        let second = Rc::clone(&first).reduce(Reload);
        assert_eq!(snapshot.get(), 0);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
        assert_ne!(first.get(), second.get());
    }
}
