//! Settings actions and notification copy.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use crate::core::error::ApiError;
use crate::core::notifications::NotificationProps;
use cadence_api_models::RecordId;

/// Row and toolbar actions on the activity types panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityTypeAction {
    /// Open the modal for a new record.
    New,
    /// Open the modal prefilled with an existing record.
    Edit(RecordId),
    /// Delete a record.
    Delete(RecordId),
}

/// Row and toolbar actions on the time slots panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeSlotAction {
    /// Open the create modal.
    New,
    /// Delete a record.
    Delete(RecordId),
}

/// Write operations whose outcome is announced with a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsWrite {
    /// `POST /api/activity-types`.
    CreateActivityType,
    /// `PUT /api/activity-types/{id}`.
    UpdateActivityType,
    /// `DELETE /api/activity-types/{id}`.
    DeleteActivityType,
    /// `POST /api/time-slots`.
    CreateTimeSlot,
    /// `DELETE /api/time-slots/{id}`.
    DeleteTimeSlot,
}

impl SettingsWrite {
    const fn success_copy(self) -> (&'static str, &'static str) {
        match self {
            Self::CreateActivityType => (
                "Activity type created",
                "The activity type was created successfully.",
            ),
            Self::UpdateActivityType => (
                "Activity type updated",
                "The activity type was updated successfully.",
            ),
            Self::DeleteActivityType => (
                "Activity type deleted",
                "The activity type was deleted successfully.",
            ),
            Self::CreateTimeSlot => (
                "Time slot created",
                "The time slot was created successfully.",
            ),
            Self::DeleteTimeSlot => (
                "Time slot deleted",
                "The time slot was deleted successfully.",
            ),
        }
    }

    const fn failure_title(self) -> &'static str {
        match self {
            Self::CreateActivityType => "Could not create activity type",
            Self::UpdateActivityType => "Could not update activity type",
            Self::DeleteActivityType => "Could not delete activity type",
            Self::CreateTimeSlot => "Could not create time slot",
            Self::DeleteTimeSlot => "Could not delete time slot",
        }
    }
}

/// Notification announcing a successful write.
#[must_use]
pub fn success_notification(write: SettingsWrite) -> NotificationProps {
    let (title, description) = write.success_copy();
    NotificationProps::success(title, description)
}

/// Destructive notification carrying the error text.
#[must_use]
pub fn failure_notification(write: SettingsWrite, error: &ApiError) -> NotificationProps {
    NotificationProps::failure(write.failure_title(), error.to_string())
}

/// Notification for the outcome of a write.
#[must_use]
pub fn outcome_notification<T>(
    write: SettingsWrite,
    outcome: &Result<T, ApiError>,
) -> NotificationProps {
    match outcome {
        Ok(_) => success_notification(write),
        Err(err) => failure_notification(write, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notifications::NotificationVariant;

    #[test]
    fn success_copy_differs_per_write() {
        let created = success_notification(SettingsWrite::CreateActivityType);
        let deleted = success_notification(SettingsWrite::DeleteTimeSlot);
        assert_eq!(created.variant, NotificationVariant::Default);
        assert_ne!(created.title, deleted.title);
        assert_eq!(created.title.as_deref(), Some("Activity type created"));
    }

    #[test]
    fn failures_are_destructive_and_carry_error_text() {
        let err = ApiError::Status {
            status: 409,
            message: "code already exists".into(),
        };
        let outcome: Result<(), ApiError> = Err(err);
        let props = outcome_notification(SettingsWrite::UpdateActivityType, &outcome);
        assert_eq!(props.variant, NotificationVariant::Destructive);
        assert_eq!(props.description.as_deref(), Some("code already exists"));
        assert_eq!(
            props.title.as_deref(),
            Some("Could not update activity type")
        );
    }
}
