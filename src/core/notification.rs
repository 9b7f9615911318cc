//! Toast notification payloads shown over the page

use super::lead::LeadError;

/// Notification type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    Info,
}

/// A single toast
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None, // Errors stay until dismissed
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Warning,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(5000),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    /// Toast shown once a lead has been saved
    pub fn lead_captured() -> Self {
        Self::success(
            "You're on the list!",
            "Thanks for signing up. We'll be in touch shortly.",
        )
    }
}

impl From<&LeadError> for Notification {
    fn from(error: &LeadError) -> Self {
        match error {
            LeadError::MissingField(_) => {
                Self::warning("Missing information", "Please fill in all fields.")
            }
            LeadError::InvalidEmail => {
                Self::warning("Invalid email", "Please enter a valid email address.")
            }
            LeadError::SubmissionFailure => Self::error(
                "Something went wrong",
                "We couldn't save your details. Please try again.",
            ),
        }
    }
}
