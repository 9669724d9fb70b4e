//! View state and contact-form data.

use serde::Serialize;

/// Progress value a fresh controller starts with.
pub const DEFAULT_PROGRESS: u8 = 75;

/// Minimum length of a contact name, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// The controller's in-memory view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Whether the demo action is in flight.
    pub is_loading: bool,
    progress_value: u8,
}

impl UiState {
    /// State with the given initial progress, saturated to `0..=100`.
    pub fn new(initial_progress: i64) -> Self {
        Self {
            is_loading: false,
            progress_value: clamp_progress(initial_progress),
        }
    }

    /// Current progress, always within `0..=100`.
    pub fn progress_value(&self) -> u8 {
        self.progress_value
    }

    /// Store a new progress value, saturating out-of-range input. Returns the
    /// stored value.
    pub fn set_progress(&mut self, value: i64) -> u8 {
        self.progress_value = clamp_progress(value);
        self.progress_value
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(i64::from(DEFAULT_PROGRESS))
    }
}

/// Saturate `value` to `0..=100`.
pub fn clamp_progress(value: i64) -> u8 {
    // Lossless: the clamp bounds fit in u8.
    value.clamp(0, 100) as u8
}

/// Why a contact submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("email must contain '@'")]
    InvalidEmail,
    #[error("name must be at least 2 characters")]
    NameTooShort,
}

/// One contact-form submission. Lives for a single submit handler call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check every field is present, the email has an `@`, and the name has
    /// at least [`MIN_NAME_CHARS`] characters. Reports the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.name.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        Ok(())
    }

    /// JSON rendering for the trace.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
