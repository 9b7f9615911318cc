//! Signup form state machine
//!
//! `Editing -> Submitting -> Submitted`, falling back to `Editing` when the
//! remote write fails. The form keeps the entered values across failures so
//! the user can fix them and try again.

use super::lead::{LeadError, LeadField, LeadRecord};

/// Browser-side deadline for one submission. Longer than the server's
/// insert timeout, so the server's own failure answer normally arrives first.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Phase of the signup form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Form is shown and accepts edits
    #[default]
    Editing,
    /// A write is in flight; further submits are ignored
    Submitting,
    /// Lead saved; the confirmation view replaces the form
    Submitted,
}

/// Lead record being edited plus the phase of its submission
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionFlow {
    record: LeadRecord,
    phase: SubmissionPhase,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &LeadRecord {
        &self.record
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Apply an input change. Edits after a successful submit are dropped.
    pub fn update(&mut self, field: LeadField, value: impl Into<String>) {
        if self.phase != SubmissionPhase::Submitted {
            self.record.set(field, value);
        }
    }

    /// Validate and, on success, move to `Submitting`.
    ///
    /// Returns the snapshot to send, `Ok(None)` if a submit is already in
    /// flight or done, and the validation error otherwise.
    pub fn begin_submit(&mut self) -> Result<Option<LeadRecord>, LeadError> {
        if self.phase != SubmissionPhase::Editing {
            return Ok(None);
        }

        self.record.validate()?;
        self.phase = SubmissionPhase::Submitting;
        Ok(Some(self.record.clone()))
    }

    /// Resolve the in-flight submit. No-op outside `Submitting`.
    pub fn finish(&mut self, result: Result<(), LeadError>) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }

        self.phase = match result {
            Ok(()) => SubmissionPhase::Submitted,
            Err(_) => SubmissionPhase::Editing,
        };
    }
}
