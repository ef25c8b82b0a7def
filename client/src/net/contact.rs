//! Contact form submission sink.
//!
//! ERROR HANDLING
//! ==============
//! Sinks report failure through [`SubmitError`]. The view controller clears
//! the draft before delivery, so a failed hand-off is only logged.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::state::site::ContactDraft;

/// Error returned by [`ContactSink::deliver`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The draft could not be encoded for delivery.
    #[error("failed to encode contact submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Receiver for submitted contact drafts.
pub trait ContactSink: Send + Sync {
    /// Accept one submitted record. No response payload.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] if the record could not be handed off.
    fn deliver(&self, draft: &ContactDraft) -> Result<(), SubmitError>;
}

/// Default sink: writes the submission to the log as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, draft: &ContactDraft) -> Result<(), SubmitError> {
        let payload = encode_submission(draft)?;
        log::info!("Form submitted: {payload}");
        Ok(())
    }
}

/// JSON body for a submitted draft.
///
/// # Errors
///
/// Returns [`SubmitError::Encode`] if serialization fails.
pub fn encode_submission(draft: &ContactDraft) -> Result<String, SubmitError> {
    Ok(serde_json::to_string(draft)?)
}
