//! Shared submission pipeline: status tracking, the in-flight guard and the
//! mapping from typed client results to user-facing messages.

use crate::client::ProductClient;
use crate::error::SubmitError;
use crate::payload::ProductInput;

pub const SUCCESS_MESSAGE: &str = "Product created successfully ✅";
pub const API_FAILURE_MESSAGE: &str = "Failed to create product";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong";

/// `Ok` carries the success message, `Err` the failure message.
pub type SubmitResult = Result<&'static str, &'static str>;

/// Sends `payload` and reduces the outcome to a message. Never fails.
pub async fn submit(client: &ProductClient, payload: &ProductInput) -> SubmitResult {
    log::debug!("📤 [SUBMIT] Payload: {:?}", payload);

    match client.create_product(payload).await {
        Ok(_) => {
            log::info!("✅ [SUBMIT] Product {} created", payload.id);
            log::info!("  Sent payload: {:?}", payload);
            Ok(SUCCESS_MESSAGE)
        }
        Err(SubmitError::Api { status, body }) => {
            log::error!("❌ [SUBMIT] API rejected product ({}): {}", status, body);
            Err(API_FAILURE_MESSAGE)
        }
        Err(err) => {
            log::error!("💥 [SUBMIT] Request failed: {}", err);
            Err(TRANSPORT_FAILURE_MESSAGE)
        }
    }
}

/// Where the last completed submission ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// Per-submitter UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionStatus {
    pub loading: bool,
    pub message: String,
    pub last_outcome: Option<Outcome>,
}

impl SubmissionStatus {
    pub fn begin(&mut self) {
        self.loading = true;
        self.message.clear();
        self.last_outcome = None;
    }

    pub fn finish(&mut self, result: SubmitResult) {
        let (message, outcome) = match result {
            Ok(message) => (message, Outcome::Succeeded),
            Err(message) => (message, Outcome::Failed),
        };
        self.message = message.to_string();
        self.last_outcome = Some(outcome);
        self.loading = false;
    }
}

/// A submission whose network call has not run yet.
///
/// Owns everything it needs so it can be spawned onto an executor.
#[derive(Debug)]
pub struct PendingSubmission {
    client: ProductClient,
    payload: ProductInput,
}

impl PendingSubmission {
    pub fn payload(&self) -> &ProductInput {
        &self.payload
    }

    pub async fn send(self) -> SubmitResult {
        submit(&self.client, &self.payload).await
    }
}

/// The status and client one submitter owns exclusively.
#[derive(Debug, Clone)]
pub struct SubmissionRunner {
    client: ProductClient,
    status: SubmissionStatus,
}

impl SubmissionRunner {
    pub fn new(client: ProductClient) -> Self {
        Self {
            client,
            status: SubmissionStatus::default(),
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Moves to `Submitting`. Returns `None` if a submission is already in flight.
    pub fn start(&mut self, payload: ProductInput) -> Option<PendingSubmission> {
        if self.status.loading {
            log::warn!("⚠️ [SUBMIT] Submit called while a submission is in flight - ignoring");
            return None;
        }

        self.status.begin();
        log::info!("📝 [SUBMIT] Creating product {:?} at {}", payload.name, self.client.endpoint());

        Some(PendingSubmission {
            client: self.client.clone(),
            payload,
        })
    }

    /// Records the outcome and returns to idle. Returns true on success.
    pub fn finish(&mut self, result: SubmitResult) -> bool {
        self.status.finish(result);
        result.is_ok()
    }
}
