//! Product creation forms for the products REST API.
//!
//! Two submitters share one pipeline: [`forms::UncontrolledSubmitter`] reads
//! the live form at submit time, [`forms::ManagedSubmitter`] validates through
//! a declarative [`forms::FormModel`] first. Both build the same
//! [`payload::ProductInput`] and send it with [`client::ProductClient`].

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod payload;
pub mod submission;

pub use client::ProductClient;
pub use config::ClientConfig;
pub use error::{ConfigError, SubmitError, ValidationError};
pub use payload::{build_payload, ProductFields, ProductInput};
pub use submission::{SubmissionStatus, SubmitResult};

pub mod prelude {
    pub use super::client::ProductClient;
    pub use super::config::ClientConfig;
    pub use super::forms::{
        FieldId, FieldValue, ManagedSubmitter, NativeForm, Submitter, UncontrolledSubmitter,
    };
    pub use super::payload::{ProductFields, ProductInput};
    pub use super::submission::{
        Outcome, PendingSubmission, SubmissionStatus, SubmitResult, API_FAILURE_MESSAGE,
        SUCCESS_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
    };
}
