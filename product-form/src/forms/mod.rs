pub mod managed;
pub mod model;
pub mod native;


pub use managed::{product_form_model, ManagedSubmitter};
pub use model::{FieldId, FieldRule, FieldState, FieldValue, FormModel};
pub use native::{Constraint, ConstraintViolation, NativeForm, UncontrolledSubmitter};

use crate::submission::{PendingSubmission, SubmissionStatus, SubmitResult};

/// The three phases every form submitter goes through.
///
/// `begin_submit` and `complete_submit` are synchronous so a UI thread can
/// run them around a [`PendingSubmission`] spawned elsewhere.
pub trait Submitter {
    fn begin_submit(&mut self) -> Option<PendingSubmission>;
    fn complete_submit(&mut self, result: SubmitResult);
    fn status(&self) -> &SubmissionStatus;
}

impl Submitter for UncontrolledSubmitter {
    fn begin_submit(&mut self) -> Option<PendingSubmission> {
        UncontrolledSubmitter::begin_submit(self)
    }

    fn complete_submit(&mut self, result: SubmitResult) {
        UncontrolledSubmitter::complete_submit(self, result)
    }

    fn status(&self) -> &SubmissionStatus {
        UncontrolledSubmitter::status(self)
    }
}

impl Submitter for ManagedSubmitter {
    fn begin_submit(&mut self) -> Option<PendingSubmission> {
        ManagedSubmitter::begin_submit(self)
    }

    fn complete_submit(&mut self, result: SubmitResult) {
        ManagedSubmitter::complete_submit(self, result)
    }

    fn status(&self) -> &SubmissionStatus {
        ManagedSubmitter::status(self)
    }
}
