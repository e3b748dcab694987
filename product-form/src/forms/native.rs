//! Uncontrolled form: values sit in the live form and are only read when the
//! form is submitted.

use std::fmt;

use crate::client::ProductClient;
use crate::error::ValidationError;
use crate::payload::{self, build_payload, ProductFields, NAME_MAX_LEN};
use crate::submission::{PendingSubmission, SubmissionRunner, SubmissionStatus, SubmitResult};

/// Which built-in input constraint a value breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    ValueMissing,
    TooLong,
    BadInput,
    RangeUnderflow,
    RangeOverflow,
    StepMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub constraint: Constraint,
}

impl ConstraintViolation {
    pub fn message(&self) -> String {
        match self.constraint {
            Constraint::ValueMissing => "Please fill out this field.".to_string(),
            Constraint::TooLong => {
                format!("Please shorten this text to {} characters or less.", NAME_MAX_LEN)
            }
            Constraint::BadInput => "Please enter a number.".to_string(),
            Constraint::RangeUnderflow => "Value must be greater than or equal to 0.".to_string(),
            Constraint::RangeOverflow => {
                format!("Value must be less than or equal to {}.", payload::QUANTITY_MAX)
            }
            Constraint::StepMismatch => "Please enter a valid value.".to_string(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

impl From<ValidationError> for ConstraintViolation {
    fn from(err: ValidationError) -> Self {
        let (field, constraint) = match err {
            ValidationError::Required { field } => (field, Constraint::ValueMissing),
            ValidationError::TooLong { field, .. } => (field, Constraint::TooLong),
            ValidationError::NotANumber { field, .. } => (field, Constraint::BadInput),
            ValidationError::Negative { field, .. } => (field, Constraint::RangeUnderflow),
            ValidationError::NotWholeNumber { field, .. } => (field, Constraint::StepMismatch),
            ValidationError::TooLarge { field, .. } => (field, Constraint::RangeOverflow),
        };
        Self { field, constraint }
    }
}

/// The live form: text inputs, checkboxes and the image picker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeForm {
    fields: ProductFields,
}

impl NativeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_mut(&mut self) -> &mut String {
        &mut self.fields.name
    }

    pub fn price_mut(&mut self) -> &mut String {
        &mut self.fields.price
    }

    pub fn quantity_mut(&mut self) -> &mut String {
        &mut self.fields.quantity
    }

    pub fn barcode_mut(&mut self) -> &mut String {
        &mut self.fields.barcode
    }

    pub fn category_mut(&mut self) -> &mut String {
        &mut self.fields.category
    }

    pub fn description_mut(&mut self) -> &mut String {
        &mut self.fields.description
    }

    pub fn tags_mut(&mut self) -> &mut String {
        &mut self.fields.tags
    }

    pub fn featured_mut(&mut self) -> &mut bool {
        &mut self.fields.featured
    }

    pub fn published_mut(&mut self) -> &mut bool {
        &mut self.fields.published
    }

    pub fn images(&self) -> &[String] {
        &self.fields.images
    }

    pub fn select_images(&mut self, files: Vec<String>) {
        self.fields.images = files;
    }

    /// Reads every field as it is right now.
    pub fn snapshot(&self) -> ProductFields {
        self.fields.clone()
    }

    /// Runs every input's constraints; all violations are reported, not just
    /// the first.
    pub fn check_validity(&self) -> Result<(), Vec<ConstraintViolation>> {
        let violations: Vec<ConstraintViolation> = [
            payload::validate_name(&self.fields.name).err(),
            payload::parse_price(&self.fields.price).err(),
            payload::parse_quantity(&self.fields.quantity).err(),
        ]
        .into_iter()
        .flatten()
        .map(ConstraintViolation::from)
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    pub fn reset(&mut self) {
        self.fields = ProductFields::default();
    }
}

/// Submitter that reads the live form at submit time.
#[derive(Debug, Clone)]
pub struct UncontrolledSubmitter {
    form: NativeForm,
    runner: SubmissionRunner,
    violations: Vec<ConstraintViolation>,
}

impl UncontrolledSubmitter {
    pub fn new(client: ProductClient) -> Self {
        Self {
            form: NativeForm::new(),
            runner: SubmissionRunner::new(client),
            violations: Vec::new(),
        }
    }

    pub fn form(&self) -> &NativeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut NativeForm {
        &mut self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.runner.status()
    }

    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    /// Submit event: checks constraints, builds the payload and starts the
    /// submission. `None` means nothing was sent.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if let Err(violations) = self.form.check_validity() {
            for violation in &violations {
                log::info!("🚫 [NATIVE] {}", violation);
            }
            self.violations = violations;
            return None;
        }
        self.violations.clear();

        match build_payload(&self.form.snapshot()) {
            Ok(payload) => self.runner.start(payload),
            Err(err) => {
                log::error!("❌ [NATIVE] Payload rejected after validity check: {}", err);
                self.violations.push(err.into());
                None
            }
        }
    }

    /// Applies the result; a success clears the form.
    pub fn complete_submit(&mut self, result: SubmitResult) {
        if self.runner.finish(result) {
            self.form.reset();
        }
    }

    /// Whole submission in one call. Returns the result when a request was sent.
    pub async fn submit(&mut self) -> Option<SubmitResult> {
        let pending = self.begin_submit()?;
        let result = pending.send().await;
        self.complete_submit(result);
        Some(result)
    }
}
