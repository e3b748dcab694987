//! Managed form: values flow through a [`FormModel`] and are validated by
//! declarative rules before the submit handler runs.

use super::model::{FieldId, FieldRule, FieldValue, FormModel};
use crate::client::ProductClient;
use crate::error::ValidationError;
use crate::payload::{build_payload, ProductFields, NAME_MAX_LEN, QUANTITY_MAX};
use crate::submission::{PendingSubmission, SubmissionRunner, SubmissionStatus, SubmitResult};

pub const NAME_REQUIRED: &str = "Product name is required";
pub const NAME_TOO_LONG: &str = "Product name must be at most 500 characters";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
pub const PRICE_NEGATIVE: &str = "Price must be 0 or greater";
pub const QUANTITY_REQUIRED: &str = "Quantity is required";
pub const QUANTITY_NOT_A_NUMBER: &str = "Quantity must be a number";
pub const QUANTITY_NOT_WHOLE: &str = "Quantity must be a whole number";
pub const QUANTITY_NEGATIVE: &str = "Quantity must be 0 or greater";
pub const QUANTITY_TOO_LARGE: &str = "Quantity is too large";

/// Registers every product field. Only name, price and quantity carry rules.
pub fn product_form_model() -> FormModel {
    let text = || FieldValue::Text(String::new());

    FormModel::new()
        .register(
            FieldId::Name,
            text(),
            vec![
                FieldRule::required(NAME_REQUIRED),
                FieldRule::min_length(1, NAME_REQUIRED),
                FieldRule::max_length(NAME_MAX_LEN, NAME_TOO_LONG),
            ],
        )
        .register(
            FieldId::Price,
            text(),
            vec![
                FieldRule::required(PRICE_REQUIRED),
                FieldRule::numeric(PRICE_NOT_A_NUMBER),
                FieldRule::min(0.0, PRICE_NEGATIVE),
            ],
        )
        .register(FieldId::Barcode, text(), Vec::new())
        .register(FieldId::Category, text(), Vec::new())
        .register(FieldId::Description, text(), Vec::new())
        .register(FieldId::Featured, FieldValue::Checked(false), Vec::new())
        .register(FieldId::Images, FieldValue::Files(Vec::new()), Vec::new())
        .register(
            FieldId::Quantity,
            text(),
            vec![
                FieldRule::required(QUANTITY_REQUIRED),
                FieldRule::numeric(QUANTITY_NOT_A_NUMBER),
                FieldRule::min(0.0, QUANTITY_NEGATIVE),
                FieldRule::whole_number(QUANTITY_NOT_WHOLE),
                FieldRule::max(f64::from(QUANTITY_MAX), QUANTITY_TOO_LARGE),
            ],
        )
        .register(FieldId::Tags, text(), Vec::new())
        .register(FieldId::Published, FieldValue::Checked(true), Vec::new())
}

/// Collects the model's current values into the shared field snapshot.
pub fn fields_from_model(model: &FormModel) -> ProductFields {
    ProductFields {
        name: model.text(FieldId::Name).to_string(),
        price: model.text(FieldId::Price).to_string(),
        quantity: model.text(FieldId::Quantity).to_string(),
        barcode: model.text(FieldId::Barcode).to_string(),
        category: model.text(FieldId::Category).to_string(),
        description: model.text(FieldId::Description).to_string(),
        tags: model.text(FieldId::Tags).to_string(),
        featured: model.checked(FieldId::Featured),
        published: model.checked(FieldId::Published),
        images: model.files(FieldId::Images).to_vec(),
    }
}

/// The field a payload error belongs to and the registered message shown for it.
pub(super) fn inline_error(err: &ValidationError) -> (FieldId, &'static str) {
    match err {
        ValidationError::Required { field: "price" } => (FieldId::Price, PRICE_REQUIRED),
        ValidationError::Required { field: "quantity" } => (FieldId::Quantity, QUANTITY_REQUIRED),
        ValidationError::Required { .. } => (FieldId::Name, NAME_REQUIRED),
        ValidationError::TooLong { .. } => (FieldId::Name, NAME_TOO_LONG),
        ValidationError::NotANumber { field: "price", .. } => (FieldId::Price, PRICE_NOT_A_NUMBER),
        ValidationError::NotANumber { .. } => (FieldId::Quantity, QUANTITY_NOT_A_NUMBER),
        ValidationError::Negative { field: "price", .. } => (FieldId::Price, PRICE_NEGATIVE),
        ValidationError::Negative { .. } => (FieldId::Quantity, QUANTITY_NEGATIVE),
        ValidationError::NotWholeNumber { .. } => (FieldId::Quantity, QUANTITY_NOT_WHOLE),
        ValidationError::TooLarge { .. } => (FieldId::Quantity, QUANTITY_TOO_LARGE),
    }
}

/// Submitter backed by the declarative form model.
#[derive(Debug, Clone)]
pub struct ManagedSubmitter {
    model: FormModel,
    runner: SubmissionRunner,
}

impl ManagedSubmitter {
    pub fn new(client: ProductClient) -> Self {
        Self {
            model: product_form_model(),
            runner: SubmissionRunner::new(client),
        }
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.runner.status()
    }

    /// Input-change event for one field.
    pub fn change(&mut self, id: FieldId, value: FieldValue) {
        self.model.set_value(id, value);
    }

    /// Submit event: validates, and only on success builds and starts the
    /// submission. On failure the per-field errors are left on the model.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if !self.model.validate() {
            for (id, error) in self.model.errors() {
                log::info!("🚫 [MANAGED] {}: {}", id.as_str(), error);
            }
            return None;
        }

        match build_payload(&fields_from_model(&self.model)) {
            Ok(payload) => self.runner.start(payload),
            Err(err) => {
                log::error!("❌ [MANAGED] Payload rejected after validation: {}", err);
                let (id, message) = inline_error(&err);
                self.model.set_error(id, message.to_string());
                None
            }
        }
    }

    /// Applies the result; a success resets the model to its defaults.
    pub fn complete_submit(&mut self, result: SubmitResult) {
        if self.runner.finish(result) {
            self.model.reset();
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
