//! Declarative form model: each registered field binds an identity, its
//! rules, its current value and its current error.

use std::collections::BTreeMap;

/// Fields of the product form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Price,
    Barcode,
    Category,
    Description,
    Featured,
    Images,
    Quantity,
    Tags,
    Published,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Price => "price",
            FieldId::Barcode => "barcode",
            FieldId::Category => "category",
            FieldId::Description => "description",
            FieldId::Featured => "featured",
            FieldId::Images => "images",
            FieldId::Quantity => "quantity",
            FieldId::Tags => "tags",
            FieldId::Published => "published",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    Files(Vec<String>),
}

impl FieldValue {
    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
            FieldValue::Files(files) => files.is_empty(),
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.trim()),
            _ => None,
        }
    }
}

/// A validation rule and the message shown when it fails.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    Required { message: String },
    MinLength { len: usize, message: String },
    MaxLength { len: usize, message: String },
    Numeric { message: String },
    WholeNumber { message: String },
    Min { value: f64, message: String },
    Max { value: f64, message: String },
}

impl FieldRule {
    pub fn required(message: &str) -> Self {
        FieldRule::Required {
            message: message.to_string(),
        }
    }

    pub fn min_length(len: usize, message: &str) -> Self {
        FieldRule::MinLength {
            len,
            message: message.to_string(),
        }
    }

    pub fn max_length(len: usize, message: &str) -> Self {
        FieldRule::MaxLength {
            len,
            message: message.to_string(),
        }
    }

    pub fn numeric(message: &str) -> Self {
        FieldRule::Numeric {
            message: message.to_string(),
        }
    }

    pub fn whole_number(message: &str) -> Self {
        FieldRule::WholeNumber {
            message: message.to_string(),
        }
    }

    pub fn min(value: f64, message: &str) -> Self {
        FieldRule::Min {
            value,
            message: message.to_string(),
        }
    }

    pub fn max(value: f64, message: &str) -> Self {
        FieldRule::Max {
            value,
            message: message.to_string(),
        }
    }

    /// Checks `value`. Length and numeric rules skip empty values; only
    /// `Required` rejects emptiness.
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        let passes = match self {
            FieldRule::Required { .. } => !value.is_empty(),
            _ if value.is_empty() => true,
            FieldRule::MinLength { len, .. } => {
                value.text().map_or(true, |text| text.chars().count() >= *len)
            }
            FieldRule::MaxLength { len, .. } => {
                value.text().map_or(true, |text| text.chars().count() <= *len)
            }
            FieldRule::Numeric { .. } => value.text().map_or(true, |text| number(text).is_some()),
            FieldRule::WholeNumber { .. } => value
                .text()
                .and_then(number)
                .map_or(true, |n| n.fract() == 0.0),
            FieldRule::Min { value: min, .. } => {
                value.text().and_then(number).map_or(true, |n| n >= *min)
            }
            FieldRule::Max { value: max, .. } => {
                value.text().and_then(number).map_or(true, |n| n <= *max)
            }
        };

        if passes {
            Ok(())
        } else {
            Err(self.message().to_string())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FieldRule::Required { message }
            | FieldRule::MinLength { message, .. }
            | FieldRule::MaxLength { message, .. }
            | FieldRule::Numeric { message }
            | FieldRule::WholeNumber { message }
            | FieldRule::Min { message, .. }
            | FieldRule::Max { message, .. } => message,
        }
    }
}

fn number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub value: FieldValue,
    pub default: FieldValue,
    pub rules: Vec<FieldRule>,
    pub error: Option<String>,
}

impl FieldState {
    fn validate(&mut self) -> bool {
        self.error = self
            .rules
            .iter()
            .find_map(|rule| rule.check(&self.value).err());
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    fields: BTreeMap<FieldId, FieldState>,
    submitted: bool,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` with a default value and its rules. Re-registering
    /// replaces the previous binding.
    pub fn register(mut self, id: FieldId, default: FieldValue, rules: Vec<FieldRule>) -> Self {
        self.fields.insert(
            id,
            FieldState {
                value: default.clone(),
                default,
                rules,
                error: None,
            },
        );
        self
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.fields.get(&id)
    }

    /// Change event. After the first submit attempt the field is re-validated
    /// immediately.
    pub fn set_value(&mut self, id: FieldId, value: FieldValue) {
        let submitted = self.submitted;
        match self.fields.get_mut(&id) {
            Some(field) => {
                field.value = value;
                if submitted {
                    field.validate();
                }
            }
            None => log::warn!("⚠️ [FORM] Change event for unregistered field {}", id.as_str()),
        }
    }

    pub fn text(&self, id: FieldId) -> &str {
        match self.fields.get(&id).map(|f| &f.value) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn checked(&self, id: FieldId) -> bool {
        matches!(self.fields.get(&id).map(|f| &f.value), Some(FieldValue::Checked(true)))
    }

    pub fn files(&self, id: FieldId) -> &[String] {
        match self.fields.get(&id).map(|f| &f.value) {
            Some(FieldValue::Files(files)) => files,
            _ => &[],
        }
    }

    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).and_then(|f| f.error.as_deref())
    }

    pub fn set_error(&mut self, id: FieldId, message: String) {
        if let Some(field) = self.fields.get_mut(&id) {
            field.error = Some(message);
        }
    }

    /// Fields currently in error, in display order.
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.fields
            .iter()
            .filter_map(|(id, field)| field.error.as_deref().map(|e| (*id, e)))
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Submit-time validation of every field. Returns true when all pass.
    pub fn validate(&mut self) -> bool {
        self.submitted = true;
        let mut valid = true;
        for field in self.fields.values_mut() {
            valid &= field.validate();
        }
        valid
    }

    /// Back to defaults with no errors, as if never submitted.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.value = field.default.clone();
            field.error = None;
        }
        self.submitted = false;
    }
}
