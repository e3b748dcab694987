//! Payload builder: raw form values in, `ProductInput` out.
//!
//! Both submitters funnel through [`build_payload`], so trimming, empty-to-null
//! and numeric coercion rules live in exactly one place.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

pub const NAME_MAX_LEN: usize = 500;

/// Raw field values as the user typed them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub barcode: String,
    pub category: String,
    pub description: String,
    pub tags: String,
    pub featured: bool,
    pub published: bool,
    /// Locally selected image files. Shown in the UI, never sent.
    pub images: Vec<String>,
}

impl Default for ProductFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            quantity: String::new(),
            barcode: String::new(),
            category: String::new(),
            description: String::new(),
            tags: String::new(),
            featured: false,
            published: true,
            images: Vec::new(),
        }
    }
}

/// Request body for `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub quantity: u32,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub images: String,
    pub featured: bool,
    pub published: bool,
    pub is_default: Option<bool>,
    pub owner: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Identity and creation time of one payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadStamp {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl PayloadStamp {
    pub fn fresh() -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

/// Builds a payload with a fresh id and timestamp.
pub fn build_payload(fields: &ProductFields) -> Result<ProductInput, ValidationError> {
    build_payload_with(fields, PayloadStamp::fresh())
}

pub fn build_payload_with(
    fields: &ProductFields,
    stamp: PayloadStamp,
) -> Result<ProductInput, ValidationError> {
    let name = validate_name(&fields.name)?;
    let price = parse_price(&fields.price)?;
    let quantity = parse_quantity(&fields.quantity)?;
    let timestamp = stamp.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);

    Ok(ProductInput {
        id: stamp.id,
        name,
        description: trimmed_or_null(&fields.description),
        price,
        compare_at_price: None,
        sku: None,
        barcode: trimmed_or_null(&fields.barcode),
        quantity,
        category: trimmed_or_null(&fields.category),
        tags: trimmed_or_null(&fields.tags),
        images: String::new(),
        featured: fields.featured,
        published: fields.published,
        is_default: None,
        owner: None,
        created_at: timestamp.clone(),
        updated_at: timestamp,
    })
}

/// Trims `raw`; whitespace-only becomes `None`.
pub fn trimmed_or_null(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: NAME_MAX_LEN,
            len,
        });
    }
    Ok(name.to_string())
}

/// Parses a required, finite, non-negative number.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Required { field });
    }
    let value: f64 = text.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: text.to_string(),
    })?;
    // "inf" and "NaN" parse as f64 but are not numbers a form accepts
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            value: text.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    parse_number("price", raw)
}

/// Largest quantity the wire format carries.
pub const QUANTITY_MAX: u32 = u32::MAX;

pub fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    let value = parse_number("quantity", raw)?;
    if value.fract() != 0.0 {
        return Err(ValidationError::NotWholeNumber {
            field: "quantity",
            value,
        });
    }
    if value > f64::from(QUANTITY_MAX) {
        return Err(ValidationError::TooLarge {
            field: "quantity",
            max: f64::from(QUANTITY_MAX),
            value,
        });
    }
    Ok(value as u32)
}
