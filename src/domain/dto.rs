//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// List of identifiers, in generation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdsResponse {
    /// Generated identifiers.
    pub ids: Vec<String>,
}

impl IdsResponse {
    /// Create a new identifier list response.
    #[must_use]
    pub const fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

/// Read-only view of the form state, plus the derived status values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Current prefix.
    pub prefix: String,
    /// Current digit width.
    pub digit_width: usize,
    /// Number the counter restarts from.
    pub start_number: i64,
    /// Number the next sequential identifier uses.
    pub current_number: i64,
    /// Number of identifiers a batch generates.
    pub batch_size: u32,
    /// Raw text of the specific-number field.
    pub specific_input: String,
    /// Identifier the next single generation will produce.
    pub next_id: String,
    /// Number of identifiers in the log.
    pub total_generated: usize,
}

/// A raw field value as typed by the user.
///
/// JSON clients may send either a string or a number; both are handled as text
/// so they go through the same parsing as browser input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(serde_json::Number),
}

impl RawField {
    /// The value as text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Configuration edits. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New prefix.
    pub prefix: Option<String>,
    /// New digit width (raw).
    pub digit_width: Option<String>,
    /// New start number (raw). Also moves the counter.
    pub start_number: Option<String>,
    /// New batch size (raw).
    pub batch_size: Option<String>,
}

impl ConfigUpdate {
    /// Drop the fields whose text matches what `snapshot` already shows.
    ///
    /// A browser posts every field on the page with each button, but only
    /// edited fields count as changes. Without this, resubmitting an unchanged
    /// start number would move the counter back.
    #[must_use]
    pub fn changed_from(self, snapshot: &FormSnapshot) -> Self {
        fn differs(value: Option<String>, current: &str) -> Option<String> {
            value.filter(|v| v.trim() != current)
        }

        Self {
            prefix: self.prefix.filter(|p| *p != snapshot.prefix),
            digit_width: differs(self.digit_width, &snapshot.digit_width.to_string()),
            start_number: differs(self.start_number, &snapshot.start_number.to_string()),
            batch_size: differs(self.batch_size, &snapshot.batch_size.to_string()),
        }
    }

    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prefix.is_none()
            && self.digit_width.is_none()
            && self.start_number.is_none()
            && self.batch_size.is_none()
    }
}

/// JSON body for configuration edits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigUpdateRequest {
    /// New prefix.
    #[serde(default)]
    pub prefix: Option<String>,
    /// New digit width.
    #[serde(default)]
    pub digit_width: Option<RawField>,
    /// New start number.
    #[serde(default)]
    pub start_number: Option<RawField>,
    /// New batch size.
    #[serde(default)]
    pub batch_size: Option<RawField>,
}

impl From<ConfigUpdateRequest> for ConfigUpdate {
    fn from(request: ConfigUpdateRequest) -> Self {
        Self {
            prefix: request.prefix,
            digit_width: request.digit_width.map(RawField::into_text),
            start_number: request.start_number.map(RawField::into_text),
            batch_size: request.batch_size.map(RawField::into_text),
        }
    }
}

/// JSON body for generating a specific identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecificRequest {
    /// Number to format, as typed.
    pub number: RawField,
}

/// Action submitted from the HTML generate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    /// Only apply the edited fields.
    Apply,
    /// Generate one sequential identifier.
    Single,
    /// Generate a batch of sequential identifiers.
    Batch,
    /// Generate the identifier for the specific-number field.
    Specific,
    /// Move the counter back to the start number.
    Reset,
    /// Empty the log.
    Clear,
}

/// HTML form body: every field on the page plus the pressed button.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionForm {
    /// Which button was pressed.
    pub action: FormAction,
    /// Content of the specific-number field.
    #[serde(default)]
    pub specific_number: String,
    /// Prefix field.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Digit width field (raw).
    #[serde(default)]
    pub digit_width: Option<String>,
    /// Start number field (raw).
    #[serde(default)]
    pub start_number: Option<String>,
    /// Batch size field (raw).
    #[serde(default)]
    pub batch_size: Option<String>,
}

impl ActionForm {
    /// The configuration fields of the submission.
    #[must_use]
    pub fn config_update(&self) -> ConfigUpdate {
        ConfigUpdate {
            prefix: self.prefix.clone(),
            digit_width: self.digit_width.clone(),
            start_number: self.start_number.clone(),
            batch_size: self.batch_size.clone(),
        }
    }
}
