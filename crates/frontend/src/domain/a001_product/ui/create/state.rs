//! State of the "Create Product" form, independent of the reactive runtime.
//!
//! Lifecycle of one submission: `begin_submit` (Idle -> Saving) followed by
//! exactly one `finish_submit` (Saving -> Idle) with the classified outcome.

use contracts::domain::a001_product::aggregate::{ApiErrorBody, ProductDto, ProductField};
use contracts::shared::http_status::{CREATED_STATUS, ERROR_SERVER_STATUS, INVALID_REQUEST_STATUS};
use thiserror::Error;

/// Per-field validation messages, empty string means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub size: String,
    pub product_type: String,
}

impl FieldErrors {
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Size => &self.size,
            ProductField::Type => &self.product_type,
        }
    }

    pub fn set(&mut self, field: ProductField, message: String) {
        match field {
            ProductField::Name => self.name = message,
            ProductField::Size => self.size = message,
            ProductField::Type => self.product_type = message,
        }
    }

    pub fn has_error(&self, field: ProductField) -> bool {
        !self.get(field).is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_saving: bool,
    pub is_successful: bool,
    pub error_message: String,
}

/// Successful (2xx) response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// 2xx other than CREATED; nothing changes on screen
    Accepted(u16),
}

/// Failed submission; `Display` is the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Unexpected error, please try again")]
    ServerError,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Connection error, please try later")]
    Connection,
}

/// Classify an HTTP response. `body` is only consulted for INVALID_REQUEST.
pub fn classify_response(
    status: u16,
    ok: bool,
    body: Option<&str>,
) -> Result<SubmitOutcome, SubmitError> {
    if ok {
        return Ok(if status == CREATED_STATUS {
            SubmitOutcome::Created
        } else {
            SubmitOutcome::Accepted(status)
        });
    }

    match status {
        ERROR_SERVER_STATUS => Err(SubmitError::ServerError),
        INVALID_REQUEST_STATUS => Err(body
            .and_then(|text| serde_json::from_str::<ApiErrorBody>(text).ok())
            .map(|data| SubmitError::InvalidRequest(data.message))
            .unwrap_or(SubmitError::ServerError)),
        _ => Err(SubmitError::Connection),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormState {
    /// Values currently entered in the inputs
    pub fields: ProductDto,
    pub errors: FieldErrors,
    pub submission: SubmissionState,
}

impl ProductFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: ProductField, value: String) {
        self.fields.set(field, value);
    }

    pub fn validate_field(&mut self, field: ProductField, value: &str) {
        let message = if value.is_empty() {
            field.required_message()
        } else {
            String::new()
        };
        self.errors.set(field, message);
    }

    /// Validates every field, one does not stop the others
    pub fn validate_form(&mut self, fields: &ProductDto) {
        for field in ProductField::all() {
            self.validate_field(field, fields.value(field));
        }
    }

    /// Idle -> Saving. Validation is advisory: the returned values are sent regardless.
    pub fn begin_submit(&mut self) -> ProductDto {
        self.submission.is_saving = true;
        let fields = self.fields.clone();
        self.validate_form(&fields);
        fields
    }

    /// Saving -> Idle. A CREATED response clears the entered values.
    pub fn finish_submit(&mut self, result: Result<SubmitOutcome, SubmitError>) {
        match result {
            Ok(SubmitOutcome::Created) => {
                self.fields = ProductDto::default();
                self.submission.is_successful = true;
                self.submission.error_message.clear();
            }
            Ok(SubmitOutcome::Accepted(_)) => {}
            Err(e) => {
                self.submission.error_message = e.to_string();
            }
        }
        self.submission.is_saving = false;
    }

    pub fn is_saving(&self) -> bool {
        self.submission.is_saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductFormState {
        let mut state = ProductFormState::new();
        state.set_field(ProductField::Name, "my product".into());
        state.set_field(ProductField::Size, "10".into());
        state.set_field(ProductField::Type, "Electronic".into());
        state
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = ProductFormState::new();
        assert!(!state.is_saving());
        assert!(!state.submission.is_successful);
        assert_eq!(state.submission.error_message, "");
        assert_eq!(state.fields, ProductDto::default());
        for field in ProductField::all() {
            assert!(!state.errors.has_error(field));
        }
    }

    #[test]
    fn test_submit_empty_form_sets_required_messages() {
        let mut state = ProductFormState::new();
        let sent = state.begin_submit();

        assert_eq!(state.errors.get(ProductField::Name), "The name is required");
        assert_eq!(state.errors.get(ProductField::Size), "The size is required");
        assert_eq!(state.errors.get(ProductField::Type), "The type is required");
        // validation does not block the request
        assert!(state.is_saving());
        assert_eq!(sent, ProductDto::default());
    }

    #[test]
    fn test_submit_sends_entered_values() {
        let mut state = filled();
        let sent = state.begin_submit();

        assert_eq!(sent.name, "my product");
        assert_eq!(sent.size, "10");
        assert_eq!(sent.product_type, "Electronic");
        for field in ProductField::all() {
            assert!(!state.errors.has_error(field));
        }
    }

    #[test]
    fn test_blur_touches_only_its_field() {
        let mut state = ProductFormState::new();
        state.validate_field(ProductField::Name, "");

        assert_eq!(state.errors.get(ProductField::Name), "The name is required");
        assert_eq!(state.errors.get(ProductField::Size), "");
        assert_eq!(state.errors.get(ProductField::Type), "");

        state.validate_field(ProductField::Size, "");
        state.validate_field(ProductField::Name, "chair");
        assert_eq!(state.errors.get(ProductField::Name), "");
        assert_eq!(state.errors.get(ProductField::Size), "The size is required");
    }

    #[test]
    fn test_set_field_does_not_validate() {
        let mut state = ProductFormState::new();
        state.set_field(ProductField::Size, String::new());

        assert_eq!(state.fields.size, "");
        assert!(!state.errors.has_error(ProductField::Size));
    }

    #[test]
    fn test_created_resets_fields_and_shows_success() {
        let mut state = filled();
        state.submission.error_message = "Connection error, please try later".into();

        state.begin_submit();
        assert!(state.is_saving());

        state.finish_submit(Ok(SubmitOutcome::Created));
        assert_eq!(state.fields, ProductDto::default());
        assert!(state.submission.is_successful);
        assert_eq!(state.submission.error_message, "");
        assert!(!state.is_saving());
    }

    #[test]
    fn test_accepted_without_created_changes_nothing() {
        let mut state = filled();
        state.begin_submit();

        state.finish_submit(Ok(SubmitOutcome::Accepted(200)));
        assert_eq!(state.fields.name, "my product");
        assert!(!state.submission.is_successful);
        assert!(!state.is_saving());
    }

    #[test]
    fn test_error_messages() {
        let cases = [
            (SubmitError::ServerError, "Unexpected error, please try again"),
            (
                SubmitError::InvalidRequest(
                    "The form is invalid, the fields name, size, type are required".into(),
                ),
                "The form is invalid, the fields name, size, type are required",
            ),
            (SubmitError::Connection, "Connection error, please try later"),
        ];

        for (error, expected) in cases {
            let mut state = filled();
            state.begin_submit();
            state.finish_submit(Err(error));
            assert_eq!(state.submission.error_message, expected);
            assert!(!state.is_saving());
            // entered values survive a failed attempt
            assert_eq!(state.fields.size, "10");
        }
    }

    #[test]
    fn test_failure_keeps_previous_success_flag() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(Ok(SubmitOutcome::Created));

        state.begin_submit();
        state.finish_submit(Err(SubmitError::ServerError));
        assert!(state.submission.is_successful);
        assert_eq!(
            state.submission.error_message,
            "Unexpected error, please try again"
        );
    }

    #[test]
    fn test_invalid_request_body_reaches_error_message() {
        let body = r#"{"message":"The form is invalid, the fields name, size, type are required"}"#;
        let mut state = ProductFormState::new();
        state.begin_submit();
        state.finish_submit(classify_response(400, false, Some(body)));

        assert_eq!(
            state.submission.error_message,
            "The form is invalid, the fields name, size, type are required"
        );
        assert!(!state.submission.is_successful);
    }

    #[test]
    fn test_classify_success() {
        assert_eq!(classify_response(201, true, None), Ok(SubmitOutcome::Created));
        assert_eq!(
            classify_response(200, true, None),
            Ok(SubmitOutcome::Accepted(200))
        );
    }

    #[test]
    fn test_classify_server_error() {
        assert_eq!(
            classify_response(500, false, None),
            Err(SubmitError::ServerError)
        );
    }

    #[test]
    fn test_classify_invalid_request_uses_body_message() {
        let body = r#"{"message":"The form is invalid, the fields name, size, type are required"}"#;
        assert_eq!(
            classify_response(400, false, Some(body)),
            Err(SubmitError::InvalidRequest(
                "The form is invalid, the fields name, size, type are required".into()
            ))
        );
    }

    #[test]
    fn test_classify_invalid_request_with_bad_body() {
        assert_eq!(
            classify_response(400, false, Some("<html>")),
            Err(SubmitError::ServerError)
        );
        assert_eq!(
            classify_response(400, false, None),
            Err(SubmitError::ServerError)
        );
    }

    #[test]
    fn test_classify_other_statuses_as_connection_error() {
        assert_eq!(
            classify_response(404, false, None),
            Err(SubmitError::Connection)
        );
        assert_eq!(
            classify_response(502, false, None),
            Err(SubmitError::Connection)
        );
    }
}
