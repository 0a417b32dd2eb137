use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::response::FieldError;

pub const NAME_MIN_LEN: usize = 2;
pub const PHONE_MIN_LEN: usize = 9;

/// Raw inquiry form. Fields stay untyped JSON so that every problem, wrong
/// types included, can be reported at once instead of failing on the first bad
/// field.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    #[schema(value_type = String, format = Uuid)]
    pub car_id: Option<Value>,
    #[schema(value_type = String, format = Uuid)]
    pub dealer_id: Option<Value>,
    #[schema(value_type = String, min_length = 2)]
    pub name: Option<Value>,
    #[schema(value_type = String, min_length = 9)]
    pub phone: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub message: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub car_id: Uuid,
    pub dealer_id: Uuid,
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
}

impl CreateInquiryRequest {
    pub fn validate(self) -> Result<NewInquiry, Vec<FieldError>> {
        let mut errors = Vec::new();

        let car_id = required_uuid("carId", self.car_id, &mut errors);
        let dealer_id = required_uuid("dealerId", self.dealer_id, &mut errors);
        let name = min_len_text("name", self.name, NAME_MIN_LEN, "Name is required", &mut errors);
        let phone = min_len_text(
            "phone",
            self.phone,
            PHONE_MIN_LEN,
            "Valid phone number required",
            &mut errors,
        );
        let message = string_field("message", self.message, &mut errors)
            .flatten()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        match (car_id, dealer_id, name, phone) {
            (Some(car_id), Some(dealer_id), Some(name), Some(phone)) if errors.is_empty() => {
                Ok(NewInquiry {
                    car_id,
                    dealer_id,
                    name,
                    phone,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

/// `None` when `value` is present but not a string; the error is recorded.
/// JSON `null` counts as absent.
fn string_field(
    field: &str,
    value: Option<Value>,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(text)) => Some(Some(text)),
        Some(_) => {
            errors.push(FieldError::new(field, "Must be a string"));
            None
        }
    }
}

fn required_uuid(field: &str, value: Option<Value>, errors: &mut Vec<FieldError>) -> Option<Uuid> {
    let text = string_field(field, value, errors)?;
    match text.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        None => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(FieldError::new(field, "Must be a valid id"));
                None
            }
        },
    }
}

fn min_len_text(
    field: &str,
    value: Option<Value>,
    min: usize,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = string_field(field, value, errors)?
        .map(|v| v.trim().to_string())
        .unwrap_or_default();
    if value.chars().count() < min {
        errors.push(FieldError::new(
            field,
            format!("{message} (at least {min} characters)"),
        ));
        return None;
    }
    Some(value)
}
