use crate::error;

use serde::{Deserialize, Serialize};

/// The persisted user entity, keyed by its generated `id`.
///
/// Field names serialize in camelCase to match the wire and store documents.
/// The `id` is assigned exactly once, at creation, and is never supplied by
/// the caller.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Primary key within the store collection.
    pub id: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The user's email address.
    pub email: String,
    /// The user's phone number.
    pub phone_number: String,
    /// The user's password.
    pub password: String,
}

impl UserRecord {
    /// Assemble a record from a generated id and a validated field set.
    pub fn new(id: String, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone_number: fields.phone_number,
            password: fields.password,
        }
    }
}

/// The validated five-field set carried by create and update requests.
///
/// Every field is present and non-empty; obtain one from a [`UserPayload`]
/// via `TryFrom`. Partial field sets are not representable.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The user's email address.
    pub email: String,
    /// The user's phone number.
    pub phone_number: String,
    /// The user's password.
    pub password: String,
}

/// The raw, unvalidated body of a create or update request.
///
/// Every field is optional so that absent and empty values are both
/// representable; both fail validation.
///
/// ```rust
/// use user_record_service::record;
///
/// let payload: record::UserPayload = serde_json::from_str(
///     r#"{"firstName":"A","lastName":"B","email":"a@b.com","phoneNumber":"123","password":"pw"}"#,
/// ).unwrap();
/// let fields: record::UserFields = payload.try_into().unwrap();
/// assert_eq!(fields.first_name, "A");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// The user's first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// The user's last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// The user's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The user's phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// The user's password.
    #[serde(default)]
    pub password: Option<String>,
}

fn require(field: Option<String>) -> Result<String, error::ValidationError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(error::ValidationError::MissingFields),
    }
}

impl TryFrom<UserPayload> for UserFields {
    type Error = error::ValidationError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        let fields = Self {
            first_name: require(payload.first_name)?,
            last_name: require(payload.last_name)?,
            email: require(payload.email)?,
            phone_number: require(payload.phone_number)?,
            password: require(payload.password)?,
        };
        Ok(fields)
    }
}
