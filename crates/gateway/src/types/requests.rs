//! Request payloads shared by the HTTP handlers and the CLI.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use common::{AppError, AppResult};
use domain::{NewUser, UserPatch, MAX_NAME_LENGTH, MIN_NAME_LENGTH};

/// Order in which validation messages are reported
const FIELD_ORDER: [&str; 4] = ["name", "email", "bio", "avatar_url"];

/// Add-member request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(contains(pattern = "@", message = "Email must be valid"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(max = 500, message = "Bio must be less than 500 characters"))]
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl CreateUserRequest {
    /// Convert into the repository draft. Blank optional fields are dropped.
    pub fn into_draft(self) -> NewUser {
        NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            bio: non_blank(self.bio),
            avatar_url: non_blank(self.avatar_url),
        }
    }
}

/// Edit-member request; only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[validate(contains(pattern = "@", message = "Email must be valid"))]
    pub email: Option<String>,
    #[validate(length(max = 500, message = "Bio must be less than 500 characters"))]
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name.map(|n| n.trim().to_string()),
            email: self.email.map(|e| e.trim().to_string()),
            bio: self.bio,
            avatar_url: self.avatar_url,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count() as u64;
    if length < MIN_NAME_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Name must be at least 2 characters")));
    }
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Name must be less than 50 characters")));
    }
    Ok(())
}

/// Validate a request, collecting every message in field order.
pub fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request.validate().map_err(validation_error)
}

/// Flatten validator output into an `AppError::Validation`.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| {
        let field: &str = field.as_ref();
        FIELD_ORDER
            .iter()
            .position(|known| *known == field)
            .unwrap_or(FIELD_ORDER.len())
    });

    let messages = fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string())
        })
        .collect();

    AppError::Validation(messages)
}
