use serde::Deserialize;

use crate::error::ApiError;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)
    }
}
