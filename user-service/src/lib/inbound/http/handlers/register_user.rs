use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn register_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    user_name: String,
    user_email: String,
    user_password: String,
    user_address: String,
    user_country: String,
    phone_number: String,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, EmailError> {
        let email = EmailAddress::new(self.user_email)?;
        Ok(RegisterUserCommand {
            name: self.user_name,
            email,
            password: self.user_password,
            address: self.user_address,
            country: self.user_country,
            phone_number: self.phone_number,
        })
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Created record, password hash deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_address: String,
    pub user_country: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RegisterUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            user_name: user.name.clone(),
            user_email: user.email.as_str().to_string(),
            user_address: user.address.clone(),
            user_country: user.country.clone(),
            phone_number: user.phone_number.clone(),
            created_at: user.created_at,
        }
    }
}
