use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Login with OAuth2-style form fields; `username` carries the email.
///
/// Unknown email and wrong password take deliberately similar paths: both
/// burn one Argon2 verification and both answer with the same rejection, so
/// neither the response nor its latency says which check failed.
pub async fn login<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Form(body): Form<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let email = match EmailAddress::new(body.username) {
        Ok(email) => email,
        Err(_) => {
            state.authenticator.dummy_verify(&body.password);
            return Err(ApiError::Unauthorized);
        }
    };

    let user = match state.user_service.get_user_by_email(&email).await {
        Ok(user) => user,
        Err(UserError::NotFound(_)) => {
            state.authenticator.dummy_verify(&body.password);
            return Err(ApiError::Unauthorized);
        }
        Err(e) => return Err(ApiError::from(e)),
    };

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, user.email.as_str())
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => ApiError::Unauthorized,
            auth::AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: result.access_token,
            token_type: result.token_type.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
