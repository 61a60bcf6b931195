use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::CurrentUser;

/// Return the profile the session resolver already fetched for this request.
pub async fn get_profile(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}

/// Profile as returned to its owner, password hash deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_address: String,
    pub user_country: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for ProfileResponseData {
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
