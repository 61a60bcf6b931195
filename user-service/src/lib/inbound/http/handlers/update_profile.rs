use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_profile::ProfileResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial profile update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_name: Option<String>,
    pub user_address: Option<String>,
    pub user_country: Option<String>,
    pub phone_number: Option<String>,
    pub user_password: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileCommand {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.user_name,
            address: req.user_address,
            country: req.user_country,
            phone_number: req.phone_number,
            password: req.user_password,
        }
    }
}

/// Apply a partial update to the authenticated user's own profile.
///
/// The 404 case remains reachable: the row can vanish between the session
/// resolver's lookup and the update statement.
pub async fn update_profile<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    state
        .user_service
        .update_profile(&user.email, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref updated| ApiSuccess::new(StatusCode::OK, updated.into()))
}
