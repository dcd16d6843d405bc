use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;

/// Header set by the upstream authentication proxy once the session token
/// has been verified. This service trusts it as the resolved identity.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Clone, Copy, Debug)]
pub struct CurrentUser {
    pub user_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i64>().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "No authenticated user for this request"))?;

        Ok(CurrentUser { user_id })
    }
}
