use crate::IdentityDto;

use serde::Serialize;

/// Successful login; the token is also set as the session cookie
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: i64,
    pub remember_me: bool,
    pub redirect_to: String,
    pub identity: IdentityDto,
}
