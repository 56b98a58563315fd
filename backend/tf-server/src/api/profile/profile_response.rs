use crate::{Choice, IdentityDto, ProfileDto};

use serde::Serialize;

/// Profile page view model
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub identity: IdentityDto,
    pub profile: ProfileDto,
    pub theme_choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
