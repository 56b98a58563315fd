use serde::Deserialize;

/// `action` is `add` (with `email`) or `remove` (with `member_id`)
#[derive(Debug, Deserialize)]
pub struct MemberActionRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
}
