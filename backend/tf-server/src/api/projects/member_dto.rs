use tf_db::MemberProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub profile_id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub joined_at: i64,
}

impl From<MemberProfile> for MemberDto {
    fn from(m: MemberProfile) -> Self {
        Self {
            profile_id: m.profile_id.to_string(),
            username: m.username,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            joined_at: m.joined_at.timestamp(),
        }
    }
}
