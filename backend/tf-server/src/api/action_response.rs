use serde::Serialize;

/// Result of a mutation that has nothing else to return
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    /// Page the client should show next
    pub redirect_to: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>, redirect_to: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            redirect_to: redirect_to.into(),
        }
    }
}
