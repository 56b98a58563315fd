use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UsernameAvailabilityResponse {
    pub available: bool,
}
