use serde::Deserialize;

/// `?next=` carried by the login and signup pages
#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}
