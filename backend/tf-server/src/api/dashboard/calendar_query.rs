use serde::Deserialize;

/// Month to show; the current month when absent. Kept as text so bad values
/// produce a field error instead of a bare rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
}
