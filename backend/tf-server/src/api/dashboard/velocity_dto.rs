use tf_core::analytics::Velocity;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VelocityDto {
    /// Completions per trailing week, most recent first
    pub windows: Vec<usize>,
    /// Rounded to one decimal
    pub average: f64,
}

impl From<&Velocity> for VelocityDto {
    fn from(v: &Velocity) -> Self {
        Self {
            windows: v.windows.clone(),
            average: v.rounded_average(),
        }
    }
}
