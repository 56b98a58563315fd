use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project title (required)
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// One of the palette colors, defaults to blue
    #[serde(default)]
    pub color: Option<String>,
}
