use tf_core::{Priority, ProjectColor, Theme};

use serde::Serialize;

/// One option of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: String,
}

impl Choice {
    pub fn priorities() -> Vec<Self> {
        Priority::ALL
            .iter()
            .map(|p| Self {
                value: p.as_str(),
                label: p.label().to_string(),
            })
            .collect()
    }

    pub fn colors() -> Vec<Self> {
        ProjectColor::ALL.iter().map(|c| Self::titled(c.as_str())).collect()
    }

    pub fn themes() -> Vec<Self> {
        Theme::ALL.iter().map(|t| Self::titled(t.as_str())).collect()
    }

    fn titled(value: &'static str) -> Self {
        let mut chars = value.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self { value, label }
    }
}
