use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Color tag shown next to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectColor {
    #[default]
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Indigo,
    Violet,
    Black,
    White,
    Gray,
    Purple,
    Pink,
}

impl ProjectColor {
    pub const ALL: [ProjectColor; 12] = [
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Red,
        Self::Indigo,
        Self::Violet,
        Self::Black,
        Self::White,
        Self::Gray,
        Self::Purple,
        Self::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }
}

impl FromStr for ProjectColor {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let caller = Location::caller();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| CoreError::InvalidProjectColor {
                value: s.to_string(),
                location: ErrorLocation::from(caller),
            })
    }
}

impl std::fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
