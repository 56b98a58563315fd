use crate::ProjectColor;

use std::str::FromStr;

#[test]
fn test_project_color_default_is_blue() {
    assert_eq!(ProjectColor::default(), ProjectColor::Blue);
}

#[test]
fn test_project_color_accepts_every_palette_entry() {
    for color in ProjectColor::ALL {
        assert_eq!(ProjectColor::from_str(color.as_str()).unwrap(), color);
    }
    assert_eq!(ProjectColor::ALL.len(), 12);
}

#[test]
fn test_project_color_rejects_unknown() {
    assert!(ProjectColor::from_str("teal").is_err());
}
