use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_round_trip_and_default() {
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::default(), Theme::Light);
    assert!(Theme::from_str("sepia").is_err());
}
