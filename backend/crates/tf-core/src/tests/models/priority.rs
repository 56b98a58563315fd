use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_as_str() {
    assert_eq!(Priority::Low.as_str(), "low");
    assert_eq!(Priority::Medium.as_str(), "medium");
    assert_eq!(Priority::High.as_str(), "high");
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("high").unwrap(), Priority::High);
    assert_eq!(Priority::from_str("low").unwrap(), Priority::Low);
    assert!(Priority::from_str("urgent").is_err());
    assert!(Priority::from_str("HIGH").is_err());
}

#[test]
fn test_priority_default() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_rank_orders_low_to_high() {
    assert!(Priority::Low.rank() < Priority::Medium.rank());
    assert!(Priority::Medium.rank() < Priority::High.rank());
}
