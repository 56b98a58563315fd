use crate::repositories::task_filter::SearchTerm;
use crate::{CompletionFilter, TaskSort, TaskSortKey};

#[test]
fn test_search_term_blank_is_none() {
    assert_eq!(SearchTerm::parse(None), None);
    assert_eq!(SearchTerm::parse(Some("   ")), None);
}

#[test]
fn test_search_term_folds_non_ascii_case() {
    let term = SearchTerm::parse(Some(" ÉCOLE ")).unwrap();

    assert!(term.matches("École reunion", None));
    assert!(term.matches("Notes", Some("pick up from école")));
    assert!(!term.matches("Ecole", None));
}

#[test]
fn test_search_term_treats_wildcards_literally() {
    let term = SearchTerm::parse(Some("50%_off")).unwrap();

    assert!(term.matches("Sale: 50%_off today", None));
    assert!(!term.matches("500 off", None));
}

#[test]
fn test_due_date_sort_keeps_undated_last_in_both_directions() {
    let asc = TaskSort {
        key: TaskSortKey::DueDate,
        descending: false,
    };
    let desc = TaskSort {
        key: TaskSortKey::DueDate,
        descending: true,
    };

    assert!(asc.order_by().starts_with("due_date IS NULL"));
    assert!(desc.order_by().starts_with("due_date IS NULL"));
}

#[test]
fn test_completion_filter_flags() {
    assert_eq!(CompletionFilter::Any.as_flag(), None);
    assert_eq!(CompletionFilter::Completed.as_flag(), Some(true));
    assert_eq!(CompletionFilter::Incomplete.as_flag(), Some(false));
}
