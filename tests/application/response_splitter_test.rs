use studyhub::application::services::{ITEM_SEPARATOR, split_items};

#[test]
fn given_items_joined_with_blank_line_when_splitting_then_items_returned() {
    let items = vec![
        "Q: What is a cell?\nA: The basic unit of life.".to_string(),
        "Q: What is DNA?\nA: Genetic material.".to_string(),
        "single".to_string(),
    ];

    assert_eq!(split_items(&items.join(ITEM_SEPARATOR)), items);
}

#[test]
fn given_whitespace_only_separator_lines_when_splitting_then_treated_as_blank() {
    assert_eq!(split_items("one\n   \t\ntwo"), vec!["one", "two"]);
}

#[test]
fn given_padding_and_empty_items_when_splitting_then_trimmed_and_dropped() {
    assert_eq!(split_items("\n\n  first  \n\n\n\n\nsecond\n\n"), vec!["first", "second"]);
}

#[test]
fn given_blank_text_when_splitting_then_empty() {
    assert!(split_items(" \n\n ").is_empty());
}
