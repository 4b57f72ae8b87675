use studyhub::application::services::{NoUsableText, clean_text, normalize_text};

#[test]
fn given_hyphenated_break_and_blank_run_when_normalizing_then_word_rejoined_and_run_collapsed() {
    assert_eq!(normalize_text("A-\nB\n\n\n\nC").unwrap(), "AB\n\nC");
}

#[test]
fn given_decorative_lines_when_normalizing_then_they_are_removed() {
    let raw = "Heading\n-----\n*** ***\nBody text\n______";

    assert_eq!(normalize_text(raw).unwrap(), "Heading\nBody text");
}

#[test]
fn given_short_punctuation_line_when_normalizing_then_it_is_kept() {
    assert_eq!(normalize_text("Intro\n--\nEnd").unwrap(), "Intro\n--\nEnd");
}

#[test]
fn given_repeated_character_line_when_normalizing_then_it_is_removed() {
    let raw = "Chapter 1\naaaaaa\naaaaa\nDone";

    assert_eq!(normalize_text(raw).unwrap(), "Chapter 1\naaaaa\nDone");
}

#[test]
fn given_crlf_line_endings_when_normalizing_then_hyphenation_still_rejoined() {
    assert_eq!(normalize_text("inter-\r\nnational").unwrap(), "international");
}

#[test]
fn given_compatibility_characters_when_normalizing_then_nfkc_applied() {
    assert_eq!(normalize_text("ﬁnal ＡＢＣ").unwrap(), "final ABC");
}

#[test]
fn given_only_noise_when_normalizing_then_no_usable_text() {
    assert_eq!(normalize_text("-----\n=====\n\n\n"), Err(NoUsableText));
}

#[test]
fn given_whitespace_only_when_normalizing_then_no_usable_text() {
    assert_eq!(normalize_text("  \n\t\n"), Err(NoUsableText));
}

#[test]
fn given_varied_inputs_when_cleaning_twice_then_second_pass_is_noop() {
    let inputs = [
        "A-\nB\n\n\n\nC",
        "a-\nb-\nc",
        "x-\n-----\ny",
        "ab-\ncdef\n\n\n\n\nxyz\n!!!\nzzzzzzzz",
        "first\r\n\r\n\r\n\r\nsecond",
        "",
        "\n\n\n",
    ];

    for input in inputs {
        let once = clean_text(input);
        assert_eq!(clean_text(&once), once, "input: {input:?}");
    }
}

#[test]
fn given_hyphen_chain_when_cleaning_then_all_breaks_rejoined() {
    assert_eq!(clean_text("a-\nb-\nc"), "abc");
}
