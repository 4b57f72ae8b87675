/// Splits text into consecutive groups of at most `max_lines` lines.
///
/// Order is preserved and no line is dropped: joining the chunks with `\n`
/// gives back the original line sequence. Empty input yields no chunks.
///
/// # Panics
///
/// Panics if `max_lines` is zero. `GenerationConfig::validate` rejects such
/// profiles at startup.
pub fn chunk_lines(text: &str, max_lines: usize) -> Vec<String> {
    assert!(max_lines > 0, "max_lines must be at least 1");

    let lines: Vec<&str> = text.lines().collect();

    lines
        .chunks(max_lines)
        .map(|group| group.join("\n"))
        .collect()
}
