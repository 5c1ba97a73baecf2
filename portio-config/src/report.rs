//! Boxed build error messages

/// Inner width of the box, in characters
const BOX_WIDTH: usize = 64;

/// Shorten a line to at most `max` characters, ending in "..." if cut
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate(line: &str, max: usize) -> String {
    if line.chars().count() <= max {
        return line.to_string();
    }
    let keep: String = line.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", keep)
}

/// Render a title and detail lines inside a box-drawing frame
pub fn error_box(title: &str, details: &[String]) -> String {
    let body = details
        .iter()
        .flat_map(|d| d.lines())
        .map(|line| format!("║  {:<64} ║", truncate(line, BOX_WIDTH)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        truncate(title, BOX_WIDTH - 6),
        body
    )
}
