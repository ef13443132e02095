//! One-line summaries of entry bodies for dashboard cards.

/// Default summary length, in characters.
pub const DEFAULT_SUMMARY_LEN: usize = 120;

const ELLIPSIS: char = '\u{2026}';

/// First body paragraph of a markdown note, flattened to one line.
///
/// Skips front matter, fenced code, headings and rules. Blockquote markers
/// are stripped and callout titles (`> [!note]`) dropped. Output longer than
/// `max_len` characters is cut and ends with an ellipsis.
pub fn extract_summary(content: &str, max_len: usize) -> String {
    let body = strip_front_matter(content);

    let mut paragraph: Vec<&str> = Vec::new();
    let mut in_code_block = false;

    for line in body.lines() {
        if line.starts_with("```") || line.starts_with("~~~") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }

        let trimmed = line.trim();
        if trimmed.starts_with('#') || trimmed.is_empty() || trimmed == "---" {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }

        let cleaned = match trimmed.strip_prefix('>') {
            Some(quoted) => {
                let quoted = quoted.trim();
                if quoted.is_empty() || quoted.starts_with("[!") {
                    continue;
                }
                quoted
            }
            None => trimmed,
        };
        paragraph.push(cleaned);
    }

    truncate(&paragraph.join(" "), max_len)
}

fn strip_front_matter(content: &str) -> &str {
    if !content.starts_with("---") {
        return content;
    }
    match content[3..].find("---") {
        Some(end) => &content[3 + end + 3..],
        None => content,
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_len.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}
