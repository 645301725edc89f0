//! Title and summary extraction from markdown sources.

use std::sync::OnceLock;

use regex::Regex;

pub const DEFAULT_DESCRIPTION_LENGTH: usize = 200;

fn heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#\s+(.+)").expect("valid heading regex"))
}

/// Text of the first level-one heading.
pub fn title(content: &str) -> Option<&str> {
    heading_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('\r'))
}

/// First paragraph after the first `# ` heading, joined onto one line and
/// cut to `max_len` characters.
///
/// Blank lines before the paragraph are skipped. The paragraph ends at the
/// next blank line or at any deeper heading.
pub fn description(content: &str, max_len: usize) -> String {
    let mut started = false;
    let mut lines: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if line.starts_with("# ") {
            started = true;
            continue;
        }
        if !started {
            continue;
        }
        if line.trim().is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        if line.starts_with('#') {
            break;
        }
        lines.push(line);
    }

    lines.join(" ").chars().take(max_len).collect()
}
