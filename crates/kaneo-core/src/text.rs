//! Display sanitization for task descriptions.

/// Shown when a description is empty or absent.
pub const NO_DESCRIPTION: &str = "No description";

/// Converts the API's lightweight HTML into plain text.
///
/// `<p ...>` is dropped, `</p>` and `<br>`/`<br/>`/`<br />` become line
/// breaks, and a run of such breaks collapses to a single newline. Any
/// other markup is left untouched.
pub fn clean_description(raw: Option<&str>) -> String {
    let raw = raw.unwrap_or("");
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut pending_break = false;

    while !rest.is_empty() {
        if let Some((len, tag)) = match_tag(rest) {
            if tag.is_break() {
                pending_break = true;
            }
            rest = &rest[len..];
            continue;
        }

        // Safe: `rest` is non-empty.
        let ch = rest.chars().next().unwrap_or_default();
        if pending_break {
            out.push('\n');
            pending_break = false;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    let trimmed = out.trim();
    if trimmed.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        trimmed.to_string()
    }
}

/// The tags `clean_description` rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Open,
    Close,
    Break,
}

impl Tag {
    fn is_break(self) -> bool {
        matches!(self, Tag::Close | Tag::Break)
    }
}

/// Returns the byte length and kind of a paragraph or break tag at the
/// start of `s`.
fn match_tag(s: &str) -> Option<(usize, Tag)> {
    if !s.starts_with('<') {
        return None;
    }
    let end = s.find('>')?;
    let inner = s[1..end].trim().to_ascii_lowercase();
    let name = inner
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("");
    let tag = match name {
        "p" => Tag::Open,
        "/p" => Tag::Close,
        "br" => Tag::Break,
        _ => return None,
    };
    Some((end + 1, tag))
}
