//! String helpers exposed to templates.

const ELLIPSIS: &str = "...";

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut end = index.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Shortens `s` to at most `max_len` bytes, ending in `...` when there is room for it.
///
/// Lengths count bytes, not display width. A cut that would split a
/// multi-byte character backs off to the previous character boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return s[..floor_char_boundary(s, max_len)].to_string();
    }
    let keep = floor_char_boundary(s, max_len - ELLIPSIS.len());
    format!("{}{}", &s[..keep], ELLIPSIS)
}

/// Upper-cases the first letter of every word.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_' || c == '\'');
    }
    out
}

/// Splits on `sep`; an empty separator splits into characters.
pub fn split(s: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        return s.chars().map(String::from).collect();
    }
    s.split(sep).map(String::from).collect()
}

pub fn join<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Replaces every occurrence; an empty `from` matches between characters.
pub fn replace(s: &str, from: &str, to: &str) -> String {
    s.replace(from, to)
}

/// `"pass"` when `ok`, otherwise `fallback` or `"fail"`.
pub fn bool_state(ok: bool, fallback: Option<&str>) -> String {
    if ok {
        return "pass".to_string();
    }
    fallback.unwrap_or("fail").to_string()
}

pub fn bool_yes_no(ok: bool) -> &'static str {
    if ok {
        "Yes"
    } else {
        "No"
    }
}
