/// escaped, clipped to 33 chars and padded, for column-aligned trace output
pub fn formatter_str(c: &str) -> String {
    let s = quoted(&c[..floor_char_boundary(c, c.len().min(33))]);
    let s = &s[1..s.len() - 1];
    let s = &s[..floor_char_boundary(s, s.len().min(33))];
    format!("{:<35}", "|".to_string() + s + "|")
}

/// double-quoted with `escape_default`, but leaving inner quotes readable
pub(crate) fn quoted(s: &str) -> String {
    let s = s.escape_default().to_string();
    let s = s.replace("\\\'", "\'");
    format!("\"{s}\"")
}

/// the unparsed tail of `text` from `cursor`, or "" if the cursor is off the end
#[inline]
pub(crate) fn remaining(text: &str, cursor: usize) -> &str {
    text.get(cursor..).unwrap_or_default()
}

/// advance past ASCII spaces only (not tabs or newlines)
#[inline]
pub(crate) fn skip_spaces(text: &str, cursor: usize) -> usize {
    match text.as_bytes().get(cursor..) {
        Some(rest) => cursor + rest.iter().take_while(|&&b| b == b' ').count(),
        None => cursor,
    }
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
