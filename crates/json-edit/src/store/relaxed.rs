//! Comment stripping for hand-edited JSON files.

use std::borrow::Cow;

/// Remove `//`, `#` and `/* */` comments that sit outside string literals.
///
/// Comment text is replaced by spaces and newlines are kept, so line and
/// column numbers in a later parse error still point at the original text.
///
/// # Example
///
/// ```
/// use json_edit::store::strip_comments;
///
/// let text = "{\"a\": 1 // one\n}";
/// assert_eq!(strip_comments(text), "{\"a\": 1       \n}");
/// assert_eq!(strip_comments("{\"url\": \"http://x\"}"), "{\"url\": \"http://x\"}");
/// ```
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains('/') && !text.contains('#') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                out.push_str("  ");
                skip_line(&mut chars, &mut out);
            }
            '#' => {
                out.push(' ');
                skip_line(&mut chars, &mut out);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                for c in chars.by_ref() {
                    out.push(if c == '\n' { '\n' } else { ' ' });
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Blank out everything up to (not including) the next newline.
fn skip_line(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    while let Some(&c) = chars.peek() {
        if c == '\n' {
            break;
        }
        out.push(' ');
        chars.next();
    }
}
