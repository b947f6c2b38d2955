//! ANSI-aware text measurement and padding.
//!
//! Terminal style escapes (`ESC[31;20m` and friends) occupy zero columns when
//! printed, but they are still characters in a Rust `String`. Everything that
//! measures or pads cell text goes through these helpers so that styled and
//! unstyled cells line up.
//!
//! The escape matcher is a heuristic: it removes `ESC`, then any run of
//! characters other than `m`, then `m`. That covers SGR sequences, which is
//! all the [`Colour`](crate::Colour) vocabulary produces. A sequence without
//! the `m` terminator is left in place and counts towards the width.

use once_cell::sync::Lazy;
use regex::Regex;

static STYLE_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b[^m]*m").expect("style escape pattern is valid"));

/// Removes every style escape from `text`.
///
/// # Example
///
/// ```rust
/// use crosstab::strip_style_escapes;
///
/// assert_eq!(strip_style_escapes("\x1b[31;20mred\x1b[0m"), "red");
/// ```
pub fn strip_style_escapes(text: &str) -> String {
    STYLE_ESCAPE.replace_all(text, "").into_owned()
}

/// Returns the number of characters `text` occupies once style escapes are removed.
///
/// ```rust
/// use crosstab::{visible_width, Colour};
///
/// assert_eq!(visible_width(&Colour::Red.paint("CELL0")), 5);
/// ```
pub fn visible_width(text: &str) -> usize {
    STYLE_ESCAPE
        .split(text)
        .map(|segment| segment.chars().count())
        .sum()
}

/// Pads `text` with spaces until its visible width reaches `width`.
///
/// Left-aligned text gets all the padding appended. Centred text gets half on
/// the left and the rest on the right, so odd padding puts the extra space on
/// the right. Text already at or beyond `width` is returned unchanged.
///
/// ```rust
/// use crosstab::pad_styled;
///
/// assert_eq!(pad_styled("ab", 5, false), "ab   ");
/// assert_eq!(pad_styled("ab", 5, true), " ab  ");
/// ```
pub fn pad_styled(text: &str, width: usize, centred: bool) -> String {
    let padding = width.saturating_sub(visible_width(text));
    let (left, right) = if centred {
        let left = padding / 2;
        (left, padding - left)
    } else {
        (0, padding)
    };

    let mut padded = String::with_capacity(text.len() + padding);
    padded.extend(std::iter::repeat_n(' ', left));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', right));
    padded
}

/// Returns the first `max_chars` characters of `text`.
///
/// Counting is by `char`, not by visible width, so escapes inside the kept
/// prefix count against the limit. The cut can land inside an escape and
/// leave a partial sequence such as `"\x1b[3"`; use [`truncate_visible`] for
/// styled text.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Keeps the first `max_visible` visible characters of `text`.
///
/// Style escapes are never split: every complete escape is kept, including
/// any after the cut, so a trailing reset survives.
///
/// ```rust
/// use crosstab::{truncate_visible, Colour};
///
/// assert_eq!(
///     truncate_visible(&Colour::Red.paint("abcdef"), 3),
///     Colour::Red.paint("abc"),
/// );
/// ```
pub fn truncate_visible(text: &str, max_visible: usize) -> String {
    let mut kept = String::with_capacity(text.len());
    let mut remaining = max_visible;
    let mut last = 0;
    for escape in STYLE_ESCAPE.find_iter(text) {
        let visible = truncate_chars(&text[last..escape.start()], remaining);
        remaining -= visible.chars().count();
        kept.push_str(visible);
        kept.push_str(escape.as_str());
        last = escape.end();
    }
    kept.push_str(truncate_chars(&text[last..], remaining));
    kept
}
