//! Padding exercise.

use std::iter;

/// Prepends `fill` to `text` until it is `width` scalar values long.
///
/// Text that is already at least `width` long is returned unchanged, never
/// truncated.
pub fn leftpad(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_owned();
    }
    let pad = width - len;
    let mut out = String::with_capacity(text.len() + pad * fill.len_utf8());
    out.extend(iter::repeat(fill).take(pad));
    out.push_str(text);
    out
}
