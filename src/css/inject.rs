use crate::foundation::error::{KeyframeError, KeyframeResult};

/// Insert `style` right after the `>` that closes the first `<svg ...>` tag.
///
/// The tag scan honors quoted attribute values, so a `>` inside `"..."` does
/// not end the tag. A self-closing root (`<svg/>`) has no content to host the
/// style and is rejected.
pub fn inject_style(svg: &str, style: &str) -> KeyframeResult<String> {
    let at = insertion_point(svg)?;
    let mut out = String::with_capacity(svg.len() + style.len());
    out.push_str(&svg[..at]);
    out.push_str(style);
    out.push_str(&svg[at..]);
    Ok(out)
}

/// Byte offset just past the root `<svg ...>` opening tag.
pub fn insertion_point(svg: &str) -> KeyframeResult<usize> {
    let start = find_svg_open(svg)
        .ok_or_else(|| KeyframeError::injection("no <svg> opening tag in document"))?;

    let mut quote: Option<u8> = None;
    let bytes = svg.as_bytes();
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        match (quote, b) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => {
                if i > start && bytes[i - 1] == b'/' {
                    return Err(KeyframeError::injection(
                        "root <svg/> tag is self-closing; nowhere to place <style>",
                    ));
                }
                return Ok(i + 1);
            }
            (None, _) => {}
        }
    }

    Err(KeyframeError::injection(format!(
        "<svg> tag at byte {start} is never closed with '>'"
    )))
}

/// First `<svg` that is a whole tag name (not `<svgfoo`).
fn find_svg_open(svg: &str) -> Option<usize> {
    const OPEN: &str = "<svg";
    svg.match_indices(OPEN).map(|(i, _)| i).find(|&i| {
        svg.as_bytes()
            .get(i + OPEN.len())
            .is_none_or(|&b| b.is_ascii_whitespace() || b == b'>' || b == b'/')
    })
}

#[cfg(test)]
#[path = "../../tests/unit/css/inject.rs"]
mod tests;
