//! Cheap pre-limiting of oversized input before it reaches the parser.

use memchr::memrchr;

/// Cuts raw HTML to at most `max_bytes` without splitting a tag, a character
/// reference, or a UTF-8 sequence.
///
/// Used to bound parsing cost when only a short snippet is wanted from a
/// very large document. The parser closes whatever is left open.
///
/// # Examples
///
/// ```rust
/// use precis_truncate::safe_html_truncate;
/// let html = "<div>Hello World</div>";
/// // Will truncate at a safe boundary, not mid-tag
/// assert_eq!(safe_html_truncate(html, 10), "<div>Hello");
/// assert_eq!(safe_html_truncate(html, 18), "<div>Hello World");
/// ```
pub fn safe_html_truncate(html: &str, max_bytes: usize) -> &str {
    if html.len() <= max_bytes {
        return html;
    }
    let mut end = max_bytes;
    while !html.is_char_boundary(end) {
        end -= 1;
    }
    let candidate = &html.as_bytes()[..end];
    if let Some(open) = memrchr(b'<', candidate)
        && memrchr(b'>', candidate).is_none_or(|close| close < open)
    {
        // Inside a tag, cut before the '<'
        return &html[..open];
    }
    if let Some(amp) = memrchr(b'&', candidate)
        && memrchr(b';', candidate).is_none_or(|semi| semi < amp)
        && candidate[amp + 1..].iter().all(|b| b.is_ascii_alphanumeric() || *b == b'#')
    {
        // Inside a character reference, cut before the '&'
        return &html[..amp];
    }
    &html[..end]
}
