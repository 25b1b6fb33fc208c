//! Character-based pagination helpers shared by the content module.

/// Characters shown per page.
pub const PAGE_CHARS: usize = 250;

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Total pages for `text` as `ceil(chars / PAGE_CHARS)`.
///
/// Empty text yields zero pages; the widget keeps showing page 1 with
/// paging disabled in that case.
pub fn page_count(text: &str) -> u16 {
    char_len(text)
        .div_ceil(PAGE_CHARS)
        .min(u16::MAX as usize) as u16
}

/// The `PAGE_CHARS`-character window for a 1-indexed page.
///
/// Shorter on the final page, empty when `page` is 0 or past the end of
/// the text. Slice bounds always land on character boundaries.
pub fn page_slice(text: &str, page: u16) -> &str {
    if page == 0 {
        return "";
    }

    let start_char = (page as usize).saturating_sub(1).saturating_mul(PAGE_CHARS);
    let mut indices = text.char_indices().skip(start_char);
    let Some((start, _)) = indices.next() else {
        return "";
    };

    match indices.nth(PAGE_CHARS - 1) {
        Some((end, _)) => &text[start..end],
        None => &text[start..],
    }
}
