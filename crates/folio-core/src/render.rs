//! Screen view models consumed by host renderers.

/// One selector row: the `"{title} ({author})"` label plus the raw title
/// for hosts that compose their own labels. A row's position in
/// [`ReaderScreen::options`] is the index to send back with
/// [`crate::input::InputEvent::ChooseBook`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookOptionView<'a> {
    pub label: &'a str,
    pub title: &'a str,
    pub selected: bool,
}

impl Default for BookOptionView<'_> {
    fn default() -> Self {
        Self {
            label: "",
            title: "",
            selected: false,
        }
    }
}

/// Font stepper: decrement control, `"{px}px"` readout, increment control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FontControlView<'a> {
    pub label: &'a str,
    pub px: u16,
    pub can_decrease: bool,
    pub can_increase: bool,
}

/// Pagination row: previous/next controls around a `"Page {p} / {n}"`
/// indicator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageControlView<'a> {
    pub indicator: &'a str,
    pub page: u16,
    pub page_count: u16,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// One bookmark list row, preformatted as `"{book} @ page {p} — {note}"`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookmarkEntryView<'a> {
    pub label: &'a str,
    pub book: &'a str,
    pub page: u16,
    pub note: &'a str,
}

impl Default for BookmarkEntryView<'_> {
    fn default() -> Self {
        Self {
            label: "",
            book: "",
            page: 0,
            note: "",
        }
    }
}

/// Full widget projection consumed by a host renderer.
///
/// `bookmarks` is empty when nothing has been bookmarked; renderers omit
/// the section entirely in that case.
#[derive(Clone, Copy, Debug)]
pub struct ReaderScreen<'a> {
    pub app_title: &'a str,
    pub options: &'a [BookOptionView<'a>],
    pub book_title: &'a str,
    pub book_author: &'a str,
    pub font: FontControlView<'a>,
    pub page_text: &'a str,
    pub pages: PageControlView<'a>,
    pub bookmarks: &'a [BookmarkEntryView<'a>],
}
