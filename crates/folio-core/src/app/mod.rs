//! Reader state machine for book selection, paging, font size, and
//! bookmarks.

use core::fmt;

use heapless::{String, Vec};
use log::{debug, warn};

use crate::{
    content::{BookCatalog, BookRecord, text_utils},
    input::{InputEvent, InputProvider},
    render::{BookOptionView, BookmarkEntryView, FontControlView, PageControlView, ReaderScreen},
    text_policy::{
        self, BOOKMARK_LABEL_BYTES, FONT_LABEL_BYTES, OPTION_LABEL_BYTES, PAGE_LABEL_BYTES,
    },
};

pub const MAX_LIBRARY_OPTIONS: usize = 12;
pub const MAX_BOOKMARKS: usize = 16;
pub const BOOK_TITLE_BYTES: usize = 48;
pub const BOOKMARK_NOTE_BYTES: usize = 24;

const END_OF_BOOK_PLACEHOLDER: &str = "(End of book)";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Recoverable reader operation failures. State is unchanged on error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReaderError {
    /// A title lookup found no library entry.
    InvalidSelection,
    /// The fixed-capacity bookmark list is full.
    BookmarkLimitReached,
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection => write!(f, "title not found in library"),
            Self::BookmarkLimitReached => write!(f, "bookmark list is full"),
        }
    }
}

/// Font sizing bounds and starting value, in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub font_px: u16,
    pub min_font_px: u16,
    pub max_font_px: u16,
    pub font_step_px: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            font_px: 18,
            min_font_px: 12,
            max_font_px: 32,
            font_step_px: 2,
        }
    }
}

/// A saved reading position, referencing its book by title.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bookmark {
    pub book: String<BOOK_TITLE_BYTES>,
    pub page: u16,
    pub note: String<BOOKMARK_NOTE_BYTES>,
}

pub struct ReaderApp<BC, IN>
where
    BC: BookCatalog,
    IN: InputProvider,
{
    library: BC,
    input: IN,
    config: ReaderConfig,
    app_title: &'static str,
    selected_book: u16,
    page: u16,
    font_px: u16,
    bookmarks: Vec<Bookmark, MAX_BOOKMARKS>,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("actions.rs");

#[cfg(test)]
mod tests;
