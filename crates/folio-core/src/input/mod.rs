//! Input abstraction layer.

pub mod mock;

/// Logical widget actions produced by a host front end.
///
/// Index-carrying variants refer to the rows currently shown by the
/// projection: `ChooseBook` into the selector options, `OpenBookmark`
/// into the bookmark list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    ChooseBook(u16),
    FontSmaller,
    FontLarger,
    PrevPage,
    NextPage,
    BookmarkPage,
    OpenBookmark(u16),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
