impl<BC, IN> ReaderApp<BC, IN>
where
    BC: BookCatalog,
    IN: InputProvider,
{
    /// Select a book by title and reset the page to 1.
    pub fn select_book(&mut self, title: &str) -> Result<(), ReaderError> {
        let Some(index) = self.library.index_of_title(title) else {
            return Err(ReaderError::InvalidSelection);
        };

        debug!("reader: select book index={index} title={title:?}");
        self.apply_selection(index, 1);
        Ok(())
    }

    /// Step the font size by `delta` pixels, clamped into the configured
    /// bounds.
    pub fn change_font_size(&mut self, delta: i16) {
        let next = (i32::from(self.font_px) + i32::from(delta)).clamp(
            i32::from(self.config.min_font_px),
            i32::from(self.config.max_font_px),
        ) as u16;

        if next != self.font_px {
            debug!("reader: font size {} -> {}", self.font_px, next);
            self.font_px = next;
            self.pending_redraw = true;
        }
    }

    /// Advance one page. No-op on the last page, and on empty content
    /// (zero pages), so the page number never leaves `1..=max_page`.
    pub fn next_page(&mut self) {
        if self.page < self.max_page() {
            self.page = self.page.saturating_add(1);
            debug!("reader: page -> {}", self.page);
            self.pending_redraw = true;
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            debug!("reader: page -> {}", self.page);
            self.pending_redraw = true;
        }
    }

    /// Save the current position. Duplicate entries for the same book and
    /// page are kept; the list never shrinks.
    pub fn add_bookmark(&mut self) -> Result<(), ReaderError> {
        let Some(current) = self.current_book() else {
            return Err(ReaderError::InvalidSelection);
        };
        let book = truncated::<BOOK_TITLE_BYTES>(current.title);

        let page = self.page;
        let mut note_buf = [0u8; BOOKMARK_NOTE_BYTES];
        let note = truncated::<BOOKMARK_NOTE_BYTES>(text_policy::bookmark_note(page, &mut note_buf));

        if self.bookmarks.push(Bookmark { book, page, note }).is_err() {
            return Err(ReaderError::BookmarkLimitReached);
        }

        debug!(
            "reader: bookmark added page={page} total={}",
            self.bookmarks.len()
        );
        self.pending_redraw = true;
        Ok(())
    }

    /// Jump to a saved position: select the bookmarked book and restore its
    /// page directly, bypassing the reset-on-select rule.
    pub fn go_to_bookmark(&mut self, bookmark: &Bookmark) -> Result<(), ReaderError> {
        let Some(index) = self.library.index_of_title(&bookmark.book) else {
            return Err(ReaderError::InvalidSelection);
        };

        debug!(
            "reader: jump to bookmark book={:?} page={}",
            bookmark.book.as_str(),
            bookmark.page
        );
        self.apply_selection(index, bookmark.page);
        Ok(())
    }

    fn apply_selection(&mut self, index: u16, page: u16) {
        self.selected_book = index;
        self.page = page;
        self.pending_redraw = true;
    }

    pub fn current_book(&self) -> Option<BookRecord<'_>> {
        self.library.book_at(self.selected_book)
    }

    /// `ceil(chars / 250)` for the selected book; 0 for empty content.
    pub fn max_page(&self) -> u16 {
        self.current_book()
            .map(|book| text_utils::page_count(book.text))
            .unwrap_or(0)
    }

    /// The selected book's current page slice, or the end-of-book
    /// placeholder when the slice is empty.
    pub fn current_page_text(&self) -> &str {
        let text = self.current_book().map(|book| book.text).unwrap_or("");
        let slice = text_utils::page_slice(text, self.page);
        if slice.is_empty() {
            END_OF_BOOK_PLACEHOLDER
        } else {
            slice
        }
    }

    pub fn page(&self) -> u16 {
        self.page
    }

    pub fn font_px(&self) -> u16 {
        self.font_px
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }
}

fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
