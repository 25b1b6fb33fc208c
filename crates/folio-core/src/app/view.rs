impl<BC, IN> ReaderApp<BC, IN>
where
    BC: BookCatalog,
    IN: InputProvider,
{
    pub fn new(library: BC, input: IN, mut config: ReaderConfig, app_title: &'static str) -> Self {
        if config.max_font_px < config.min_font_px {
            core::mem::swap(&mut config.max_font_px, &mut config.min_font_px);
        }
        let font_px = config.font_px.clamp(config.min_font_px, config.max_font_px);

        Self {
            library,
            input,
            config,
            app_title,
            selected_book: 0,
            page: 1,
            font_px,
            bookmarks: Vec::new(),
            pending_redraw: true,
        }
    }

    /// Drain pending input events, then report whether the projection
    /// changed since the last render.
    pub fn tick(&mut self) -> TickResult {
        self.process_inputs();

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(ReaderScreen<'_>),
    {
        let current = self.current_book();
        let book_title = current.map(|book| book.title).unwrap_or("Untitled");
        let book_author = current.map(|book| book.author).unwrap_or("");

        let option_total = (self.library.book_count() as usize).min(MAX_LIBRARY_OPTIONS);
        let mut option_bufs = [[0u8; OPTION_LABEL_BYTES]; MAX_LIBRARY_OPTIONS];
        let mut option_lens = [0usize; MAX_LIBRARY_OPTIONS];
        for index in 0..option_total {
            let Some(book) = self.library.book_at(index as u16) else {
                continue;
            };
            option_lens[index] =
                text_policy::book_option_label(book.title, book.author, &mut option_bufs[index])
                    .len();
        }

        let mut options = [BookOptionView::default(); MAX_LIBRARY_OPTIONS];
        for index in 0..option_total {
            let Some(book) = self.library.book_at(index as u16) else {
                continue;
            };
            options[index] = BookOptionView {
                label: core::str::from_utf8(&option_bufs[index][..option_lens[index]])
                    .unwrap_or(""),
                title: book.title,
                selected: index as u16 == self.selected_book,
            };
        }

        let mut font_buf = [0u8; FONT_LABEL_BYTES];
        let font = FontControlView {
            label: text_policy::font_size_label(self.font_px, &mut font_buf),
            px: self.font_px,
            can_decrease: self.font_px > self.config.min_font_px,
            can_increase: self.font_px < self.config.max_font_px,
        };

        let max_page = self.max_page();
        let mut page_buf = [0u8; PAGE_LABEL_BYTES];
        let pages = PageControlView {
            indicator: text_policy::page_indicator_label(self.page, max_page, &mut page_buf),
            page: self.page,
            page_count: max_page,
            prev_enabled: self.page > 1,
            next_enabled: self.page < max_page,
        };

        let mut bookmark_bufs = [[0u8; BOOKMARK_LABEL_BYTES]; MAX_BOOKMARKS];
        let mut bookmark_lens = [0usize; MAX_BOOKMARKS];
        for (index, bookmark) in self.bookmarks.iter().enumerate() {
            bookmark_lens[index] = text_policy::bookmark_entry_label(
                &bookmark.book,
                bookmark.page,
                &bookmark.note,
                &mut bookmark_bufs[index],
            )
            .len();
        }

        let mut bookmarks = [BookmarkEntryView::default(); MAX_BOOKMARKS];
        for (index, bookmark) in self.bookmarks.iter().enumerate() {
            bookmarks[index] = BookmarkEntryView {
                label: core::str::from_utf8(&bookmark_bufs[index][..bookmark_lens[index]])
                    .unwrap_or(""),
                book: &bookmark.book,
                page: bookmark.page,
                note: &bookmark.note,
            };
        }

        f(ReaderScreen {
            app_title: self.app_title,
            options: &options[..option_total],
            book_title,
            book_author,
            font,
            page_text: self.current_page_text(),
            pages,
            bookmarks: &bookmarks[..self.bookmarks.len()],
        });
    }
}
