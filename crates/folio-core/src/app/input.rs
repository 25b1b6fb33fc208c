impl<BC, IN> ReaderApp<BC, IN>
where
    BC: BookCatalog,
    IN: InputProvider,
{
    fn process_inputs(&mut self) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event),
                Ok(None) => break,
                Err(_) => {
                    warn!("reader: input provider failed, dropping remaining events");
                    break;
                }
            }
        }
    }

    /// Apply one widget event directly, for hosts that deliver events
    /// without an [`InputProvider`]. Reports whether a re-render is due.
    pub fn handle_event(&mut self, event: InputEvent) -> TickResult {
        self.apply_input_event(event);

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn apply_input_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ChooseBook(index) => match self.library.book_at(index) {
                Some(book) => {
                    debug!("reader: choose book index={index} title={:?}", book.title);
                    self.apply_selection(index, 1);
                }
                None => warn!("reader: selector index {index} out of range, ignored"),
            },
            InputEvent::FontSmaller => {
                self.change_font_size(-(self.config.font_step_px as i16));
            }
            InputEvent::FontLarger => {
                self.change_font_size(self.config.font_step_px as i16);
            }
            InputEvent::PrevPage => self.prev_page(),
            InputEvent::NextPage => self.next_page(),
            InputEvent::BookmarkPage => {
                if let Err(err) = self.add_bookmark() {
                    warn!("reader: bookmark request ignored: {err}");
                }
            }
            InputEvent::OpenBookmark(index) => {
                let Some(bookmark) = self.bookmarks.get(index as usize).cloned() else {
                    warn!("reader: bookmark index {index} out of range, ignored");
                    return;
                };
                if let Err(err) = self.go_to_bookmark(&bookmark) {
                    warn!(
                        "reader: bookmark {:?} ignored: {err}",
                        bookmark.book.as_str()
                    );
                }
            }
        }
    }
}
