use super::*;
use crate::{
    content::{
        static_library::{StaticBook, StaticLibrary, default_library},
        text_utils,
    },
    input::{InputEvent, InputProvider, mock::MockInput},
};

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

fn default_app() -> ReaderApp<StaticLibrary<'static>, MockInput> {
    ReaderApp::new(
        default_library(),
        MockInput::new(),
        ReaderConfig::default(),
        "Folio",
    )
}

#[test]
fn starts_on_first_book_at_page_one() {
    let app = default_app();

    assert_eq!(app.current_book().unwrap().title, "Moby Dick");
    assert_eq!(app.page(), 1);
    assert_eq!(app.font_px(), 18);
    assert!(app.bookmarks().is_empty());
}

#[test]
fn initial_tick_requests_first_render() {
    let mut app = default_app();

    assert_eq!(app.tick(), TickResult::RenderRequested);
    assert_eq!(app.tick(), TickResult::NoRender);
}

#[test]
fn prev_page_is_idempotent_at_first_page() {
    let mut app = default_app();

    app.prev_page();
    app.prev_page();
    assert_eq!(app.page(), 1);
}

#[test]
fn next_page_stops_at_last_page() {
    let mut app = default_app();
    app.select_book("1984").unwrap();
    let last = app.max_page();
    assert!(last >= 2);

    for _ in 0..last + 3 {
        app.next_page();
    }
    assert_eq!(app.page(), last);
}

#[test]
fn font_size_clamps_at_both_bounds() {
    let mut app = default_app();

    for _ in 0..10 {
        app.change_font_size(-2);
    }
    assert_eq!(app.font_px(), 12);

    for _ in 0..20 {
        app.change_font_size(2);
    }
    assert_eq!(app.font_px(), 32);

    app.change_font_size(-100);
    assert_eq!(app.font_px(), 12);
}

#[test]
fn selecting_a_book_resets_the_page() {
    let mut app = default_app();
    app.next_page();
    app.next_page();
    assert_eq!(app.page(), 3);

    app.select_book("Pride and Prejudice").unwrap();
    assert_eq!(app.current_book().unwrap().title, "Pride and Prejudice");
    assert_eq!(app.page(), 1);
}

#[test]
fn unknown_title_leaves_state_unchanged() {
    let mut app = default_app();
    app.next_page();

    assert_eq!(
        app.select_book("The Silmarillion"),
        Err(ReaderError::InvalidSelection)
    );
    assert_eq!(app.current_book().unwrap().title, "Moby Dick");
    assert_eq!(app.page(), 2);
}

#[test]
fn add_bookmark_appends_current_position() {
    let mut app = default_app();
    app.next_page();
    app.next_page();
    app.next_page();
    assert_eq!(app.page(), 4);

    app.add_bookmark().unwrap();
    assert_eq!(app.bookmarks().len(), 1);

    let bookmark = &app.bookmarks()[0];
    assert_eq!(bookmark.book.as_str(), "Moby Dick");
    assert_eq!(bookmark.page, 4);
    assert_eq!(bookmark.note.as_str(), "Bookmark at page 4");

    // Bookmarking the same page twice is not deduplicated.
    app.add_bookmark().unwrap();
    assert_eq!(app.bookmarks().len(), 2);
    assert_eq!(app.bookmarks()[1].page, 4);
}

#[test]
fn go_to_bookmark_restores_the_exact_page() {
    let mut app = default_app();
    app.next_page();
    app.next_page();
    app.next_page();
    app.add_bookmark().unwrap();

    app.select_book("1984").unwrap();
    assert_eq!(app.page(), 1);

    let bookmark = app.bookmarks()[0].clone();
    app.go_to_bookmark(&bookmark).unwrap();
    assert_eq!(app.current_book().unwrap().title, "Moby Dick");
    assert_eq!(app.page(), 4);
}

#[test]
fn stale_bookmark_title_is_rejected() {
    let mut app = default_app();
    let mut ghost: String<BOOK_TITLE_BYTES> = String::new();
    ghost.push_str("Ghost Title").unwrap();
    let bookmark = Bookmark {
        book: ghost,
        page: 3,
        note: String::new(),
    };

    assert_eq!(
        app.go_to_bookmark(&bookmark),
        Err(ReaderError::InvalidSelection)
    );
    assert_eq!(app.current_book().unwrap().title, "Moby Dick");
    assert_eq!(app.page(), 1);
}

#[test]
fn bookmark_capacity_is_bounded() {
    let mut app = default_app();

    for _ in 0..MAX_BOOKMARKS {
        app.add_bookmark().unwrap();
    }
    assert_eq!(
        app.add_bookmark(),
        Err(ReaderError::BookmarkLimitReached)
    );
    assert_eq!(app.bookmarks().len(), MAX_BOOKMARKS);
}

#[test]
fn scripted_events_replay_the_bookmark_round_trip() {
    let events = [
        InputEvent::NextPage,
        InputEvent::NextPage,
        InputEvent::NextPage,
        InputEvent::BookmarkPage,
        InputEvent::ChooseBook(1),
        InputEvent::OpenBookmark(0),
    ];
    let input = ScriptedInput::new(&events);
    let mut app = ReaderApp::new(default_library(), input, ReaderConfig::default(), "Folio");

    assert_eq!(app.tick(), TickResult::RenderRequested);

    assert_eq!(app.current_book().unwrap().title, "Moby Dick");
    assert_eq!(app.page(), 4);
    assert_eq!(app.bookmarks().len(), 1);
}

#[test]
fn font_events_settle_at_the_lower_bound() {
    let events = [InputEvent::FontSmaller; 10];
    let input = ScriptedInput::new(&events);
    let mut app = ReaderApp::new(default_library(), input, ReaderConfig::default(), "Folio");

    let _ = app.tick();
    assert_eq!(app.font_px(), 12);
}

#[test]
fn handle_event_reports_whether_a_render_is_due() {
    let mut app = default_app();
    let _ = app.tick();

    assert_eq!(
        app.handle_event(InputEvent::NextPage),
        TickResult::RenderRequested
    );
    assert_eq!(
        app.handle_event(InputEvent::PrevPage),
        TickResult::RenderRequested
    );
    // Already at page 1, nothing changes.
    assert_eq!(app.handle_event(InputEvent::PrevPage), TickResult::NoRender);
}

#[test]
fn out_of_range_event_indices_are_ignored() {
    let mut app = default_app();
    let _ = app.tick();

    assert_eq!(
        app.handle_event(InputEvent::ChooseBook(9)),
        TickResult::NoRender
    );
    assert_eq!(
        app.handle_event(InputEvent::OpenBookmark(0)),
        TickResult::NoRender
    );
    assert_eq!(app.current_book().unwrap().title, "Moby Dick");
}

#[test]
fn screen_labels_follow_the_widget_format() {
    let app = default_app();
    let expected_pages = text_utils::page_count(app.current_book().unwrap().text);

    app.with_screen(|screen| {
        assert_eq!(screen.app_title, "Folio");
        assert_eq!(screen.options.len(), 3);
        assert_eq!(screen.options[0].label, "Moby Dick (Herman Melville)");
        assert!(screen.options[0].selected);
        assert!(!screen.options[1].selected);
        assert_eq!(screen.book_title, "Moby Dick");
        assert_eq!(screen.book_author, "Herman Melville");
        assert_eq!(screen.font.label, "18px");
        assert!(screen.font.can_decrease);
        assert!(screen.font.can_increase);
        assert_eq!(screen.pages.page, 1);
        assert_eq!(screen.pages.page_count, expected_pages);
        assert!(!screen.pages.prev_enabled);
        assert!(screen.pages.next_enabled);
        assert!(screen.page_text.starts_with("Call me Ishmael."));
    });
}

#[test]
fn bookmark_list_is_omitted_until_first_bookmark() {
    let mut app = default_app();

    app.with_screen(|screen| {
        assert!(screen.bookmarks.is_empty());
    });

    app.add_bookmark().unwrap();
    app.with_screen(|screen| {
        assert_eq!(screen.bookmarks.len(), 1);
        assert_eq!(
            screen.bookmarks[0].label,
            "Moby Dick @ page 1 — Bookmark at page 1"
        );
        assert_eq!(screen.bookmarks[0].book, "Moby Dick");
        assert_eq!(screen.bookmarks[0].note, "Bookmark at page 1");
    });
}

#[test]
fn empty_book_shows_the_end_placeholder_with_paging_disabled() {
    const EMPTY_SHELF: [StaticBook; 1] = [StaticBook {
        title: "Blank",
        author: "Nobody",
        text: "",
    }];
    let library = StaticLibrary::new(&EMPTY_SHELF);
    let mut app = ReaderApp::new(library, MockInput::new(), ReaderConfig::default(), "Folio");

    assert_eq!(app.max_page(), 0);
    app.next_page();
    assert_eq!(app.page(), 1);

    app.with_screen(|screen| {
        assert_eq!(screen.pages.indicator, "Page 1 / 0");
        assert!(!screen.pages.prev_enabled);
        assert!(!screen.pages.next_enabled);
        assert_eq!(screen.page_text, "(End of book)");
    });
}

#[test]
fn inverted_font_bounds_are_normalized() {
    let config = ReaderConfig {
        font_px: 50,
        min_font_px: 32,
        max_font_px: 12,
        font_step_px: 2,
    };
    let app = ReaderApp::new(default_library(), MockInput::new(), config, "Folio");

    assert_eq!(app.font_px(), 32);
}
