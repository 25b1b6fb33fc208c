//! Terminal front end for the Folio reading widget.
//!
//! Maps one-line stdin commands onto widget input events and reprints the
//! projected screen after every state change.

use std::io::{self, BufRead, Write};

use folio_core::{
    app::{ReaderApp, ReaderConfig, TickResult},
    content::static_library::default_library,
    input::{InputEvent, mock::MockInput},
    render::ReaderScreen,
};

const TITLE: &str = "Folio";

fn main() -> io::Result<()> {
    let mut app = ReaderApp::new(
        default_library(),
        MockInput::new(),
        ReaderConfig::default(),
        TITLE,
    );

    println!("{TITLE} terminal reading widget");
    println!("Commands:");
    println!("  1..9    choose a book");
    println!("  n / p   next / previous page");
    println!("  + / -   font size");
    println!("  b       bookmark the current page");
    println!("  g <k>   open bookmark k");
    println!("  q       quit");

    let _ = app.tick();
    app.with_screen(print_screen);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let command = line.trim();
        if command == "q" {
            return Ok(());
        }

        let Some(event) = parse_command(command) else {
            if !command.is_empty() {
                println!("unrecognized command {command:?}");
            }
            continue;
        };

        if app.handle_event(event) == TickResult::RenderRequested {
            app.with_screen(print_screen);
        }
    }
}

fn parse_command(command: &str) -> Option<InputEvent> {
    match command {
        "n" => Some(InputEvent::NextPage),
        "p" => Some(InputEvent::PrevPage),
        "+" => Some(InputEvent::FontLarger),
        "-" => Some(InputEvent::FontSmaller),
        "b" => Some(InputEvent::BookmarkPage),
        _ => {
            if let Some(rest) = command.strip_prefix("g ") {
                let index: u16 = rest.trim().parse().ok()?;
                return Some(InputEvent::OpenBookmark(index.checked_sub(1)?));
            }
            let index: u16 = command.parse().ok()?;
            Some(InputEvent::ChooseBook(index.checked_sub(1)?))
        }
    }
}

fn print_screen(screen: ReaderScreen<'_>) {
    println!();
    println!("== {} ==", screen.app_title);
    println!("Select Book:");
    for (index, option) in screen.options.iter().enumerate() {
        let marker = if option.selected { '>' } else { ' ' };
        println!(" {marker} [{}] {}", index + 1, option.label);
    }
    println!();
    println!(
        "{} by {}   [-] {} [+]",
        screen.book_title, screen.book_author, screen.font.label
    );
    println!();
    println!("{}", screen.page_text);
    println!();
    let prev = if screen.pages.prev_enabled {
        "[Previous]"
    } else {
        "(Previous)"
    };
    let next = if screen.pages.next_enabled {
        "[Next]"
    } else {
        "(Next)"
    };
    println!("{prev}  {}  {next}", screen.pages.indicator);

    if !screen.bookmarks.is_empty() {
        println!();
        println!("Bookmarks:");
        for (index, entry) in screen.bookmarks.iter().enumerate() {
            println!("  [{}] {}", index + 1, entry.label);
        }
    }
}
