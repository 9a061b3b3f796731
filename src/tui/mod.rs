mod controller;
mod state;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::interval;
use tracing::info;

pub use controller::AppController;
pub use state::{App, FocusArea};

pub async fn run(mut app: App) -> Result<()> {
    app.bootstrap();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut reader = EventStream::new();
    let mut ticker = interval(Duration::from_millis(200));

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            _ = ticker.tick() => {},
            maybe_event = reader.next() => {
                if let Some(Ok(event)) = maybe_event {
                    handle_event(&mut app, event);
                }
            }
            Some(message) = app.msg_rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("shutting down");
    terminal.show_cursor()?;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}

fn handle_event(app: &mut App, event: Event) {
    if let Event::Key(key_event) = event {
        if key_event.kind != KeyEventKind::Release {
            handle_key_event(app, key_event);
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') if app.focus != FocusArea::Inquiry => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_inquiry();
        }
        KeyCode::Esc => {
            if let Some(session) = app.session.as_mut() {
                session.dismiss_status();
            }
        }
        KeyCode::Tab => app.next_focus(),
        KeyCode::BackTab => app.previous_focus(),
        _ => match app.focus {
            FocusArea::Filters => handle_filter_keys(app, key),
            FocusArea::Artists => handle_artist_keys(app, key),
            FocusArea::Availability => handle_availability_keys(app, key),
            FocusArea::Inquiry => handle_inquiry_keys(app, key),
            FocusArea::Activity => {}
        },
    }
}

fn handle_filter_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.filter_field = app.filter_field.previous(),
        KeyCode::Down => app.filter_field = app.filter_field.next(),
        KeyCode::Left => app.adjust_filter(-1),
        KeyCode::Right => app.adjust_filter(1),
        KeyCode::Char('r') => app.reset_filters(),
        _ => {}
    }
}

fn handle_artist_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_artist_selection(-1),
        KeyCode::Down => app.move_artist_selection(1),
        KeyCode::Enter => app.focus = FocusArea::Availability,
        _ => {}
    }
}

fn handle_availability_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_slot_cursor(-1),
        KeyCode::Down => app.move_slot_cursor(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_slot_at_cursor(),
        _ => {}
    }
}

fn handle_inquiry_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.form_field = app.form_field.previous(),
        KeyCode::Down => app.form_field = app.form_field.next(),
        KeyCode::Enter => app.submit_inquiry(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::ALT)
                && !key.modifiers.contains(KeyModifiers::CONTROL)
            {
                app.input_char(ch);
            }
        }
        _ => {}
    }
}
