use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::booking::{BookingSession, Status};
use crate::models::{Artist, FormField};

use super::state::FilterField;
use super::{App, FocusArea};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_filters(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(chunks[1]);

    draw_artist_list(frame, app, body[0]);

    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(body[1]);

    draw_artist_detail(frame, app, middle[0]);
    draw_availability(frame, app, middle[1]);
    draw_inquiry(frame, app, body[2]);
    draw_logs(frame, app, chunks[2]);
    draw_footer(frame, chunks[3]);
}

fn draw_filters(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Filters")
        .borders(Borders::ALL)
        .border_style(border_style(app.focus, FocusArea::Filters));

    let lines = match app.session.as_ref() {
        Some(session) => {
            let criteria = session.criteria();
            let budget = Artist {
                rate: criteria.budget,
                ..Artist::default()
            }
            .rate_label(app.currency());
            let max_budget = Artist {
                rate: session.max_budget(),
                ..Artist::default()
            }
            .rate_label(app.currency());
            vec![
                filter_line(app, FilterField::Genre, "Genre", criteria.genre.to_string()),
                filter_line(
                    app,
                    FilterField::Location,
                    "Location",
                    criteria.location.to_string(),
                ),
                filter_line(
                    app,
                    FilterField::Budget,
                    "Max budget",
                    format!("{budget} of {max_budget}"),
                ),
            ]
        }
        None => vec![Line::from(loading_text(app)).style(dim_style())],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn filter_line(app: &App, field: FilterField, label: &str, value: String) -> Line<'static> {
    let active = app.focus == FocusArea::Filters && app.filter_field == field;
    let marker = if active { "▶ " } else { "  " };
    let value_style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(format!("{marker}{label:<11}")),
        Span::styled(format!("◀ {value} ▶"), value_style),
    ])
}

fn draw_artist_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let currency = app.currency().to_string();
    let items: Vec<ListItem> = match app.session.as_ref() {
        Some(session) if session.filtered().is_empty() => {
            vec![ListItem::new("No artists match these filters").style(dim_style())]
        }
        Some(session) => session
            .filtered()
            .into_iter()
            .map(|artist| ListItem::new(artist_lines(artist, &currency)))
            .collect(),
        None => vec![ListItem::new(loading_text(app)).style(dim_style())],
    };

    let title = match app.session.as_ref() {
        Some(session) => format!(
            "Artists ({}/{})",
            session.filtered().len(),
            session.roster().len()
        ),
        None => "Artists".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style(app.focus, FocusArea::Artists)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.artist_state);
}

fn draw_artist_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Profile").borders(Borders::ALL);

    let Some(artist) = app.session.as_ref().and_then(BookingSession::selected_artist) else {
        let paragraph = Paragraph::new("Select an artist to see their profile")
            .style(dim_style())
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            artist.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} • {} • {} • {}",
            artist.genre_label(),
            artist.location,
            artist.rate_label(app.currency()),
            artist.rating_label()
        )),
        Line::from(""),
        Line::from(artist.description.clone()),
        Line::from(""),
    ];

    let upcoming = artist.upcoming_showcases(Local::now().date_naive());
    if upcoming.is_empty() {
        lines.push(Line::from("No upcoming showcases").style(dim_style()));
    } else {
        lines.push(Line::from("Upcoming showcases:"));
        lines.extend(
            upcoming
                .into_iter()
                .map(|showcase| Line::from(format!("  • {}", showcase.label()))),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_availability(frame: &mut Frame, app: &mut App, area: Rect) {
    let session = app.session.as_ref();
    let chosen = session.and_then(|s| s.selection().slot());
    let items: Vec<ListItem> = match session.and_then(BookingSession::selected_artist) {
        Some(artist) if !artist.availability.is_empty() => artist
            .availability
            .iter()
            .map(|slot| {
                let marker = if chosen == Some(slot.as_str()) {
                    "(●)"
                } else {
                    "( )"
                };
                ListItem::new(format!("{marker} {slot}"))
            })
            .collect(),
        Some(_) => vec![ListItem::new("No open dates").style(dim_style())],
        None => vec![ListItem::new("No artist selected").style(dim_style())],
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("Availability")
                .borders(Borders::ALL)
                .border_style(border_style(app.focus, FocusArea::Availability)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.slot_state);
}

fn draw_inquiry(frame: &mut Frame, app: &App, area: Rect) {
    let sent = app
        .session
        .as_ref()
        .map_or(0, |session| session.submitted().len());
    let title = if sent == 0 {
        "Booking inquiry".to_string()
    } else {
        format!("Booking inquiry ({sent} sent)")
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app.focus, FocusArea::Inquiry));

    let Some(session) = app.session.as_ref() else {
        frame.render_widget(
            Paragraph::new(loading_text(app)).style(dim_style()).block(block),
            area,
        );
        return;
    };

    let artist = session
        .selected_artist()
        .map_or("—".to_string(), |artist| artist.name.clone());
    let slot = session.selection().slot().unwrap_or("—").to_string();

    let mut lines = vec![
        Line::from(format!("Artist: {artist}")),
        Line::from(format!("Date:   {slot}")),
        Line::from(""),
    ];

    for field in FormField::ALL {
        let editing = app.focus == FocusArea::Inquiry && app.form_field == field;
        let cursor = if editing { "█" } else { "" };
        let style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("{}:", field.label()), style)));
        lines.push(Line::from(format!(
            "> {}{cursor}",
            field.value(session.form())
        )));
    }

    if session.status().is_none() {
        let hint = if !session.selection().is_complete() {
            Some("Pick an artist and a date to enquire.")
        } else if session.form().is_blank() {
            Some("Add your name and email, then press Enter.")
        } else {
            None
        };
        if let Some(hint) = hint {
            lines.push(Line::from(""));
            lines.push(Line::from(hint).style(dim_style()));
        }
    }

    if let Some(status) = session.status() {
        lines.push(Line::from(""));
        let color = match status {
            Status::Confirmed(_) => Color::Green,
            Status::Rejected(_) => Color::Red,
        };
        lines.push(Line::from(status.text().to_string()).style(Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_logs(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .logs
        .iter()
        .rev()
        .take(100)
        .map(|entry| Line::from(entry.clone()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Activity")
                .borders(Borders::ALL)
                .border_style(border_style(app.focus, FocusArea::Activity)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(
        "Tab: cycle • ←/→: change filter • r: reset filters • Space: pick date • Enter/Ctrl+S: submit • Esc: dismiss • q: quit",
    )
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, area);
}

fn artist_lines(artist: &Artist, currency: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(artist.name.clone()),
        Line::from(format!(
            "   {} • {} • {}",
            artist.location,
            artist.rate_label(currency),
            artist.rating_label()
        ))
        .style(dim_style()),
    ]
}

fn loading_text(app: &App) -> String {
    app.roster_error
        .clone()
        .unwrap_or_else(|| "Loading roster...".to_string())
}

fn border_style(current: FocusArea, area: FocusArea) -> Style {
    if current == area {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::super::state::tests::loaded_app;
    use super::*;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_roster_and_filters() {
        let mut app = loaded_app();
        let screen = render(&mut app);
        assert!(screen.contains("Artists (5/5)"));
        assert!(screen.contains("Artist a"));
        assert!(screen.contains("$15,000"));
        assert!(screen.contains("a slot A"));
    }

    #[test]
    fn renders_empty_state() {
        let mut app = loaded_app();
        app.filter_field = FilterField::Budget;
        app.adjust_filter(-100);
        let screen = render(&mut app);
        assert!(screen.contains("Artists (0/5)"));
        assert!(screen.contains("No artists match these filters"));
        assert!(screen.contains("No artist selected"));
    }
}
