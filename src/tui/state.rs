use std::collections::VecDeque;

use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use crate::app::AppMessage;
use crate::booking::{BookingSession, Reconciled};
use crate::models::FormField;

use super::controller::AppController;

const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Filters,
    Artists,
    Availability,
    Inquiry,
    Activity,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            FocusArea::Filters => FocusArea::Artists,
            FocusArea::Artists => FocusArea::Availability,
            FocusArea::Availability => FocusArea::Inquiry,
            FocusArea::Inquiry => FocusArea::Activity,
            FocusArea::Activity => FocusArea::Filters,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusArea::Filters => FocusArea::Activity,
            FocusArea::Artists => FocusArea::Filters,
            FocusArea::Availability => FocusArea::Artists,
            FocusArea::Inquiry => FocusArea::Availability,
            FocusArea::Activity => FocusArea::Inquiry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Genre,
    Location,
    Budget,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            FilterField::Genre => FilterField::Location,
            FilterField::Location => FilterField::Budget,
            FilterField::Budget => FilterField::Genre,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FilterField::Genre => FilterField::Budget,
            FilterField::Location => FilterField::Genre,
            FilterField::Budget => FilterField::Location,
        }
    }
}

pub struct App {
    pub controller: AppController,
    pub msg_rx: UnboundedReceiver<AppMessage>,
    pub session: Option<BookingSession>,
    pub roster_error: Option<String>,
    pub artist_state: ListState,
    pub slot_state: ListState,
    pub filter_field: FilterField,
    pub form_field: FormField,
    pub logs: VecDeque<String>,
    pub focus: FocusArea,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: AppController, msg_rx: UnboundedReceiver<AppMessage>) -> Self {
        Self {
            controller,
            msg_rx,
            session: None,
            roster_error: None,
            artist_state: ListState::default(),
            slot_state: ListState::default(),
            filter_field: FilterField::Genre,
            form_field: FormField::PlannerName,
            logs: VecDeque::with_capacity(LOG_CAPACITY),
            focus: FocusArea::Filters,
            should_quit: false,
        }
    }

    pub fn bootstrap(&mut self) {
        self.push_log("Loading roster...");
        self.controller.load_roster();
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::RosterLoaded(artists) => {
                let count = artists.len();
                let budget = self.controller.config().initial_budget();
                self.session = Some(BookingSession::new(artists, budget));
                self.roster_error = None;
                self.sync_lists();
                self.push_log(format!("Roster loaded: {count} artists"));
            }
            AppMessage::RosterFailed(reason) => {
                self.push_log(reason.clone());
                self.roster_error = Some(reason);
            }
        }
    }

    pub fn currency(&self) -> &str {
        self.controller.config().currency()
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_focus(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn push_log<S: Into<String>>(&mut self, message: S) {
        if self.logs.len() == LOG_CAPACITY {
            self.logs.pop_front();
        }
        self.logs.push_back(message.into());
    }

    /// Changes the focused filter by `delta` options (or budget steps).
    pub fn adjust_filter(&mut self, delta: isize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let outcome = match self.filter_field {
            FilterField::Genre => session.cycle_genre(delta),
            FilterField::Location => session.cycle_location(delta),
            FilterField::Budget => session.step_budget(delta as i64),
        };
        self.after_filter_change(outcome);
    }

    pub fn reset_filters(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let outcome = session.reset_filters();
        self.push_log("Filters reset");
        self.after_filter_change(outcome);
    }

    fn after_filter_change(&mut self, outcome: Reconciled) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let summary = session.criteria().describe(self.controller.config().currency());
        let matches = session.filtered().len();
        info!(%summary, matches, "filters changed");

        let note = match &outcome {
            Reconciled::Cleared => Some("No artists match these filters".to_string()),
            Reconciled::MovedTo(_) => session
                .selected_artist()
                .map(|artist| format!("Selection moved to {}", artist.name)),
            Reconciled::Unchanged => None,
        };

        self.sync_lists();
        if let Some(note) = note {
            self.push_log(note);
        }
    }

    pub fn move_artist_selection(&mut self, delta: isize) {
        if let Some(session) = self.session.as_mut() {
            session.move_selection(delta);
        }
        self.sync_lists();
    }

    pub fn move_slot_cursor(&mut self, delta: isize) {
        let len = self
            .session
            .as_ref()
            .and_then(|session| session.selected_artist())
            .map_or(0, |artist| artist.availability.len());
        update_list_state(&mut self.slot_state, len, delta);
    }

    pub fn toggle_slot_at_cursor(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(slot) = self.slot_state.selected().and_then(|idx| {
            session
                .selected_artist()
                .and_then(|artist| artist.availability.get(idx).cloned())
        }) else {
            return;
        };
        session.toggle_slot(&slot);
    }

    pub fn input_char(&mut self, ch: char) {
        if let Some(session) = self.session.as_mut() {
            self.form_field.value_mut(session.form_mut()).push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(session) = self.session.as_mut() {
            self.form_field.value_mut(session.form_mut()).pop();
        }
    }

    pub fn submit_inquiry(&mut self) {
        let Some(outcome) = self.session.as_mut().map(BookingSession::submit) else {
            self.push_log("Roster not loaded yet");
            return;
        };
        let entry = match outcome {
            Ok(confirmation) => {
                let mut entry = format!(
                    "[{}] Inquiry {} sent for {} ({}) from {}",
                    confirmation.submitted_at.format("%H:%M"),
                    confirmation.reference,
                    confirmation.artist_name,
                    confirmation.slot,
                    confirmation.planner_email
                );
                if !confirmation.event_details.is_empty() {
                    entry.push_str(&format!(" — {}", confirmation.event_details));
                }
                entry
            }
            Err(err) => err.to_string(),
        };
        self.push_log(entry);
        self.form_field = FormField::PlannerName;
        self.sync_lists();
    }

    /// Mirrors the session selection into the list widgets.
    fn sync_lists(&mut self) {
        let Some(session) = self.session.as_ref() else {
            self.artist_state.select(None);
            self.slot_state.select(None);
            return;
        };
        self.artist_state.select(session.selected_index());

        let slot_count = session
            .selected_artist()
            .map_or(0, |artist| artist.availability.len());
        let cursor = session
            .selected_artist()
            .zip(session.selection().slot())
            .and_then(|(artist, slot)| artist.availability.iter().position(|s| s == slot));
        match cursor {
            Some(idx) => self.slot_state.select(Some(idx)),
            None if slot_count == 0 => self.slot_state.select(None),
            None => {
                let idx = self.slot_state.selected().unwrap_or(0).min(slot_count - 1);
                self.slot_state.select(Some(idx));
            }
        }
    }
}

fn update_list_state(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        state.select(None);
        return;
    }

    let current = state.selected().unwrap_or(0);
    let step = delta.unsigned_abs();
    let new_index = if delta < 0 {
        current.saturating_sub(step)
    } else {
        (current + step).min(len - 1)
    };
    state.select(Some(new_index));
}
