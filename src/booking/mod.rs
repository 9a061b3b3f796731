//! Booking session: the filter engine, selection reconciliation and inquiry
//! composer wired into one owned piece of state.
//!
//! Every mutation that can change the filtered list recomputes it and then
//! reconciles the selection, so the selected artist always lies inside the
//! current results.

pub mod filter;
pub mod inquiry;
pub mod selection;

use tracing::{debug, info};

use crate::models::{Artist, BookingForm, Confirmation};

pub use filter::{BUDGET_STEP, Choice, FilterCriteria};
pub use inquiry::InquiryError;
pub use selection::{Reconciled, Selection};

/// Inline feedback from the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Confirmed(String),
    Rejected(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Confirmed(text) | Status::Rejected(text) => text,
        }
    }
}

pub struct BookingSession {
    roster: Vec<Artist>,
    criteria: FilterCriteria,
    selection: Selection,
    form: BookingForm,
    status: Option<Status>,
    submitted: Vec<Confirmation>,
    genre_options: Vec<String>,
    location_options: Vec<String>,
    max_budget: u32,
}

impl BookingSession {
    /// Starts with no genre or location restriction. `budget` defaults to the
    /// highest rate on the roster.
    pub fn new(roster: Vec<Artist>, budget: Option<u32>) -> Self {
        let max_budget = filter::budget_bounds(&roster)
            .map(|(_, max)| max)
            .unwrap_or(0);
        let genre_options = filter::genre_options(&roster);
        let location_options = filter::location_options(&roster);

        let mut session = Self {
            criteria: FilterCriteria::new(budget.unwrap_or(max_budget)),
            roster,
            selection: Selection::default(),
            form: BookingForm::default(),
            status: None,
            submitted: Vec::new(),
            genre_options,
            location_options,
            max_budget,
        };
        session.refresh();
        session
    }

    pub fn roster(&self) -> &[Artist] {
        &self.roster
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Artists matching the current criteria, recomputed on every call.
    pub fn filtered(&self) -> Vec<&Artist> {
        filter::filter_artists(&self.roster, &self.criteria)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_artist(&self) -> Option<&Artist> {
        let id = self.selection.artist_id()?;
        self.roster.iter().find(|artist| artist.id == id)
    }

    /// Position of the selected artist within the filtered list.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selection.artist_id()?;
        self.filtered().iter().position(|artist| artist.id == id)
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn submitted(&self) -> &[Confirmation] {
        &self.submitted
    }

    pub fn max_budget(&self) -> u32 {
        self.max_budget
    }

    pub fn set_genre(&mut self, genre: Choice) -> Reconciled {
        self.criteria.genre = genre;
        self.refresh()
    }

    pub fn set_location(&mut self, location: Choice) -> Reconciled {
        self.criteria.location = location;
        self.refresh()
    }

    pub fn set_budget(&mut self, budget: u32) -> Reconciled {
        self.criteria.budget = budget;
        self.refresh()
    }

    pub fn cycle_genre(&mut self, delta: isize) -> Reconciled {
        let next = cycle(&self.genre_options, self.criteria.genre.as_str(), delta);
        self.set_genre(Choice::parse(&next))
    }

    pub fn cycle_location(&mut self, delta: isize) -> Reconciled {
        let next = cycle(&self.location_options, self.criteria.location.as_str(), delta);
        self.set_location(Choice::parse(&next))
    }

    /// Moves the ceiling by whole `BUDGET_STEP`s, clamped to `[0, max_budget]`.
    pub fn step_budget(&mut self, delta: i64) -> Reconciled {
        let moved = i64::from(self.criteria.budget) + delta * i64::from(BUDGET_STEP);
        let clamped = moved.clamp(0, i64::from(self.max_budget));
        self.set_budget(u32::try_from(clamped).unwrap_or(self.max_budget))
    }

    pub fn reset_filters(&mut self) -> Reconciled {
        self.criteria = FilterCriteria::new(self.max_budget);
        self.refresh()
    }

    /// Selects a filtered artist by id. Returns false if it is not listed.
    pub fn select_artist(&mut self, id: &str) -> bool {
        let matches = filter::filter_artists(&self.roster, &self.criteria);
        let Some(artist) = matches.into_iter().find(|artist| artist.id == id) else {
            return false;
        };
        self.selection.select_artist(artist);
        true
    }

    /// Moves the selection `delta` rows through the filtered list.
    pub fn move_selection(&mut self, delta: isize) {
        let current = self.selected_index().unwrap_or(0);
        let matches = filter::filter_artists(&self.roster, &self.criteria);
        if matches.is_empty() {
            return;
        }
        let target = current.saturating_add_signed(delta).min(matches.len() - 1);
        self.selection.select_artist(matches[target]);
    }

    /// Toggles a slot offered by the selected artist. Returns false if there
    /// is no selected artist or it does not offer `slot`.
    pub fn toggle_slot(&mut self, slot: &str) -> bool {
        let offered = self
            .selected_artist()
            .is_some_and(|artist| artist.offers_slot(slot));
        if offered {
            self.selection.toggle_slot(slot);
        }
        offered
    }

    /// Composes an inquiry. On success the form and slot are cleared and the
    /// artist stays selected; on failure nothing but the status changes.
    pub fn submit(&mut self) -> Result<Confirmation, InquiryError> {
        match inquiry::compose(&self.roster, &self.selection, &self.form) {
            Ok(confirmation) => {
                info!(
                    reference = %confirmation.reference,
                    artist = %confirmation.artist_id,
                    slot = %confirmation.slot,
                    "inquiry composed"
                );
                self.status = Some(Status::Confirmed(confirmation.message()));
                self.form.clear();
                self.selection.clear_slot();
                self.submitted.push(confirmation.clone());
                Ok(confirmation)
            }
            Err(err) => {
                debug!(%err, "inquiry rejected");
                self.status = Some(Status::Rejected(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    fn refresh(&mut self) -> Reconciled {
        let matches = filter::filter_artists(&self.roster, &self.criteria);
        let outcome = self.selection.reconcile(&matches);
        debug!(
            criteria = ?self.criteria,
            matches = matches.len(),
            ?outcome,
            "filters applied"
        );
        outcome
    }
}

fn cycle(options: &[String], current: &str, delta: isize) -> String {
    if options.is_empty() {
        return filter::ALL_LABEL.to_string();
    }
    let len = options.len() as isize;
    let position = options
        .iter()
        .position(|option| option == current)
        .unwrap_or(0) as isize;
    let next = (position + delta).rem_euclid(len) as usize;
    options[next].clone()
}
