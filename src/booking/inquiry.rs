use chrono::Local;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Artist, BookingForm, Confirmation};

use super::selection::Selection;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Please select an artist and availability before submitting.")]
    MissingSelection,
    #[error("Please provide your name and email.")]
    MissingContact,
    #[error("Selected artist {0} is no longer on the roster.")]
    UnknownArtist(String),
}

/// Builds a confirmation for the current selection and form.
///
/// Nothing is mutated here; the caller resets the form and slot on success.
pub fn compose(
    roster: &[Artist],
    selection: &Selection,
    form: &BookingForm,
) -> Result<Confirmation, InquiryError> {
    let (Some(artist_id), Some(slot)) = (selection.artist_id(), selection.slot()) else {
        return Err(InquiryError::MissingSelection);
    };

    if !form.has_contact() {
        return Err(InquiryError::MissingContact);
    }

    let artist = roster
        .iter()
        .find(|artist| artist.id == artist_id)
        .ok_or_else(|| InquiryError::UnknownArtist(artist_id.to_string()))?;

    Ok(Confirmation {
        reference: short_reference(),
        artist_id: artist.id.clone(),
        artist_name: artist.name.clone(),
        slot: slot.to_string(),
        planner_name: form.planner_name.trim().to_string(),
        planner_email: form.planner_email.trim().to_string(),
        event_details: form.event_details.trim().to_string(),
        submitted_at: Local::now(),
    })
}

fn short_reference() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}
