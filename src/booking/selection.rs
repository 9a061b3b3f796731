use tracing::debug;

use crate::models::Artist;

/// Outcome of reconciling the selection against a freshly filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    Unchanged,
    Cleared,
    MovedTo(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    artist_id: Option<String>,
    slot: Option<String>,
}

impl Selection {
    pub fn artist_id(&self) -> Option<&str> {
        self.artist_id.as_deref()
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.artist_id.is_some() && self.slot.is_some()
    }

    /// Keeps the selection pointing into `filtered`: clears it when nothing
    /// matches, jumps to the first artist when the current one dropped out.
    pub fn reconcile(&mut self, filtered: &[&Artist]) -> Reconciled {
        let Some(first) = filtered.first() else {
            let changed = self.artist_id.is_some() || self.slot.is_some();
            self.artist_id = None;
            self.slot = None;
            return if changed {
                Reconciled::Cleared
            } else {
                Reconciled::Unchanged
            };
        };

        let still_present = self
            .artist_id
            .as_deref()
            .is_some_and(|id| filtered.iter().any(|artist| artist.id == id));

        if still_present {
            return Reconciled::Unchanged;
        }

        debug!(from = ?self.artist_id, to = %first.id, "selection moved to first match");
        self.artist_id = Some(first.id.clone());
        self.slot = None;
        Reconciled::MovedTo(first.id.clone())
    }

    /// Selects `artist`; switching to a different artist drops the slot.
    pub fn select_artist(&mut self, artist: &Artist) {
        if self.artist_id.as_deref() != Some(artist.id.as_str()) {
            self.artist_id = Some(artist.id.clone());
            self.slot = None;
        }
    }

    /// Single-slot toggle: picking the chosen slot again clears it.
    pub fn toggle_slot(&mut self, slot: &str) {
        if self.slot.as_deref() == Some(slot) {
            self.slot = None;
        } else {
            self.slot = Some(slot.to_string());
        }
    }

    pub fn clear_slot(&mut self) {
        self.slot = None;
    }
}
