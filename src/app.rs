use crate::models::Artist;

#[derive(Debug, Clone)]
pub enum AppMessage {
    RosterLoaded(Vec<Artist>),
    RosterFailed(String),
}
