use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::Artist;

const BUILTIN_ROSTER: &str = include_str!("../data/roster.json");

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("unable to read roster {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("roster contains no artists")]
    Empty,
    #[error("duplicate artist id: {0}")]
    DuplicateId(String),
    #[error("artist {id} is invalid: {reason}")]
    Invalid { id: String, reason: &'static str },
}

/// Reads a roster from a JSON file, or the bundled roster when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Vec<Artist>, RosterError> {
    let roster = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| RosterError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse(&raw)?
        }
        None => parse(BUILTIN_ROSTER)?,
    };

    info!(
        artists = roster.len(),
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "built-in".into()),
        "roster loaded"
    );
    Ok(roster)
}

pub fn parse(raw: &str) -> Result<Vec<Artist>, RosterError> {
    let roster: Vec<Artist> = serde_json::from_str(raw)?;
    validate(&roster)?;
    Ok(roster)
}

fn validate(roster: &[Artist]) -> Result<(), RosterError> {
    if roster.is_empty() {
        return Err(RosterError::Empty);
    }

    let mut seen = HashSet::new();
    for artist in roster {
        if artist.id.trim().is_empty() {
            return Err(RosterError::Invalid {
                id: artist.name.clone(),
                reason: "missing id",
            });
        }
        if !seen.insert(artist.id.as_str()) {
            return Err(RosterError::DuplicateId(artist.id.clone()));
        }
        if artist.name.trim().is_empty() {
            return Err(RosterError::Invalid {
                id: artist.id.clone(),
                reason: "missing name",
            });
        }
        if artist.availability.iter().any(|slot| slot.trim().is_empty()) {
            return Err(RosterError::Invalid {
                id: artist.id.clone(),
                reason: "blank availability slot",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_roster_is_valid() {
        let roster = load(None).unwrap();
        assert!(roster.len() >= 6);
        assert!(roster.iter().all(|artist| !artist.availability.is_empty()));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"solo","name":"Solo Act","genres":["Folk"],"location":"Denver","rate":800,
                "availability":["Sat 6 Dec"],
                "showcases":[{{"venue":"Mercury","city":"Denver","date":"2026-12-06"}}]}}]"#
        )
        .unwrap();

        let roster = load(Some(file.path())).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Solo Act");
        assert_eq!(roster[0].rating, 0.0);
        assert_eq!(roster[0].showcases[0].city, "Denver");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(matches!(parse("[]"), Err(RosterError::Empty)));
        assert!(matches!(parse("{"), Err(RosterError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"[{"id":"x","name":"One"},{"id":"x","name":"Two"}]"#;
        match parse(raw) {
            Err(RosterError::DuplicateId(id)) => assert_eq!(id, "x"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            parse(r#"[{"id":"x","name":" "}]"#),
            Err(RosterError::Invalid { reason: "missing name", .. })
        ));
        assert!(matches!(
            parse(r#"[{"id":"x","name":"X","availability":[""]}]"#),
            Err(RosterError::Invalid { reason: "blank availability slot", .. })
        ));
    }
}
