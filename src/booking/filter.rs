use std::collections::BTreeSet;
use std::fmt;

use crate::models::Artist;

pub const ALL_LABEL: &str = "All";

/// Increment used when the budget ceiling is nudged from the keyboard.
pub const BUDGET_STEP: u32 = 250;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Parses a dropdown value; `"All"` is the sentinel for no restriction.
    pub fn parse(value: &str) -> Self {
        if value == ALL_LABEL {
            Choice::All
        } else {
            Choice::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL_LABEL,
            Choice::Only(value) => value,
        }
    }

    fn admits(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub genre: Choice,
    pub location: Choice,
    /// Inclusive upper bound on `Artist::rate`.
    pub budget: u32,
}

impl FilterCriteria {
    pub fn new(budget: u32) -> Self {
        Self {
            genre: Choice::All,
            location: Choice::All,
            budget,
        }
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        let genre_ok = match &self.genre {
            Choice::All => true,
            Choice::Only(genre) => artist.has_genre(genre),
        };
        genre_ok && self.location.admits(&artist.location) && artist.rate <= self.budget
    }

    pub fn describe(&self, currency: &str) -> String {
        let budget = Artist {
            rate: self.budget,
            ..Artist::default()
        }
        .rate_label(currency);
        format!(
            "Genre: {} • Location: {} • Budget ≤ {budget}",
            self.genre, self.location
        )
    }
}

/// Artists satisfying every criterion, in roster order.
pub fn filter_artists<'a>(roster: &'a [Artist], criteria: &FilterCriteria) -> Vec<&'a Artist> {
    roster
        .iter()
        .filter(|artist| criteria.matches(artist))
        .collect()
}

pub fn genre_options(roster: &[Artist]) -> Vec<String> {
    let distinct: BTreeSet<&str> = roster
        .iter()
        .flat_map(|artist| artist.genres.iter().map(String::as_str))
        .collect();
    with_all(distinct)
}

pub fn location_options(roster: &[Artist]) -> Vec<String> {
    let distinct: BTreeSet<&str> = roster
        .iter()
        .map(|artist| artist.location.as_str())
        .filter(|location| !location.is_empty())
        .collect();
    with_all(distinct)
}

/// Lowest and highest rate on the roster, or `None` for an empty roster.
pub fn budget_bounds(roster: &[Artist]) -> Option<(u32, u32)> {
    let min = roster.iter().map(|artist| artist.rate).min()?;
    let max = roster.iter().map(|artist| artist.rate).max()?;
    Some((min, max))
}

fn with_all(distinct: BTreeSet<&str>) -> Vec<String> {
    std::iter::once(ALL_LABEL)
        .chain(distinct.into_iter().filter(|value| *value != ALL_LABEL))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn artist(id: &str, genres: &[&str], location: &str, rate: u32) -> Artist {
        Artist {
            id: id.to_string(),
            name: format!("Artist {id}"),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            location: location.to_string(),
            rate,
            availability: vec![format!("{id} slot A"), format!("{id} slot B")],
            ..Artist::default()
        }
    }

    pub(crate) fn roster() -> Vec<Artist> {
        vec![
            artist("a", &["Jazz", "Soul"], "Chicago", 4000),
            artist("b", &["Rock"], "Austin", 9000),
            artist("c", &["Jazz"], "Austin", 2500),
            artist("d", &["Electronic", "Pop"], "Berlin", 15000),
            artist("e", &["Soul"], "Chicago", 6000),
        ]
    }

    fn ids(artists: &[&Artist]) -> Vec<String> {
        artists.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn all_criteria_with_high_budget_returns_everything_in_order() {
        let roster = roster();
        let filtered = filter_artists(&roster, &FilterCriteria::new(u32::MAX));
        assert_eq!(ids(&filtered), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn genre_matches_any_of_the_artist_genres() {
        let roster = roster();
        let mut criteria = FilterCriteria::new(u32::MAX);
        criteria.genre = Choice::parse("Soul");
        assert_eq!(ids(&filter_artists(&roster, &criteria)), vec!["a", "e"]);
    }

    #[test]
    fn budget_is_inclusive() {
        let roster = roster();
        let criteria = FilterCriteria::new(4000);
        assert_eq!(ids(&filter_artists(&roster, &criteria)), vec!["a", "c"]);
    }

    #[test]
    fn predicates_combine() {
        let roster = roster();
        let criteria = FilterCriteria {
            genre: Choice::Only("Jazz".into()),
            location: Choice::Only("Austin".into()),
            budget: 3000,
        };
        assert_eq!(ids(&filter_artists(&roster, &criteria)), vec!["c"]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let roster = roster();
        let criteria = FilterCriteria {
            genre: Choice::Only("Polka".into()),
            location: Choice::All,
            budget: u32::MAX,
        };
        assert!(filter_artists(&roster, &criteria).is_empty());
    }

    #[test]
    fn filtered_is_subset_satisfying_every_predicate() {
        let roster = roster();
        let genres = genre_options(&roster);
        let locations = location_options(&roster);
        for genre in &genres {
            for location in &locations {
                for budget in [0, 2500, 3999, 4000, 9000, 20000] {
                    let criteria = FilterCriteria {
                        genre: Choice::parse(genre),
                        location: Choice::parse(location),
                        budget,
                    };
                    for artist in filter_artists(&roster, &criteria) {
                        assert!(roster.contains(artist));
                        assert!(genre == ALL_LABEL || artist.has_genre(genre));
                        assert!(location == ALL_LABEL || &artist.location == location);
                        assert!(artist.rate <= budget);
                    }
                }
            }
        }
    }

    #[test]
    fn options_are_sorted_distinct_and_lead_with_all() {
        let roster = roster();
        assert_eq!(
            genre_options(&roster),
            vec!["All", "Electronic", "Jazz", "Pop", "Rock", "Soul"]
        );
        assert_eq!(
            location_options(&roster),
            vec!["All", "Austin", "Berlin", "Chicago"]
        );
        assert_eq!(genre_options(&[]), vec!["All"]);
    }

    #[test]
    fn budget_bounds_span_the_roster() {
        assert_eq!(budget_bounds(&roster()), Some((2500, 15000)));
        assert_eq!(budget_bounds(&[]), None);
    }

    #[test]
    fn choice_parse_recognises_sentinel() {
        assert_eq!(Choice::parse("All"), Choice::All);
        assert_eq!(Choice::parse("Rock"), Choice::Only("Rock".into()));
        assert_eq!(Choice::Only("Rock".into()).to_string(), "Rock");
    }

    #[test]
    fn describe_summarises_criteria() {
        let criteria = FilterCriteria {
            genre: Choice::Only("Jazz".into()),
            location: Choice::All,
            budget: 7500,
        };
        assert_eq!(
            criteria.describe("$"),
            "Genre: Jazz • Location: All • Budget ≤ $7,500"
        );
    }
}
