use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showcase {
    pub venue: String,
    pub city: String,
    pub date: NaiveDate,
}

impl Showcase {
    pub fn label(&self) -> String {
        format!(
            "{}, {} — {}",
            self.venue,
            self.city,
            self.date.format("%d %b %Y")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub location: String,
    pub rate: u32,
    pub rating: f32,
    pub description: String,
    pub image: String,
    pub availability: Vec<String>,
    pub showcases: Vec<Showcase>,
}

impl Default for Artist {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            genres: Vec::new(),
            location: String::new(),
            rate: 0,
            rating: 0.0,
            description: String::new(),
            image: String::new(),
            availability: Vec::new(),
            showcases: Vec::new(),
        }
    }
}

impl Artist {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn offers_slot(&self, slot: &str) -> bool {
        self.availability.iter().any(|s| s == slot)
    }

    pub fn genre_label(&self) -> String {
        if self.genres.is_empty() {
            "Unclassified".to_string()
        } else {
            self.genres.join(" / ")
        }
    }

    /// Rate with thousands separators, e.g. `$12,500`.
    pub fn rate_label(&self, currency: &str) -> String {
        let digits = self.rate.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{currency}{grouped}")
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}★", self.rating)
    }

    /// Showcases on or after `today`, in roster order.
    pub fn upcoming_showcases(&self, today: NaiveDate) -> Vec<&Showcase> {
        self.showcases
            .iter()
            .filter(|showcase| showcase.date >= today)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Artist {
        Artist {
            id: "nova".into(),
            name: "Nova Lights".into(),
            genres: vec!["Electronic".into(), "Pop".into()],
            rate: 12500,
            rating: 4.8,
            showcases: vec![
                Showcase {
                    venue: "Blue Room".into(),
                    city: "Austin".into(),
                    date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
                },
                Showcase {
                    venue: "Harbor Stage".into(),
                    city: "Seattle".into(),
                    date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
                },
            ],
            ..Artist::default()
        }
    }

    #[test]
    fn rate_label_groups_thousands() {
        let mut artist = sample();
        assert_eq!(artist.rate_label("$"), "$12,500");
        artist.rate = 950;
        assert_eq!(artist.rate_label("€"), "€950");
        artist.rate = 1_250_000;
        assert_eq!(artist.rate_label("$"), "$1,250,000");
    }

    #[test]
    fn labels() {
        let artist = sample();
        assert_eq!(artist.genre_label(), "Electronic / Pop");
        assert_eq!(artist.rating_label(), "4.8★");
        assert_eq!(Artist::default().genre_label(), "Unclassified");
        assert_eq!(
            artist.showcases[0].label(),
            "Blue Room, Austin — 12 Mar 2024"
        );
    }

    #[test]
    fn upcoming_showcases_skip_past_dates() {
        let artist = sample();
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let upcoming = artist.upcoming_showcases(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].venue, "Harbor Stage");
    }

    #[test]
    fn genre_match_is_exact() {
        let artist = sample();
        assert!(artist.has_genre("Pop"));
        assert!(!artist.has_genre("pop"));
    }
}
