use chrono::{DateTime, Local};

/// Planner contact fields. Only presence is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub planner_name: String,
    pub planner_email: String,
    pub event_details: String,
}

impl BookingForm {
    pub fn has_contact(&self) -> bool {
        !self.planner_name.trim().is_empty() && !self.planner_email.trim().is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.planner_name.is_empty()
            && self.planner_email.is_empty()
            && self.event_details.is_empty()
    }

    pub fn clear(&mut self) {
        self.planner_name.clear();
        self.planner_email.clear();
        self.event_details.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PlannerName,
    PlannerEmail,
    EventDetails,
}

impl FormField {
    pub const ALL: [FormField; 3] = [
        FormField::PlannerName,
        FormField::PlannerEmail,
        FormField::EventDetails,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::PlannerName => "Name",
            FormField::PlannerEmail => "Email",
            FormField::EventDetails => "Event details",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::PlannerName => FormField::PlannerEmail,
            FormField::PlannerEmail => FormField::EventDetails,
            FormField::EventDetails => FormField::PlannerName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::PlannerName => FormField::EventDetails,
            FormField::PlannerEmail => FormField::PlannerName,
            FormField::EventDetails => FormField::PlannerEmail,
        }
    }

    pub fn value(self, form: &BookingForm) -> &str {
        match self {
            FormField::PlannerName => &form.planner_name,
            FormField::PlannerEmail => &form.planner_email,
            FormField::EventDetails => &form.event_details,
        }
    }

    pub fn value_mut(self, form: &mut BookingForm) -> &mut String {
        match self {
            FormField::PlannerName => &mut form.planner_name,
            FormField::PlannerEmail => &mut form.planner_email,
            FormField::EventDetails => &mut form.event_details,
        }
    }
}

/// A successfully composed inquiry. Nothing is transmitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub reference: String,
    pub artist_id: String,
    pub artist_name: String,
    pub slot: String,
    pub planner_name: String,
    pub planner_email: String,
    pub event_details: String,
    pub submitted_at: DateTime<Local>,
}

impl Confirmation {
    pub fn message(&self) -> String {
        format!(
            "Thanks {}! Your inquiry for {} on {} has been received (ref {}). Our team will follow up shortly.",
            self.planner_name.trim(),
            self.artist_name,
            self.slot,
            self.reference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_requires_name_and_email() {
        let mut form = BookingForm::default();
        assert!(!form.has_contact());
        form.planner_name = "Dana".into();
        assert!(!form.has_contact());
        form.planner_email = "   ".into();
        assert!(!form.has_contact());
        form.planner_email = "dana@example.com".into();
        assert!(form.has_contact());
    }

    #[test]
    fn field_cycle_wraps() {
        let mut field = FormField::PlannerName;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::PlannerName);
        assert_eq!(FormField::PlannerName.previous(), FormField::EventDetails);
    }

    #[test]
    fn value_mut_edits_the_matching_field() {
        let mut form = BookingForm::default();
        FormField::PlannerEmail
            .value_mut(&mut form)
            .push_str("ops@venue.io");
        assert_eq!(form.planner_email, "ops@venue.io");
        assert_eq!(FormField::PlannerEmail.value(&form), "ops@venue.io");
        form.clear();
        assert!(form.is_blank());
    }
}
