pub mod artist;
pub mod inquiry;

pub use artist::{Artist, Showcase};
pub use inquiry::{BookingForm, Confirmation, FormField};
