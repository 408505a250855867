pub mod anniversary;
pub mod film;

pub use anniversary::anniversary_list;
pub use film::{film_card, review_panel};
