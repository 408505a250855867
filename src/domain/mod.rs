pub mod anniversary;
pub mod film;
pub mod markup;

pub use anniversary::{match_anniversaries, Anniversaries, AnniversaryCandidate, DateWindow};
pub use film::{normalize_feed, FilmReview};
