pub mod reading;
pub mod zodiac;

pub use reading::{Reading, ReadingFilter, StoredReading};
pub use zodiac::{UnknownSign, ZodiacSign};
