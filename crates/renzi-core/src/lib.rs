pub mod language;
pub mod progress;

pub use progress::{Flashcard, ProgressStore, UserStats};
