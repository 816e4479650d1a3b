use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved character study record. Immutable after creation except for
/// removal from the deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub character: String,
    pub pinyin: String,
    pub meaning: String,
    pub date_added: DateTime<Utc>,
}

impl Flashcard {
    /// Mint a card with a fresh id, stamped now.
    pub fn new(character: String, pinyin: String, meaning: String) -> Self {
        Self::created_at(character, pinyin, meaning, Utc::now())
    }

    pub fn created_at(
        character: String,
        pinyin: String,
        meaning: String,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            character,
            pinyin,
            meaning,
            date_added,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    /// Consecutive active days
    pub streak: u32,
    /// Instant of the last streak evaluation
    pub last_activity: DateTime<Utc>,
    /// Incremented on every saved card, never decremented on removal
    pub cards_learned: u32,
}

impl UserStats {
    fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            streak: 0,
            last_activity: now,
            cards_learned: 0,
        }
    }
}

/// Single source of truth for the flashcard collection and learning
/// statistics. Holds state in memory for the lifetime of the process;
/// callers on a multi-threaded runtime must serialize access (the app
/// keeps it behind an `RwLock`).
#[derive(Debug, Clone)]
pub struct ProgressStore {
    flashcards: Vec<Flashcard>,
    stats: UserStats,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Construct with an explicit start instant. Tests use this to pin
    /// `last_activity`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            flashcards: Vec::new(),
            stats: UserStats::starting_at(now),
        }
    }

    /// Saved cards, in insertion order.
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    /// Append a card and count it as learned. Both happen under the same
    /// `&mut self` call, so a reader never sees one without the other.
    /// Duplicate characters are permitted; ids must be fresh.
    pub fn add_flashcard(&mut self, card: Flashcard) {
        self.flashcards.push(card);
        self.stats.cards_learned += 1;
    }

    /// Remove the card with the given id, keeping the relative order of the
    /// rest. A miss is a no-op. `cards_learned` stays as is: once learned,
    /// always counted.
    pub fn remove_flashcard(&mut self, id: Uuid) {
        self.flashcards.retain(|card| card.id != id);
    }

    /// Re-evaluate the daily streak against `now` and record the activity.
    /// Returns the new streak.
    ///
    /// The comparison is on day-of-month numbers: a delta of 1 counts as a
    /// consecutive day, a delta of 0 with a distinct instant counts as
    /// repeat activity on the same day, anything else resets the streak
    /// to 1. That includes month boundaries (Jan 31 -> Feb 1 resets) and a
    /// call with an instant identical to `last_activity` (also resets).
    pub fn update_streak(&mut self, now: DateTime<Utc>) -> u32 {
        let last = self.stats.last_activity;
        let day_delta = i64::from(now.day()) - i64::from(last.day());

        let consecutive = day_delta == 1 || (day_delta == 0 && now != last);

        self.stats.streak = if consecutive { self.stats.streak + 1 } else { 1 };
        self.stats.last_activity = now;
        self.stats.streak
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn card(character: &str, pinyin: &str, meaning: &str) -> Flashcard {
        Flashcard::new(
            character.to_string(),
            pinyin.to_string(),
            meaning.to_string(),
        )
    }

    #[test]
    fn add_appends_in_order_and_counts() {
        let mut store = ProgressStore::starting_at(at(2026, 3, 1, 9, 0));

        let first = card("你", "nǐ", "you");
        let second = card("好", "hǎo", "good");
        let first_id = first.id;
        let second_id = second.id;

        store.add_flashcard(first);
        store.add_flashcard(second);

        assert_eq!(store.flashcards().len(), 2);
        assert_eq!(store.flashcards()[0].id, first_id);
        assert_eq!(store.flashcards()[1].id, second_id);
        assert_eq!(store.stats().cards_learned, 2);
    }

    #[test]
    fn duplicate_characters_get_distinct_cards() {
        let mut store = ProgressStore::starting_at(at(2026, 3, 1, 9, 0));

        let first = card("好", "hǎo", "good");
        let second = card("好", "hǎo", "good");
        assert_ne!(first.id, second.id);

        store.add_flashcard(first);
        store.add_flashcard(second);

        assert_eq!(store.flashcards().len(), 2);
        assert_eq!(store.stats().cards_learned, 2);
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut store = ProgressStore::starting_at(at(2026, 3, 1, 9, 0));
        store.add_flashcard(card("我", "wǒ", "I/me"));

        store.remove_flashcard(Uuid::new_v4());

        assert_eq!(store.flashcards().len(), 1);
        assert_eq!(store.stats().cards_learned, 1);
    }

    #[test]
    fn remove_keeps_order_and_learned_count() {
        let mut store = ProgressStore::starting_at(at(2026, 3, 1, 9, 0));

        let a = card("你", "nǐ", "you");
        let b = card("好", "hǎo", "good");
        let c = card("我", "wǒ", "I/me");
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);

        store.add_flashcard(a);
        store.add_flashcard(b);
        store.add_flashcard(c);

        store.remove_flashcard(b_id);

        let remaining: Vec<Uuid> = store.flashcards().iter().map(|card| card.id).collect();
        assert_eq!(remaining, vec![a_id, c_id]);
        assert_eq!(store.stats().cards_learned, 3);
    }

    #[test]
    fn streak_counts_consecutive_days() {
        // Scenario A
        let mut store = ProgressStore::starting_at(at(2026, 3, 1, 9, 0));
        assert_eq!(store.stats().streak, 0);

        assert_eq!(store.update_streak(at(2026, 3, 2, 9, 0)), 1);
        assert_eq!(store.stats().last_activity, at(2026, 3, 2, 9, 0));

        assert_eq!(store.update_streak(at(2026, 3, 3, 9, 0)), 2);
    }

    #[test]
    fn streak_increments_on_same_day_repeat() {
        // Scenario B: same day, different instant
        let mut store = ProgressStore::starting_at(at(2026, 3, 5, 10, 0));

        assert_eq!(store.update_streak(at(2026, 3, 5, 14, 0)), 1);
        assert_eq!(store.update_streak(at(2026, 3, 5, 18, 30)), 2);
    }

    #[test]
    fn streak_resets_on_identical_instant() {
        // Scenario C: bitwise-identical timestamp falls through to a reset
        let now = at(2026, 3, 5, 10, 0);
        let mut store = ProgressStore::starting_at(now);
        store.update_streak(at(2026, 3, 6, 10, 0));
        store.update_streak(at(2026, 3, 7, 10, 0));
        assert_eq!(store.stats().streak, 2);

        let frozen = store.stats().last_activity;
        assert_eq!(store.update_streak(frozen), 1);
    }

    #[test]
    fn streak_resets_across_month_boundary() {
        // Scenario D: Jan 31 -> Feb 1 has a day-of-month delta of -30
        let mut store = ProgressStore::starting_at(at(2026, 1, 31, 9, 0));

        assert_eq!(store.update_streak(at(2026, 2, 1, 9, 0)), 1);
        assert_eq!(store.stats().last_activity, at(2026, 2, 1, 9, 0));
    }

    #[test]
    fn streak_resets_after_a_gap() {
        let mut store = ProgressStore::starting_at(at(2026, 3, 1, 9, 0));
        store.update_streak(at(2026, 3, 2, 9, 0));
        store.update_streak(at(2026, 3, 3, 9, 0));
        assert_eq!(store.stats().streak, 2);

        assert_eq!(store.update_streak(at(2026, 3, 6, 9, 0)), 1);
    }
}
