use std::sync::Arc;
use std::time::Duration;

use kanal::unbounded_async;
use renzi_config::Config;
use renzi_lang_chinese::ChineseProcessor;
use renzi_types::{AppEvent, CharacterDetail};
use tokio::time::timeout;
use uuid::Uuid;

use crate::events::create_card::handle_card_creation;
use crate::events::remove_card::handle_card_removal;
use crate::events::session_start::handle_session_start;
use crate::events::text_input::handle_text_input;
use crate::state::AppState;

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(Config::new()))
}

fn detail(character: &str, pinyin: &str, meaning: &str) -> CharacterDetail {
    CharacterDetail {
        character: character.to_string(),
        pinyin: pinyin.to_string(),
        meaning: meaning.to_string(),
    }
}

async fn next_event(rx: &kanal::AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

#[tokio::test]
async fn create_card_saves_and_counts() {
    let state = test_state();
    let (tx, rx) = unbounded_async::<AppEvent>();

    handle_card_creation(state.clone(), detail("你", "nǐ", "you"), &tx)
        .await
        .unwrap();

    {
        let progress = state.progress.read().await;
        assert_eq!(progress.flashcards().len(), 1);
        assert_eq!(progress.flashcards()[0].character, "你");
        assert_eq!(progress.stats().cards_learned, 1);
    }

    // status first, then refreshed stats
    assert!(matches!(
        next_event(&rx).await,
        AppEvent::StatusUpdate { .. }
    ));
    match next_event(&rx).await {
        AppEvent::ShowStats { cards_learned, .. } => assert_eq!(cards_learned, 1),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn saving_the_same_glyph_twice_makes_two_cards() {
    let state = test_state();
    let (tx, _rx) = unbounded_async::<AppEvent>();

    handle_card_creation(state.clone(), detail("好", "hǎo", "good"), &tx)
        .await
        .unwrap();
    handle_card_creation(state.clone(), detail("好", "hǎo", "good"), &tx)
        .await
        .unwrap();

    let progress = state.progress.read().await;
    assert_eq!(progress.flashcards().len(), 2);
    assert_ne!(progress.flashcards()[0].id, progress.flashcards()[1].id);
    assert_eq!(progress.stats().cards_learned, 2);
}

#[tokio::test]
async fn removing_an_unknown_card_changes_nothing() {
    let state = test_state();
    let (tx, rx) = unbounded_async::<AppEvent>();

    handle_card_creation(state.clone(), detail("我", "wǒ", "I/me"), &tx)
        .await
        .unwrap();
    handle_card_removal(state.clone(), Uuid::new_v4(), &tx)
        .await
        .unwrap();

    let progress = state.progress.read().await;
    assert_eq!(progress.flashcards().len(), 1);
    assert_eq!(progress.stats().cards_learned, 1);
    drop(progress);

    // the refreshed deck still holds the saved card
    let mut deck = None;
    for _ in 0..3 {
        if let AppEvent::ShowDeck(entries) = next_event(&rx).await {
            deck = Some(entries);
            break;
        }
    }
    assert_eq!(deck.expect("no deck event").len(), 1);
}

#[tokio::test]
async fn removing_a_saved_card_keeps_the_learned_count() {
    let state = test_state();
    let (tx, _rx) = unbounded_async::<AppEvent>();

    handle_card_creation(state.clone(), detail("你", "nǐ", "you"), &tx)
        .await
        .unwrap();

    let id = state.progress.read().await.flashcards()[0].id;
    handle_card_removal(state.clone(), id, &tx).await.unwrap();

    let progress = state.progress.read().await;
    assert!(progress.flashcards().is_empty());
    assert_eq!(progress.stats().cards_learned, 1);
}

#[tokio::test]
async fn session_start_records_activity() {
    let state = test_state();
    let (tx, rx) = unbounded_async::<AppEvent>();

    handle_session_start(state.clone(), &tx).await.unwrap();

    assert_eq!(state.progress.read().await.stats().streak, 1);

    match next_event(&rx).await {
        AppEvent::ShowStats { streak, .. } => assert_eq!(streak, 1),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn text_input_emits_a_character_breakdown() {
    let state = test_state();
    let (tx, rx) = unbounded_async::<AppEvent>();
    let processor = ChineseProcessor::new();

    handle_text_input(state, "你好ABC".to_string(), &processor, None, &tx)
        .await
        .unwrap();

    match next_event(&rx).await {
        AppEvent::ShowResults(details) => {
            assert_eq!(details.len(), 2);
            assert_eq!(details[0].character, "你");
            assert_eq!(details[0].pinyin, "nǐ");
            assert_eq!(details[1].meaning, "good");
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn non_chinese_text_reports_status_instead_of_results() {
    let state = test_state();
    let (tx, rx) = unbounded_async::<AppEvent>();
    let processor = ChineseProcessor::new();

    handle_text_input(state, "hello".to_string(), &processor, None, &tx)
        .await
        .unwrap();

    assert!(matches!(
        next_event(&rx).await,
        AppEvent::StatusUpdate { processing: false, .. }
    ));
}
