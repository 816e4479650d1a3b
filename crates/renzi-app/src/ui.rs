use kanal::{AsyncReceiver, AsyncSender};
use renzi_types::{AppEvent, CharacterDetail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Console presentation loop: renders backend events and turns stdin
/// commands into app events. Stands in for a graphical frontend.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    // Most recent breakdown, so `save <n>` can reference rows by number
    let mut last_results: Vec<CharacterDetail> = Vec::new();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = app_to_ui_rx.recv() => {
                render(event?, &mut last_results);
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Some(event) = parse_command(&line, &last_results) {
                            ui_to_app_tx.send(event).await?;
                        }
                    }
                    None => {
                        // stdin closed, keep rendering backend events
                        tracing::debug!("stdin closed");
                        loop {
                            tokio::select! {
                                _ = cancel.cancelled() => return Ok(()),
                                event = app_to_ui_rx.recv() => {
                                    render(event?, &mut last_results);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render(event: AppEvent, last_results: &mut Vec<CharacterDetail>) {
    match event {
        AppEvent::BackendReady => {
            println!("Ready. Drop an image into the watch directory, or type `help`.");
        }
        AppEvent::RawTextInput { text, .. } => {
            println!("Recognized text: {}", text.trim());
        }
        AppEvent::ShowResults(details) => {
            println!("Character breakdown:");
            for (i, detail) in details.iter().enumerate() {
                println!(
                    "  [{}] {}  {}  {}",
                    i + 1,
                    detail.character,
                    detail.pinyin,
                    detail.meaning
                );
            }
            println!("Type `save <n>` to add a character to your deck.");
            *last_results = details;
        }
        AppEvent::ShowTranslation {
            text,
            from_lang,
            to_lang,
        } => {
            println!("Translation ({} -> {}): {}", from_lang, to_lang, text);
        }
        AppEvent::ShowDeck(entries) => {
            println!("Flashcard deck ({} cards):", entries.len());
            for entry in &entries {
                println!(
                    "  {}  {}  {}  [{}]",
                    entry.character, entry.pinyin, entry.meaning, entry.id
                );
            }
        }
        AppEvent::ShowStats {
            streak,
            cards_learned,
        } => {
            println!("{} day streak | Cards learned: {}", streak, cards_learned);
        }
        AppEvent::StatusUpdate { status, .. } => {
            println!("{}", status);
        }
        // Commands never travel app-to-ui
        _ => {}
    }
}

fn parse_command(line: &str, last_results: &[CharacterDetail]) -> Option<AppEvent> {
    let line = line.trim();
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => None,
        "help" => {
            println!("Commands:");
            println!("  lookup <text>   break down and translate Chinese text");
            println!("  save <n>        save result row <n> as a flashcard");
            println!("  rm <id>         remove a flashcard by id");
            println!("  deck            show the flashcard deck");
            None
        }
        "deck" => Some(AppEvent::RequestDeck),
        "lookup" if !rest.is_empty() => Some(AppEvent::TextInput(rest.to_string())),
        "save" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 && n <= last_results.len() => {
                Some(AppEvent::CreateCard(last_results[n - 1].clone()))
            }
            _ => {
                println!("No such result row: {}", rest);
                None
            }
        },
        "rm" => match Uuid::parse_str(rest) {
            Ok(id) => Some(AppEvent::RemoveCard(id)),
            Err(_) => {
                println!("Not a card id: {}", rest);
                None
            }
        },
        _ => {
            println!("Unknown command, type `help`.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<CharacterDetail> {
        vec![CharacterDetail {
            character: "你".to_string(),
            pinyin: "nǐ".to_string(),
            meaning: "you".to_string(),
        }]
    }

    #[test]
    fn save_references_result_rows_one_based() {
        match parse_command("save 1", &results()) {
            Some(AppEvent::CreateCard(detail)) => assert_eq!(detail.character, "你"),
            other => panic!("unexpected: {:?}", other),
        }

        assert!(parse_command("save 2", &results()).is_none());
        assert!(parse_command("save 0", &results()).is_none());
    }

    #[test]
    fn lookup_passes_text_through() {
        match parse_command("lookup 你好", &[]) {
            Some(AppEvent::TextInput(text)) => assert_eq!(text, "你好"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rm_requires_a_valid_uuid() {
        assert!(parse_command("rm not-an-id", &[]).is_none());

        let id = Uuid::new_v4();
        match parse_command(&format!("rm {}", id), &[]) {
            Some(AppEvent::RemoveCard(parsed)) => assert_eq!(parsed, id),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn blank_and_unknown_input_produce_nothing() {
        assert!(parse_command("", &[]).is_none());
        assert!(parse_command("   ", &[]).is_none());
        assert!(parse_command("frobnicate", &[]).is_none());
    }
}
