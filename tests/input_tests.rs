//! Input tests - keys through the collector into the game

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall::core::{GameState, ScriptedKinds};
use blockfall::input::{handle_key_event, should_quit, InputCollector};
use blockfall::types::{Flow, GameAction, Phase, PieceKind, TICK_MS};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

#[test]
fn test_every_action_has_a_key() {
    let keys = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Up, GameAction::Rotate),
        (KeyCode::Enter, GameAction::Confirm),
        (KeyCode::Esc, GameAction::Cancel),
    ];
    for (code, action) in keys {
        assert_eq!(handle_key_event(key(code)), Some(action), "{code:?}");
    }
}

#[test]
fn test_quit_is_separate_from_cancel() {
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(should_quit(key(KeyCode::Char('Q'))));
    assert_eq!(handle_key_event(key(KeyCode::Char('q'))), None);
}

#[test]
fn test_keys_drive_a_game() {
    let mut game = GameState::with_source(ScriptedKinds::repeat(PieceKind::O));
    let mut input = InputCollector::new();

    input.handle_key_event(key(KeyCode::Enter));
    assert_eq!(game.update(&input.take_frame(TICK_MS)), Flow::Continue);
    assert_eq!(game.phase(), Phase::Playing);

    input.handle_key_event(key(KeyCode::Char('d')));
    game.update(&input.take_frame(TICK_MS));
    input.handle_key_event(key(KeyCode::Char('l')));
    game.update(&input.take_frame(TICK_MS));
    assert_eq!(game.active().map(|p| p.x), Some(6));

    // Esc does nothing while playing.
    input.handle_key_event(key(KeyCode::Esc));
    assert_eq!(game.update(&input.take_frame(TICK_MS)), Flow::Continue);
    assert!(game.is_playing());
}

#[test]
fn test_escape_in_menu_exits() {
    let mut game = GameState::new(3);
    let mut input = InputCollector::new();

    input.handle_key_event(key(KeyCode::Esc));
    assert_eq!(game.update(&input.take_frame(TICK_MS)), Flow::Exit);
}
