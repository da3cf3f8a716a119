//! Integration tests for the game loop, driven one input frame at a time

use blockfall::core::{GameState, ScriptedKinds};
use blockfall::types::{
    palette, Cell, CoreEvent, Flow, GameAction, InputFrame, Phase, PieceKind, FALL_INTERVAL_MS,
    TICK_MS,
};

fn idle() -> InputFrame {
    InputFrame::new(TICK_MS)
}

fn press(action: GameAction) -> InputFrame {
    InputFrame::new(TICK_MS).with(action)
}

fn gravity_step() -> InputFrame {
    InputFrame::new(FALL_INTERVAL_MS)
}

fn started(kind: PieceKind) -> GameState {
    let mut state = GameState::with_source(ScriptedKinds::repeat(kind));
    assert_eq!(state.update(&press(GameAction::Confirm)), Flow::Continue);
    assert_eq!(state.phase(), Phase::Playing);
    state
}

/// Step gravity until the current piece locks.
fn drop_until_locked(state: &mut GameState) {
    let locked_before = state.pieces_locked();
    for _ in 0..=BOARD_ROWS {
        state.update(&gravity_step());
        if state.pieces_locked() > locked_before {
            return;
        }
    }
    panic!("piece never locked");
}

const BOARD_ROWS: usize = 20;

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Menu);
    assert!(state.active().is_none());

    // Idle frames in the menu do nothing.
    assert_eq!(state.update(&idle()), Flow::Continue);
    assert_eq!(state.phase(), Phase::Menu);

    state.update(&press(GameAction::Confirm));
    assert!(state.is_playing());
    assert!(state.active().is_some());
    assert_eq!(state.score(), 0);
}

#[test]
fn test_o_piece_slides_right_and_lands() {
    let mut state = started(PieceKind::O);
    assert_eq!(state.active().map(|p| (p.x, p.y)), Some((4, 0)));

    state.update(&press(GameAction::MoveRight));
    state.update(&press(GameAction::MoveRight));
    assert_eq!(state.active().map(|p| p.x), Some(6));

    for expected_y in 1..=18 {
        state.update(&gravity_step());
        assert_eq!(state.active().map(|p| p.y), Some(expected_y));
    }

    // Blocked by the floor: lock and respawn.
    state.update(&gravity_step());
    assert_eq!(state.pieces_locked(), 1);

    let green = Cell::filled(palette::GREEN);
    for (x, y) in [(6, 18), (7, 18), (6, 19), (7, 19)] {
        assert_eq!(state.board().get(x, y), Some(green), "({x}, {y})");
    }
    assert_eq!(state.board().occupied_count(), 4);
    assert_eq!(state.score(), 0);
    assert_eq!(state.active().map(|p| (p.x, p.y)), Some((4, 0)));
}

#[test]
fn test_gravity_accumulates_small_ticks() {
    let mut state = started(PieceKind::T);

    // 12 * 16 = 192ms: not yet.
    for _ in 0..12 {
        state.update(&idle());
    }
    assert_eq!(state.active().map(|p| p.y), Some(0));
    assert_eq!(state.fall_timer_ms(), 192);

    // 208ms: one step, timer resets to zero (remainder dropped).
    state.update(&idle());
    assert_eq!(state.active().map(|p| p.y), Some(1));
    assert_eq!(state.fall_timer_ms(), 0);
}

#[test]
fn test_moves_apply_before_gravity() {
    let mut state = started(PieceKind::O);
    let frame = InputFrame::new(FALL_INTERVAL_MS)
        .with(GameAction::MoveLeft)
        .with(GameAction::SoftDrop);

    state.update(&frame);

    // Left, then soft drop, then gravity on the same tick.
    assert_eq!(state.active().map(|p| (p.x, p.y)), Some((3, 2)));
}

#[test]
fn test_left_and_right_on_same_tick_cancel_out() {
    let mut state = started(PieceKind::T);
    let frame = idle().with(GameAction::MoveLeft).with(GameAction::MoveRight);
    state.update(&frame);
    assert_eq!(state.active().map(|p| p.x), Some(4));
}

#[test]
fn test_single_line_clear_scores_100() {
    let mut state = started(PieceKind::O);
    for x in (0..10).filter(|x| *x != 4 && *x != 5) {
        state.board_mut().set(x, 19, Cell::filled(palette::GRAY));
    }

    drop_until_locked(&mut state);

    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    // The top half of the O drops into the cleared row.
    assert!(state.board().is_occupied(4, 19));
    assert!(state.board().is_occupied(5, 19));
    assert_eq!(state.board().occupied_count(), 2);
}

#[test]
fn test_two_adjacent_lines_score_200() {
    let mut state = started(PieceKind::O);
    for y in [18, 19] {
        for x in (0..10).filter(|x| *x != 4 && *x != 5) {
            state.board_mut().set(x, y, Cell::filled(palette::GRAY));
        }
    }

    drop_until_locked(&mut state);

    assert_eq!(state.score(), 200);
    assert_eq!(state.lines(), 2);
    assert_eq!(state.board().occupied_count(), 0);
}

#[test]
fn test_separated_lines_clear_in_one_pass() {
    let mut state = started(PieceKind::I);
    // The vertical I fills column 4 of rows 16..=19.
    for y in [16, 19] {
        for x in (0..10).filter(|x| *x != 4) {
            state.board_mut().set(x, y, Cell::filled(palette::GRAY));
        }
    }
    state.board_mut().set(0, 17, Cell::filled(palette::RED));
    state.board_mut().set(0, 18, Cell::filled(palette::ORANGE));

    drop_until_locked(&mut state);

    assert_eq!(state.lines(), 2);
    assert_eq!(state.score(), 200);

    // Rows 17 and 18 each moved down past the cleared row 19.
    let board = state.board();
    assert_eq!(board.get(0, 18), Some(Cell::filled(palette::RED)));
    assert_eq!(board.get(0, 19), Some(Cell::filled(palette::ORANGE)));
    assert_eq!(board.get(4, 18), Some(Cell::filled(palette::BLUE)));
    assert_eq!(board.get(4, 19), Some(Cell::filled(palette::BLUE)));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_every_kind_spawns_on_an_empty_board() {
    for kind in PieceKind::ALL {
        let state = started(kind);
        let active = state.active().unwrap();
        assert_eq!(active.kind, kind);
        assert!(!active.collides(state.board()), "{kind:?}");
    }
}

#[test]
fn test_stack_to_the_top_ends_game_and_keeps_score() {
    let mut state = started(PieceKind::O);
    // One clear first so there is a score to keep.
    for x in (0..10).filter(|x| *x != 4 && *x != 5) {
        state.board_mut().set(x, 19, Cell::filled(palette::GRAY));
    }
    drop_until_locked(&mut state);
    assert_eq!(state.score(), 100);

    // Keep dropping Os in the middle column until they reach the spawn.
    for _ in 0..BOARD_ROWS {
        if state.is_game_over() {
            break;
        }
        drop_until_locked(&mut state);
    }

    assert!(state.is_game_over());
    assert!(state.active().is_none());
    assert_eq!(state.score(), 100);
    assert!(matches!(
        state.events().last(),
        Some(CoreEvent::GameOver { score: 100, lines: 1 })
    ));
}

#[test]
fn test_game_over_confirm_goes_to_menu_then_restarts_fresh() {
    let mut state = started(PieceKind::O);
    state.board_mut().set(4, 2, Cell::filled(palette::GRAY));
    drop_until_locked(&mut state);
    assert!(state.is_game_over());

    // Moves are ignored once the game is over.
    state.update(&press(GameAction::MoveLeft));
    assert!(state.is_game_over());

    state.update(&press(GameAction::Confirm));
    assert_eq!(state.phase(), Phase::Menu);
    // Not reset yet.
    assert!(state.board().occupied_count() > 0);

    state.update(&press(GameAction::Confirm));
    assert!(state.is_playing());
    assert_eq!(state.board().occupied_count(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
}

#[test]
fn test_cancel_exits_from_menu_and_game_over_only() {
    let mut menu = GameState::new(1);
    assert_eq!(menu.update(&press(GameAction::Cancel)), Flow::Exit);

    let mut playing = started(PieceKind::T);
    assert_eq!(playing.update(&press(GameAction::Cancel)), Flow::Continue);
    assert!(playing.is_playing());

    playing.board_mut().set(4, 3, Cell::filled(palette::GRAY));
    drop_until_locked(&mut playing);
    // T spawns over the locked T: game over.
    assert!(playing.is_game_over());

    let both = idle().with(GameAction::Confirm).with(GameAction::Cancel);
    assert_eq!(playing.update(&both), Flow::Exit);
    assert!(playing.is_game_over());
}

#[test]
fn test_event_sequence_for_one_piece() {
    let mut state = started(PieceKind::O);
    let events = state.drain_events();
    assert_eq!(
        events.as_slice(),
        &[
            CoreEvent::GameStarted,
            CoreEvent::Spawned {
                kind: PieceKind::O,
                x: 4,
                y: 0
            },
        ]
    );

    drop_until_locked(&mut state);
    let events = state.drain_events();
    assert_eq!(
        events[0],
        CoreEvent::Locked {
            kind: PieceKind::O,
            x: 4,
            y: 18,
            lines_cleared: 0,
            score: 0
        }
    );
    assert!(matches!(events[1], CoreEvent::Spawned { .. }));
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    a.update(&press(GameAction::Confirm));
    b.update(&press(GameAction::Confirm));

    for _ in 0..10 {
        drop_until_locked(&mut a);
        drop_until_locked(&mut b);
        if a.is_game_over() {
            break;
        }
        assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
    }
    assert_eq!(a.board(), b.board());
}
