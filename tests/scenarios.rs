//! End-to-end scenarios run against the public crate surface.

use goban_engine::tactics;
use goban_engine::{
    Board, Bot, BotConfig, BotLevel, Color, Engine, KoRule, Move, Pos,
};

fn place_all(board: &mut Board, color: Color, points: &[(i32, i32)]) {
    for &(row, col) in points {
        assert!(
            board.place_stone(color, Pos::new(row, col)),
            "setup placement {:?} at ({}, {}) failed",
            color,
            row,
            col
        );
    }
}

#[test]
fn scenario_simple_capture() {
    let mut board = Board::new();
    place_all(&mut board, Color::Black, &[(0, 0), (0, 2)]);
    place_all(&mut board, Color::White, &[(0, 1), (2, 1)]);
    place_all(&mut board, Color::Black, &[(1, 2), (1, 1), (1, 0)]);

    assert_eq!(board.stone_at(Pos::new(0, 1)), None);
    assert_eq!(board.stone_at(Pos::new(2, 1)), Some(Color::White));

    let text = board.to_string();
    assert_eq!(text.lines().nth(0).unwrap(), "B.B......");
}

#[test]
fn scenario_suicide_rejected() {
    let mut board = Board::new();
    place_all(&mut board, Color::White, &[(0, 1), (1, 0)]);
    let before = board.to_string();

    assert!(!board.place_stone(Color::Black, Pos::new(0, 0)));
    assert_eq!(board.to_string(), before);
}

#[test]
fn scenario_ko() {
    for ko_rule in [KoRule::PositionalSuperko, KoRule::Simple] {
        let mut board = Board::with_ko_rule(ko_rule);
        place_all(&mut board, Color::Black, &[(0, 1), (1, 0), (2, 1)]);
        place_all(&mut board, Color::White, &[(0, 2), (2, 2), (1, 3), (1, 1)]);

        // Black captures the ko stone
        assert!(board.place_stone(Color::Black, Pos::new(1, 2)));
        // The immediate recapture is rejected
        assert!(!board.place_stone(Color::White, Pos::new(1, 1)));
        // After playing elsewhere the recapture becomes legal
        assert!(board.place_stone(Color::White, Pos::new(6, 6)));
        assert!(board.place_stone(Color::White, Pos::new(1, 1)));
    }
}

#[test]
fn scenario_ladder_capture() {
    // A two-liberty white runner on the edge: black reads the chase to the
    // end and captures within depth.
    let mut board = Board::new();
    place_all(&mut board, Color::Black, &[(1, 3), (2, 4)]);
    place_all(&mut board, Color::White, &[(1, 4)]);

    assert_eq!(
        tactics::find_ladder_move(&board, Color::Black, 6),
        Some(Pos::new(1, 5))
    );

    // Drive the ladder through a bot so the whole pipeline is exercised
    let mut bot = Bot::seeded(BotLevel::Medium, Color::Black, 21);
    for &(color, row, col) in &[
        (Color::Black, 1, 3),
        (Color::Black, 2, 4),
        (Color::White, 1, 4),
    ] {
        assert!(bot.play(Move::Place(color, Pos::new(row, col))));
    }

    let mut captured = false;
    for _ in 0..10 {
        let mv = bot.get_move().expect("the chase never passes");
        assert_eq!(mv.color(), Color::Black);
        assert!(
            matches!(mv, Move::Place(..)),
            "unexpected resignation in a winning chase"
        );
        assert!(bot.play(mv));

        if bot.board().groups().all(|g| g.color != Color::White) {
            captured = true;
            break;
        }
        let white = bot
            .board()
            .groups()
            .find(|g| g.color == Color::White && g.is_in_atari())
            .expect("the runner must stay in atari");
        let esc = white.liberties.first().unwrap();
        assert!(bot.play(Move::Place(Color::White, esc)));
    }
    assert!(captured, "ladder failed to capture within depth");
}

#[test]
fn scenario_eye_detection() {
    // Interior eye with its diagonal support
    let mut board = Board::new();
    place_all(
        &mut board,
        Color::Black,
        &[(3, 4), (4, 3), (4, 5), (5, 4), (3, 3), (3, 5), (5, 3)],
    );
    assert!(board.is_point_an_eye(Pos::new(4, 4), Color::Black));

    // Corner eye: every on-grid diagonal must be friendly
    let mut corner = Board::new();
    place_all(&mut corner, Color::Black, &[(0, 1), (1, 0), (1, 1)]);
    assert!(corner.is_point_an_eye(Pos::new(0, 0), Color::Black));
    assert!(!corner.is_point_an_eye(Pos::new(0, 0), Color::White));
}

#[test]
fn scenario_hard_bot_resigns() {
    // The black corner group's only escape leaves it in atari with no
    // counter-capture anywhere.
    let mut engine = Engine::new();
    let handle = engine.register(Bot::seeded(BotLevel::Hard, Color::Black, 13));

    for (color, row, col) in [
        (Color::Black, 0, 0),
        (Color::White, 1, 0),
        (Color::White, 1, 1),
        (Color::White, 0, 3),
    ] {
        assert_eq!(
            engine.play(handle, Move::Place(color, Pos::new(row, col))),
            Ok(true)
        );
    }

    assert_eq!(
        engine.get_move(handle),
        Ok(Some(Move::Resign(Color::Black)))
    );
    assert!(engine.destroy(handle).is_ok());
}

#[test]
fn scenario_engine_round_trip() {
    let mut engine = Engine::new();
    let handle = engine.register(Bot::from_config_seeded(
        BotConfig {
            minimax_depth: 1,
            ..BotConfig::default()
        },
        Color::White,
        8,
    ));

    assert_eq!(
        engine.play(handle, Move::Place(Color::Black, Pos::new(4, 4))),
        Ok(true)
    );
    let reply = engine.get_move(handle).unwrap();
    let Some(Move::Place(color, pos)) = reply else {
        panic!("expected a placement, got {:?}", reply);
    };
    assert_eq!(color, Color::White);
    assert!(engine.play(handle, Move::Place(color, pos)).unwrap());
    assert!(engine.destroy(handle).is_ok());
}
