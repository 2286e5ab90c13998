//! End-to-end game scenarios through the public API

use gomoku::games::win_detector::{self, Orientation};
use gomoku::{
    Cell, Color, GameController, GameStatus, GomokuBoard, MoveResult, PlacementError, BOARD_SIZE,
};

const N: i32 = BOARD_SIZE as i32;

#[test]
fn out_of_bounds_never_mutates() {
    let mut controller = GameController::new();
    controller.try_place(7, 7);
    let before = controller.board().clone();

    let outside = [(-1, -1), (-1, 7), (7, -1), (N, 0), (0, N), (N, N), (i32::MAX, 3), (3, i32::MIN)];
    for (col, row) in outside {
        let expected = PlacementError::OutOfBounds { col, row };
        assert_eq!(controller.board().cell_at(col, row), Err(expected));
        assert_eq!(controller.try_place(col, row), MoveResult::Rejected(expected));

        let mut board = before.clone();
        assert_eq!(board.place(col, row, Color::Black), Err(expected));
        assert_eq!(board, before);
    }
    assert_eq!(controller.board(), &before);
    assert_eq!(controller.current_turn(), Color::White);
}

#[test]
fn second_placement_on_same_cell_is_rejected() {
    let mut controller = GameController::new();
    for (col, row) in [(0, 0), (14, 14), (7, 3)] {
        assert!(controller.try_place(col, row).accepted());
        let after_first = controller.board().clone();
        let turn = controller.current_turn();

        let result = controller.try_place(col, row);
        assert_eq!(result.rejection(), Some(PlacementError::CellOccupied { col, row }));
        assert_eq!(controller.board(), &after_first);
        assert_eq!(controller.current_turn(), turn);
    }
}

#[test]
fn turn_alternates_on_non_winning_moves() {
    let mut controller = GameController::new();
    // Stones spread out so that no line forms
    let moves: Vec<(i32, i32)> = (0..N).step_by(3).flat_map(|c| (0..N).step_by(3).map(move |r| (c, r))).collect();
    for (k, &(col, row)) in moves.iter().enumerate() {
        let expected = if k % 2 == 0 { Color::Black } else { Color::White };
        assert_eq!(controller.current_turn(), expected, "before move {}", k);
        let result = controller.try_place(col, row);
        assert_eq!(result.color_placed(), Some(expected));
        assert_eq!(result.next_turn(), Some(expected.opponent()));
    }
}

/// Plays `line` for the current color with the opponent answering on `filler`.
/// Returns the result of the last stone of `line`.
fn play_line(controller: &mut GameController, line: &[(i32, i32)], filler: &[(i32, i32)]) -> MoveResult {
    let mut result = None;
    for (i, &(col, row)) in line.iter().enumerate() {
        result = Some(controller.try_place(col, row));
        if i + 1 < line.len() {
            let (fc, fr) = filler[i];
            assert!(!controller.try_place(fc, fr).is_win());
        }
    }
    result.expect("line must not be empty")
}

#[test]
fn five_wins_in_every_orientation_four_does_not() {
    let filler = [(0, 14), (2, 14), (4, 14), (6, 14), (8, 14)];
    let cases = [
        (Orientation::Horizontal, (1, 0)),
        (Orientation::Vertical, (0, 1)),
        (Orientation::Diagonal, (1, 1)),
        (Orientation::AntiDiagonal, (1, -1)),
    ];
    for (orientation, (dc, dr)) in cases {
        let line: Vec<(i32, i32)> = (0..5).map(|i| (5 + i * dc, 6 + i * dr)).collect();

        let mut four = GameController::new();
        let result = play_line(&mut four, &line[..4], &filler);
        assert!(!result.is_win(), "{:?} with four stones", orientation);
        assert_eq!(four.status(), GameStatus::InProgress);

        let mut five = GameController::new();
        let result = play_line(&mut five, &line, &filler);
        assert_eq!(
            result,
            MoveResult::Won {
                mv: gomoku::GomokuMove(line[4].0, line[4].1),
                color: Color::Black,
                orientation,
            }
        );
    }
}

#[test]
fn overline_of_six_wins() {
    let mut board = GomokuBoard::new();
    for col in [2, 3, 4, 6, 7] {
        board.place(col, 10, Color::White).unwrap();
    }
    board.place(5, 10, Color::White).unwrap();
    assert_eq!(
        win_detector::run_length(&board, 5, 10, Orientation::Horizontal),
        6
    );
    assert!(win_detector::is_winning_placement(&board, 5, 10));
}

#[test]
fn adjacent_opponent_stones_do_not_count() {
    let mut board = GomokuBoard::new();
    for row in 0..3 {
        board.place(4, row, Color::White).unwrap();
    }
    for row in 3..5 {
        board.place(4, row, Color::Black).unwrap();
    }
    for row in 6..9 {
        board.place(4, row, Color::White).unwrap();
    }
    board.place(4, 5, Color::Black).unwrap();
    assert_eq!(win_detector::run_length(&board, 4, 5, Orientation::Vertical), 3);
    assert!(!win_detector::is_winning_placement(&board, 4, 5));
}

#[test]
fn reset_is_idempotent() {
    let mut controller = GameController::new();
    controller.try_place(1, 1);
    controller.try_place(2, 2);
    for _ in 0..3 {
        assert_eq!(controller.restart(), Color::Black);
        assert_eq!(controller.board(), &GomokuBoard::new());
        assert_eq!(controller.status(), GameStatus::InProgress);
    }

    let mut board = GomokuBoard::new();
    board.place(0, 0, Color::Black).unwrap();
    board.reset();
    let once = board.clone();
    board.reset();
    assert_eq!(board, once);
}

#[test]
fn black_wins_horizontally_after_scattered_white_moves() {
    let mut controller = GameController::new();
    let black = [(7, 7), (8, 7), (9, 7), (10, 7)];
    let white = [(0, 0), (14, 0), (0, 14), (3, 12)];
    for (b, w) in black.iter().zip(white.iter()) {
        assert_eq!(controller.try_place(b.0, b.1).next_turn(), Some(Color::White));
        assert_eq!(controller.try_place(w.0, w.1).next_turn(), Some(Color::Black));
    }

    let result = controller.try_place(11, 7);
    assert!(result.is_win());
    assert_eq!(result.winning_color(), Some(Color::Black));
    assert_eq!(controller.status(), GameStatus::Won(Color::Black));
    assert_eq!(controller.current_turn(), Color::Black);

    assert_eq!(
        controller.try_place(12, 7),
        MoveResult::Rejected(PlacementError::GameAlreadyOver)
    );
    assert_eq!(controller.board().cell_at(12, 7), Ok(Cell::Empty));
}

#[test]
fn rejected_move_leaves_turn_with_white() {
    let mut controller = GameController::new();
    controller.try_place(0, 0);
    let result = controller.try_place(0, 0);
    assert_eq!(
        result,
        MoveResult::Rejected(PlacementError::CellOccupied { col: 0, row: 0 })
    );
    assert_eq!(controller.board().cell_at(0, 0), Ok(Cell::Black));
    assert_eq!(controller.current_turn(), Color::White);
}

#[test]
fn independent_games_do_not_share_state() {
    let mut first = GameController::new();
    let second = GameController::new();
    first.try_place(7, 7);
    assert_eq!(first.board().stone_count(), 1);
    assert_eq!(second.board().stone_count(), 0);
    assert_eq!(second.current_turn(), Color::Black);
}
