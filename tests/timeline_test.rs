//! Scenario tests for the history and time-travel state machine.

use retrace::{
    Board, GameStatus, GameView, LINES, Mark, MoveOrder, Position, Square, Timeline,
    compute_winner,
};

fn play(indices: &[usize]) -> Timeline {
    indices.iter().fold(Timeline::new(), |t, &i| {
        t.apply_index(i).expect("index in range")
    })
}

/// Builds a board from nine characters: `X`, `O`, anything else empty.
fn board(cells: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (slot, ch) in squares.iter_mut().zip(cells.chars()) {
        *slot = match ch {
            'X' => Square::Occupied(Mark::X),
            'O' => Square::Occupied(Mark::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_each_line_is_reported_with_its_mark() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let filled = line
                .iter()
                .fold(Board::new(), |b, &pos| b.with(pos, Square::Occupied(mark)));
            let win = compute_winner(&filled).expect("completed line");
            assert_eq!(win.mark(), mark);
            assert_eq!(win.line(), line);
        }
    }
}

#[test]
fn test_full_boards_without_lines_are_draws() {
    for cells in ["XOXXOOOXX", "XOXOXXOXO", "OXOOXXXOX", "XXOOOXXOX"] {
        let board = board(cells);
        assert_eq!(compute_winner(&board), None, "{cells}");
        assert!(retrace::is_draw(&board), "{cells}");
    }
}

#[test]
fn test_draw_status_through_play() {
    let t = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(t.status(), GameStatus::Draw);
    assert_eq!(GameView::from_timeline(&t).status(), "Draw");
}

#[test]
fn test_occupied_square_changes_nothing() {
    let t = play(&[0, 4]);
    for pos in [Position::TopLeft, Position::Center] {
        let after = t.apply_move(pos);
        assert_eq!(after.history_len(), t.history_len());
        assert_eq!(after.step(), t.step());
    }
}

#[test]
fn test_moves_after_win_change_nothing() {
    let t = play(&[0, 3, 1, 4, 2]);
    assert!(t.status().is_over());
    for pos in Position::ALL {
        let after = t.apply_move(pos);
        assert_eq!(after.history_len(), t.history_len());
        assert_eq!(after.step(), t.step());
    }
}

#[test]
fn test_new_move_after_jump_discards_redo_history() {
    let full = play(&[0, 1, 2, 3, 4]);
    for step in 0..full.history_len() {
        let rewound = full.jump_to(step).expect("valid step");
        let pos = Position::ALL
            .into_iter()
            .find(|&p| rewound.current().board().is_empty(p))
            .expect("an empty square");
        let next = rewound.apply_move(pos);
        assert_eq!(next.history_len(), step + 2);
        assert_eq!(next.step(), step + 1);
        assert_eq!(&next.history()[..=step], &full.history()[..=step]);
    }
}

#[test]
fn test_turn_follows_step_parity() {
    let t = play(&[0, 1, 2, 3, 5, 4]);
    for step in 0..t.history_len() {
        let at = t.jump_to(step).expect("valid step");
        let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(at.to_move(), expected);
    }
}

#[test]
fn test_corner_moves_without_center_do_not_win() {
    // X X . / O O . / . . X: O holds the center, so [0, 4, 8] is not X's line.
    let t = play(&[0, 4, 1, 3, 8]);
    assert_eq!(t.winner(), None);
    assert_eq!(t.status().to_string(), "Current player: O");
}

#[test]
fn test_anti_diagonal_scenario() {
    let t = play(&[4, 0, 8, 1, 2, 3, 6]);
    let win = t.winner().expect("anti-diagonal");
    assert_eq!(win.mark(), Mark::X);
    assert_eq!(
        win.line(),
        [Position::TopRight, Position::Center, Position::BottomLeft]
    );
    assert_eq!(t.status().to_string(), "Winner: X");
}

#[test]
fn test_main_diagonal_scenario() {
    let t = play(&[0, 1, 4, 2, 8]);
    let win = t.winner().expect("main diagonal");
    assert_eq!(win.mark(), Mark::X);
    assert_eq!(
        win.line(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(t.status().to_string(), "Winner: X");
}

#[test]
fn test_top_row_scenario() {
    let t = play(&[0, 3, 1, 4, 2]);
    let win = t.winner().expect("top row");
    assert_eq!(win.mark(), Mark::X);
    assert_eq!(
        win.line(),
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_toggle_twice_restores_order() {
    let t = play(&[0, 3, 1]);
    let steps = |t: &Timeline| -> Vec<usize> {
        GameView::from_timeline(t)
            .moves()
            .iter()
            .map(|m| *m.step())
            .collect()
    };

    let once = t.toggle_order();
    assert_eq!(once.order(), MoveOrder::Descending);
    assert_eq!(steps(&once), vec![3, 2, 1, 0]);

    let twice = once.toggle_order();
    assert_eq!(twice.order(), t.order());
    assert_eq!(steps(&twice), vec![0, 1, 2, 3]);
}

#[test]
fn test_jump_to_start_clears_result() {
    let t = play(&[0, 3, 1, 4, 2]);
    assert!(!GameView::from_timeline(&t).winning_line().is_empty());

    let start = t.jump_to(0).expect("step 0 always exists");
    let view = GameView::from_timeline(&start);
    assert_eq!(view.status(), "Current player: X");
    assert!(view.winning_line().is_empty());
    assert_eq!(*view.last_move(), None);
    assert_eq!(start.history_len(), t.history_len());
}

#[test]
fn test_jump_past_history_is_rejected() {
    let t = play(&[0, 3]);
    assert!(t.jump_to(t.history_len()).is_err());
    assert!(t.jump_to(usize::MAX).is_err());
}
