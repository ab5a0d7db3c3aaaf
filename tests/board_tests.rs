use tictactoe::{Board, Mark, MoveError, NUM_CELLS, WINNING_LINES};

fn board_with(marks: &[(usize, Mark)]) -> Board {
    let mut board = Board::empty();
    for &(index, mark) in marks {
        board = board.with_mark(index, mark).unwrap();
    }
    board
}

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(Board::empty().winner(), None);
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in WINNING_LINES {
        for mark in [Mark::X, Mark::O] {
            let board = board_with(&[(line[0], mark), (line[1], mark), (line[2], mark)]);
            assert_eq!(board.winner(), Some(mark), "line {:?} should win for {}", line, mark);
        }
    }
}

#[test]
fn test_mixed_line_is_not_a_win() {
    // X X O across the top row
    let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_full_board_without_line_is_no_winner() {
    // X O X / X O O / O X X has no complete line
    let board = board_with(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::X),
        (4, Mark::O),
        (5, Mark::O),
        (6, Mark::O),
        (7, Mark::X),
        (8, Mark::X),
    ]);
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_with_mark_rejects_occupied_cell() {
    let board = board_with(&[(4, Mark::X)]);
    assert_eq!(board.with_mark(4, Mark::O).unwrap_err(), MoveError::CellOccupied);
    // rejected call left the original unchanged
    assert_eq!(board.cell(4).unwrap(), Some(Mark::X));
}

#[test]
fn test_with_mark_rejects_out_of_range() {
    let board = Board::empty();
    assert_eq!(board.with_mark(NUM_CELLS, Mark::X).unwrap_err(), MoveError::OutOfRange);
    assert_eq!(board.cell(NUM_CELLS).unwrap_err(), MoveError::OutOfRange);
}

#[test]
fn test_with_mark_produces_new_snapshot() {
    let before = Board::empty();
    let after = before.with_mark(0, Mark::X).unwrap();
    assert_eq!(before.cell(0).unwrap(), None);
    assert_eq!(after.cell(0).unwrap(), Some(Mark::X));
    // exactly one cell differs
    let differing = (0..NUM_CELLS)
        .filter(|&i| before.cell(i).unwrap() != after.cell(i).unwrap())
        .count();
    assert_eq!(differing, 1);
}

#[test]
fn test_display_renders_grid() {
    let board = board_with(&[(0, Mark::X), (4, Mark::O)]);
    assert_eq!(board.to_string(), "X . .\n. O .\n. . .\n");
}
