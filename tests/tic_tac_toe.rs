extern crate tic_tac_toe;

use itertools::Itertools;

use tic_tac_toe::game::tic_tac_toe::Line;
use tic_tac_toe::game::{
    Board, FinishedState, Game, GameState, GridIndex, MoveOutcome, Piece, TicTacToe,
};

const SIZE: usize = 3;

fn all_lines(size: usize) -> Vec<Line> {
    (0..size)
        .map(Line::Row)
        .chain((0..size).map(Line::Col))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
        .collect()
}

fn cells_of(line: Line, size: usize) -> Vec<GridIndex> {
    (0..size)
        .map(|i| match line {
            Line::Row(row) => GridIndex::new(row, i),
            Line::Col(col) => GridIndex::new(i, col),
            Line::MainDiagonal => GridIndex::new(i, i),
            Line::AntiDiagonal => GridIndex::new(i, size - 1 - i),
        })
        .collect()
}

/// Picks `count` cells outside of `line` such that no line of the board is fully covered by them.
fn filler_cells(line: Line, count: usize) -> Vec<GridIndex> {
    let on_line = cells_of(line, SIZE);
    let free: Vec<GridIndex> = (0..SIZE)
        .cartesian_product(0..SIZE)
        .map(GridIndex::from)
        .filter(|idx| !on_line.contains(idx))
        .collect();
    free.into_iter()
        .combinations(count)
        .find(|cells| {
            all_lines(SIZE)
                .into_iter()
                .all(|l| !cells_of(l, SIZE).iter().all(|idx| cells.contains(idx)))
        })
        .unwrap()
}

fn play(game: &mut TicTacToe, moves: impl IntoIterator<Item = GridIndex>) -> GameState {
    let mut state = game.state();
    for idx in moves {
        let outcome = game.update(idx).unwrap();
        assert!(outcome.is_placed(), "move {} was rejected", idx);
        state = outcome.state();
    }
    state
}

#[test]
fn row_win_scenario() {
    let mut game = TicTacToe::new("alice", "bob", SIZE).unwrap();
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)].map(GridIndex::from);
    let state = play(&mut game, moves);

    assert_eq!(state, GameState::Finished(FinishedState::Win(0)));
    assert_eq!(game.winner().map(|p| p.piece()), Some(Piece::X));
    assert_eq!(game.winner().map(|p| p.name()), Some("alice"));
}

#[test]
fn x_wins_any_line_in_any_order() {
    for line in all_lines(SIZE) {
        let filler = filler_cells(line, SIZE - 1);
        for order in cells_of(line, SIZE).into_iter().permutations(SIZE) {
            let mut game = TicTacToe::new("x", "o", SIZE).unwrap();
            let moves = order.into_iter().interleave(filler.iter().copied());
            let state = play(&mut game, moves);
            assert_eq!(
                state,
                GameState::Finished(FinishedState::Win(0)),
                "line {:?}",
                line
            );
        }
    }
}

#[test]
fn o_wins_any_line_in_any_order() {
    for line in all_lines(SIZE) {
        let filler = filler_cells(line, SIZE);
        for order in cells_of(line, SIZE).into_iter().permutations(SIZE) {
            let mut game = TicTacToe::new("x", "o", SIZE).unwrap();
            let moves = filler.iter().copied().interleave(order);
            let state = play(&mut game, moves);
            assert_eq!(
                state,
                GameState::Finished(FinishedState::Win(1)),
                "line {:?}",
                line
            );
            assert_eq!(game.winner().map(|p| p.piece()), Some(Piece::O));
        }
    }
}

#[test]
fn draw_scenario() {
    let mut game = TicTacToe::new("alice", "bob", SIZE).unwrap();
    // X O X
    // X O O
    // O X X
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]
    .map(GridIndex::from);
    play(&mut game, moves);
    assert!(game.board().empty_cells().is_empty());

    assert_eq!(
        game.begin_turn(),
        Ok(GameState::Finished(FinishedState::Draw))
    );
    assert!(game.is_finished());
    assert_eq!(game.winner(), None);
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = TicTacToe::new("alice", "bob", SIZE).unwrap();
    game.make_move(1, 1).unwrap();
    let board = game.board().clone();

    for (row, col) in [(1, 1), (SIZE, 0), (0, SIZE), (SIZE, SIZE)] {
        assert_eq!(
            game.make_move(row, col),
            Ok(MoveOutcome::Rejected(GameState::Turn(1)))
        );
        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player().map(|p| p.piece()), Some(Piece::O));
    }
}

#[test]
fn empty_cells_shrink_by_one_per_placement() {
    let mut board = Board::new(4).unwrap();
    let mut expected = 16;
    let mut piece = Piece::X;
    while let Some(idx) = board.empty_cells().into_iter().last() {
        assert!(board.place(idx.row(), idx.col(), piece));
        expected -= 1;
        assert_eq!(board.empty_cells().len(), expected);
        assert_eq!(board.get(idx.row(), idx.col()), Some(piece));
        piece = if piece == Piece::X { Piece::O } else { Piece::X };
    }
    assert_eq!(expected, 0);
    assert!(board.is_full());
}

#[test]
fn larger_board_needs_full_line() {
    let mut game = TicTacToe::new("alice", "bob", 5).unwrap();
    // four in a row is not enough on a 5x5 board
    let moves = [(2, 0), (0, 0), (2, 1), (0, 1), (2, 2), (0, 2), (2, 3), (4, 4)]
        .map(GridIndex::from);
    assert_eq!(play(&mut game, moves), GameState::Turn(0));

    assert_eq!(
        game.make_move(2, 4),
        Ok(MoveOutcome::Placed(GameState::Finished(FinishedState::Win(0))))
    );
}
