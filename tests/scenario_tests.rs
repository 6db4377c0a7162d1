//! Scenario tests: short games and positions that exercise one rule each.

use dala::core::config::{LOSS_THRESHOLD, PIECES_PER_PLAYER};
use dala::{Action, Cell, GameMode, GameState, MoveError, MovementError, Player, Position, Turn};

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn assert_conserved(game: &GameState) {
    for player in Player::ALL {
        let total = game.pieces_on_board(player)
            + usize::from(game.remains(player))
            + usize::from(game.lost(player));
        assert_eq!(total, usize::from(PIECES_PER_PLAYER), "{player}\n{game}");
    }
}

// =============================================================================
// Opening
// =============================================================================

#[test]
fn test_central_occupation() {
    let mut game = GameState::new();

    game.drop_piece(Player::Zero, pos(2, 2), None).unwrap();
    assert_eq!(game.remains(Player::Zero), 11);
    assert_eq!(game.whos_turn(), Turn::Player(Player::One));

    game.drop_piece(Player::One, pos(3, 3), None).unwrap();

    let before = game;
    assert_eq!(
        game.drop_piece(Player::Zero, pos(0, 0), None),
        Err(MoveError::CentralNotOccupied)
    );
    assert_eq!(game, before);

    game.drop_piece(Player::Zero, pos(2, 3), None).unwrap();
    game.drop_piece(Player::One, pos(3, 2), None).unwrap();

    // Both players have made their two central drops.
    game.drop_piece(Player::Zero, pos(0, 0), None).unwrap();
    game.drop_piece(Player::One, pos(5, 5), None).unwrap();
    assert_eq!(game.remains(Player::Zero), 9);
    assert_eq!(game.remains(Player::One), 9);
    assert_conserved(&game);
}

#[test]
fn test_opening_rule_is_per_player() {
    // Player one has finished the opening; player zero has not.
    let mut game = GameState::builder()
        .board_text(
            "
            ......
            ......
            ..X...
            ..XO..
            ......
            ......
            ",
        )
        .unwrap()
        .remains([11, 10])
        .build();

    assert_eq!(
        game.drop_piece(Player::Zero, pos(0, 5), None),
        Err(MoveError::CentralNotOccupied)
    );
    game.drop_piece(Player::Zero, pos(2, 3), None).unwrap();
    game.drop_piece(Player::One, pos(0, 5), None).unwrap();
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_drop_capture() {
    let mut game = GameState::builder()
        .board_text(
            "
            ......
            .OO...
            ..OX..
            ..XX..
            ......
            ......
            ",
        )
        .unwrap()
        .remains([9, 9])
        .build();
    assert_conserved(&game);

    let before = game;
    assert_eq!(
        game.drop_piece(Player::Zero, pos(1, 3), None),
        Err(MoveError::MustCapture)
    );
    assert_eq!(game, before);

    game.drop_piece(Player::Zero, pos(1, 3), Some(pos(2, 3))).unwrap();

    assert_eq!(game.lost(Player::One), 1);
    assert_eq!(game.pieces_on_board(Player::One), 2);
    assert_eq!(game.board().get(pos(2, 3)), Some(Cell::Empty));
    assert_eq!(game.whos_turn(), Turn::Player(Player::One));
    assert_conserved(&game);
}

#[test]
fn test_runs_of_two_and_four_do_not_capture() {
    let game = GameState::builder()
        .board_text(
            "
            OOO...
            ......
            ..OX..
            ..XX..
            .....X
            ......
            ",
        )
        .unwrap()
        .remains([7, 8])
        .build();

    // (0, 3) would make four in a row.
    let mut four = game;
    assert_eq!(
        four.drop_piece(Player::Zero, pos(0, 3), Some(pos(3, 3))),
        Err(MoveError::MustNotCapture)
    );
    four.drop_piece(Player::Zero, pos(0, 3), None).unwrap();

    // (1, 0) only pairs up with (0, 0) on column 0.
    let mut two = game;
    assert_eq!(
        two.drop_piece(Player::Zero, pos(1, 0), Some(pos(3, 3))),
        Err(MoveError::MustNotCapture)
    );
    two.drop_piece(Player::Zero, pos(1, 0), None).unwrap();

    // (1, 2) sits between (0, 2) and (2, 2) for exactly three.
    let mut three = game;
    assert_eq!(
        three.drop_piece(Player::Zero, pos(1, 2), None),
        Err(MoveError::MustCapture)
    );
}

#[test]
fn test_column_capture() {
    let mut game = GameState::builder()
        .board_text(
            "
            ......
            ....X.
            ....X.
            ..OO..
            ..X...
            O.....
            ",
        )
        .unwrap()
        .remains([9, 9])
        .turn(Player::One)
        .build();

    game.drop_piece(Player::One, pos(3, 4), Some(pos(5, 0))).unwrap();
    assert_eq!(game.lost(Player::Zero), 1);
    assert_eq!(game.board().get(pos(5, 0)), Some(Cell::Empty));
}

#[test]
fn test_move_exposes_run() {
    // Sliding (2, 3) out from between O O O and O leaves O O O . O on row 2.
    let mut game = GameState::builder()
        .board_text(
            "
            ......
            ....X.
            OOOOO.
            ......
            ..X...
            ......
            ",
        )
        .unwrap()
        .remains([0, 0])
        .build();

    let before = game;
    assert_eq!(
        game.move_piece(Player::Zero, pos(2, 3), pos(3, 3), None),
        Err(MoveError::MustCapture)
    );
    assert_eq!(game, before);

    game.move_piece(Player::Zero, pos(2, 3), pos(3, 3), Some(pos(4, 2)))
        .unwrap();
    assert_eq!(game.lost(Player::One), 1);
    assert_eq!(game.board().get(pos(2, 3)), Some(Cell::Empty));
    assert_eq!(game.board().get(pos(3, 3)), Some(Cell::Owner(Player::Zero)));
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn test_two_step_moves_always_fail() {
    let game = GameState::builder()
        .board_text(
            "
            O.....
            ......
            ..X...
            ......
            ......
            .....O
            ",
        )
        .unwrap()
        .remains([0, 0])
        .build();

    for source in Position::all() {
        for destination in Position::all() {
            let reachable = source.manhattan_distance(destination) == 2;
            if !reachable || !game.board().is_empty_at(destination) {
                continue;
            }

            let mut trial = game;
            let result = trial.move_piece(Player::Zero, source, destination, None);
            assert!(
                matches!(
                    result,
                    Err(MoveError::IllegalMovement {
                        reason: MovementError::NoPiece | MovementError::TooFar,
                        ..
                    })
                ),
                "{source} -> {destination}: {result:?}"
            );
            assert_eq!(trial, game);
        }
    }
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_tenth_capture_ends_game() {
    let mut game = GameState::builder()
        .board_text(
            "
            OO....
            ..O...
            ......
            ......
            ......
            ....XX
            ",
        )
        .unwrap()
        .remains([0, 0])
        .lost([0, LOSS_THRESHOLD - 1])
        .build();
    assert_eq!(game.game_mode(), GameMode::Move);
    assert_eq!(game.winner(), None);

    let slide = Action::move_from(pos(1, 2), pos(0, 2));
    let before = game;
    assert_eq!(game.apply(Player::Zero, &slide), Err(MoveError::MustCapture));
    assert_eq!(game, before);

    let err = game
        .apply(Player::Zero, &slide.with_capture(pos(5, 5)))
        .unwrap_err();
    assert!(err.is_terminal());
    assert_eq!(err.winner(), Some(Player::Zero));

    assert_eq!(game.game_mode(), GameMode::End);
    assert_eq!(game.winner(), Some(Player::Zero));
    assert_eq!(game.board().get(pos(0, 2)), Some(Cell::Owner(Player::Zero)));
    assert_eq!(game.board().get(pos(5, 5)), Some(Cell::Empty));
    assert_eq!(game.pieces_on_board(Player::One), 1);
}

#[test]
fn test_game_over_signal() {
    let mut game = GameState::builder()
        .board_text(
            "
            OO.X..
            ......
            ......
            ......
            ......
            ......
            ",
        )
        .unwrap()
        .remains([1, 0])
        .lost([0, LOSS_THRESHOLD - 1])
        .build();

    let result = game.drop_piece(Player::Zero, pos(0, 2), Some(pos(0, 3)));
    assert_eq!(
        result,
        Err(MoveError::GameOver {
            winner: Player::Zero
        })
    );
    assert!(result.unwrap_err().is_terminal());

    assert_eq!(game.game_mode(), GameMode::End);
    assert_eq!(game.winner(), Some(Player::Zero));
    assert_eq!(game.whos_turn(), Turn::GameEnded);
    assert_eq!(game.lost(Player::One), LOSS_THRESHOLD);
    assert_eq!(game.remains(Player::Zero), 0);
    assert_eq!(game.board().get(pos(0, 3)), Some(Cell::Empty));
    assert!(game.legal_actions().is_empty());

    let after = game;
    for player in Player::ALL {
        assert_eq!(
            game.drop_piece(player, pos(5, 5), None),
            Err(MoveError::NotYourTurn)
        );
        assert_eq!(
            game.move_piece(player, pos(0, 0), pos(1, 0), None),
            Err(MoveError::NotYourTurn)
        );
    }
    assert_eq!(game, after);
}
