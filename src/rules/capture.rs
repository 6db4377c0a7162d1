//! Capture detection.
//!
//! Both capture conditions are built on one scan: from an index in a row or
//! column, count the pieces of one player that run contiguously to the left
//! and to the right of it.
//!
//! - A piece placed at the index *completes a run* when
//!   `left + right + 1 == 3` on its row or its column. Runs of two or of four
//!   and more do not count.
//! - A cell vacated at the index *exposes a run* when `left == 3` or
//!   `right == 3` on its row or its column.
//!
//! A drop captures when the dropped piece completes a run. A move captures
//! when the moved piece completes a run at its destination or the vacated
//! source exposes one.

use crate::core::config::RUN_LENGTH;
use crate::core::{Board, Cell, Line, Player, Position};

/// Contiguous runs of `player`'s pieces on each side of `index`.
///
/// Returns `(left, right)`. The cell at `index` itself is not counted.
#[must_use]
pub fn adjacent_runs(line: &Line, index: usize, player: Player) -> (usize, usize) {
    let owned = |cell: &&Cell| cell.is_owned_by(player);

    let right = line.iter().skip(index + 1).take_while(owned).count();
    let left = line[..index].iter().rev().take_while(owned).count();

    (left, right)
}

/// Check whether `player`'s piece at `position` is part of a run of exactly
/// three on its row or its column.
///
/// `position` must be on the board; off-board positions never complete a run.
#[must_use]
pub fn completes_run(board: &Board, player: Player, position: Position) -> bool {
    any_line(board, position, |line, i| {
        let (left, right) = adjacent_runs(line, i, player);
        left + right + 1 == RUN_LENGTH
    })
}

/// Check whether the empty cell at `position` borders a run of exactly three
/// of `player`'s pieces on its row or its column.
#[must_use]
pub fn exposes_run(board: &Board, player: Player, position: Position) -> bool {
    any_line(board, position, |line, i| {
        let (left, right) = adjacent_runs(line, i, player);
        left == RUN_LENGTH || right == RUN_LENGTH
    })
}

/// Capture condition after `player` dropped at `position`.
#[must_use]
pub fn is_drop_capture(board: &Board, player: Player, position: Position) -> bool {
    completes_run(board, player, position)
}

/// Capture condition after `player` moved from `source` to `destination`.
#[must_use]
pub fn is_move_capture(
    board: &Board,
    player: Player,
    source: Position,
    destination: Position,
) -> bool {
    completes_run(board, player, destination) || exposes_run(board, player, source)
}

fn any_line(board: &Board, position: Position, check: impl Fn(&Line, usize) -> bool) -> bool {
    let Some((r, c)) = position.indices() else {
        return false;
    };

    check(&board.row(r), c) || check(&board.column(c), r)
}
