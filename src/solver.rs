//! This module contains the logic for solving hedgehog puzzles.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation. The solver emits `trace`- and `debug`-level
//! messages through the [log](https://docs.rs/log) facade while it
//! searches; without an installed logger it is silent.

use crate::{Hedgehog, HedgehogGrid, index};
use crate::topology::{Alignment, Topology};

use log::{debug, trace};

use std::vec;

/// An enumeration of the outcomes of searching a hedgehog puzzle. Since the
/// search is exhaustive, [Solution::Unsolvable] proves that no solution
/// exists; it is a normal outcome, not an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the puzzle is not solvable at all.
    Unsolvable,

    /// Indicates that a solution was found, which is wrapped in this
    /// instance. The puzzle may have further solutions; only the first one
    /// found under the deterministic candidate order is reported.
    Solved(HedgehogGrid)
}

/// A trait for structs which have the ability to search hedgehog puzzles
/// for a solution.
pub trait Solver {

    /// Solves, or attempts to solve, the provided puzzle. Implementers
    /// shall return [Solution::Solved] containing a full grid whenever they
    /// find a solution and [Solution::Unsolvable] once they can prove that
    /// no solution exists.
    fn solve(&self, hedgehog: &Hedgehog) -> Solution;
}

/// The mutable state of one search: the numbers currently written into the
/// cells, which of them are fixed clues, and an index from each assigned
/// number to its cell. Cells are identified by their flat index in
/// chunk-major order.
pub(crate) struct Board {
    chunks: usize,
    rows: usize,
    cols: usize,
    numbers: Vec<Option<usize>>,
    fixed: Vec<bool>,
    number_index: Vec<Option<usize>>,
    assigned: usize,
    root: usize
}

impl Board {

    /// Creates the initial search state for the given puzzle. All clue
    /// cells are marked as fixed and entered into the number index.
    pub(crate) fn new(hedgehog: &Hedgehog) -> Board {
        let grid = hedgehog.grid();
        let total = grid.total_cells();
        let mut numbers = vec![None; total];
        let mut fixed = vec![false; total];
        let mut number_index = vec![None; total];
        let mut assigned = 0;
        let mut root = 0;

        for (cell, &content) in grid.cells().iter().enumerate() {
            if let Some(number) = content {
                numbers[cell] = Some(number);
                fixed[cell] = true;
                number_index[number - 1] = Some(cell);
                assigned += 1;

                if number == 1 {
                    root = cell;
                }
            }
        }

        Board {
            chunks: grid.chunks(),
            rows: grid.rows(),
            cols: grid.cols(),
            numbers,
            fixed,
            number_index,
            assigned,
            root
        }
    }

    pub(crate) fn total_cells(&self) -> usize {
        self.numbers.len()
    }

    pub(crate) fn root(&self) -> usize {
        self.root
    }

    pub(crate) fn number(&self, cell: usize) -> Option<usize> {
        self.numbers[cell]
    }

    pub(crate) fn is_assigned(&self, cell: usize) -> bool {
        self.numbers[cell].is_some()
    }

    pub(crate) fn is_fixed(&self, cell: usize) -> bool {
        self.fixed[cell]
    }

    pub(crate) fn assigned_count(&self) -> usize {
        self.assigned
    }

    /// Gets the cell currently holding the given number, if any.
    pub(crate) fn cell_with_number(&self, number: usize) -> Option<usize> {
        if number == 0 || number > self.number_index.len() {
            None
        }
        else {
            self.number_index[number - 1]
        }
    }

    /// Writes the given number into the given cell and enters it into the
    /// number index. The cell must be unassigned and the number must not be
    /// held by any other cell.
    pub(crate) fn assign(&mut self, cell: usize, number: usize) {
        debug_assert!(self.numbers[cell].is_none());
        debug_assert!(self.number_index[number - 1].is_none());

        self.numbers[cell] = Some(number);
        self.number_index[number - 1] = Some(cell);
        self.assigned += 1;
    }

    /// Clears the given cell and removes its number from the number index,
    /// exactly inverting a previous [Board::assign] of the same cell.
    ///
    /// # Panics
    ///
    /// If the cell is a fixed clue. Fixed cells are never unassigned during
    /// a search, so this indicates a bug in the caller.
    pub(crate) fn unassign(&mut self, cell: usize) {
        assert!(!self.fixed[cell], "unassign called on a fixed cell");

        if let Some(number) = self.numbers[cell].take() {
            self.number_index[number - 1] = None;
            self.assigned -= 1;
        }
    }

    pub(crate) fn cell_at(&self, chunk: usize, row: usize, col: usize)
            -> usize {
        index(chunk, row, col, self.rows, self.cols)
    }

    pub(crate) fn position(&self, cell: usize) -> (usize, usize, usize) {
        let chunk_size = self.rows * self.cols;
        (cell / chunk_size, cell % chunk_size / self.cols, cell % self.cols)
    }

    /// Copies the current assignment into a fresh [HedgehogGrid].
    pub(crate) fn to_grid(&self) -> HedgehogGrid {
        let mut grid =
            HedgehogGrid::new(self.chunks, self.rows, self.cols).unwrap();

        for (cell, &content) in self.numbers.iter().enumerate() {
            if let Some(number) = content {
                let (chunk, row, col) = self.position(cell);
                grid.set_cell(chunk, row, col, number).unwrap();
            }
        }

        grid
    }
}

/// Computes the cells that may legally hold the number immediately
/// following the given cell's number. The result is freshly computed on
/// every invocation; there is no shared cursor state.
///
/// If the successor number is already held by a clue, the candidates are
/// either exactly that cell (if it is adjacent, a forced continuation) or
/// empty (the clue is unreachable from here, forcing a backtrack).
/// Otherwise, all unassigned cells reachable through the chunk's adjacency
/// entries are enumerated in adjacency-list order, then scan order within
/// each target chunk.
pub(crate) fn candidates_after(board: &Board, topology: &Topology,
        cell: usize) -> Vec<usize> {
    let number = board.number(cell).unwrap();
    let (chunk, row, col) = board.position(cell);

    if let Some(successor) = board.cell_with_number(number + 1) {
        return if topology.adjacent((chunk, row, col),
                board.position(successor)) {
            trace!("number {} is fixed and adjacent - forced continuation",
                number + 1);
            vec![successor]
        }
        else {
            trace!("number {} is fixed but not adjacent - no candidates",
                number + 1);
            Vec::new()
        };
    }

    let mut candidates = Vec::new();

    for adjacency in topology.adjacents(chunk) {
        match adjacency.alignment() {
            Alignment::Row =>
                for target_col in 0..board.cols {
                    let candidate =
                        board.cell_at(adjacency.chunk(), row, target_col);

                    if !board.is_assigned(candidate) {
                        candidates.push(candidate);
                    }
                },
            Alignment::Column =>
                for target_row in 0..board.rows {
                    let candidate =
                        board.cell_at(adjacency.chunk(), target_row, col);

                    if !board.is_assigned(candidate) {
                        candidates.push(candidate);
                    }
                },
            Alignment::Tube => {
                let candidate = board.cell_at(adjacency.chunk(), row, col);

                if !board.is_assigned(candidate) {
                    candidates.push(candidate);
                }
            }
        }
    }

    trace!("found {} candidates after number {}", candidates.len(), number);
    candidates
}

/// Indicates whether the board holds a complete solution. The two
/// conditions are independent and both required: every cell must be
/// assigned, and the cell holding the final number must be adjacent to the
/// root, closing the chain into a loop.
fn solved(board: &Board, topology: &Topology) -> bool {
    let total = board.total_cells();

    if board.assigned_count() != total {
        return false;
    }

    if let Some(last) = board.cell_with_number(total) {
        topology.adjacent(board.position(last), board.position(board.root()))
    }
    else {
        false
    }
}

struct Frame {
    cell: usize,
    candidates: vec::IntoIter<usize>
}

/// Runs the depth-first search on the given board. Each stack frame pairs a
/// placed cell with its remaining candidates; descending assigns the next
/// free number to a candidate, backtracking unassigns it again. The
/// `reorder` hook is applied to every freshly computed candidate list
/// before it is consumed, which the [generator](crate::generator) uses to
/// randomize the search.
///
/// Returns `true` if the search reached a solution, in which case the board
/// is left fully assigned, and `false` if it exhausted all possibilities.
pub(crate) fn search<F>(board: &mut Board, topology: &Topology,
        mut reorder: F) -> bool
where
    F: FnMut(&mut Vec<usize>)
{
    let root = board.root();
    let mut root_candidates = candidates_after(board, topology, root);
    reorder(&mut root_candidates);
    let mut stack = vec![Frame {
        cell: root,
        candidates: root_candidates.into_iter()
    }];

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.candidates.next(),
            None => {
                debug!("search exhausted - puzzle not solvable");
                return false;
            }
        };

        if let Some(candidate) = next {
            // Fixed cells already hold their number; the candidate
            // computation only offers them when they continue the chain.
            if !board.is_fixed(candidate) {
                board.assign(candidate, stack.len() + 1);
            }

            let mut candidates = candidates_after(board, topology, candidate);
            reorder(&mut candidates);
            stack.push(Frame {
                cell: candidate,
                candidates: candidates.into_iter()
            });
            trace!("depth: {}", stack.len());
        }
        else {
            if solved(board, topology) {
                debug!("solved");
                return true;
            }

            trace!("no further candidates - backtracking");
            let frame = stack.pop().unwrap();

            if !board.is_fixed(frame.cell) {
                board.unassign(frame.cell);
            }

            trace!("depth: {}", stack.len());
        }
    }
}

/// A [Solver](trait.Solver.html) which solves hedgehog puzzles by
/// depth-first search over the chain continuations, undoing assignments on
/// dead ends. Two things follow from this:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow if the
/// puzzle has few clues.
/// * It is exhaustive, so it finds a solution whenever one exists and
/// proves unsolvability otherwise.
///
/// The search is iterative with an explicit stack, so its depth is bounded
/// only by memory, not by the call stack.
pub struct BacktrackingSolver;

impl Solver for BacktrackingSolver {
    fn solve(&self, hedgehog: &Hedgehog) -> Solution {
        let mut board = Board::new(hedgehog);

        if search(&mut board, hedgehog.topology(), |_| {}) {
            Solution::Solved(board.to_grid())
        }
        else {
            Solution::Unsolvable
        }
    }
}
