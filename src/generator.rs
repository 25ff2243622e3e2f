//! This module contains logic for generating random hedgehog puzzles.
//!
//! Generation of puzzles is done by first generating a grid containing a
//! full chain with a [Generator] and then removing some clues using a
//! [Reducer].

use crate::{Hedgehog, HedgehogGrid};
use crate::error::{HedgehogError, HedgehogResult};
use crate::solver::{search, BacktrackingSolver, Board, Solution, Solver};
use crate::topology::Topology;

use log::debug;

use rand::Rng;
use rand::rngs::ThreadRng;

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: &mut Vec<T>) {
    let len = values.len();

    if len < 2 {
        return;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        values.swap(i, j);
    }
}

/// A generator randomly generates a full [Hedgehog], that is, a puzzle
/// whose grid already contains a complete closed chain. It uses a random
/// number generator to decide where the chain runs. For most cases,
/// sensible defaults are provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to make its random
    /// decisions.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to make its random decisions.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill(&mut self, hedgehog: &Hedgehog) -> HedgehogResult<HedgehogGrid> {
        let mut board = Board::new(hedgehog);
        let rng = &mut self.rng;
        let found = search(&mut board, hedgehog.topology(),
            |candidates| shuffle(rng, candidates));

        if found {
            Ok(board.to_grid())
        }
        else {
            Err(HedgehogError::UnsatisfiableTopology)
        }
    }

    /// Generates a new random [Hedgehog] whose grid contains a complete
    /// closed chain on the given topology. The chain's root is placed on a
    /// random cell and the continuation is searched with randomized
    /// candidate order, so repeated calls yield different chains.
    ///
    /// # Arguments
    ///
    /// * `rows`: The number of rows in each chunk. Must be greater than 0.
    /// * `cols`: The number of columns in each chunk. Must be greater
    /// than 0.
    /// * `topology`: The [Topology] which defines cell adjacency. The chunk
    /// count of the generated grid is taken from here.
    ///
    /// # Errors
    ///
    /// * `HedgehogError::InvalidDimensions` If `rows` or `cols` is invalid
    /// (zero), or the topology has no chunks.
    /// * `HedgehogError::UnsatisfiableTopology` If no closed chain covering
    /// all cells exists on the given topology and dimensions.
    pub fn generate(&mut self, rows: usize, cols: usize, topology: Topology)
            -> HedgehogResult<Hedgehog> {
        let mut grid = HedgehogGrid::new(topology.chunk_count(), rows, cols)?;
        let root = self.rng.gen_range(0..grid.total_cells());
        let chunk_size = rows * cols;

        grid.set_cell(root / chunk_size, root % chunk_size / cols,
            root % cols, 1).unwrap();

        let seeded = Hedgehog::new(grid, topology)?;
        let filled = self.fill(&seeded)?;
        debug!("generated a chain of {} cells", filled.total_cells());
        Hedgehog::new(filled, seeded.topology().clone())
    }
}

/// A reducer can be applied to the output of a [Generator] to remove clues
/// from the grid as long as the provided [Solver] still finds the chain
/// that was generated. This may be intentionally suboptimal to control the
/// number of remaining clues. A random number generator decides which clues
/// are removed.
///
/// Note that removing a clue from a hedgehog puzzle never removes its
/// solutions, it only permits additional ones. The criterion for keeping a
/// removal is therefore that the solver's first-found solution is still the
/// generated chain, which keeps that chain the canonical solution of the
/// reduced puzzle.
///
/// [Reducer::new_default] will yield a reducer with a [BacktrackingSolver]
/// and a [ThreadRng].
pub struct Reducer<S: Solver, R: Rng> {
    solver: S,
    rng: R
}

impl Reducer<BacktrackingSolver, ThreadRng> {

    /// Generates a new reducer with a [BacktrackingSolver] to check the
    /// found solution and a [ThreadRng] to decide which clues are removed.
    pub fn new_default() -> Reducer<BacktrackingSolver, ThreadRng> {
        Reducer::new(BacktrackingSolver, rand::thread_rng())
    }
}

impl<S: Solver, R: Rng> Reducer<S, R> {

    /// Creates a new reducer that uses the given solver to check the found
    /// solution and the given random number generator to decide which clues
    /// are removed.
    pub fn new(solver: S, rng: R) -> Reducer<S, R> {
        Reducer {
            solver,
            rng
        }
    }

    /// Removes clues from the given puzzle, in random order, as long as the
    /// reducer's solver still finds the same solution it found before any
    /// clue was removed. The clue holding 1 is never removed, since every
    /// puzzle requires a root. If the puzzle is not solvable by the
    /// reducer's solver, it is left unchanged.
    pub fn reduce(&mut self, hedgehog: &mut Hedgehog) {
        let reference = match self.solver.solve(hedgehog) {
            Solution::Solved(grid) => grid,
            Solution::Unsolvable => return
        };
        let mut clues = Vec::new();
        let grid = hedgehog.grid();

        for chunk in 0..grid.chunks() {
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let content = grid.get_cell(chunk, row, col).unwrap();

                    if let Some(number) = content {
                        if number != 1 {
                            clues.push((chunk, row, col));
                        }
                    }
                }
            }
        }

        shuffle(&mut self.rng, &mut clues);

        for (chunk, row, col) in clues {
            let mut reduced = hedgehog.grid().clone();
            reduced.clear_cell(chunk, row, col).unwrap();

            // Removing a non-root clue keeps the puzzle well-formed.
            let candidate =
                Hedgehog::new(reduced, hedgehog.topology().clone()).unwrap();

            if let Solution::Solved(solution) = self.solver.solve(&candidate) {
                if solution == reference {
                    debug!("removed clue at ({}, {}, {})", chunk, row, col);
                    *hedgehog = candidate;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::topology::{Adjacency, Alignment, Variant};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn quad(variant: Variant) -> Topology {
        Topology::for_variant(4, variant).unwrap()
    }

    #[test]
    fn generator_fills_grid_with_closed_chain() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
        let hedgehog =
            generator.generate(2, 2, quad(Variant::Plain)).unwrap();

        assert!(hedgehog.grid().is_full());
        assert!(hedgehog.is_valid_solution(hedgehog.grid()).unwrap());
    }

    #[test]
    fn generator_supports_extended_variant() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(43));
        let hedgehog =
            generator.generate(2, 2, quad(Variant::Extended)).unwrap();

        assert!(hedgehog.grid().is_full());
        assert!(hedgehog.is_valid_solution(hedgehog.grid()).unwrap());
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        let mut first = Generator::new(ChaCha8Rng::seed_from_u64(44));
        let mut second = Generator::new(ChaCha8Rng::seed_from_u64(44));

        let first_hedgehog =
            first.generate(2, 2, quad(Variant::Plain)).unwrap();
        let second_hedgehog =
            second.generate(2, 2, quad(Variant::Plain)).unwrap();

        assert_eq!(first_hedgehog.grid(), second_hedgehog.grid());
    }

    #[test]
    fn generation_fails_without_closed_chain() {
        // Two tube-linked chunks of two cells each fall apart into two
        // disjoint cell pairs, so no chain can cover all four cells.
        let topology = Topology::from_links(vec![
            vec![Adjacency::new(1, Alignment::Tube)],
            vec![Adjacency::new(0, Alignment::Tube)]
        ]).unwrap();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(45));

        match generator.generate(1, 2, topology) {
            Ok(_) => panic!("Generation on a chainless topology succeeded."),
            Err(error) =>
                assert_eq!(HedgehogError::UnsatisfiableTopology, error)
        }
    }

    #[test]
    fn reducer_preserves_found_solution() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(46));
        let mut hedgehog =
            generator.generate(2, 2, quad(Variant::Plain)).unwrap();
        let full = hedgehog.grid().clone();
        let mut reducer =
            Reducer::new(BacktrackingSolver, ChaCha8Rng::seed_from_u64(47));

        reducer.reduce(&mut hedgehog);

        assert!(hedgehog.grid().count_clues() < full.count_clues());
        assert!(hedgehog.grid().is_subset(&full).unwrap());
        assert_eq!(Solution::Solved(full),
            BacktrackingSolver.solve(&hedgehog));
    }

    #[test]
    fn reducer_keeps_root_clue() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(48));
        let mut hedgehog =
            generator.generate(2, 2, quad(Variant::Plain)).unwrap();
        let full = hedgehog.grid().clone();
        let mut reducer =
            Reducer::new(BacktrackingSolver, ChaCha8Rng::seed_from_u64(49));

        reducer.reduce(&mut hedgehog);

        for chunk in 0..full.chunks() {
            for row in 0..full.rows() {
                for col in 0..full.cols() {
                    if full.has_number(chunk, row, col, 1).unwrap() {
                        assert!(hedgehog.grid()
                            .has_number(chunk, row, col, 1)
                            .unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn reducer_leaves_unsolvable_puzzle_unchanged() {
        let grid = HedgehogGrid::parse("4x1x1;1,,,2").unwrap();
        let mut hedgehog =
            Hedgehog::with_variant(grid.clone(), Variant::Plain).unwrap();
        let mut reducer =
            Reducer::new(BacktrackingSolver, ChaCha8Rng::seed_from_u64(50));

        reducer.reduce(&mut hedgehog);

        assert_eq!(&grid, hedgehog.grid());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(51);
        let mut values: Vec<usize> = (0..10).collect();

        shuffle(&mut rng, &mut values);

        let mut sorted = values.clone();
        sorted.sort();

        assert_eq!((0..10).collect::<Vec<usize>>(), sorted);
    }
}
