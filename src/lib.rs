// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand and flexible engine for
//! hedgehog chain puzzles. It supports the following key features:
//!
//! * Parsing and printing hedgehog grids
//! * Checking solutions for the chain and closure rules
//! * Custom chunk topologies beyond the built-in plain and extended variants
//! * Solving puzzles using a backtracking algorithm
//! * Generating puzzles with a possibility to specify a custom solver that
//! has to be able to reproduce the hidden chain, thus controlling how many
//! clues remain
//!
//! A hedgehog puzzle consists of a three-dimensional grid of cells organized
//! into chunks, where all chunks share the same row and column counts. Some
//! cells are pre-filled with distinct clue numbers, the rest are blank. The
//! goal is to fill every blank cell such that all numbers 1 to N (the total
//! cell count) appear exactly once, every two consecutive numbers occupy
//! adjacent cells, and the cell holding N is adjacent to the cell holding 1,
//! closing the chain into a loop. Which cells count as adjacent is defined
//! by the puzzle's [topology]: chunks are linked pairwise, and cells of
//! linked chunks are adjacent if they line up row-wise, column-wise, or - in
//! the extended variant - tube-wise (both row and column equal).
//!
//! # Parsing and printing grids
//!
//! See [HedgehogGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use hedgehog_variants::HedgehogGrid;
//!
//! let grid = HedgehogGrid::parse("4x2x2;\
//!     1,9,5,13,10,2,6,14,16,8,4,12,7,15,11,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving puzzles
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! search hedgehog puzzles for a solution. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which finds
//! a solution whenever one exists and otherwise reports the puzzle as
//! unsolvable.
//!
//! ```
//! use hedgehog_variants::{Hedgehog, HedgehogGrid};
//! use hedgehog_variants::solver::{BacktrackingSolver, Solution, Solver};
//! use hedgehog_variants::topology::Variant;
//!
//! // Four chunks of one cell each, where 1 and 2 lie on chunks that are
//! // only linked by the extended variant's tube.
//! let grid = HedgehogGrid::parse("4x1x1;1,,,2").unwrap();
//! let hedgehog = Hedgehog::with_variant(grid, Variant::Extended).unwrap();
//!
//! let expected = HedgehogGrid::parse("4x1x1;1,4,3,2").unwrap();
//! assert_eq!(Solution::Solved(expected),
//!     BacktrackingSolver.solve(&hedgehog));
//! ```
//!
//! # Generating puzzles
//!
//! Puzzle generation is done in two steps: generating a full chain using a
//! [Generator](generator::Generator) and then removing as many clues as
//! possible using a [Reducer](generator::Reducer). See the [generator]
//! module for details.
//!
//! ```
//! use hedgehog_variants::generator::{Generator, Reducer};
//! use hedgehog_variants::solver::{BacktrackingSolver, Solution, Solver};
//! use hedgehog_variants::topology::{Topology, Variant};
//!
//! // new_default yields a generator/reducer backed by rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let mut reducer = Reducer::new_default();
//!
//! let topology = Topology::for_variant(4, Variant::Plain).unwrap();
//! let mut hedgehog = generator.generate(2, 2, topology).unwrap();
//! assert!(hedgehog.grid().is_full());
//!
//! // Remove clues while the solver still finds the generated chain.
//! reducer.reduce(&mut hedgehog);
//!
//! let solved = match BacktrackingSolver.solve(&hedgehog) {
//!     Solution::Solved(_) => true,
//!     Solution::Unsolvable => false
//! };
//! assert!(solved);
//! ```

pub mod error;
pub mod generator;
pub mod solver;
pub mod topology;

use error::{
    HedgehogError,
    HedgehogParseError,
    HedgehogParseResult,
    HedgehogResult
};
use topology::{Topology, Variant};

use std::fmt::{self, Display, Formatter};
use std::iter;

/// The sentinel value that denotes a blank cell in grid literals provided to
/// [HedgehogGrid::from_numbers].
pub const BLANK: i32 = -1;

/// A hedgehog grid is composed of cells that are organized into chunks,
/// where all chunks have the same number of rows and columns. Each cell may
/// or may not be occupied by a number.
///
/// Cells are addressed by a chunk index, a row index, and a column index,
/// and are stored in chunk-major order, that is, all cells of a chunk are
/// together, row by row.
///
/// `HedgehogGrid` implements `Display`. Each chunk is rendered as its own
/// block, with numbers right-aligned to the width of the total cell count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HedgehogGrid {
    chunks: usize,
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>
}

pub(crate) fn index(chunk: usize, row: usize, col: usize, rows: usize,
        cols: usize) -> usize {
    (chunk * rows + row) * cols + col
}

fn digits(number: usize) -> usize {
    let mut digits = 1;
    let mut remaining = number / 10;

    while remaining > 0 {
        digits += 1;
        remaining /= 10;
    }

    digits
}

fn to_string(cell: Option<usize>, width: usize) -> String {
    if let Some(number) = cell {
        format!("{:>w$}", number, w = width)
    }
    else {
        " ".repeat(width)
    }
}

fn line(grid: &HedgehogGrid, start: char, sep: char,
        segment: impl Fn(usize) -> String, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for col in 0..grid.cols() {
        if col == 0 {
            result.push(start);
        }
        else {
            result.push(sep);
        }

        result.push_str(segment(col).as_str());
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn border_row(grid: &HedgehogGrid, start: char, sep: char, end: char,
        fill: char, width: usize, newline: bool) -> String {
    let segment: String = iter::repeat(fill).take(width + 2).collect();
    line(grid, start, sep, |_| segment.clone(), end, newline)
}

fn content_row(grid: &HedgehogGrid, chunk: usize, row: usize, width: usize)
        -> String {
    line(grid, '║', '│',
        |col| format!(" {} ",
            to_string(grid.get_cell(chunk, row, col).unwrap(), width)),
        '║', true)
}

impl Display for HedgehogGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = digits(self.total_cells());
        let top_row = border_row(self, '╔', '╤', '╗', '═', width, true);
        let separator_row = border_row(self, '╟', '┼', '╢', '─', width, true);
        let bottom_row = border_row(self, '╚', '╧', '╝', '═', width, false);

        for chunk in 0..self.chunks {
            if chunk > 0 {
                f.write_str("\n\n")?;
            }

            f.write_str(top_row.as_str())?;

            for row in 0..self.rows {
                if row > 0 {
                    f.write_str(separator_row.as_str())?;
                }

                f.write_str(content_row(self, chunk, row, width).as_str())?;
            }

            f.write_str(bottom_row.as_str())?;
        }

        Ok(())
    }
}

fn cell_to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

fn parse_dimensions(code: &str)
        -> Result<(usize, usize, usize), HedgehogParseError> {
    let parts: Vec<&str> = code.split('x').collect();

    if parts.len() != 3 {
        return Err(HedgehogParseError::MalformedDimensions);
    }

    Ok((parts[0].parse()?, parts[1].parse()?, parts[2].parse()?))
}

impl HedgehogGrid {

    /// Creates a new, empty hedgehog grid with the given dimensions.
    ///
    /// # Arguments
    ///
    /// * `chunks`: The number of chunks in the grid. Must be greater than 0.
    /// * `rows`: The number of rows in each chunk. Must be greater than 0.
    /// * `cols`: The number of columns in each chunk. Must be greater
    /// than 0.
    ///
    /// # Errors
    ///
    /// If `chunks`, `rows`, or `cols` is invalid (zero).
    pub fn new(chunks: usize, rows: usize, cols: usize)
            -> HedgehogResult<HedgehogGrid> {
        if chunks == 0 || rows == 0 || cols == 0 {
            return Err(HedgehogError::InvalidDimensions);
        }

        let cells = vec![None; chunks * rows * cols];

        Ok(HedgehogGrid {
            chunks,
            rows,
            cols,
            cells
        })
    }

    /// Creates a hedgehog grid from a nested number literal containing one
    /// matrix of cell entries per chunk. An entry equal to [BLANK] denotes
    /// an empty cell, all other entries must be in the range
    /// `[1, total_cells]`.
    ///
    /// # Errors
    ///
    /// * `HedgehogError::InvalidDimensions` If the literal is empty, if any
    /// dimension is zero, or if it is ragged, i.e. not all chunks share the
    /// row and column counts of the first chunk.
    /// * `HedgehogError::InvalidNumber` If some entry is neither [BLANK] nor
    /// in the range `[1, total_cells]`.
    pub fn from_numbers(chunks: &[Vec<Vec<i32>>])
            -> HedgehogResult<HedgehogGrid> {
        let rows = chunks.get(0).map(|chunk| chunk.len()).unwrap_or(0);
        let cols = chunks.get(0)
            .and_then(|chunk| chunk.get(0))
            .map(|row| row.len())
            .unwrap_or(0);
        let mut grid = HedgehogGrid::new(chunks.len(), rows, cols)?;
        let total = grid.total_cells();

        for (chunk_index, chunk) in chunks.iter().enumerate() {
            if chunk.len() != rows {
                return Err(HedgehogError::InvalidDimensions);
            }

            for (row_index, row) in chunk.iter().enumerate() {
                if row.len() != cols {
                    return Err(HedgehogError::InvalidDimensions);
                }

                for (col_index, &entry) in row.iter().enumerate() {
                    if entry == BLANK {
                        continue;
                    }

                    if entry < 1 || entry as usize > total {
                        return Err(HedgehogError::InvalidNumber);
                    }

                    grid.set_cell(chunk_index, row_index, col_index,
                        entry as usize)?;
                }
            }
        }

        Ok(grid)
    }

    /// Parses a code encoding a hedgehog grid. The code has to be of the
    /// format `<chunks>x<rows>x<cols>;<cells>` where `<cells>` is a
    /// comma-separated list of entries, which are either empty or a number.
    /// The entries are assigned in chunk-major order, where each row is
    /// completed before the next one is started and each chunk is completed
    /// before the next one is started. Whitespace in the entries is ignored
    /// to allow for more intuitive formatting. The number of entries must
    /// match the amount of cells in a grid with the given dimensions, i.e.
    /// it must be `chunks · rows · cols`.
    ///
    /// As an example, the code `4x1x1;1,,,2` parses to a grid of four
    /// single-cell chunks where the first chunk's cell holds 1 and the last
    /// chunk's cell holds 2.
    ///
    /// # Errors
    ///
    /// Any specialization of `HedgehogParseError` (see that documentation).
    pub fn parse(code: &str) -> HedgehogParseResult<HedgehogGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(HedgehogParseError::WrongNumberOfParts);
        }

        let (chunks, rows, cols) = parse_dimensions(parts[0])?;

        if let Ok(mut grid) = HedgehogGrid::new(chunks, rows, cols) {
            let total = grid.total_cells();
            let numbers: Vec<&str> = parts[1].split(',').collect();

            if numbers.len() != total {
                return Err(HedgehogParseError::WrongNumberOfCells);
            }

            for (i, number_str) in numbers.iter().enumerate() {
                let number_str = number_str.trim();

                if number_str.is_empty() {
                    continue;
                }

                let number = number_str.parse::<usize>()?;

                if number == 0 || number > total {
                    return Err(HedgehogParseError::InvalidNumber);
                }

                grid.cells[i] = Some(number);
            }

            Ok(grid)
        }
        else {
            Err(HedgehogParseError::InvalidDimensions)
        }
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [HedgehogGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use hedgehog_variants::HedgehogGrid;
    ///
    /// let mut grid = HedgehogGrid::new(4, 2, 2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(0, 1, 1, 5).unwrap();
    /// grid.set_cell(3, 0, 0, 12).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = HedgehogGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{}x{}x{};", self.chunks, self.rows, self.cols);
        let cells = self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the number of chunks in this grid.
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Gets the number of rows in each chunk of this grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets the number of columns in each chunk of this grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets the total number of cells in this grid, that is, the product of
    /// the chunk, row, and column counts. In a solved puzzle, this is also
    /// the highest number on the grid.
    pub fn total_cells(&self) -> usize {
        self.chunks * self.rows * self.cols
    }

    fn check_bounds(&self, chunk: usize, row: usize, col: usize)
            -> HedgehogResult<()> {
        if chunk >= self.chunks || row >= self.rows || col >= self.cols {
            Err(HedgehogError::OutOfBounds)
        }
        else {
            Ok(())
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `chunk`: The chunk index of the desired cell. Must be in the range
    /// `[0, chunks[`.
    /// * `row`: The row index of the desired cell. Must be in the range
    /// `[0, rows[`.
    /// * `col`: The column index of the desired cell. Must be in the range
    /// `[0, cols[`.
    ///
    /// # Errors
    ///
    /// If `chunk`, `row`, or `col` are not in the specified ranges. In that
    /// case, `HedgehogError::OutOfBounds` is returned.
    pub fn get_cell(&self, chunk: usize, row: usize, col: usize)
            -> HedgehogResult<Option<usize>> {
        self.check_bounds(chunk, row, col)?;
        Ok(self.cells[index(chunk, row, col, self.rows, self.cols)])
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Errors
    ///
    /// If `chunk`, `row`, or `col` are out of bounds for this grid. In that
    /// case, `HedgehogError::OutOfBounds` is returned.
    pub fn has_number(&self, chunk: usize, row: usize, col: usize,
            number: usize) -> HedgehogResult<bool> {
        if let Some(content) = self.get_cell(chunk, row, col)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `chunk`: The chunk index of the assigned cell. Must be in the range
    /// `[0, chunks[`.
    /// * `row`: The row index of the assigned cell. Must be in the range
    /// `[0, rows[`.
    /// * `col`: The column index of the assigned cell. Must be in the range
    /// `[0, cols[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, total_cells]`.
    ///
    /// # Errors
    ///
    /// * `HedgehogError::OutOfBounds` If `chunk`, `row`, or `col` are not in
    /// the specified ranges.
    /// * `HedgehogError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, chunk: usize, row: usize, col: usize,
            number: usize) -> HedgehogResult<()> {
        self.check_bounds(chunk, row, col)?;

        if number == 0 || number > self.total_cells() {
            return Err(HedgehogError::InvalidNumber);
        }

        self.cells[index(chunk, row, col, self.rows, self.cols)] =
            Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If `chunk`, `row`, or `col` are out of bounds for this grid. In that
    /// case, `HedgehogError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, chunk: usize, row: usize, col: usize)
            -> HedgehogResult<()> {
        self.check_bounds(chunk, row, col)?;
        self.cells[index(chunk, row, col, self.rows, self.cols)] = None;
        Ok(())
    }

    fn verify_dimensions(&self, other: &HedgehogGrid) -> HedgehogResult<()> {
        if self.chunks != other.chunks || self.rows != other.rows ||
                self.cols != other.cols {
            Err(HedgehogError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [HedgehogGrid::count_clues] returns
    /// [HedgehogGrid::total_cells].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [HedgehogGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `HedgehogError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &HedgehogGrid) -> HedgehogResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `HedgehogError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &HedgehogGrid) -> HedgehogResult<bool> {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// chunk-major order, where the rows of a chunk are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

/// A hedgehog puzzle: a [HedgehogGrid] of clues paired with the [Topology]
/// that defines cell adjacency. Construction validates the puzzle, so every
/// `Hedgehog` is well-formed: the clue numbers are distinct and in range,
/// some cell holds the number 1 (the root of the chain), and the grid's
/// chunk count matches the topology.
///
/// The clues of a puzzle are immutable once it has been constructed. To
/// obtain a variation of a puzzle, modify a clone of its grid and construct
/// a new `Hedgehog` from it.
///
/// There is no guarantee that the puzzle is solvable, however there is a way
/// to check that (see the [solver] module).
#[derive(Clone, Debug, PartialEq)]
pub struct Hedgehog {
    grid: HedgehogGrid,
    topology: Topology
}

impl Hedgehog {

    /// Creates a new hedgehog puzzle from the given clue grid and topology.
    ///
    /// # Errors
    ///
    /// * `HedgehogError::TopologyMismatch` If the grid's chunk count differs
    /// from the topology's chunk count.
    /// * `HedgehogError::DuplicateNumber` If two cells of the grid hold the
    /// same number.
    /// * `HedgehogError::MissingRoot` If no cell of the grid holds the
    /// number 1.
    pub fn new(grid: HedgehogGrid, topology: Topology)
            -> HedgehogResult<Hedgehog> {
        if grid.chunks() != topology.chunk_count() {
            return Err(HedgehogError::TopologyMismatch);
        }

        let mut seen = vec![false; grid.total_cells()];

        for cell in grid.cells() {
            if let Some(number) = *cell {
                if seen[number - 1] {
                    return Err(HedgehogError::DuplicateNumber);
                }

                seen[number - 1] = true;
            }
        }

        if !seen[0] {
            return Err(HedgehogError::MissingRoot);
        }

        Ok(Hedgehog {
            grid,
            topology
        })
    }

    /// Creates a new hedgehog puzzle from the given clue grid and the
    /// [Variant] topology matching the grid's chunk count. This is
    /// equivalent to combining [Topology::for_variant] and [Hedgehog::new].
    ///
    /// # Errors
    ///
    /// * `HedgehogError::UnsupportedChunkCount` If no variant topology is
    /// defined for the grid's chunk count.
    /// * Any error raised by [Hedgehog::new].
    pub fn with_variant(grid: HedgehogGrid, variant: Variant)
            -> HedgehogResult<Hedgehog> {
        let topology = Topology::for_variant(grid.chunks(), variant)?;
        Hedgehog::new(grid, topology)
    }

    /// Gets a reference to the clue grid of this puzzle.
    pub fn grid(&self) -> &HedgehogGrid {
        &self.grid
    }

    /// Gets a reference to the [Topology] of this puzzle.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    fn is_closed_chain(&self, solution: &HedgehogGrid) -> bool {
        let total = solution.total_cells();
        let mut positions = vec![None; total];

        for chunk in 0..solution.chunks() {
            for row in 0..solution.rows() {
                for col in 0..solution.cols() {
                    let content =
                        solution.get_cell(chunk, row, col).unwrap();

                    if let Some(number) = content {
                        if positions[number - 1].is_some() {
                            return false;
                        }

                        positions[number - 1] = Some((chunk, row, col));
                    }
                }
            }
        }

        for number in 0..total {
            let successor = (number + 1) % total;
            let pair = (positions[number], positions[successor]);

            if let (Some(position), Some(successor_position)) = pair {
                if !self.topology.adjacent(position, successor_position) {
                    return false;
                }
            }
            else {
                return false;
            }
        }

        true
    }

    /// Indicates whether the given [HedgehogGrid] is a valid solution to
    /// this puzzle. That is the case if all clues of this puzzle can be
    /// found in the `solution`, it is full, every two consecutive numbers
    /// occupy adjacent cells, and the cell holding the highest number is
    /// adjacent to the cell holding 1.
    ///
    /// ```
    /// use hedgehog_variants::{Hedgehog, HedgehogGrid};
    /// use hedgehog_variants::topology::Variant;
    ///
    /// let puzzle = HedgehogGrid::parse("4x1x1;1,,,").unwrap();
    /// let hedgehog = Hedgehog::with_variant(puzzle, Variant::Plain).unwrap();
    /// let solution = HedgehogGrid::parse("4x1x1;1,2,4,3").unwrap();
    /// assert!(hedgehog.is_valid_solution(&solution).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// If the dimensions of this puzzle's grid and the `solution` grid are
    /// not the same. In that case, `HedgehogError::InvalidDimensions` is
    /// returned.
    pub fn is_valid_solution(&self, solution: &HedgehogGrid)
            -> HedgehogResult<bool> {
        Ok(self.grid.is_subset(solution)? &&
            solution.is_full() &&
            self.is_closed_chain(solution))
    }
}
