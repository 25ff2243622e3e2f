//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html), the [topology](crate::topology) module, and
/// the [generator](crate::generator) module. This does not exclude errors
/// that occur when parsing grids, see
/// [HedgehogParseError](enum.HedgehogParseError.html) for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HedgehogError {

    /// Indicates that the dimensions specified for a created grid are
    /// invalid. This is the case if any of them is less than 1, or if a
    /// nested literal is ragged, that is, not all chunks share the same row
    /// and column counts.
    InvalidDimensions,

    /// Indicates that some number is invalid for the grid in question. This
    /// is the case if it is less than 1 or greater than the total cell
    /// count.
    InvalidNumber,

    /// Indicates that the specified coordinates (chunk, row, and column) lie
    /// outside the grid in question. This is the case if any of them is
    /// greater than or equal to the respective dimension.
    OutOfBounds,

    /// Indicates that two cells of a puzzle carry the same clue number.
    DuplicateNumber,

    /// Indicates that no cell of a puzzle carries the clue number 1, which
    /// anchors the chain.
    MissingRoot,

    /// Indicates that a [Variant](crate::topology::Variant) topology was
    /// requested for a chunk count for which no adjacency table is defined.
    /// Currently only four chunks are supported; other chunk counts require
    /// an explicit descriptor
    /// (see [Topology::from_links](crate::topology::Topology::from_links)).
    UnsupportedChunkCount,

    /// Indicates that a topology descriptor is not symmetric in aggregate,
    /// that is, some chunk lists an adjacency whose target chunk does not
    /// list the mirrored adjacency.
    AsymmetricAdjacency,

    /// Indicates that a grid was paired with a topology defined for a
    /// different chunk count.
    TopologyMismatch,

    /// An error that is raised whenever it is attempted to generate a
    /// puzzle on a topology that admits no closed chain covering all cells
    /// with the given dimensions.
    UnsatisfiableTopology
}

impl Display for HedgehogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HedgehogError::InvalidDimensions =>
                write!(f, "invalid dimensions"),
            HedgehogError::InvalidNumber =>
                write!(f, "invalid number"),
            HedgehogError::OutOfBounds =>
                write!(f, "coordinates out of bounds"),
            HedgehogError::DuplicateNumber =>
                write!(f, "duplicate clue number"),
            HedgehogError::MissingRoot =>
                write!(f, "no cell holds the number 1"),
            HedgehogError::UnsupportedChunkCount =>
                write!(f, "unsupported chunk count"),
            HedgehogError::AsymmetricAdjacency =>
                write!(f, "asymmetric adjacency descriptor"),
            HedgehogError::TopologyMismatch =>
                write!(f, "topology defined for a different chunk count"),
            HedgehogError::UnsatisfiableTopology =>
                write!(f, "topology admits no closed chain")
        }
    }
}

/// Syntactic sugar for `Result<V, HedgehogError>`.
pub type HedgehogResult<V> = Result<V, HedgehogError>;

/// An enumeration of the errors that may occur when parsing a
/// [HedgehogGrid](crate::HedgehogGrid).
#[derive(Debug, Eq, PartialEq)]
pub enum HedgehogParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: dimensions
    /// and cells (separated by ';'), so if the code does not contain exactly
    /// one semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number deduced from the dimensions.
    WrongNumberOfCells,

    /// Indicates that the dimensions have the wrong format. They should be
    /// of the form `<chunks>x<rows>x<cols>`, so if the amount of 'x's in the
    /// dimension string is not exactly two, this error will be raised.
    MalformedDimensions,

    /// Indicates that the provided dimensions are invalid (i.e. at least one
    /// is zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (dimension or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than the total cell count).
    InvalidNumber
}

impl From<ParseIntError> for HedgehogParseError {
    fn from(_: ParseIntError) -> Self {
        HedgehogParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, HedgehogParseError>`.
pub type HedgehogParseResult<V> = Result<V, HedgehogParseError>;
