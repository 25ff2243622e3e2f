//! This module defines the chunk topology of a hedgehog puzzle, that is, the
//! relation that determines which cells may hold consecutive chain numbers.
//!
//! A [Topology] stores one ordered list of [Adjacency] entries per chunk.
//! Each entry names a target chunk and an [Alignment] which specifies how
//! cells of the two chunks line up. Two cells are adjacent if and only if
//! some adjacency entry of the first cell's chunk targets the second cell's
//! chunk and the cells line up under the entry's alignment.
//!
//! For the common case of four chunks arranged in a 2x2 cycle,
//! [Topology::for_variant] builds the adjacency table from a [Variant] tag.
//! Other arrangements can be described explicitly with
//! [Topology::from_links], which validates the descriptor at construction.
//!
//! ```
//! use hedgehog_variants::topology::{Topology, Variant};
//!
//! let topology = Topology::for_variant(4, Variant::Plain).unwrap();
//!
//! // Cells in row-aligned chunks are adjacent if they share their row.
//! assert!(topology.adjacent((0, 0, 1), (1, 0, 2)));
//!
//! // Chunks 0 and 3 are not linked in the plain variant.
//! assert!(!topology.adjacent((0, 0, 1), (3, 0, 1)));
//! ```

use crate::error::{HedgehogError, HedgehogResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

/// An enumeration of the ways in which the cells of two linked chunks can
/// line up.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Alignment {

    /// A cell and a cell in the target chunk are adjacent if and only if
    /// they share the same row index.
    Row,

    /// A cell and a cell in the target chunk are adjacent if and only if
    /// they share the same column index.
    Column,

    /// A cell and a cell in the target chunk are adjacent if and only if
    /// they share both the same row and the same column index. This links
    /// two chunks cell-for-cell, like a stack of tubes, and is only present
    /// in the extended variant.
    Tube
}

/// One entry of a chunk's adjacency list: a target chunk together with the
/// [Alignment] under which cells of the two chunks line up.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Adjacency {
    chunk: usize,
    alignment: Alignment
}

impl Adjacency {

    /// Creates a new adjacency entry targeting the given chunk with the
    /// given alignment.
    pub fn new(chunk: usize, alignment: Alignment) -> Adjacency {
        Adjacency {
            chunk,
            alignment
        }
    }

    /// Gets the index of the chunk this entry targets.
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// Gets the [Alignment] under which cells of the two chunks line up.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

/// A tag selecting which adjacency links are active in a puzzle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Variant {

    /// Each chunk is linked to one chunk row-wise and to one chunk
    /// column-wise, forming a 2x2 cycle.
    Plain,

    /// All links of [Variant::Plain], plus a [Alignment::Tube] link between
    /// each pair of chunks that the plain cycle leaves unlinked.
    Extended
}

/// The adjacency relation between the chunks of a hedgehog puzzle, stored as
/// one ordered list of [Adjacency] entries per chunk. The order of entries
/// is significant: it determines the order in which the solver enumerates
/// candidate cells, and therefore which solution is found first when
/// multiple exist.
///
/// A topology is symmetric in aggregate: if chunk A lists an adjacency
/// targeting chunk B with some alignment, then chunk B lists an adjacency
/// targeting chunk A with the same alignment. This invariant is verified at
/// construction, including deserialization.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<Vec<Adjacency>>")]
#[serde(try_from = "Vec<Vec<Adjacency>>")]
pub struct Topology {
    links: Vec<Vec<Adjacency>>
}

impl Topology {

    /// Creates a new topology from an explicit descriptor containing one
    /// adjacency list per chunk, in chunk order. The chunk count is the
    /// length of the outer vector.
    ///
    /// # Errors
    ///
    /// * `HedgehogError::OutOfBounds` If some entry targets a chunk index
    /// greater than or equal to the chunk count.
    /// * `HedgehogError::AsymmetricAdjacency` If some chunk lists an entry
    /// whose target chunk does not list the mirrored entry.
    pub fn from_links(links: Vec<Vec<Adjacency>>) -> HedgehogResult<Topology> {
        for (chunk, adjacencies) in links.iter().enumerate() {
            for adjacency in adjacencies {
                if adjacency.chunk() >= links.len() {
                    return Err(HedgehogError::OutOfBounds);
                }

                let mirrored = Adjacency::new(chunk, adjacency.alignment());

                if !links[adjacency.chunk()].contains(&mirrored) {
                    return Err(HedgehogError::AsymmetricAdjacency);
                }
            }
        }

        Ok(Topology {
            links
        })
    }

    /// Creates the topology of the given [Variant] for the given chunk
    /// count. An adjacency table is currently only defined for exactly four
    /// chunks arranged in a 2x2 cycle: chunk 0 is row-linked to chunk 1 and
    /// column-linked to chunk 2, and chunk 3 is row-linked to chunk 2 and
    /// column-linked to chunk 1. [Variant::Extended] additionally links the
    /// diagonal pairs 0-3 and 1-2 tube-wise. Other chunk counts require an
    /// explicit descriptor, see [Topology::from_links].
    ///
    /// # Errors
    ///
    /// * `HedgehogError::UnsupportedChunkCount` If `chunk_count` is not 4.
    pub fn for_variant(chunk_count: usize, variant: Variant)
            -> HedgehogResult<Topology> {
        if chunk_count != 4 {
            return Err(HedgehogError::UnsupportedChunkCount);
        }

        let mut links = vec![
            vec![
                Adjacency::new(1, Alignment::Row),
                Adjacency::new(2, Alignment::Column)
            ],
            vec![
                Adjacency::new(0, Alignment::Row),
                Adjacency::new(3, Alignment::Column)
            ],
            vec![
                Adjacency::new(3, Alignment::Row),
                Adjacency::new(0, Alignment::Column)
            ],
            vec![
                Adjacency::new(2, Alignment::Row),
                Adjacency::new(1, Alignment::Column)
            ]
        ];

        if variant == Variant::Extended {
            for &(a, b) in [(0usize, 3usize), (1, 2)].iter() {
                links[a].push(Adjacency::new(b, Alignment::Tube));
                links[b].push(Adjacency::new(a, Alignment::Tube));
            }
        }

        Topology::from_links(links)
    }

    /// Gets the number of chunks for which this topology is defined.
    pub fn chunk_count(&self) -> usize {
        self.links.len()
    }

    /// Gets the ordered adjacency list of the given chunk. The chunk index
    /// must be less than [Topology::chunk_count].
    pub fn adjacents(&self, chunk: usize) -> &[Adjacency] {
        &self.links[chunk]
    }

    /// Indicates whether the two cells at the given positions are adjacent
    /// under this topology. Positions are provided in the format
    /// `(chunk, row, col)`. The relation is irreflexive for cells of
    /// unlinked chunks and symmetric, since the adjacency lists are
    /// symmetric in aggregate.
    pub fn adjacent(&self, a: (usize, usize, usize),
            b: (usize, usize, usize)) -> bool {
        let (a_chunk, a_row, a_col) = a;
        let (b_chunk, b_row, b_col) = b;
        let mut adjacent = false;

        for adjacency in self.adjacents(a_chunk) {
            if adjacency.chunk() == b_chunk {
                adjacent |= match adjacency.alignment() {
                    Alignment::Row => a_row == b_row,
                    Alignment::Column => a_col == b_col,
                    Alignment::Tube => a_row == b_row && a_col == b_col
                };
            }
        }

        adjacent
    }
}

impl From<Topology> for Vec<Vec<Adjacency>> {
    fn from(topology: Topology) -> Vec<Vec<Adjacency>> {
        topology.links
    }
}

impl TryFrom<Vec<Vec<Adjacency>>> for Topology {
    type Error = HedgehogError;

    fn try_from(links: Vec<Vec<Adjacency>>) -> HedgehogResult<Topology> {
        Topology::from_links(links)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn plain_quad_topology_links_cycle() {
        let topology = Topology::for_variant(4, Variant::Plain).unwrap();

        assert_eq!(4, topology.chunk_count());
        assert_eq!(&[
            Adjacency::new(1, Alignment::Row),
            Adjacency::new(2, Alignment::Column)
        ][..], topology.adjacents(0));
        assert_eq!(&[
            Adjacency::new(2, Alignment::Row),
            Adjacency::new(1, Alignment::Column)
        ][..], topology.adjacents(3));
    }

    #[test]
    fn extended_quad_topology_adds_tubes() {
        let topology = Topology::for_variant(4, Variant::Extended).unwrap();

        assert_eq!(&[
            Adjacency::new(1, Alignment::Row),
            Adjacency::new(2, Alignment::Column),
            Adjacency::new(3, Alignment::Tube)
        ][..], topology.adjacents(0));
        assert_eq!(&[
            Adjacency::new(0, Alignment::Row),
            Adjacency::new(3, Alignment::Column),
            Adjacency::new(2, Alignment::Tube)
        ][..], topology.adjacents(1));
    }

    #[test]
    fn unsupported_chunk_count() {
        assert_eq!(Err(HedgehogError::UnsupportedChunkCount),
            Topology::for_variant(3, Variant::Plain));
        assert_eq!(Err(HedgehogError::UnsupportedChunkCount),
            Topology::for_variant(8, Variant::Extended));
    }

    #[test]
    fn asymmetric_descriptor_rejected() {
        let links = vec![
            vec![Adjacency::new(1, Alignment::Row)],
            vec![Adjacency::new(0, Alignment::Column)]
        ];

        assert_eq!(Err(HedgehogError::AsymmetricAdjacency),
            Topology::from_links(links));
    }

    #[test]
    fn out_of_range_descriptor_rejected() {
        let links = vec![
            vec![Adjacency::new(2, Alignment::Row)],
            vec![]
        ];

        assert_eq!(Err(HedgehogError::OutOfBounds),
            Topology::from_links(links));
    }

    #[test]
    fn symmetric_descriptor_accepted() {
        let links = vec![
            vec![Adjacency::new(1, Alignment::Tube)],
            vec![Adjacency::new(0, Alignment::Tube)]
        ];
        let topology = Topology::from_links(links).unwrap();

        assert_eq!(2, topology.chunk_count());
        assert!(topology.adjacent((0, 2, 3), (1, 2, 3)));
        assert!(!topology.adjacent((0, 2, 3), (1, 2, 4)));
    }

    #[test]
    fn row_alignment_requires_equal_rows() {
        let topology = Topology::for_variant(4, Variant::Plain).unwrap();

        assert!(topology.adjacent((0, 1, 0), (1, 1, 2)));
        assert!(!topology.adjacent((0, 1, 0), (1, 2, 0)));
    }

    #[test]
    fn column_alignment_requires_equal_columns() {
        let topology = Topology::for_variant(4, Variant::Plain).unwrap();

        assert!(topology.adjacent((0, 0, 2), (2, 1, 2)));
        assert!(!topology.adjacent((0, 0, 2), (2, 0, 1)));
    }

    #[test]
    fn tube_alignment_requires_equal_position() {
        let topology = Topology::for_variant(4, Variant::Extended).unwrap();

        assert!(topology.adjacent((0, 1, 2), (3, 1, 2)));
        assert!(!topology.adjacent((0, 1, 2), (3, 1, 1)));
        assert!(!topology.adjacent((0, 1, 2), (3, 0, 2)));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let topology = Topology::for_variant(4, Variant::Extended).unwrap();
        let positions = [(0, 0, 1), (1, 0, 1), (2, 1, 1), (3, 0, 0)];

        for &a in positions.iter() {
            for &b in positions.iter() {
                assert_eq!(topology.adjacent(a, b), topology.adjacent(b, a));
            }
        }
    }

    #[test]
    fn serde_round_trip() {
        let topology = Topology::for_variant(4, Variant::Extended).unwrap();
        let json = serde_json::to_string(&topology).unwrap();
        let deserialized: Topology = serde_json::from_str(&json).unwrap();

        assert_eq!(topology, deserialized);
    }

    #[test]
    fn serde_rejects_asymmetric_descriptor() {
        let json = "[\
            [{\"chunk\":1,\"alignment\":\"Row\"}],\
            [{\"chunk\":0,\"alignment\":\"Column\"}]]";
        let result: Result<Topology, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
