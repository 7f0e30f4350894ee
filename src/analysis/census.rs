//! Orientation-independent census of tile borders
//!
//! Every border is reduced to a signature: its cells as bits (active = 1),
//! taken in whichever reading direction gives the lesser bit pattern. Two
//! tiles that can be placed side by side share a signature whatever their
//! orientations, so the census finds neighbours, and with them the corner
//! tiles, without assembling anything.

use bitvec::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::io::error::{AssemblyError, Result};
use crate::spatial::grid::Edge;
use crate::spatial::tiles::{Tile, TileId};

/// Canonical reading-direction-independent bit pattern of an edge
pub fn edge_signature(edge: &Edge, active: u8) -> BitVec {
    let forward: BitVec = edge.cells().iter().map(|&cell| cell == active).collect();
    let reversed: BitVec = forward.iter().by_vals().rev().collect();

    if reversed.iter().by_vals().lt(forward.iter().by_vals()) {
        reversed
    } else {
        forward
    }
}

/// Neighbour relation between tiles derived from shared edge signatures
#[derive(Debug, Clone)]
pub struct EdgeCensus {
    neighbors: BTreeMap<TileId, BTreeSet<TileId>>,
}

impl EdgeCensus {
    /// Collect the signatures of every tile border
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::AmbiguousEdge`] if more than two tiles carry
    /// the same signature
    pub fn build(tiles: &[Tile], active: u8) -> Result<Self> {
        let mut owners: HashMap<BitVec, Vec<TileId>> = HashMap::new();

        for tile in tiles {
            for edge in tile.edges() {
                let entry = owners.entry(edge_signature(&edge, active)).or_default();
                if entry.contains(&tile.id()) {
                    continue;
                }
                entry.push(tile.id());
                if entry.len() > 2 {
                    return Err(AssemblyError::AmbiguousEdge {
                        edge: edge.to_string(),
                        tiles: entry.clone(),
                    });
                }
            }
        }

        let mut neighbors: BTreeMap<TileId, BTreeSet<TileId>> = tiles
            .iter()
            .map(|tile| (tile.id(), BTreeSet::new()))
            .collect();

        for ids in owners.values() {
            if let [a, b] = ids.as_slice() {
                neighbors.entry(*a).or_default().insert(*b);
                neighbors.entry(*b).or_default().insert(*a);
            }
        }

        Ok(Self { neighbors })
    }

    /// Tiles sharing a border signature with `id`, in ascending order
    pub fn neighbors(&self, id: TileId) -> Vec<TileId> {
        self.neighbors
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Tiles with exactly two neighbours
    pub fn corner_ids(&self) -> Vec<TileId> {
        self.ids_with_neighbor_count(2)
    }

    /// Tiles on the outer rim between corners, with exactly three neighbours
    pub fn edge_ids(&self) -> Vec<TileId> {
        self.ids_with_neighbor_count(3)
    }

    /// Number of tiles in the census
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Test whether the census holds no tiles
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    fn ids_with_neighbor_count(&self, count: usize) -> Vec<TileId> {
        self.neighbors
            .iter()
            .filter(|(_, set)| set.len() == count)
            .map(|(&id, _)| id)
            .collect()
    }
}
