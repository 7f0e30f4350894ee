//! Stage orchestration from raw tile text to both answers
//!
//! The stages are exposed separately so callers can time or inspect each one:
//! parse, assemble (census check plus placement search), and roughness
//! (composite merge plus pattern erasure).

use crate::algorithm::composite::compose;
use crate::algorithm::pattern::{PatternReport, SearchPattern, find_and_erase};
use crate::algorithm::placement::{EdgeMatcher, ExactMatch, Placement, assemble};
use crate::analysis::census::EdgeCensus;
use crate::io::configuration::{ACTIVE_CELL, CONSUMED_CELL};
use crate::io::error::Result;
use crate::spatial::tiles::{Tile, TileId, parse_tiles};
use crate::spatial::transforms::Orientation;

/// Parameters shared by every stage
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Transform set tried for tiles and for the composite
    pub orientations: Vec<Orientation>,
    /// Pattern erased from the composite
    pub pattern: SearchPattern,
    /// Cell value counted as active
    pub active: u8,
    /// Cell value written over pattern occurrences
    pub marker: u8,
    /// Whether to reject inputs whose edges pair ambiguously before assembly
    pub check_census: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            orientations: Orientation::ALL.to_vec(),
            pattern: SearchPattern::default(),
            active: ACTIVE_CELL,
            marker: CONSUMED_CELL,
            check_census: true,
        }
    }
}

/// Result of the assembly stage
#[derive(Debug, Clone)]
pub struct Assembly {
    /// The arrangement found
    pub placement: Placement,
    /// Product of the four corner identifiers
    pub corner_product: u64,
    /// Corner tiles according to the edge census, when it ran
    pub census_corners: Option<Vec<TileId>>,
}

/// Both answers with the intermediate results that produced them
#[derive(Debug, Clone)]
pub struct Solution {
    /// Number of tiles parsed
    pub tile_count: usize,
    /// Assembly stage output
    pub assembly: Assembly,
    /// Pattern stage output
    pub report: PatternReport,
}

/// Runs the stages with a fixed configuration and edge predicate
#[derive(Debug, Clone, Default)]
pub struct Solver<M: EdgeMatcher = ExactMatch> {
    config: SolverConfig,
    matcher: M,
}

impl Solver<ExactMatch> {
    /// Create a solver matching edges cell for cell
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            matcher: ExactMatch,
        }
    }
}

impl<M: EdgeMatcher> Solver<M> {
    /// Create a solver with a custom edge predicate
    pub const fn with_matcher(config: SolverConfig, matcher: M) -> Self {
        Self { config, matcher }
    }

    /// Active configuration
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parse tile blocks
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or any block is malformed
    pub fn parse(&self, input: &str) -> Result<Vec<Tile>> {
        parse_tiles(input)
    }

    /// Arrange the tiles and compute the corner product
    ///
    /// # Errors
    ///
    /// Returns an error if the census finds an ambiguous edge, the placement
    /// search fails, or the corner product overflows
    pub fn assemble(&self, tiles: &[Tile]) -> Result<Assembly> {
        let census_corners = if self.config.check_census {
            Some(EdgeCensus::build(tiles, self.config.active)?.corner_ids())
        } else {
            None
        };

        let placement = assemble(tiles, &self.config.orientations, &self.matcher)?;
        let corner_product = placement.corner_product()?;

        Ok(Assembly {
            placement,
            corner_product,
            census_corners,
        })
    }

    /// Merge the placement and erase every pattern occurrence
    ///
    /// # Errors
    ///
    /// Returns an error if the composite cannot be built
    pub fn roughness(&self, placement: &Placement) -> Result<PatternReport> {
        let composite = compose(placement)?;
        Ok(find_and_erase(
            &composite,
            &self.config.pattern,
            &self.config.orientations,
            self.config.active,
            self.config.marker,
        ))
    }

    /// Run every stage
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage
    pub fn solve(&self, input: &str) -> Result<Solution> {
        let tiles = self.parse(input)?;
        let assembly = self.assemble(&tiles)?;
        let report = self.roughness(&assembly.placement)?;

        Ok(Solution {
            tile_count: tiles.len(),
            assembly,
            report,
        })
    }
}
