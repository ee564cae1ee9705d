//! Islands: ordered, variable-length sub-populations.
//!
//! An island is identified by its position in the population vector; its
//! size is an emergent, tracked quantity that fluctuates with emigration,
//! never an invariant. An island may legitimately become empty.

use crate::fitness::Landscape;
use crate::individual::Individual;

/// One sub-population.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Island {
    members: Vec<Individual>,
}

impl Island {
    /// Creates an empty island.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an island from an existing member list, preserving order.
    pub fn from_members(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// Current population size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the island has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Appends an individual.
    pub fn push(&mut self, individual: Individual) {
        self.members.push(individual);
    }

    /// The members, in current order.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Ranks members descending by cached fitness.
    ///
    /// The sort is stable, so ties keep their prior relative order; stale
    /// individuals (`fitness == None`) rank below everything.
    pub fn rank_descending(&mut self) {
        self.members
            .sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    }

    /// Highest cached fitness, or `None` for an empty island.
    ///
    /// `None` is the "no individuals" sentinel handed to the snapshot
    /// stage; an empty island is a legitimate state, not an error.
    pub fn max_fitness(&self) -> Option<u32> {
        self.members.iter().filter_map(|m| m.fitness()).max()
    }

    /// Recomputes every member's cached fitness.
    pub fn refresh_fitness(&mut self, landscape: &Landscape) {
        for member in &mut self.members {
            member.refresh_fitness(landscape);
        }
    }
}

/// Total individual count across all islands.
pub fn total_population(islands: &[Island]) -> usize {
    islands.iter().map(Island::len).sum()
}
