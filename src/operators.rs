//! Genetic operators: fixed-midpoint crossover and pairwise reproduction.
//!
//! Mutation lives on [`Individual`] itself (the individual owns its
//! self-adaptive migration gene); this module recombines selected parents
//! into the next generation's children.

use rand::Rng;

use crate::config::GaConfig;
use crate::individual::Individual;

/// Single-point crossover at the fixed midpoint `⌊L/2⌋`.
///
/// Child 1 takes parent 1's first half and parent 2's second half;
/// child 2 takes the complementary split. No other crossover point is
/// used. Returns the raw child bit strings.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover(parent1: &Individual, parent2: &Individual) -> (Vec<bool>, Vec<bool>) {
    let length = parent1.len();
    assert_eq!(length, parent2.len(), "parents must have equal length");
    let midpoint = length / 2;

    let mut child1 = Vec::with_capacity(length);
    let mut child2 = Vec::with_capacity(length);
    child1.extend_from_slice(&parent1.bits()[..midpoint]);
    child1.extend_from_slice(&parent2.bits()[midpoint..]);
    child2.extend_from_slice(&parent2.bits()[..midpoint]);
    child2.extend_from_slice(&parent1.bits()[midpoint..]);
    (child1, child2)
}

/// How a crossover pair's children receive their home-island gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildHomes {
    /// Both children target the given island — per-island evolution, where
    /// offspring stay on the island that produced them unless mutation
    /// reassigns the gene.
    Fixed(usize),
    /// Child 1 inherits the even-position parent's home island and child 2
    /// the odd-position parent's — global-tournament mode.
    Inherit,
}

/// Turns tournament winners into the next generation's children.
///
/// Parents are consumed pairwise in order: each pair yields two crossover
/// children, which are mutated immediately. An odd-sized batch carries its
/// final unpaired winner straight through, unchanged — no crossover, no
/// mutation, home island as-is.
///
/// Output size always equals input size.
pub fn reproduce<R: Rng>(
    parents: &[Individual],
    homes: ChildHomes,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let mutation_rate = config.effective_mutation_rate();
    let pair_count = parents.len() / 2;
    let mut children = Vec::with_capacity(parents.len());

    for i in 0..pair_count {
        let parent1 = &parents[i * 2];
        let parent2 = &parents[i * 2 + 1];
        let (bits1, bits2) = crossover(parent1, parent2);
        let (home1, home2) = match homes {
            ChildHomes::Fixed(island) => (island, island),
            ChildHomes::Inherit => (parent1.home_island(), parent2.home_island()),
        };
        let mut child1 = Individual::new(bits1, home1, &config.landscape);
        let mut child2 = Individual::new(bits2, home2, &config.landscape);
        child1.mutate(
            mutation_rate,
            config.selection_mutation_rate,
            config.island_count,
            rng,
        );
        child2.mutate(
            mutation_rate,
            config.selection_mutation_rate,
            config.island_count,
            rng,
        );
        children.push(child1);
        children.push(child2);
    }

    if parents.len() % 2 != 0 {
        // Unpaired elite passes through untouched.
        children.push(parents[parents.len() - 1].clone());
    }

    children
}
