//! The individual: a bit string, its home-island gene, and cached fitness.

use rand::Rng;

use crate::fitness::Landscape;

/// A candidate solution.
///
/// Besides its bit string, every individual carries a `home_island` gene —
/// the island index it declares as its destination after reproduction.
/// The gene itself is subject to mutation, which is what makes migration
/// self-adaptive: individuals inherit and mutate *where* they evolve, not
/// just *what* they encode.
///
/// The cached fitness is `None` while stale (after a bit flip) and is made
/// authoritative again by [`refresh_fitness`](Individual::refresh_fitness)
/// before the next selection reads it. Individuals are value-like: a clone
/// shares nothing with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    bits: Vec<bool>,
    home_island: usize,
    fitness: Option<u32>,
}

impl Individual {
    /// Creates an individual from `bits`, evaluating fitness eagerly.
    pub fn new(bits: Vec<bool>, home_island: usize, landscape: &Landscape) -> Self {
        let fitness = Some(landscape.evaluate(&bits));
        Self {
            bits,
            home_island,
            fitness,
        }
    }

    /// Creates an individual with uniformly random bits.
    pub fn random<R: Rng>(
        length: usize,
        home_island: usize,
        landscape: &Landscape,
        rng: &mut R,
    ) -> Self {
        let bits = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Self::new(bits, home_island, landscape)
    }

    /// Creates an all-zero individual (plateau-seeded initialization).
    pub fn zeros(length: usize, home_island: usize, landscape: &Landscape) -> Self {
        Self::new(vec![false; length], home_island, landscape)
    }

    /// The bit string.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Bit-string length.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the bit string is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The home-island gene.
    pub fn home_island(&self) -> usize {
        self.home_island
    }

    /// Cached fitness, or `None` while stale.
    pub fn fitness(&self) -> Option<u32> {
        self.fitness
    }

    /// Flips each bit independently with probability `mutation_rate`, then
    /// with probability `selection_mutation_rate` reassigns the home-island
    /// gene uniformly over `[0, island_count)`.
    ///
    /// Any bit flip invalidates the cached fitness; the caller must refresh
    /// it before the individual is next ranked.
    pub fn mutate<R: Rng>(
        &mut self,
        mutation_rate: f64,
        selection_mutation_rate: f64,
        island_count: usize,
        rng: &mut R,
    ) {
        let mut flipped = false;
        for bit in &mut self.bits {
            if rng.random::<f64>() < mutation_rate {
                *bit = !*bit;
                flipped = true;
            }
        }
        if flipped {
            self.fitness = None;
        }
        if rng.random::<f64>() < selection_mutation_rate {
            self.home_island = rng.random_range(0..island_count);
        }
    }

    /// Recomputes the cached fitness from the current bit string.
    pub fn refresh_fitness(&mut self, landscape: &Landscape) {
        self.fitness = Some(landscape.evaluate(&self.bits));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_evaluates_eagerly() {
        let ind = Individual::new(vec![true, true, false], 0, &Landscape::LeadingOnes);
        assert_eq!(ind.fitness(), Some(2));
        assert_eq!(ind.home_island(), 0);
    }

    #[test]
    fn test_random_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let ind = Individual::random(12, 3, &Landscape::TwoMax, &mut rng);
        assert_eq!(ind.len(), 12);
        assert_eq!(ind.home_island(), 3);
        assert!(ind.fitness().is_some());
    }

    #[test]
    fn test_zeros_sits_on_plateau() {
        let ind = Individual::zeros(8, 0, &Landscape::PlateauAtZero);
        assert!(ind.bits().iter().all(|&b| !b));
        assert_eq!(ind.fitness(), Some(5));
    }

    #[test]
    fn test_mutation_with_zero_rates_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::new(vec![true, false, true, true], 2, &Landscape::LeadingOnes);
        let before = ind.clone();
        ind.mutate(0.0, 0.0, 5, &mut rng);
        assert_eq!(ind, before);
    }

    #[test]
    fn test_mutation_rate_one_flips_every_bit() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::new(vec![true, false, true], 0, &Landscape::LeadingOnes);
        ind.mutate(1.0, 0.0, 5, &mut rng);
        assert_eq!(ind.bits(), &[false, true, false]);
        // Bit flips invalidate the cache.
        assert_eq!(ind.fitness(), None);
    }

    #[test]
    fn test_selection_gene_reassignment_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut ind = Individual::new(vec![true], 0, &Landscape::LeadingOnes);
            ind.mutate(0.0, 1.0, 7, &mut rng);
            assert!(ind.home_island() < 7);
        }
    }

    #[test]
    fn test_refresh_restores_cache() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::new(vec![false, false], 0, &Landscape::LeadingOnes);
        ind.mutate(1.0, 0.0, 1, &mut rng);
        assert_eq!(ind.fitness(), None);
        ind.refresh_fitness(&Landscape::LeadingOnes);
        assert_eq!(ind.fitness(), Some(2));
    }

    #[test]
    fn test_clones_are_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = Individual::new(vec![true, true], 1, &Landscape::LeadingOnes);
        let mut child = parent.clone();
        child.mutate(1.0, 0.0, 2, &mut rng);
        assert_eq!(parent.bits(), &[true, true]);
        assert_eq!(parent.fitness(), Some(2));
    }
}
