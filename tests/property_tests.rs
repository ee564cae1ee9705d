//! Property-based tests for island-ga.
//!
//! Uses proptest to verify structural invariants of the landscapes,
//! operators, and whole runs.

use island_ga::operators::crossover;
use island_ga::{GaConfig, GaRunner, Individual, Landscape};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bit_pair() -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (1usize..48).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<bool>(), len),
            prop::collection::vec(any::<bool>(), len),
        )
    })
}

proptest! {
    // ==================== Landscape properties ====================

    #[test]
    fn two_max_complement_symmetry(bits in prop::collection::vec(any::<bool>(), 1..64)) {
        let complement: Vec<bool> = bits.iter().map(|&b| !b).collect();
        prop_assert_eq!(
            Landscape::TwoMax.evaluate(&bits),
            Landscape::TwoMax.evaluate(&complement)
        );
    }

    #[test]
    fn two_max_at_least_half_length(bits in prop::collection::vec(any::<bool>(), 1..64)) {
        let fitness = Landscape::TwoMax.evaluate(&bits) as usize;
        prop_assert!(fitness * 2 >= bits.len());
        prop_assert!(fitness <= bits.len());
    }

    #[test]
    fn leading_ones_matches_prefix_run(bits in prop::collection::vec(any::<bool>(), 1..64)) {
        let expected = bits.iter().position(|&b| !b).unwrap_or(bits.len()) as u32;
        prop_assert_eq!(Landscape::LeadingOnes.evaluate(&bits), expected);
    }

    #[test]
    fn plateau_differs_from_leading_ones_only_at_zero(
        bits in prop::collection::vec(any::<bool>(), 1..64)
    ) {
        let plateau = Landscape::PlateauAtZero.evaluate(&bits);
        if bits.iter().any(|&b| b) {
            prop_assert_eq!(plateau, Landscape::LeadingOnes.evaluate(&bits));
        } else {
            prop_assert_eq!(plateau, island_ga::PLATEAU_FITNESS);
        }
    }

    // ==================== Operator properties ====================

    #[test]
    fn crossover_is_bijection_on_positions((b1, b2) in bit_pair()) {
        let landscape = Landscape::LeadingOnes;
        let p1 = Individual::new(b1.clone(), 0, &landscape);
        let p2 = Individual::new(b2.clone(), 0, &landscape);
        let (c1, c2) = crossover(&p1, &p2);
        let mid = b1.len() / 2;

        prop_assert_eq!(&c1[..mid], &b1[..mid]);
        prop_assert_eq!(&c1[mid..], &b2[mid..]);
        prop_assert_eq!(&c2[..mid], &b2[..mid]);
        prop_assert_eq!(&c2[mid..], &b1[mid..]);

        // Applying crossover again to the same parents is structurally
        // identical (mutation is a separate step).
        prop_assert_eq!(crossover(&p1, &p2), (c1, c2));
    }

    #[test]
    fn mutation_with_zero_rates_is_identity(
        bits in prop::collection::vec(any::<bool>(), 1..48),
        home in 0usize..10,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut individual = Individual::new(bits, home, &Landscape::TwoMax);
        let before = individual.clone();
        individual.mutate(0.0, 0.0, 10, &mut rng);
        prop_assert_eq!(individual, before);
    }

    #[test]
    fn mutated_home_island_stays_in_range(
        islands in 1usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut individual = Individual::new(vec![true; 8], 0, &Landscape::LeadingOnes);
        individual.mutate(0.5, 1.0, islands, &mut rng);
        prop_assert!(individual.home_island() < islands);
    }

    // ==================== Whole-run properties ====================

    #[test]
    fn run_conserves_total_population(
        islands in 1usize..5,
        population in 1usize..16,
        generations in 0usize..8,
        seed in any::<u64>(),
    ) {
        let config = GaConfig::default()
            .with_island_count(islands)
            .with_genome_length(6)
            .with_initial_population(population)
            .with_generations(generations)
            .with_generation_split(1)
            .with_experiments(1)
            .with_seed(seed);

        let result = GaRunner::run(&config).unwrap();
        for snapshot in &result.experiments[0].snapshots {
            prop_assert_eq!(snapshot.total_size(), population);
        }
    }

    #[test]
    fn seeded_runs_are_deterministic(seed in any::<u64>()) {
        let config = GaConfig::default()
            .with_island_count(3)
            .with_genome_length(6)
            .with_initial_population(8)
            .with_generations(5)
            .with_generation_split(1)
            .with_experiments(2)
            .with_global_tournament(true)
            .with_seed(seed);

        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();
        prop_assert_eq!(a, b);
    }
}
