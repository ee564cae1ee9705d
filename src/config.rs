//! Run configuration.
//!
//! [`GaConfig`] bundles every parameter of the engine into a single
//! immutable value passed explicitly into each component, so independent
//! experiments can run side by side without shared state.

use crate::fitness::{ClauseSet, Landscape};

/// Configuration for the self-adaptive island GA.
///
/// Defaults: 20 islands of 20-bit genomes, 250 initial individuals,
/// 250 generations observed every 10 generations, 30 experiments.
///
/// # Builder Pattern
///
/// ```
/// use island_ga::{GaConfig, Landscape};
///
/// let config = GaConfig::default()
///     .with_island_count(5)
///     .with_genome_length(40)
///     .with_landscape(Landscape::TwoMax)
///     .with_seed(42);
/// assert_eq!(config.island_count, 5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of islands (sub-populations). Must be at least 1.
    pub island_count: usize,

    /// Bit-string length of every individual. Must be at least 1.
    pub genome_length: usize,

    /// Number of individuals seeded onto island 0 at generation 0.
    ///
    /// All other islands start empty; the self-adaptive migration gene
    /// spreads the population out over the run.
    pub initial_population: usize,

    /// Number of generations per experiment.
    pub generations: usize,

    /// Snapshot cadence: a snapshot is recorded at generation 0 and at
    /// every generation divisible by this value. Must be at least 1.
    pub generation_split: usize,

    /// Number of independent experiment repetitions.
    pub experiments: usize,

    /// Per-bit flip probability. `None` uses `1 / genome_length`.
    pub mutation_rate: Option<f64>,

    /// Probability that mutation reassigns an individual's home island
    /// to a uniformly random island — the self-adaptive migration gene.
    pub selection_mutation_rate: f64,

    /// Upper bound of the selective-pressure gradient.
    pub selective_rate_upper: f64,

    /// Lower bound of the selective-pressure gradient.
    /// Must not exceed `selective_rate_upper`.
    pub selective_rate_lower: f64,

    /// Whether selection pressure varies by island index.
    ///
    /// When enabled, low-index islands draw tournament contestants from a
    /// tighter top-ranked window (more elitist) and high-index islands
    /// from a looser one (more exploratory). When disabled, every island
    /// uses the full population as its window.
    pub adaptive_pressure: bool,

    /// Whether a generation may be replaced by a single cross-island
    /// global tournament (entered with fixed probability
    /// [`GLOBAL_TOURNAMENT_PROBABILITY`](crate::runner::GLOBAL_TOURNAMENT_PROBABILITY)).
    pub global_tournament: bool,

    /// Seed the initial population with all-zero bit strings instead of
    /// uniformly random ones. Implied by
    /// [`Landscape::PlateauAtZeroSeeded`].
    pub zero_seeded: bool,

    /// The fitness landscape, fixed for the duration of the run.
    pub landscape: Landscape,

    /// Whether to refresh fitness in parallel using rayon.
    ///
    /// Only the per-individual fitness recomputation is parallelized;
    /// selection, reproduction, and migration stay sequential so that a
    /// seeded run is reproducible. Requires the `parallel` cargo feature;
    /// without it the flag is ignored.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            island_count: 20,
            genome_length: 20,
            initial_population: 250,
            generations: 250,
            generation_split: 10,
            experiments: 30,
            mutation_rate: None,
            selection_mutation_rate: 0.05,
            selective_rate_upper: 0.7,
            selective_rate_lower: 0.4,
            adaptive_pressure: true,
            global_tournament: false,
            zero_seeded: false,
            landscape: Landscape::LeadingOnes,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Configuration for a MAX-SAT run, deriving the genome length from
    /// the clause set's variable count.
    pub fn for_max_sat(clause_set: ClauseSet) -> Self {
        Self {
            genome_length: clause_set.variables(),
            landscape: Landscape::MaxSat(clause_set),
            ..Self::default()
        }
    }

    /// Sets the number of islands.
    pub fn with_island_count(mut self, n: usize) -> Self {
        self.island_count = n;
        self
    }

    /// Sets the bit-string length.
    pub fn with_genome_length(mut self, n: usize) -> Self {
        self.genome_length = n;
        self
    }

    /// Sets the initial population size.
    pub fn with_initial_population(mut self, n: usize) -> Self {
        self.initial_population = n;
        self
    }

    /// Sets the number of generations per experiment.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the snapshot cadence.
    pub fn with_generation_split(mut self, n: usize) -> Self {
        self.generation_split = n;
        self
    }

    /// Sets the number of experiment repetitions.
    pub fn with_experiments(mut self, n: usize) -> Self {
        self.experiments = n;
        self
    }

    /// Sets the per-bit mutation rate explicitly.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    /// Sets the selection-gene mutation rate.
    pub fn with_selection_mutation_rate(mut self, rate: f64) -> Self {
        self.selection_mutation_rate = rate;
        self
    }

    /// Sets both selective-pressure rates.
    pub fn with_selective_rates(mut self, upper: f64, lower: f64) -> Self {
        self.selective_rate_upper = upper;
        self.selective_rate_lower = lower;
        self
    }

    /// Enables or disables the island-graded pressure gradient.
    pub fn with_adaptive_pressure(mut self, adaptive: bool) -> Self {
        self.adaptive_pressure = adaptive;
        self
    }

    /// Enables or disables the stochastic global-tournament mode.
    pub fn with_global_tournament(mut self, enabled: bool) -> Self {
        self.global_tournament = enabled;
        self
    }

    /// Seeds the initial population with all-zero bit strings.
    pub fn with_zero_seeded(mut self, zero_seeded: bool) -> Self {
        self.zero_seeded = zero_seeded;
        self
    }

    /// Sets the fitness landscape.
    pub fn with_landscape(mut self, landscape: Landscape) -> Self {
        self.landscape = landscape;
        self
    }

    /// Enables or disables parallel fitness refresh.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The per-bit mutation rate actually applied:
    /// the configured value, or `1 / genome_length` when unset.
    pub fn effective_mutation_rate(&self) -> f64 {
        self.mutation_rate
            .unwrap_or(1.0 / self.genome_length as f64)
    }

    /// Whether the initial population is seeded at all zeros, either
    /// explicitly or through the landscape variant.
    pub fn zero_seeded_initialization(&self) -> bool {
        self.zero_seeded || self.landscape.zero_seeded()
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// Called by the runner before any generation executes.
    pub fn validate(&self) -> Result<(), String> {
        if self.island_count == 0 {
            return Err("island_count must be at least 1".into());
        }
        if self.genome_length == 0 {
            return Err("genome_length must be at least 1".into());
        }
        if self.initial_population == 0 {
            return Err("initial_population must be at least 1".into());
        }
        if self.generation_split == 0 {
            return Err("generation_split must be at least 1".into());
        }
        if self.experiments == 0 {
            return Err("experiments must be at least 1".into());
        }
        if let Some(rate) = self.mutation_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err("mutation_rate must be within [0, 1]".into());
            }
        }
        if !(0.0..=1.0).contains(&self.selection_mutation_rate) {
            return Err("selection_mutation_rate must be within [0, 1]".into());
        }
        if self.selective_rate_upper < self.selective_rate_lower {
            return Err(
                "selective_rate_upper must not be below selective_rate_lower".into(),
            );
        }
        if let Landscape::MaxSat(ref clause_set) = self.landscape {
            if clause_set.variables() != self.genome_length {
                return Err(format!(
                    "MAX-SAT clause set has {} variables but genome_length is {}",
                    clause_set.variables(),
                    self.genome_length
                ));
            }
        }
        Ok(())
    }
}
