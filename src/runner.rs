//! The generational controller.
//!
//! [`GaRunner`] drives the whole run: for each experiment it initializes a
//! fresh population, then per generation either evolves every island
//! independently or — with a fixed 10% probability when enabled — replaces
//! the generation with a single cross-island global tournament. Each
//! generation ends with migration delivery, a full population commit, and a
//! fitness refresh, so the cache is authoritative before the next selection.
//!
//! The runner performs no formatting or rendering; it hands the reporting
//! collaborator plain read-only snapshot sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::GaConfig;
use crate::individual::Individual;
use crate::island::Island;
use crate::migration;
use crate::operators::{self, ChildHomes};
use crate::selection;

/// Probability that an enabled global-tournament run replaces a
/// generation's per-island evolution.
pub const GLOBAL_TOURNAMENT_PROBABILITY: f64 = 0.1;

/// Population observation taken at generation 0 and at every
/// `generation_split` generations thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Generation index this snapshot was taken at.
    pub generation: usize,

    /// Maximum fitness per island, in island order.
    /// `None` is the empty-island sentinel.
    pub island_best: Vec<Option<u32>>,

    /// Population size per island, in island order.
    pub island_sizes: Vec<usize>,
}

impl Snapshot {
    /// Best fitness across all islands, or `None` if every island is empty.
    pub fn best(&self) -> Option<u32> {
        self.island_best.iter().filter_map(|&b| b).max()
    }

    /// Total individual count across all islands.
    pub fn total_size(&self) -> usize {
        self.island_sizes.iter().sum()
    }
}

/// One experiment's snapshot sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentRecord {
    /// Snapshots in generation order, starting at generation 0.
    pub snapshots: Vec<Snapshot>,
}

impl ExperimentRecord {
    /// Best-across-islands fitness at each snapshot.
    pub fn best_history(&self) -> Vec<Option<u32>> {
        self.snapshots.iter().map(Snapshot::best).collect()
    }

    /// Best fitness at the final snapshot.
    pub fn final_best(&self) -> Option<u32> {
        self.snapshots.last().and_then(Snapshot::best)
    }
}

/// Result of a full multi-experiment run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// One record per experiment, in execution order.
    pub experiments: Vec<ExperimentRecord>,
}

/// Executes the self-adaptive island GA.
///
/// # Usage
///
/// ```
/// use island_ga::{GaConfig, GaRunner, Landscape};
///
/// let config = GaConfig::default()
///     .with_island_count(4)
///     .with_genome_length(16)
///     .with_initial_population(40)
///     .with_generations(30)
///     .with_generation_split(10)
///     .with_experiments(2)
///     .with_landscape(Landscape::LeadingOnes)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.experiments.len(), 2);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs `experiments` independent repetitions of the configured GA.
    ///
    /// Fails fast with a description if the configuration is invalid;
    /// nothing runs in that case.
    pub fn run(config: &GaConfig) -> Result<GaResult, String> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let mut experiments = Vec::with_capacity(config.experiments);
        for _ in 0..config.experiments {
            experiments.push(run_experiment(config, &mut rng));
        }
        Ok(GaResult { experiments })
    }
}

/// One experiment: fresh population, `generations` generational steps,
/// snapshots at generation 0 and every `generation_split` thereafter.
fn run_experiment<R: Rng>(config: &GaConfig, rng: &mut R) -> ExperimentRecord {
    let mut islands = init_islands(config, rng);
    let mut snapshots = vec![take_snapshot(0, &islands)];

    for generation in 0..config.generations {
        advance_generation(&mut islands, config, rng);
        if (generation + 1) % config.generation_split == 0 {
            snapshots.push(take_snapshot(generation + 1, &islands));
        }
    }

    ExperimentRecord { snapshots }
}

/// Island 0 receives the whole initial population; every other island
/// starts empty and fills through emigration.
fn init_islands<R: Rng>(config: &GaConfig, rng: &mut R) -> Vec<Island> {
    let mut islands = vec![Island::new(); config.island_count];
    let zero_seeded = config.zero_seeded_initialization();
    for _ in 0..config.initial_population {
        let individual = if zero_seeded {
            Individual::zeros(config.genome_length, 0, &config.landscape)
        } else {
            Individual::random(config.genome_length, 0, &config.landscape, rng)
        };
        islands[0].push(individual);
    }
    islands
}

/// One generation: SELECT → REPRODUCE → ROUTE → COMMIT → REFRESH.
///
/// The new population replaces the old one in full; there is no partial
/// carryover. Islands are processed in index order so that emigrant
/// delivery is deterministic under a fixed seed.
fn advance_generation<R: Rng>(islands: &mut Vec<Island>, config: &GaConfig, rng: &mut R) {
    let island_count = islands.len();
    let mut next: Vec<Island> = vec![Island::new(); island_count];
    let mut emigrants: Vec<Individual> = Vec::new();

    if config.global_tournament && rng.random::<f64>() < GLOBAL_TOURNAMENT_PROBABILITY {
        // The whole population is rebuilt from cross-island
        // representatives; all of them route through the emigrant pool.
        let representatives = selection::global_tournament(islands, config, rng);
        emigrants = operators::reproduce(&representatives, ChildHomes::Inherit, config, rng);
    } else {
        for index in 0..island_count {
            let winners = selection::tournament(&mut islands[index], index + 1, config, rng);
            let children = operators::reproduce(&winners, ChildHomes::Fixed(index), config, rng);
            let (keep, leave) = migration::split_emigrants(children, index);
            next[index] = Island::from_members(keep);
            emigrants.extend(leave);
        }
    }

    migration::deliver(&mut next, emigrants);
    *islands = next;
    refresh_population(islands, config);
}

/// Recomputes every individual's fitness after the commit.
///
/// Required even for individuals whose bits did not change this
/// generation: the cache must be authoritative before the next SELECT.
fn refresh_population(islands: &mut [Island], config: &GaConfig) {
    #[cfg(feature = "parallel")]
    if config.parallel {
        islands
            .par_iter_mut()
            .for_each(|island| island.refresh_fitness(&config.landscape));
        return;
    }
    for island in islands.iter_mut() {
        island.refresh_fitness(&config.landscape);
    }
}

fn take_snapshot(generation: usize, islands: &[Island]) -> Snapshot {
    Snapshot {
        generation,
        island_best: islands.iter().map(Island::max_fitness).collect(),
        island_sizes: islands.iter().map(Island::len).collect(),
    }
}
