//! Tournament selection with island-graded selective pressure.
//!
//! Contestants are never drawn from a whole island, but from its
//! *pressure window*: the top `P + 1` ranked members, where `P` depends on
//! the island's index. Low-index islands get a tight window (exploitation),
//! high-index islands a loose one (exploration), so the island axis encodes
//! a gradient from elitist to exploratory search.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Skolicki & De Jong (2005), "The Influence of Migration Sizes and
//!   Intervals on Island Models"

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GaConfig;
use crate::individual::Individual;
use crate::island::Island;

/// Upper contestant index `P` for an island of `island_len` members.
///
/// `island_no` is the 1-based island number used by the pressure formula
/// `P = ⌈(m − 1) · (upper − lower · k / island_count)⌉`. With adaptive
/// pressure disabled every island uses its full ranked range (`m − 1`).
///
/// The result is clamped into `[0, m − 1]` so that contestant draws are
/// always in bounds, whatever the configured rates; islands resize every
/// generation, so the bound is recomputed from the live size each time.
pub fn pressure_bound(island_len: usize, island_no: usize, config: &GaConfig) -> usize {
    if island_len == 0 {
        return 0;
    }
    let cap = island_len - 1;
    if !config.adaptive_pressure {
        return cap;
    }
    let k = island_no as f64;
    let n = config.island_count as f64;
    let raw = (cap as f64
        * (config.selective_rate_upper - config.selective_rate_lower * k / n))
        .ceil();
    if raw < 0.0 {
        0
    } else {
        (raw as usize).min(cap)
    }
}

/// Per-island binary tournament selection.
///
/// Ranks the island descending by fitness in place, then fills one output
/// slot per member: two contestant indices are drawn uniformly from
/// `[0, P]` into the ranked order and the fitter contestant wins (the
/// second on a tie). An empty island yields no winners.
pub fn tournament<R: Rng>(
    island: &mut Island,
    island_no: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    island.rank_descending();
    let size = island.len();
    if size == 0 {
        return Vec::new();
    }

    let pressure = pressure_bound(size, island_no, config);
    let ranked = island.members();
    let mut winners = Vec::with_capacity(size);
    for _ in 0..size {
        let contestant1 = &ranked[rng.random_range(0..=pressure)];
        let contestant2 = &ranked[rng.random_range(0..=pressure)];
        if contestant1.fitness() > contestant2.fitness() {
            winners.push(contestant1.clone());
        } else {
            winners.push(contestant2.clone());
        }
    }
    winners
}

/// Cross-island global tournament.
///
/// Produces `initial_population` representatives. For each output slot,
/// one contestant is drawn from every non-empty island's pressure window
/// (after ranking the island); the group is shuffled to erase island
/// position bias, stably sorted descending by fitness, and its top
/// individual becomes the slot's representative.
pub fn global_tournament<R: Rng>(
    islands: &mut [Island],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    for island in islands.iter_mut() {
        island.rank_descending();
    }
    let pressures: Vec<usize> = islands
        .iter()
        .enumerate()
        .map(|(idx, island)| pressure_bound(island.len(), idx + 1, config))
        .collect();

    let mut representatives = Vec::with_capacity(config.initial_population);
    for _ in 0..config.initial_population {
        let mut group: Vec<Individual> = Vec::new();
        for (island, &pressure) in islands.iter().zip(&pressures) {
            if island.is_empty() {
                continue;
            }
            let contestant = rng.random_range(0..=pressure);
            group.push(island.members()[contestant].clone());
        }
        group.shuffle(rng);
        group.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
        if let Some(best) = group.into_iter().next() {
            representatives.push(best);
        }
    }
    representatives
}
