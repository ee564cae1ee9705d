//! Self-adaptive island-model genetic algorithm for bit-string optimization.
//!
//! Evolves multiple sub-populations ("islands") with island-specific
//! tournament pressure, fixed-midpoint crossover, and bit-flip mutation.
//! Migration is **self-adaptive**: an individual's home island is itself a
//! mutable gene, inherited and mutated along with the bit string, so the
//! population learns its own distribution across islands. An optional
//! stochastic global-tournament mode periodically pits representatives of
//! every island against each other in a single flat competition.
//!
//! # Core Types
//!
//! - [`GaConfig`]: run parameters (islands, rates, landscape, seed)
//! - [`Landscape`]: the fitness function — Leading-Ones, plateau variants,
//!   TwoMax, or MAX-SAT over a [`ClauseSet`]
//! - [`Individual`] / [`Island`]: the population model
//! - [`GaRunner`]: executes the multi-generation, multi-experiment run
//! - [`GaResult`] / [`ExperimentRecord`] / [`Snapshot`]: read-only
//!   observations handed to reporting collaborators
//!
//! # Example
//!
//! ```
//! use island_ga::{GaConfig, GaRunner, Landscape};
//!
//! let config = GaConfig::default()
//!     .with_island_count(5)
//!     .with_genome_length(20)
//!     .with_initial_population(50)
//!     .with_generations(40)
//!     .with_generation_split(10)
//!     .with_experiments(1)
//!     .with_landscape(Landscape::TwoMax)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&config).unwrap();
//! let best = result.experiments[0].final_best();
//! assert!(best.is_some());
//! ```
//!
//! # References
//!
//! - Whitley, Rana & Heckendorn (1999), "The Island Model Genetic
//!   Algorithm: On Separability, Population Size and Convergence"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*
//!   (self-adaptation, ch. 8)

pub mod config;
pub mod fitness;
pub mod individual;
pub mod island;
pub mod migration;
pub mod operators;
pub mod runner;
pub mod selection;

pub use config::GaConfig;
pub use fitness::{ClauseSet, Landscape, PLATEAU_FITNESS};
pub use individual::Individual;
pub use island::Island;
pub use runner::{ExperimentRecord, GaResult, GaRunner, Snapshot, GLOBAL_TOURNAMENT_PROBABILITY};
