//! Fitness landscapes for bit-string optimization.
//!
//! A [`Landscape`] maps a bit string to a non-negative integer fitness.
//! Higher fitness is better throughout this crate (maximization).
//!
//! The synthetic landscapes are classic benchmark functions used to study
//! how island heterogeneity helps escape local optima:
//!
//! - [`Landscape::LeadingOnes`]: length of the unbroken run of 1-bits from
//!   position 0
//! - [`Landscape::PlateauAtZero`]: Leading-Ones with an absorbing
//!   high-fitness plateau at the all-zero string
//! - [`Landscape::TwoMax`]: two global optima (all-ones and all-zeros)
//! - [`Landscape::MaxSat`]: number of satisfied clauses in an externally
//!   supplied CNF formula
//!
//! # References
//!
//! - Rudolph (1997), *Convergence Properties of Evolutionary Algorithms*
//!   (LeadingOnes analysis)
//! - Goldberg, Van Hoyweghen & Naudts (2002), "From TwoMax to the Ising
//!   Model: Easy and Hard Symmetrical Problems"
//! - Hoos & Stützle (2004), *Stochastic Local Search* (MAX-SAT)

/// Fitness of the all-zero string under the plateau landscapes.
///
/// Fixed and independent of genome length. The plateau is a local-optimum
/// trap: strictly better than short runs of leading ones, strictly worse
/// than the true optimum (all ones, fitness = length) whenever length > 5.
pub const PLATEAU_FITNESS: u32 = 5;

/// A CNF clause set for the MAX-SAT landscape.
///
/// Clauses are ordered collections of non-zero signed literals. Variable
/// ids are 1-indexed; the sign encodes polarity, so literal `3` is
/// satisfied when bit 2 is 1 and literal `-3` when bit 2 is 0.
///
/// Construction validates every literal up front; a malformed clause set
/// is a fatal input error surfaced before any run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClauseSet {
    clauses: Vec<Vec<i32>>,
    variables: usize,
}

impl ClauseSet {
    /// Creates a clause set over `variables` variables.
    ///
    /// Returns `Err` if `variables` is zero, any literal is zero, or any
    /// literal references a variable id greater than `variables`.
    pub fn new(clauses: Vec<Vec<i32>>, variables: usize) -> Result<Self, String> {
        if variables == 0 {
            return Err("clause set must have at least one variable".into());
        }
        for (i, clause) in clauses.iter().enumerate() {
            for &literal in clause {
                if literal == 0 {
                    return Err(format!("clause {i} contains a zero literal"));
                }
                let var = literal.unsigned_abs() as usize;
                if var > variables {
                    return Err(format!(
                        "clause {i} references variable {var}, but the clause set has {variables} variables"
                    ));
                }
            }
        }
        Ok(Self { clauses, variables })
    }

    /// Number of variables (and therefore the required genome length).
    pub fn variables(&self) -> usize {
        self.variables
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the clause set has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses, in input order.
    pub fn clauses(&self) -> &[Vec<i32>] {
        &self.clauses
    }

    /// Counts the clauses satisfied by `bits`.
    fn satisfied_count(&self, bits: &[bool]) -> u32 {
        self.clauses
            .iter()
            .filter(|clause| clause_satisfied(clause, bits))
            .count() as u32
    }
}

/// A clause is satisfied if any positive literal maps to a 1-bit or any
/// negative literal maps to a 0-bit.
fn clause_satisfied(clause: &[i32], bits: &[bool]) -> bool {
    clause.iter().any(|&literal| {
        let bit = bits[literal.unsigned_abs() as usize - 1];
        if literal > 0 {
            bit
        } else {
            !bit
        }
    })
}

/// A fitness landscape, selected once per run and fixed for its duration.
///
/// Modeled as a closed enum with a single evaluation entry point so that
/// invalid landscape combinations cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Landscape {
    /// Count of consecutive 1-bits starting at position 0.
    LeadingOnes,
    /// Leading-Ones, except the all-zero string scores [`PLATEAU_FITNESS`].
    PlateauAtZero,
    /// [`Landscape::PlateauAtZero`] with the initial population seeded
    /// directly on the plateau (all-zero bit strings). Evaluation is
    /// identical to `PlateauAtZero`; only initialization differs.
    PlateauAtZeroSeeded,
    /// `max(ones, zeros)` — two global optima.
    TwoMax,
    /// Number of satisfied clauses in the given formula.
    MaxSat(ClauseSet),
}

impl Landscape {
    /// Evaluates `bits` under this landscape.
    ///
    /// Deterministic, pure, O(length) time for the synthetic landscapes
    /// and O(total literals) for MAX-SAT.
    ///
    /// # Panics
    /// For [`Landscape::MaxSat`], panics if `bits` is shorter than the
    /// clause set's variable count. [`GaConfig::validate`] rules this out
    /// for engine-managed individuals.
    ///
    /// [`GaConfig::validate`]: crate::config::GaConfig::validate
    pub fn evaluate(&self, bits: &[bool]) -> u32 {
        match self {
            Landscape::LeadingOnes => leading_ones(bits),
            Landscape::PlateauAtZero | Landscape::PlateauAtZeroSeeded => {
                if bits.iter().all(|&b| !b) {
                    PLATEAU_FITNESS
                } else {
                    leading_ones(bits)
                }
            }
            Landscape::TwoMax => {
                let ones = bits.iter().filter(|&&b| b).count();
                ones.max(bits.len() - ones) as u32
            }
            Landscape::MaxSat(clause_set) => clause_set.satisfied_count(bits),
        }
    }

    /// Whether this landscape seeds the initial population at all zeros.
    pub fn zero_seeded(&self) -> bool {
        matches!(self, Landscape::PlateauAtZeroSeeded)
    }
}

fn leading_ones(bits: &[bool]) -> u32 {
    bits.iter().take_while(|&&b| b).count() as u32
}
