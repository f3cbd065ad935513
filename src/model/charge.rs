use serde::Serialize;

use super::types::Element;

/// Mean equilibrium charge state and its spread for one projectile at one
/// velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeStateStats {
    pub mean: f64,
    pub std: f64,
}

/// Discrete charge-state distribution over a contiguous window of charge
/// states. `probabilities[i]` belongs to `charge_states[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub charge_states: Vec<i32>,
    pub probabilities: Vec<f64>,
}

impl Distribution {
    #[inline]
    pub fn len(&self) -> usize {
        self.charge_states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.charge_states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.charge_states
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }

    /// Charge state carrying the largest probability. Ties go to the lower
    /// charge state.
    pub fn most_probable(&self) -> Option<i32> {
        self.iter()
            .fold(None, |best: Option<(i32, f64)>, (q, p)| match best {
                Some((_, best_p)) if best_p >= p => best,
                _ => Some((q, p)),
            })
            .map(|(q, _)| q)
    }

    pub fn percentages(&self) -> Vec<f64> {
        self.probabilities.iter().map(|p| p * 100.0).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub mean: f64,
    pub std: f64,
}

impl SummaryRow {
    pub fn new(element: Element, stats: ChargeStateStats) -> Self {
        Self {
            atomic_number: element.atomic_number(),
            symbol: element.symbol(),
            name: element.name(),
            mean: stats.mean,
            std: stats.std,
        }
    }
}

pub type SummaryTable = Vec<SummaryRow>;
