//! Pairwise contact detection and resolution.
//!
//! Every unordered pair is checked each tick, so the scan is O(n²). Pairs are
//! visited in ascending index order (`(0,1), (0,2), .., (1,2), ..`) and each
//! contact is resolved before the next pair is examined. An agent touching
//! several neighbours in the same tick therefore accumulates its deflections
//! in that order.

use crate::agent::Agent;

/// Totals for one pass of [`CollisionDetector::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactSummary {
    /// Pairs found within the threshold.
    pub interactions: usize,
    /// Agents that went from `New` to `Infected` during the pass.
    pub infections: usize,
}

/// Applies the contact rule to one pair.
///
/// If either agent is infected, both are infected (a no-op for agents that
/// are not `New`). Both agents are then deflected, each using the direction
/// the other had before this contact. Returns the number of new infections.
pub fn interact(a: &mut Agent, b: &mut Agent) -> usize {
    let mut infections = 0;
    if a.is_infected() || b.is_infected() {
        infections += usize::from(a.infect());
        infections += usize::from(b.infect());
    }

    let (dir_a, dir_b) = (a.direction(), b.direction());
    a.deflect(dir_b);
    b.deflect(dir_a);
    infections
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    threshold: f64,
}

impl CollisionDetector {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Strictly closer than the threshold.
    #[must_use]
    pub fn in_contact(&self, a: &Agent, b: &Agent) -> bool {
        a.distance_to(b) < self.threshold
    }

    /// Index pairs currently in contact, ascending. Read-only.
    #[must_use]
    pub fn contacts(&self, agents: &[Agent]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..agents.len() {
            for j in (i + 1)..agents.len() {
                if self.in_contact(&agents[i], &agents[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Scans every pair in ascending order and resolves each contact in place.
    pub fn resolve(&self, agents: &mut [Agent]) -> ContactSummary {
        let mut summary = ContactSummary::default();
        for i in 0..agents.len() {
            let (head, tail) = agents.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail.iter_mut() {
                if self.in_contact(first, second) {
                    summary.interactions += 1;
                    summary.infections += interact(first, second);
                }
            }
        }
        summary
    }
}
