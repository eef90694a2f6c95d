//! Time series of aggregate observations.

use crate::population::Population;
use contagion_data::Observation;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Observations sampled every `interval` ticks, oldest dropped past `capacity`.
///
/// Tick 0 counts as due, so the pre-epidemic state is the first sample.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObservationLog {
    interval: u64,
    capacity: usize,
    samples: VecDeque<Observation>,
    peak_infected: usize,
}

impl ObservationLog {
    /// `interval` and `capacity` are clamped to at least 1.
    #[must_use]
    pub fn new(interval: u64, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            interval: interval.max(1),
            capacity,
            samples: VecDeque::with_capacity(capacity),
            peak_infected: 0,
        }
    }

    #[must_use]
    pub fn is_due(&self, tick: u64) -> bool {
        tick % self.interval == 0
    }

    /// Samples `population` if its current tick falls on the interval.
    pub fn record_if_due(&mut self, population: &Population) -> Option<Observation> {
        if !self.is_due(population.tick_count()) {
            return None;
        }
        let obs = population.observe();
        self.push(obs);
        Some(obs)
    }

    /// Appends an observation unconditionally.
    pub fn push(&mut self, obs: Observation) {
        self.peak_infected = self.peak_infected.max(obs.infected);
        self.samples.push_back(obs);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Observation> {
        self.samples.back()
    }

    /// Highest infected count ever recorded, including samples since evicted.
    #[must_use]
    pub fn peak_infected(&self) -> usize {
        self.peak_infected
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> + '_ {
        self.samples.iter()
    }

    /// The most recent `n` samples, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &Observation> + '_ {
        self.samples.iter().skip(self.samples.len().saturating_sub(n))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.peak_infected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::config::SimulationParams;
    use contagion_data::Vector;
    use proptest::prelude::*;

    fn obs(tick: u64, infected: usize) -> Observation {
        Observation {
            tick,
            new: 10 - infected,
            infected,
            immune: 0,
        }
    }

    #[test]
    fn test_samples_on_interval_including_tick_zero() {
        let agents = vec![Agent::new(Vector::new(1.0, 1.0), Vector::ZERO); 3];
        let mut pop = Population::from_agents(agents, SimulationParams::default()).unwrap();
        let mut log = ObservationLog::new(5, 100);

        assert!(log.record_if_due(&pop).is_some());
        for _ in 0..12 {
            pop.tick();
            log.record_if_due(&pop);
        }
        let ticks: Vec<u64> = log.iter().map(|o| o.tick).collect();
        assert_eq!(ticks, vec![0, 5, 10]);
        assert!(log.iter().all(|o| o.total() == 3));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = ObservationLog::new(1, 3);
        for t in 0..5 {
            log.push(obs(t, 0));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().next().map(|o| o.tick), Some(2));
        assert_eq!(log.latest().map(|o| o.tick), Some(4));
    }

    #[test]
    fn test_peak_survives_eviction() {
        let mut log = ObservationLog::new(1, 2);
        log.push(obs(0, 7));
        log.push(obs(1, 2));
        log.push(obs(2, 1));
        assert_eq!(log.peak_infected(), 7);
        assert!(log.iter().all(|o| o.infected < 7));
    }

    #[test]
    fn test_tail() {
        let mut log = ObservationLog::new(1, 10);
        for t in 0..6 {
            log.push(obs(t, 0));
        }
        let ticks: Vec<u64> = log.tail(2).map(|o| o.tick).collect();
        assert_eq!(ticks, vec![4, 5]);
        assert_eq!(log.tail(100).count(), 6);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let log = ObservationLog::new(0, 0);
        assert_eq!(log.interval(), 1);
        assert!(log.is_due(17));
    }

    proptest! {
        #[test]
        fn test_eviction_keeps_newest_and_peak(
            infected in prop::collection::vec(0usize..=10, 0..40),
            capacity in 1usize..15,
        ) {
            let mut log = ObservationLog::new(1, capacity);
            for (t, &i) in infected.iter().enumerate() {
                log.push(obs(t as u64, i));
            }

            let kept = infected.len().min(capacity);
            prop_assert_eq!(log.len(), kept);
            let ticks: Vec<u64> = log.iter().map(|o| o.tick).collect();
            let expected: Vec<u64> = ((infected.len() - kept) as u64..infected.len() as u64).collect();
            prop_assert_eq!(ticks, expected);
            prop_assert_eq!(log.peak_infected(), infected.iter().copied().max().unwrap_or(0));
            prop_assert_eq!(log.tail(3).count(), kept.min(3));
        }
    }
}
