use super::state::EpiState;
use serde::{Deserialize, Serialize};

/// Point-in-time count of agents per epidemic state.
///
/// Observations are derived values: they are built once from a population
/// and never updated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub tick: u64,
    pub new: usize,
    pub infected: usize,
    pub immune: usize,
}

impl Observation {
    /// Counts the given states, tagging the result with `tick`.
    pub fn from_states<I>(tick: u64, states: I) -> Self
    where
        I: IntoIterator<Item = EpiState>,
    {
        let mut obs = Self {
            tick,
            ..Self::default()
        };
        for state in states {
            match state {
                EpiState::New => obs.new += 1,
                EpiState::Infected => obs.infected += 1,
                EpiState::Immune => obs.immune += 1,
            }
        }
        obs
    }

    #[must_use]
    pub fn count(&self, state: EpiState) -> usize {
        match state {
            EpiState::New => self.new,
            EpiState::Infected => self.infected,
            EpiState::Immune => self.immune,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.new + self.infected + self.immune
    }

    /// `(state, count)` pairs in state order.
    pub fn iter(&self) -> impl Iterator<Item = (EpiState, usize)> + '_ {
        EpiState::ALL.into_iter().map(move |s| (s, self.count(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_states_counts_each_state() {
        let obs = Observation::from_states(
            7,
            [
                EpiState::New,
                EpiState::Infected,
                EpiState::New,
                EpiState::Immune,
            ],
        );
        assert_eq!(obs.tick, 7);
        assert_eq!(obs.count(EpiState::New), 2);
        assert_eq!(obs.count(EpiState::Infected), 1);
        assert_eq!(obs.count(EpiState::Immune), 1);
        assert_eq!(obs.total(), 4);
    }

    #[test]
    fn test_iter_in_state_order() {
        let obs = Observation {
            tick: 0,
            new: 3,
            infected: 2,
            immune: 1,
        };
        let pairs: Vec<_> = obs.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (EpiState::New, 3),
                (EpiState::Infected, 2),
                (EpiState::Immune, 1)
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_total_matches_input_len(raw in proptest::collection::vec(0u8..3, 0..200)) {
            let states = raw.iter().map(|&r| EpiState::ALL[r as usize]);
            let obs = Observation::from_states(0, states);
            prop_assert_eq!(obs.total(), raw.len());
        }
    }
}
