use serde::{Deserialize, Serialize};

/// Epidemiological status of an agent.
///
/// Agents only ever move forward through these states:
/// `New -> Infected -> Immune`. `Immune` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpiState {
    #[default]
    New,
    Infected,
    Immune,
}

impl EpiState {
    pub const ALL: [EpiState; 3] = [EpiState::New, EpiState::Infected, EpiState::Immune];

    /// Display colour used by renderers.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            EpiState::New => (0x82, 0xaa, 0xff),
            EpiState::Infected => (0xff, 0x8a, 0x82),
            EpiState::Immune => (0xb0, 0x82, 0xff),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            EpiState::New => '●',
            EpiState::Infected => '☣',
            EpiState::Immune => '◎',
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EpiState::New => "new",
            EpiState::Infected => "infected",
            EpiState::Immune => "immune",
        }
    }

    /// The state an agent moves to next, if any.
    #[must_use]
    pub const fn successor(self) -> Option<EpiState> {
        match self {
            EpiState::New => Some(EpiState::Infected),
            EpiState::Infected => Some(EpiState::Immune),
            EpiState::Immune => None,
        }
    }
}

impl std::fmt::Display for EpiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
