//! Team identity.

use serde::{Deserialize, Serialize};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// Get the opposing team.
    ///
    /// ```
    /// use gobblers::core::Team;
    ///
    /// assert_eq!(Team::Blue.opponent(), Team::Red);
    /// assert_eq!(Team::Red.opponent(), Team::Blue);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Blue => write!(f, "Blue"),
            Team::Red => write!(f, "Red"),
        }
    }
}
