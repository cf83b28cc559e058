//! Compression backends
//!
//! A backend decides how the rounds of a compression function are
//! scheduled. All backends implement the same contract: for a given state
//! and block they produce the same output state, byte for byte. Choosing one
//! is purely a performance decision.
//!
//! - `Portable` runs the rounds in a loop over a 16-word rolling schedule.
//! - `Unrolled` expands every round at compile time.
//!
//! The `speed` feature makes [`Backend::PREFERRED`] (and therefore
//! [`Backend::detect`]) `Unrolled`.

use std::fmt::{Display, Formatter, Result};

use tracing::debug;

/// Strategy used to run the compression rounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Looped rounds, smallest code size.
    Portable,
    /// Fully unrolled rounds.
    Unrolled,
}

impl Backend {
    /// Every backend compiled into this build.
    pub const ALL: [Backend; 2] = [Backend::Portable, Backend::Unrolled];

    /// Preferred backend for this build, resolved at compile time.
    pub const PREFERRED: Backend = if cfg!(feature = "speed") {
        Backend::Unrolled
    } else {
        Backend::Portable
    };

    /// Picks the preferred backend for this build and logs the choice.
    pub fn detect() -> Self {
        let backend = Backend::PREFERRED;

        debug!(backend = backend.name(), "selected compression backend");

        backend
    }

    /// Short lowercase name of the backend.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Portable => "portable",
            Backend::Unrolled => "unrolled",
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::detect()
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_returns_preferred() {
        assert_eq!(Backend::detect(), Backend::PREFERRED);
        assert_eq!(Backend::default(), Backend::PREFERRED);
    }

    #[test]
    fn preferred_follows_speed_feature() {
        let expected = if cfg!(feature = "speed") {
            Backend::Unrolled
        } else {
            Backend::Portable
        };

        assert_eq!(Backend::PREFERRED, expected);
    }
}
