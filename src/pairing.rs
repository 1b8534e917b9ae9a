//! Round-robin pairing generation (circle method).
//!
//! # Algorithm
//!
//! 1. If the number of teams is odd, append a bye placeholder.
//! 2. For each of the `n' - 1` rounds, pair position `i` with position
//!    `n' - 1 - i`. Pairs involving the bye produce no fixture.
//! 3. Rotate: keep the first team fixed, move the last team to the
//!    second position.
//!
//! With home-and-away enabled, the return leg of every pairing is
//! emitted immediately after its first leg.
//!
//! The emission order is the order in which the placement engine tries
//! fixtures, so it decides which fixtures are left over when the
//! planning window is too small.
//!
//! # Complexity
//! O(n²) fixtures, each produced in O(1) amortized.
//!
//! # Reference
//! Kirkman (1847), circle method; de Werra (1981), "Scheduling in Sports"

use log::debug;

use crate::error::{Result, ScheduleError};
use crate::models::{Fixture, Team};

/// Number of fixtures a round robin over `teams` participants produces.
pub fn fixture_count(teams: usize, home_and_away: bool) -> usize {
    let single = teams * teams.saturating_sub(1) / 2;
    if home_and_away {
        single * 2
    } else {
        single
    }
}

/// Generates the ordered fixture sequence for a round robin.
///
/// Every unordered pair of teams appears once, or twice (once per
/// orientation) when `home_and_away` is set.
///
/// # Errors
/// [`ScheduleError::InvalidInput`] if fewer than two teams are given.
pub fn generate_pairings(teams: &[Team], home_and_away: bool) -> Result<Vec<Fixture>> {
    if teams.len() < 2 {
        return Err(ScheduleError::InvalidInput(format!(
            "at least 2 teams are required, got {}",
            teams.len()
        )));
    }

    // None is the bye.
    let mut rotation: Vec<Option<&str>> = teams.iter().map(|t| Some(t.id.as_str())).collect();
    if rotation.len() % 2 == 1 {
        rotation.push(None);
    }
    let size = rotation.len();

    let mut fixtures = Vec::with_capacity(fixture_count(teams.len(), home_and_away));

    for round in 0..size - 1 {
        for i in 0..size / 2 {
            if let (Some(home), Some(away)) = (rotation[i], rotation[size - 1 - i]) {
                let fixture = Fixture::new(home, away).with_round(round as u32);
                if home_and_away {
                    let return_leg = fixture.reversed();
                    fixtures.push(fixture);
                    fixtures.push(return_leg);
                } else {
                    fixtures.push(fixture);
                }
            }
        }

        if let Some(last) = rotation.pop() {
            rotation.insert(1, last);
        }
    }

    debug!(
        "generated {} fixtures for {} teams (home_and_away={})",
        fixtures.len(),
        teams.len(),
        home_and_away
    );

    Ok(fixtures)
}
