use crate::team::Team;
use serde::{Deserialize, Serialize};

/// Number of playoff paths feeding pot 4.
pub const PATH_NUMBER: usize = 3;

/// Seeding data a draw is performed from.
///
/// This is never mutated by a draw: every draw rebuilds its pools from it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SeedData {
    /// The team that always opens group A, in place of a pot 1 draw.
    pub host: Team,
    /// Playoff contenders shared between the paths' reserved slots.
    pub remaining: Vec<Team>,
    /// The playoff paths, each promoting one team to pot 4.
    pub paths: [PathSeed; PATH_NUMBER],
    /// Pots 1 to 3.
    pub pots: [Vec<Team>; 3],
    /// Teams of pot 4 that don't come from a playoff path.
    pub pot4: Vec<Team>,
}

/// A playoff path.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PathSeed {
    pub name: String,
    /// The path's slots. [`None`] is a slot filled by a draw from [`SeedData::remaining`].
    pub members: Vec<Option<Team>>,
}

impl PathSeed {
    pub fn new(name: impl Into<String>, members: &[Option<&str>]) -> Self {
        PathSeed {
            name: name.into(),
            members: members.iter().map(|&m| m.map(Team::from)).collect(),
        }
    }

    /// Number of slots filled from the shared remaining pool.
    #[inline]
    pub fn reserved_slots(&self) -> usize {
        self.members.iter().filter(|m| m.is_none()).count()
    }
}

impl SeedData {
    /// The UEFA Euro 2024 seeding.
    pub fn euro_2024() -> Self {
        SeedData {
            host: Team::from("Germany"),
            remaining: teams(&["Finland", "Ukraine", "Iceland"]),
            paths: [
                PathSeed::new(
                    "path A",
                    &[Some("Poland"), Some("Wales"), None, Some("Estonia")],
                ),
                PathSeed::new(
                    "path B",
                    &[Some("Israel"), Some("Bosnia and Herzegovina"), None, None],
                ),
                PathSeed::new(
                    "path C",
                    &[
                        Some("Georgia"),
                        Some("Greece"),
                        Some("Kazakhstan"),
                        Some("Luxembourg"),
                    ],
                ),
            ],
            pots: [
                teams(&["Portugal", "France", "Spain", "Belgium", "England"]),
                teams(&["Hungary", "Turkey", "Romania", "Denmark", "Albania", "Austria"]),
                teams(&[
                    "Netherlands",
                    "Scotland",
                    "Croatia",
                    "Slovenia",
                    "Slovakia",
                    "Czech Republic",
                ]),
            ],
            pot4: teams(&["Italy", "Serbia", "Switzerland"]),
        }
    }

    /// Every team this seeding contains, wherever it is placed.
    pub fn teams(&self) -> Vec<Team> {
        let mut teams = vec![self.host.clone()];
        teams.extend(self.pots.iter().flatten().cloned());
        teams.extend(self.pot4.iter().cloned());
        teams.extend(self.paths.iter().flat_map(|p| p.members.iter().flatten().cloned()));
        teams.extend(self.remaining.iter().cloned());
        teams
    }
}

impl Default for SeedData {
    #[inline]
    fn default() -> Self {
        Self::euro_2024()
    }
}

fn teams(names: &[&str]) -> Vec<Team> {
    names.iter().copied().map(Team::from).collect()
}
