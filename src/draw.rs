use crate::pool::Pool;
use crate::seeding::{PathSeed, SeedData};
use crate::team::Team;
use crate::{gen_seeder, RandGen, Seeder, GROUP_LETTERS, TEAMS_PER_GROUP};
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::debug;

/// The result of a draw.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Draw {
    /// The drawn groups, labeled A to F.
    pub groups: Vec<Group>,
    /// How each playoff path was resolved, in path order.
    pub paths: Vec<ResolvedPath>,
}

/// A drawn group.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Group {
    pub letter: char,
    /// Teams in pot order: host or pot 1, pot 2, pot 3, pot 4.
    pub teams: [Team; TEAMS_PER_GROUP],
}

/// A playoff path after its reserved slots were filled.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ResolvedPath {
    pub name: String,
    /// All the members of the path, reserved slots included.
    pub members: Vec<Team>,
    /// Members drawn from the shared remaining pool, in draw order.
    pub from_remaining: Vec<Team>,
    /// The member promoted to pot 4.
    pub promoted: Team,
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum DrawError {
    /// A team was requested from an empty pool. The seeding data doesn't fit the draw sequence.
    #[error("cannot draw from {pool}: no teams left")]
    PoolUnderflow { pool: String },
}

/// Draws the Euro 2024 groups with a random seed.
#[inline]
pub fn run_draw() -> Result<Draw, DrawError> {
    run_draw_with(&SeedData::default(), gen_seeder())
}

/// Draws groups from `seed_data`.
///
/// The same seeding data and seeder always produce the same draw.
pub fn run_draw_with(seed_data: &SeedData, mut seeder: Seeder) -> Result<Draw, DrawError> {
    let mut rng: RandGen = seeder.make_rng();

    // Resolve the playoff paths
    let mut remaining = Pool::new("remaining", seed_data.remaining.clone());
    let mut paths = Vec::with_capacity(seed_data.paths.len());
    for path in &seed_data.paths {
        paths.push(resolve_path(path, &mut remaining, &mut rng)?);
    }

    // Build the pots, promoting one team of each path to pot 4
    let mut pot4 = seed_data.pot4.clone();
    pot4.extend(paths.iter().map(|p| p.promoted.clone()));
    let [pot1, pot2, pot3] = seed_data.pots.clone();
    let mut pots = [
        Pool::new("pot 1", pot1),
        Pool::new("pot 2", pot2),
        Pool::new("pot 3", pot3),
        Pool::new("pot 4", pot4),
    ];

    let mut groups = Vec::with_capacity(GROUP_LETTERS.len());
    for (i, letter) in GROUP_LETTERS.into_iter().enumerate() {
        let head = if i == 0 {
            seed_data.host.clone()
        } else {
            pots[0].draw(&mut rng)?
        };
        let teams = [
            head,
            pots[1].draw(&mut rng)?,
            pots[2].draw(&mut rng)?,
            pots[3].draw(&mut rng)?,
        ];
        debug!(group = %letter, teams = %teams.iter().join(", "), "group drawn");
        groups.push(Group { letter, teams });
    }

    Ok(Draw { groups, paths })
}

fn resolve_path(
    path: &PathSeed,
    remaining: &mut Pool,
    rng: &mut impl Rng,
) -> Result<ResolvedPath, DrawError> {
    let mut from_remaining = Vec::with_capacity(path.reserved_slots());
    let mut members = Vec::with_capacity(path.members.len());
    for member in &path.members {
        let team = match member {
            Some(team) => team.clone(),
            None => {
                let team = remaining.draw(rng)?;
                from_remaining.push(team.clone());
                team
            }
        };
        members.push(team);
    }

    let promoted = Pool::new(path.name.clone(), members.clone()).draw(rng)?;
    debug!(
        path = %path.name,
        members = %members.iter().join(", "),
        %promoted,
        "path resolved"
    );

    Ok(ResolvedPath {
        name: path.name.clone(),
        members,
        from_remaining,
        promoted,
    })
}

impl Draw {
    /// Returns the group labeled `letter`, if any.
    pub fn group(&self, letter: char) -> Option<&Group> {
        let letter = letter.to_ascii_uppercase();
        self.groups.iter().find(|g| g.letter == letter)
    }

    /// Every drawn team, group by group.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.groups.iter().flat_map(|g| g.teams.iter())
    }
}

impl Display for Draw {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for group in &self.groups {
            writeln!(f, "{group}")?;
        }
        Ok(())
    }
}

impl Display for Group {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group {}: {}", self.letter, self.teams.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gen_seed;
    use std::collections::{HashMap, HashSet};

    /// Teams always drawn, whatever the path outcome.
    fn fixed_teams(seed: &SeedData) -> HashSet<Team> {
        let mut teams: HashSet<_> = seed.pots.iter().flatten().cloned().collect();
        teams.insert(seed.host.clone());
        teams.extend(seed.pot4.iter().cloned());
        teams
    }

    fn assert_valid(seed: &SeedData, draw: &Draw) {
        assert_eq!(draw.groups.len(), 6);
        assert!(draw.teams().all_unique());
        assert_eq!(draw.teams().count(), 24);

        let drawn: HashSet<_> = draw.teams().cloned().collect();
        assert!(fixed_teams(seed).is_subset(&drawn));

        let seeded: HashSet<_> = seed.teams().into_iter().collect();
        assert!(drawn.is_subset(&seeded));

        // Exactly one member of every path, the promoted one, reaches the groups
        for path in &draw.paths {
            let in_groups: Vec<_> = path.members.iter().filter(|t| drawn.contains(*t)).collect();
            assert_eq!(in_groups, [&path.promoted]);
        }
    }

    #[test]
    fn test_draw() {
        // Run with --nocapture

        let draw = run_draw().unwrap();
        println!("{draw}");
        for path in &draw.paths {
            println!("{}: {:?} -> {}", path.name, path.members, path.promoted);
        }
    }

    #[test]
    fn test_coverage() {
        let seed = SeedData::default();
        for _ in 0..200 {
            assert_valid(&seed, &run_draw().unwrap());
        }
    }

    #[test]
    fn test_independent_draws() {
        let seed = SeedData::default();
        let first = run_draw().unwrap();
        let second = run_draw().unwrap();
        assert_valid(&seed, &first);
        assert_valid(&seed, &second);
    }

    #[test]
    fn test_host_opens_group_a() {
        for _ in 0..200 {
            let draw = run_draw().unwrap();
            assert_eq!(draw.groups[0].letter, 'A');
            assert_eq!(draw.groups[0].teams[0].name(), "Germany");
        }
    }

    #[test]
    fn test_pot_order() {
        let seed = SeedData::default();
        let draw = run_draw().unwrap();

        let letters: Vec<_> = draw.groups.iter().map(|g| g.letter).collect();
        assert_eq!(letters, GROUP_LETTERS);

        let mut pot4 = seed.pot4.clone();
        pot4.extend(draw.paths.iter().map(|p| p.promoted.clone()));
        let tiers = [&seed.pots[0], &seed.pots[1], &seed.pots[2], &pot4];

        for group in &draw.groups[1..] {
            for (team, tier) in group.teams.iter().zip(tiers) {
                assert!(tier.contains(team), "{team} not in the expected pot");
            }
        }
        for (team, tier) in draw.groups[0].teams[1..].iter().zip(&tiers[1..]) {
            assert!(tier.contains(team), "{team} not in the expected pot");
        }
    }

    #[test]
    fn test_paths() {
        let seed = SeedData::default();
        let draw = run_draw().unwrap();

        let reserved: Vec<_> = draw.paths.iter().map(|p| p.from_remaining.len()).collect();
        assert_eq!(reserved, [1, 2, 0]);

        let mut consumed: Vec<_> = draw
            .paths
            .iter()
            .flat_map(|p| p.from_remaining.iter().cloned())
            .collect();
        consumed.sort();
        let mut remaining = seed.remaining.clone();
        remaining.sort();
        assert_eq!(consumed, remaining);

        // Reserved slots keep their position in the path
        assert_eq!(draw.paths[0].members[2], draw.paths[0].from_remaining[0]);
        assert_eq!(draw.paths[1].members[2..], draw.paths[1].from_remaining[..]);

        for (resolved, path) in draw.paths.iter().zip(&seed.paths) {
            assert_eq!(resolved.name, path.name);
            assert_eq!(resolved.members.len(), 4);
            assert!(resolved.members.contains(&resolved.promoted));
        }
    }

    #[test]
    fn test_remaining_uniform() {
        const RUNS: usize = 1000;

        // (path, slot) -> team -> count
        let mut counts: HashMap<(usize, usize), HashMap<Team, usize>> = HashMap::new();
        for _ in 0..RUNS {
            let draw = run_draw().unwrap();
            for (p, path) in draw.paths.iter().enumerate() {
                for (s, team) in path.from_remaining.iter().enumerate() {
                    *counts.entry((p, s)).or_default().entry(team.clone()).or_default() += 1;
                }
            }
        }

        assert_eq!(counts.len(), 3);
        for (slot, teams) in counts {
            assert_eq!(teams.len(), 3, "slot {slot:?} misses some team");
            for (team, count) in teams {
                // Expected 333, standard deviation ~15
                assert!(
                    (250..=420).contains(&count),
                    "{team} drawn {count} times in slot {slot:?}"
                );
            }
        }
    }

    #[test]
    fn test_pool_underflow() {
        let mut seed = SeedData::default();
        seed.pots[0].pop();
        assert_eq!(
            run_draw_with(&seed, gen_seeder()).unwrap_err(),
            DrawError::PoolUnderflow {
                pool: "pot 1".to_owned()
            }
        );

        let mut seed = SeedData::default();
        seed.remaining.pop();
        assert_eq!(
            run_draw_with(&seed, gen_seeder()).unwrap_err(),
            DrawError::PoolUnderflow {
                pool: "remaining".to_owned()
            }
        );
    }

    #[test]
    fn test_group_lookup() {
        let draw = run_draw().unwrap();
        assert_eq!(draw.group('c'), Some(&draw.groups[2]));
        assert_eq!(draw.group('F'), Some(&draw.groups[5]));
        assert_eq!(draw.group('G'), None);
    }

    #[test]
    fn test_display() {
        let draw = run_draw().unwrap();
        let text = draw.to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("Group A: Germany, "));
    }

    #[test]
    fn test_serde() {
        let draw = run_draw().unwrap();
        let json = serde_json::to_value(&draw).unwrap();
        assert_eq!(json["groups"][0]["letter"], "A");
        assert_eq!(json["groups"][0]["teams"][0], "Germany");

        let parsed: Draw = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, draw);
    }

    #[test]
    fn test_reproducibility() {
        // Execute a bunch of times to test against different seeds
        for _ in 0..50 {
            reproducibility_test_case(gen_seed());
        }
    }

    fn reproducibility_test_case(seed: [u8; 32]) {
        let seed_data = SeedData::default();
        let draw = run_draw_with(&seed_data, Seeder::from(seed)).unwrap();

        for _ in 0..10 {
            let draw_clone = run_draw_with(&seed_data, Seeder::from(seed)).unwrap();
            assert_eq!(draw, draw_clone);
        }
    }
}
