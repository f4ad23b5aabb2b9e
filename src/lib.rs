#![forbid(unsafe_code)]

use rand::{thread_rng, Rng};

pub mod draw;
pub mod pool;
pub mod render;
pub mod seeding;
pub mod team;

pub use draw::{run_draw, run_draw_with, Draw, DrawError, Group, ResolvedPath};
pub use rand_seeder::Seeder;
pub use render::{render, Renderer, SlotPage};
pub use seeding::{PathSeed, SeedData};
pub use team::Team;

/// Random generator used by every draw.
pub type RandGen = rand_pcg::Pcg64;

/// Number of groups produced by a draw.
pub const GROUP_NUMBER: usize = 6;

/// Number of teams in every group (one per pot).
pub const TEAMS_PER_GROUP: usize = 4;

/// Group labels, in draw order.
pub const GROUP_LETTERS: [char; GROUP_NUMBER] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Generates a random seed from the thread-local generator.
#[inline]
pub fn gen_seed() -> [u8; 32] {
    thread_rng().gen()
}

/// Generates a [`Seeder`] from a random seed.
#[inline]
pub fn gen_seeder() -> Seeder {
    Seeder::from(gen_seed())
}
