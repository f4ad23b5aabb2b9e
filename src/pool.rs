use crate::draw::DrawError;
use crate::team::Team;
use rand::Rng;
use tracing::trace;

/// A shrinking collection of teams available for random draw.
#[derive(Clone, Debug)]
pub struct Pool {
    name: String,
    teams: Vec<Team>,
}

impl Pool {
    #[inline]
    pub fn new(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Pool {
            name: name.into(),
            teams,
        }
    }

    /// The label of this pool, used in error messages and logs.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// The teams still available, in their original order.
    #[inline]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Removes a uniformly chosen team and returns it.
    ///
    /// The index is chosen over the pool's current length, so successive draws stay uniform while the pool
    /// shrinks. Remaining teams keep their relative order.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Result<Team, DrawError> {
        if self.teams.is_empty() {
            return Err(DrawError::PoolUnderflow {
                pool: self.name.clone(),
            });
        }

        let index = rng.gen_range(0..self.teams.len());
        let team = self.teams.remove(index);
        trace!(pool = %self.name, %team, left = self.teams.len(), "drawn");
        Ok(team)
    }
}
