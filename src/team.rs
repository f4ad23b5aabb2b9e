use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

/// A national team, identified by its name.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Team(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Team {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Team {
    #[inline]
    fn from(name: &str) -> Self {
        Team::new(name)
    }
}

impl Borrow<str> for Team {
    #[inline(always)]
    fn borrow(&self) -> &str {
        &self.0
    }
}
