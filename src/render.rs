use crate::draw::{Draw, Group};
use crate::team::Team;
use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

/// A display surface drawn groups are written to.
pub trait Renderer {
    /// Writes `group` under the label `letter`, replacing whatever was shown there before.
    fn render_group(&mut self, letter: char, group: &Group);
}

/// Renders every group of `draw`, in order.
pub fn render<R: Renderer + ?Sized>(draw: &Draw, renderer: &mut R) {
    for group in &draw.groups {
        renderer.render_group(group.letter, group);
    }
}

/// A page made of named slots, one per team of every group.
///
/// Slots are named `{letter}{position}`, with a lowercase letter and a position from 1 to 4 (for instance
/// `a1` or `f4`).
#[derive(Default, Clone, Debug)]
pub struct SlotPage {
    slots: IndexMap<String, Team>,
}

impl SlotPage {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The team shown in `slot`, if any.
    #[inline]
    pub fn get(&self, slot: &str) -> Option<&Team> {
        self.slots.get(slot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in the order they were first written.
    #[inline]
    pub fn slots(&self) -> impl Iterator<Item = (&str, &Team)> {
        self.slots.iter().map(|(slot, team)| (slot.as_str(), team))
    }
}

impl Renderer for SlotPage {
    fn render_group(&mut self, letter: char, group: &Group) {
        let letter = letter.to_ascii_lowercase();
        for (position, team) in (1..).zip(&group.teams) {
            self.slots.insert(format!("{letter}{position}"), team.clone());
        }
    }
}

impl Display for SlotPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (slot, team) in self.slots() {
            writeln!(f, "{slot}\t{team}")?;
        }
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    #[inline]
    fn render_group(&mut self, letter: char, group: &Group) {
        (**self).render_group(letter, group);
    }
}
