//! Owns the rovers of one plateau and hands out their identities.
use std::collections::BTreeMap;

use crate::{
    plateau::Position,
    rover::{
        Direction, InOrder, NamePool, NamePoolExhausted, NameSelector, NotFound, Rover, RoverId,
    },
};

/// The rovers on a plateau, keyed by ID.
///
/// IDs are minted from a counter, so iteration order is landing order. Names are drawn
/// from a [`NamePool`] by the collection's [`NameSelector`]; once the pool runs dry no
/// more rovers can be added.
#[derive(Debug)]
pub struct RoverCollection<S = InOrder> {
    /// Every rover added so far.
    rovers: BTreeMap<RoverId, Rover>,

    /// Names not yet given out.
    names: NamePool,

    /// Picks the name for each new rover.
    selector: S,

    /// ID the next rover will get.
    next_id: u32,
}

impl RoverCollection<InOrder> {
    /// Create an empty collection using the default names, in order.
    pub fn new() -> Self {
        Self::with_names(NamePool::default(), InOrder)
    }
}

impl Default for RoverCollection<InOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RoverCollection<S> {
    /// Create an empty collection that names its rovers from `names` using `selector`.
    pub fn with_names(names: NamePool, selector: S) -> Self {
        Self {
            rovers: BTreeMap::new(),
            names,
            selector,
            next_id: 0,
        }
    }

    /// Look up the rover with the given ID.
    pub fn get(&self, id: RoverId) -> Result<&Rover, NotFound> {
        self.rovers.get(&id).ok_or_else(|| NotFound::new(id))
    }

    /// Mutably look up the rover with the given ID. Only the owning plateau may move
    /// rovers, since it is the one that knows the bounds.
    pub(crate) fn get_mut(&mut self, id: RoverId) -> Result<&mut Rover, NotFound> {
        self.rovers.get_mut(&id).ok_or_else(|| NotFound::new(id))
    }

    /// Number of rovers in the collection.
    pub fn count(&self) -> usize {
        self.rovers.len()
    }

    /// Returns true if no rover has been added.
    pub fn is_empty(&self) -> bool {
        self.rovers.is_empty()
    }

    /// Iterate the rovers in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Rover> {
        self.rovers.values()
    }

    /// Names that are still available to new rovers.
    pub fn remaining_names(&self) -> &NamePool {
        &self.names
    }
}

impl<S: NameSelector> RoverCollection<S> {
    /// Add a rover at the given position and direction, returning its newly minted ID.
    ///
    /// The position is not checked; that is up to the caller, which knows the bounds.
    /// Fails if the name pool is empty, in which case the collection is unchanged.
    pub fn add(
        &mut self,
        position: Position,
        direction: Direction,
    ) -> Result<RoverId, NamePoolExhausted> {
        let name = self
            .names
            .draw(&mut self.selector)
            .ok_or_else(|| NamePoolExhausted::new(self.rovers.len()))?;
        let id = RoverId::new(self.next_id);
        self.next_id += 1;
        self.rovers
            .insert(id, Rover::new(id, name, position, direction));
        Ok(id)
    }
}

impl<'a, S> IntoIterator for &'a RoverCollection<S> {
    type Item = &'a Rover;
    type IntoIter = std::collections::btree_map::Values<'a, RoverId, Rover>;

    fn into_iter(self) -> Self::IntoIter {
        self.rovers.values()
    }
}
