//! Notification sent when a rover lands.
//!
//! The core never talks to the outside world. A caller that wants to record new rovers
//! somewhere (a log, a database, a ground station) implements [`LandingHook`] and
//! passes it to [`Plateau::land_and_notify`][crate::Plateau::land_and_notify].

use crate::{plateau::PlateauId, rover::Rover};

/// Receives every rover that successfully lands on a plateau.
pub trait LandingHook {
    /// Called once for each rover, right after it has been added to the plateau.
    fn rover_landed(&mut self, plateau: PlateauId, rover: &Rover);
}

/// Ignores every landing.
impl LandingHook for () {
    fn rover_landed(&mut self, _plateau: PlateauId, _rover: &Rover) {}
}

impl<H: LandingHook + ?Sized> LandingHook for &mut H {
    fn rover_landed(&mut self, plateau: PlateauId, rover: &Rover) {
        (**self).rover_landed(plateau, rover)
    }
}

impl<H: LandingHook + ?Sized> LandingHook for Box<H> {
    fn rover_landed(&mut self, plateau: PlateauId, rover: &Rover) {
        (**self).rover_landed(plateau, rover)
    }
}
