/// A position fix sent with a reposition command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

/// What the actuator did, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightEvent {
    TookOff,
    Landed,
    Repositioned(Position),
}

/// The privileged operation set a drone exposes.
///
/// Implementations carry no authorization logic of their own; the proxy is
/// the sole caller. The set is fixed here so the gate covers every
/// operation by construction.
pub trait Actuator {
    fn take_off(&mut self) -> FlightEvent;
    fn land(&mut self) -> FlightEvent;
    fn reposition(&mut self, lat: f64, lon: f64, alt: f64) -> FlightEvent;
}

/// A simulated drone. Tracks whether it is airborne and its last commanded
/// position so callers (and tests) can observe what actually happened.
#[derive(Debug, Default)]
pub struct Drone {
    airborne: bool,
    position: Option<Position>,
}

impl Drone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

impl Actuator for Drone {
    fn take_off(&mut self) -> FlightEvent {
        self.airborne = true;
        tracing::info!("taking off");
        FlightEvent::TookOff
    }

    fn land(&mut self) -> FlightEvent {
        self.airborne = false;
        tracing::info!("landing");
        FlightEvent::Landed
    }

    fn reposition(&mut self, lat: f64, lon: f64, alt: f64) -> FlightEvent {
        let position = Position { lat, lon, alt };
        self.position = Some(position);
        tracing::info!(lat, lon, alt, "repositioning");
        FlightEvent::Repositioned(position)
    }
}
