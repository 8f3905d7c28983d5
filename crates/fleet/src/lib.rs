// Privileged drone operations behind an authorization gate.
//
// The drone itself knows nothing about tokens; `DroneProxy` is the only
// intended caller and re-checks the presented token on every operation.

pub mod drone;
pub mod proxy;

pub use drone::{Actuator, Drone, FlightEvent, Position};
pub use proxy::{AccessDenied, DroneProxy};
