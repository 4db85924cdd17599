//! Ball module - components, flight integration, and physics systems

pub mod components;
pub mod flight;
pub mod physics;

pub use components::{Ball, BallFlight, BallSpin, Velocity};
pub use flight::{
    FlightEnd, goal_contains, integrate_step, kick_velocity, predict_crossing_x, reset_to_spot,
    serve_from_keeper, step_flight, try_kick,
};
pub use physics::{ball_flight_update, ball_roll_visual};
