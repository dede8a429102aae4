//! Per-concept simulators.
//!
//! Each simulator is a pure step function invoked once per playing frame:
//! `(surface, size, &ParamSet, Option<State>) -> Option<State>`. A `None`
//! input seeds fresh state from the current parameters; a `None` output means
//! the terminal condition fired and the next frame re-seeds. The pendulum has
//! no terminal condition and runs indefinitely.

pub mod collision;
pub mod friction;
pub mod pendulum;
pub mod projectile;

use crate::concept::Concept;
use crate::draw::{Surface, SurfaceSize};
use crate::params::ParamSet;

pub use collision::CollisionState;
pub use friction::FrictionState;
pub use pendulum::PendulumState;
pub use projectile::ProjectileState;

/// Fixed integration step shared by the Euler simulators.
pub const DT: f64 = 0.025;

/// Accumulated state of whichever simulation is running.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimState {
    Projectile(ProjectileState),
    Collision(CollisionState),
    Friction(FrictionState),
    Pendulum(PendulumState),
}

/// Advance the selected concept by one frame.
pub fn step(
    concept: Concept,
    surface: &mut dyn Surface,
    size: SurfaceSize,
    params: &ParamSet,
    state: Option<SimState>,
) -> Option<SimState> {
    match concept {
        Concept::Projectile => {
            let st = match state {
                Some(SimState::Projectile(s)) => Some(s),
                _ => None,
            };
            projectile::step(surface, size, params, st).map(SimState::Projectile)
        }
        Concept::Collision => {
            let st = match state {
                Some(SimState::Collision(s)) => Some(s),
                _ => None,
            };
            collision::step(surface, size, params, st).map(SimState::Collision)
        }
        Concept::Friction => {
            let st = match state {
                Some(SimState::Friction(s)) => Some(s),
                _ => None,
            };
            friction::step(surface, size, params, st).map(SimState::Friction)
        }
        Concept::Pendulum => {
            let st = match state {
                Some(SimState::Pendulum(s)) => Some(s),
                _ => None,
            };
            pendulum::step(surface, size, params, st).map(SimState::Pendulum)
        }
    }
}
