//! Simple pendulum: `α = -(g/L)·sin θ`, semi-implicit Euler.

use crate::draw::{Surface, SurfaceSize, TextAlign};
use crate::fmt::{fmt_compact, fmt_fixed};
use crate::params::ParamSet;

use super::DT;

const PIVOT_Y: f64 = 100.0;

struct Params {
    comprimento: f64,
    angulo_inicial: f64,
    massa: f64,
    gravidade: f64,
}

impl Params {
    fn from_set(set: &ParamSet) -> Self {
        Self {
            comprimento: set.get_or("comprimento", 150.0),
            angulo_inicial: set.get_or("anguloInicial", 30.0),
            massa: set.get_or("massa", 2.0),
            gravidade: set.get_or("gravidade", 9.8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendulumState {
    /// Radians from the vertical.
    pub angle: f64,
    pub angular_vel: f64,
    pub time: f64,
}

pub fn step(
    surface: &mut dyn Surface,
    size: SurfaceSize,
    params: &ParamSet,
    state: Option<PendulumState>,
) -> Option<PendulumState> {
    let p = Params::from_set(params);
    let mut sim = state.unwrap_or(PendulumState {
        angle: p.angulo_inicial.to_radians(),
        angular_vel: 0.0,
        time: 0.0,
    });

    let angular_acc = -(p.gravidade / p.comprimento) * sim.angle.sin();
    sim.angular_vel += angular_acc * DT;
    sim.angle += sim.angular_vel * DT;
    sim.time += DT;

    let pivot_x = size.width / 2.0;
    let bob_x = pivot_x + p.comprimento * sim.angle.sin();
    let bob_y = PIVOT_Y + p.comprimento * sim.angle.cos();

    surface.rect(pivot_x - 30.0, PIVOT_Y - 10.0, 60.0, 10.0, "#666");
    surface.line(pivot_x, PIVOT_Y, bob_x, bob_y, "#fff", 2.0);
    surface.circle(bob_x, bob_y, 15.0 + p.massa * 3.0, "#ff6b6b");

    let lines = [
        format!("Ângulo: {}°", fmt_fixed(sim.angle.to_degrees(), 1)),
        format!("Vel. Angular: {} rad/s", fmt_fixed(sim.angular_vel, 2)),
        format!("Tempo: {}s", fmt_fixed(sim.time, 1)),
        format!("Comprimento: {} px", fmt_compact(p.comprimento)),
    ];
    for (i, line) in lines.iter().enumerate() {
        surface.text(
            line,
            15.0,
            25.0 + 25.0 * i as f64,
            "#fff",
            "16px monospace",
            TextAlign::Left,
        );
    }

    // No terminal condition: the pendulum swings for as long as play lasts.
    Some(sim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::NullSurface;

    const SIZE: SurfaceSize = SurfaceSize {
        width: 800.0,
        height: 600.0,
    };

    fn default_params() -> ParamSet {
        crate::params::extract_params(crate::snippets::PENDULUM).unwrap()
    }

    #[test]
    fn zero_initial_angle_is_stable_equilibrium() {
        let mut params = default_params();
        params.insert("anguloInicial", 0.0);

        let mut state = None;
        for _ in 0..500 {
            let st = step(&mut NullSurface, SIZE, &params, state).unwrap();
            assert_eq!(st.angle, 0.0);
            assert_eq!(st.angular_vel, 0.0);
            state = Some(st);
        }
    }

    #[test]
    fn swing_accelerates_toward_the_vertical() {
        let params = default_params();
        let st = step(&mut NullSurface, SIZE, &params, None).unwrap();

        // Released from +30°, so angular velocity must go negative.
        assert!(st.angular_vel < 0.0);
        assert!(st.angle < (30.0f64).to_radians());
    }

    #[test]
    fn never_terminates_on_its_own() {
        let params = default_params();
        let mut state = None;
        for _ in 0..2_000 {
            state = step(&mut NullSurface, SIZE, &params, state);
            assert!(state.is_some());
        }
    }

    #[test]
    fn amplitude_does_not_grow_unbounded_quickly() {
        // Semi-implicit Euler on the pendulum should hold amplitude roughly
        // stable over a few periods.
        let params = default_params();
        let mut state = None;
        let mut max_angle: f64 = 0.0;
        for _ in 0..4_000 {
            let st = step(&mut NullSurface, SIZE, &params, state).unwrap();
            max_angle = max_angle.max(st.angle.abs());
            state = Some(st);
        }
        assert!(max_angle < (45.0f64).to_radians());
    }
}
