//! Projectile launch: Euler-integrated flight over a dashed analytic arc.

use crate::draw::{draw_vector, Surface, SurfaceSize, TextAlign};
use crate::fmt::fmt_fixed;
use crate::params::ParamSet;

use super::DT;

/// World-to-pixel scale.
const SCALE: f64 = 15.0;
const LAUNCH_X: f64 = 50.0;
const GROUND_MARGIN: f64 = 50.0;
/// Samples and horizon (seconds) of the dashed reference trajectory.
const TRAJECTORY_STEPS: usize = 100;
const TRAJECTORY_HORIZON_S: f64 = 2.5;

struct Params {
    velocidade_inicial: f64,
    angulo: f64,
    gravidade: f64,
}

impl Params {
    fn from_set(set: &ParamSet) -> Self {
        Self {
            velocidade_inicial: set.get_or("velocidadeInicial", 20.0),
            angulo: set.get_or("angulo", 45.0),
            gravidade: set.get_or("gravidade", 9.8),
        }
    }

    fn angle_rad(&self) -> f64 {
        self.angulo.to_radians()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub time: f64,
}

fn seed(p: &Params, size: SurfaceSize) -> ProjectileState {
    let a = p.angle_rad();
    ProjectileState {
        x: LAUNCH_X,
        y: size.height - GROUND_MARGIN,
        vx: p.velocidade_inicial * a.cos(),
        // Canvas y grows downward, so launch velocity is negative.
        vy: -p.velocidade_inicial * a.sin(),
        time: 0.0,
    }
}

pub fn step(
    surface: &mut dyn Surface,
    size: SurfaceSize,
    params: &ParamSet,
    state: Option<ProjectileState>,
) -> Option<ProjectileState> {
    let p = Params::from_set(params);
    let mut sim = state.unwrap_or_else(|| seed(&p, size));

    sim.vy += p.gravidade * DT;
    sim.x += sim.vx * DT * SCALE;
    sim.y += sim.vy * DT * SCALE;
    sim.time += DT;

    draw_reference_arc(surface, size, &p);

    surface.circle(sim.x, sim.y, 15.0, "#ff6b6b");
    draw_vector(surface, sim.x, sim.y, sim.vx * 2.0, 0.0, "#4ecdc4", "Vx");
    draw_vector(surface, sim.x, sim.y, 0.0, sim.vy * 2.0, "#ffe66d", "Vy");

    let height_m = (size.height - sim.y) / SCALE;
    let lines = [
        format!("Tempo: {}s", fmt_fixed(sim.time, 1)),
        format!("Velocidade X: {} m/s", fmt_fixed(sim.vx, 1)),
        format!("Velocidade Y: {} m/s", fmt_fixed(sim.vy, 1)),
        format!("Altura: {} m", fmt_fixed(height_m, 1)),
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

    // Back at ground level: discard state so the next play frame re-seeds.
    if sim.y > size.height - GROUND_MARGIN {
        None
    } else {
        Some(sim)
    }
}

/// Closed-form parabola sampled over a fixed horizon, drawn dashed.
fn draw_reference_arc(surface: &mut dyn Surface, size: SurfaceSize, p: &Params) {
    let a = p.angle_rad();
    let mut points = Vec::with_capacity(TRAJECTORY_STEPS);
    for i in 0..TRAJECTORY_STEPS {
        let t = (i as f64 / TRAJECTORY_STEPS as f64) * TRAJECTORY_HORIZON_S;
        let x = LAUNCH_X + p.velocidade_inicial * a.cos() * t * SCALE;
        let y = size.height
            - GROUND_MARGIN
            - (p.velocidade_inicial * a.sin() * t - 0.5 * p.gravidade * t * t) * SCALE;
        points.push((x, y));
    }
    surface.dashed_polyline(&points, "#00ff88", 2.0);
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
        crate::params::extract_params(crate::snippets::PROJECTILE).unwrap()
    }

    #[test]
    fn seeds_from_launch_angle_and_speed() {
        let params = default_params();
        let st = step(&mut NullSurface, SIZE, &params, None).unwrap();

        // 45° launch: |vx| == |vy| up to one Euler step of gravity.
        let expected = 20.0 * (45.0f64).to_radians().cos();
        assert!((st.vx - expected).abs() < 1e-9);
        assert!((st.vy - (-expected + 9.8 * DT)).abs() < 1e-9);
        assert!(st.x > 50.0);
    }

    #[test]
    fn vy_increases_monotonically_until_landing() {
        let params = default_params();
        let mut state = None;
        let mut last_vy = f64::NEG_INFINITY;
        let mut frames = 0;

        loop {
            state = step(&mut NullSurface, SIZE, &params, state);
            frames += 1;
            match state {
                Some(st) => {
                    assert!(st.vy > last_vy, "vy must grow every frame");
                    last_vy = st.vy;
                }
                None => break,
            }
            assert!(frames < 10_000, "projectile never landed");
        }

        // Long enough to be a real flight, and ended with state cleared.
        assert!(frames > 10);
        assert!(state.is_none());
    }

    #[test]
    fn state_is_seeded_once_then_evolves_independently() {
        let params = default_params();
        let st1 = step(&mut NullSurface, SIZE, &params, None).unwrap();

        // Later parameter edits must not re-seed mid-flight.
        let mut edited = params.clone();
        edited.insert("velocidadeInicial", 99.0);
        let st2 = step(&mut NullSurface, SIZE, &edited, Some(st1)).unwrap();
        assert!((st2.vx - st1.vx).abs() < 1e-9, "vx changed mid-flight");
    }
}
