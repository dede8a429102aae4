//! Head-on collision of two bodies with a restitution coefficient.

use crate::draw::{Surface, SurfaceSize, TextAlign};
use crate::fmt::{fmt_compact, fmt_fixed};
use crate::params::ParamSet;

/// Pixels advanced per frame per unit of velocity.
const SPEED_SCALE: f64 = 0.3;
/// Separation below which the (single) collision resolves.
const CONTACT_DISTANCE: f64 = 50.0;
/// Bodies leaving the canvas by this margin end the run.
const EXIT_MARGIN: f64 = 100.0;

struct Params {
    massa1: f64,
    massa2: f64,
    velocidade1: f64,
    velocidade2: f64,
    coeficiente_restituicao: f64,
}

impl Params {
    fn from_set(set: &ParamSet) -> Self {
        Self {
            massa1: set.get_or("massa1", 2.0),
            massa2: set.get_or("massa2", 1.0),
            velocidade1: set.get_or("velocidade1", 10.0),
            velocidade2: set.get_or("velocidade2", -8.0),
            coeficiente_restituicao: set.get_or("coeficienteRestituicao", 0.9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionState {
    pub x1: f64,
    pub x2: f64,
    pub v1: f64,
    pub v2: f64,
    pub collided: bool,
}

/// 1-D collision with restitution `e`; `e = 1` is perfectly elastic.
pub fn resolve(m1: f64, m2: f64, v1: f64, v2: f64, e: f64) -> (f64, f64) {
    let v1_final = (m1 * v1 + m2 * v2 + m2 * e * (v2 - v1)) / (m1 + m2);
    let v2_final = (m1 * v1 + m2 * v2 + m1 * e * (v1 - v2)) / (m1 + m2);
    (v1_final, v2_final)
}

pub fn step(
    surface: &mut dyn Surface,
    size: SurfaceSize,
    params: &ParamSet,
    state: Option<CollisionState>,
) -> Option<CollisionState> {
    let p = Params::from_set(params);
    let mut sim = state.unwrap_or(CollisionState {
        x1: 150.0,
        x2: size.width - 150.0,
        v1: p.velocidade1,
        v2: p.velocidade2,
        collided: false,
    });

    sim.x1 += sim.v1 * SPEED_SCALE;
    sim.x2 += sim.v2 * SPEED_SCALE;

    if !sim.collided && (sim.x1 - sim.x2).abs() < CONTACT_DISTANCE {
        let (v1, v2) = resolve(
            p.massa1,
            p.massa2,
            sim.v1,
            sim.v2,
            p.coeficiente_restituicao,
        );
        sim.v1 = v1;
        sim.v2 = v2;
        sim.collided = true;
    }

    let y = size.height / 2.0;
    surface.circle(sim.x1, y, 20.0 + p.massa1 * 5.0, "#ff6b6b");
    surface.circle(sim.x2, y, 20.0 + p.massa2 * 5.0, "#4ecdc4");

    let status = if sim.collided {
        "Após colisão"
    } else {
        "Antes da colisão"
    };
    let lines = [
        format!(
            "Bola 1 - v: {} m/s | m: {} kg",
            fmt_fixed(sim.v1, 1),
            fmt_compact(p.massa1)
        ),
        format!(
            "Bola 2 - v: {} m/s | m: {} kg",
            fmt_fixed(sim.v2, 1),
            fmt_compact(p.massa2)
        ),
        format!("Status: {status}"),
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

    let out_of_bounds = sim.x1 > size.width + EXIT_MARGIN
        || sim.x2 < -EXIT_MARGIN
        || sim.x1 < -EXIT_MARGIN
        || sim.x2 > size.width + EXIT_MARGIN;
    if out_of_bounds {
        None
    } else {
        Some(sim)
    }
}
