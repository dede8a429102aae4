//! Block sliding under an applied force opposed by Coulomb friction.

use crate::draw::{draw_vector, Surface, SurfaceSize, TextAlign};
use crate::fmt::fmt_fixed;
use crate::params::ParamSet;

use super::DT;

/// Pixels advanced per frame per unit of velocity.
const POSITION_SCALE: f64 = 0.8;
const EXIT_MARGIN: f64 = 50.0;
const BLOCK_W: f64 = 50.0;
const BLOCK_H: f64 = 40.0;

struct Params {
    massa: f64,
    forca_aplicada: f64,
    coeficiente_atrito: f64,
    gravidade: f64,
}

impl Params {
    fn from_set(set: &ParamSet) -> Self {
        Self {
            massa: set.get_or("massa", 5.0),
            forca_aplicada: set.get_or("forcaAplicada", 25.0),
            coeficiente_atrito: set.get_or("coeficienteAtrito", 0.3),
            gravidade: set.get_or("gravidade", 9.8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrictionState {
    pub x: f64,
    pub v: f64,
    pub a: f64,
}

pub fn step(
    surface: &mut dyn Surface,
    size: SurfaceSize,
    params: &ParamSet,
    state: Option<FrictionState>,
) -> Option<FrictionState> {
    let p = Params::from_set(params);
    let mut sim = state.unwrap_or(FrictionState {
        x: 100.0,
        v: 0.0,
        a: 0.0,
    });

    let forca_normal = p.massa * p.gravidade;
    let forca_atrito = p.coeficiente_atrito * forca_normal;
    let forca_resultante = p.forca_aplicada - forca_atrito;

    // Kinetic friction applied unconditionally: with F < Fat the block drifts
    // backwards instead of sticking. Intentional simplification of the model.
    sim.a = forca_resultante / p.massa;
    sim.v += sim.a * DT;
    sim.x += sim.v * POSITION_SCALE;

    let y = size.height - 100.0;
    surface.rect(0.0, y + BLOCK_H, size.width, 10.0, "#555");
    surface.rect(sim.x - BLOCK_W / 2.0, y, BLOCK_W, BLOCK_H, "#ff6b6b");

    let arrow_y = y + BLOCK_H / 2.0;
    draw_vector(
        surface,
        sim.x,
        arrow_y,
        p.forca_aplicada * 2.0,
        0.0,
        "#00ff88",
        "F",
    );
    draw_vector(
        surface,
        sim.x,
        arrow_y,
        -forca_atrito * 2.0,
        0.0,
        "#ff4444",
        "Fat",
    );

    let lines = [
        format!("Força Aplicada: {} N", fmt_fixed(p.forca_aplicada, 1)),
        format!("Força de Atrito: {} N", fmt_fixed(forca_atrito, 1)),
        format!("Aceleração: {} m/s²", fmt_fixed(sim.a, 1)),
        format!("Velocidade: {} m/s", fmt_fixed(sim.v, 1)),
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

    if sim.x > size.width + EXIT_MARGIN {
        None
    } else {
        Some(sim)
    }
}
