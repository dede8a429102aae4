//! The frame-driven playground state machine.
//!
//! Owns the selected concept, the editable text, play state and the running
//! simulation state. Every frame runs Extract → Validate → Simulate; any
//! failure is caught here, drawn as a banner and reported to the host via
//! [`FrameOutcome`]. No error escapes the frame boundary.

use log::debug;

use crate::concept::Concept;
use crate::draw::{Surface, SurfaceSize, TextAlign};
use crate::error::CodeError;
use crate::params::extract_params;
use crate::sims::{self, SimState};
use crate::validate::validate_protected;

const GRID_SPACING: f64 = 50.0;

/// What the host UI needs to react to after a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// True exactly once per protected-code violation streak.
    pub open_modal: bool,
}

pub struct Playground {
    concept: Concept,
    code: String,
    playing: bool,
    sim: Option<SimState>,
    error: Option<CodeError>,
    modal_shown_for_error: bool,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground {
    pub fn new() -> Self {
        let concept = Concept::Projectile;
        Self {
            concept,
            code: concept.default_code().to_string(),
            playing: false,
            sim: None,
            error: None,
            modal_shown_for_error: false,
        }
    }

    pub fn concept(&self) -> Concept {
        self.concept
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn error(&self) -> Option<&CodeError> {
        self.error.as_ref()
    }

    /// Select a concept: forces pause, restores the canonical snippet and
    /// clears the error/modal flags.
    pub fn set_concept(&mut self, concept: Concept) {
        debug!("concept -> {}", concept.id());
        self.concept = concept;
        self.code = concept.default_code().to_string();
        self.playing = false;
        self.sim = None;
        self.error = None;
        self.modal_shown_for_error = false;
    }

    /// Replace the editable text. Play state is untouched; the next playing
    /// frame re-parses.
    pub fn set_code(&mut self, code: String) {
        self.code = code;
    }

    /// Play/pause toggle. Either direction discards transient simulation
    /// state, so resuming restarts from the current parameters.
    pub fn toggle_play(&mut self) {
        self.sim = None;
        self.playing = !self.playing;
        debug!("playing -> {}", self.playing);
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.sim = None;
    }

    /// Restore the canonical snippet for the current concept.
    pub fn reset_code(&mut self) {
        self.code = self.concept.default_code().to_string();
        self.error = None;
        self.modal_shown_for_error = false;
        self.playing = false;
        self.sim = None;
    }

    /// Run one animation frame.
    pub fn frame(&mut self, surface: &mut dyn Surface, size: SurfaceSize) -> FrameOutcome {
        surface.clear();
        draw_grid(surface, size);

        if !self.playing {
            surface.text(
                self.concept.play_prompt(),
                size.width / 2.0,
                size.height / 2.0,
                "#00ff88",
                "bold 20px monospace",
                TextAlign::Center,
            );
            return FrameOutcome::default();
        }

        match self.try_step(surface, size) {
            Ok(()) => {
                if self.error.is_some() {
                    self.error = None;
                    self.modal_shown_for_error = false;
                }
                FrameOutcome::default()
            }
            Err(err) => {
                surface.text(
                    &format!("Erro no código: {err}"),
                    20.0,
                    30.0,
                    "#ff4444",
                    "16px monospace",
                    TextAlign::Left,
                );

                let open_modal = err.is_protected_code() && !self.modal_shown_for_error;
                if open_modal {
                    self.modal_shown_for_error = true;
                }
                self.error = Some(err);
                FrameOutcome { open_modal }
            }
        }
    }

    fn try_step(&mut self, surface: &mut dyn Surface, size: SurfaceSize) -> Result<(), CodeError> {
        let params = extract_params(&self.code)?;
        validate_protected(&self.code, self.concept.default_code())?;

        self.sim = sims::step(self.concept, surface, size, &params, self.sim.take());
        Ok(())
    }
}

fn draw_grid(surface: &mut dyn Surface, size: SurfaceSize) {
    let mut x = 0.0;
    while x < size.width {
        surface.line(x, 0.0, x, size.height, "#2a2a4a", 1.0);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < size.height {
        surface.line(0.0, y, size.width, y, "#2a2a4a", 1.0);
        y += GRID_SPACING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawOp, NullSurface, RecordingSurface};

    const SIZE: SurfaceSize = SurfaceSize {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn paused_frame_draws_grid_and_prompt_only() {
        let mut pg = Playground::new();
        let mut rec = RecordingSurface::new();
        pg.frame(&mut rec, SIZE);

        assert_eq!(rec.ops[0], DrawOp::Clear);
        let lines = rec
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count();
        // 16 vertical + 12 horizontal grid lines for 800×600 at 50 px.
        assert_eq!(lines, 28);
        assert!(rec
            .texts()
            .contains(&Concept::Projectile.play_prompt()));
    }

    #[test]
    fn selecting_a_concept_restores_canonical_code_and_clears_errors() {
        for concept in Concept::all() {
            let mut pg = Playground::new();
            pg.set_code("function garbage() { broken }".to_string());
            pg.toggle_play();
            pg.frame(&mut NullSurface, SIZE);
            assert!(pg.error().is_some());

            pg.set_concept(concept);
            assert_eq!(pg.code(), concept.default_code());
            assert!(pg.error().is_none());
            assert!(!pg.is_playing());
        }
    }

    #[test]
    fn parameter_edits_run_without_error() {
        let mut pg = Playground::new();
        let edited = pg.code().replace("velocidadeInicial: 20", "velocidadeInicial: 35");
        pg.set_code(edited);
        pg.toggle_play();
        let out = pg.frame(&mut NullSurface, SIZE);
        assert!(pg.error().is_none());
        assert!(!out.open_modal);
    }

    #[test]
    fn body_edit_raises_protected_error_on_next_playing_frame() {
        let mut pg = Playground::new();
        pg.toggle_play();
        pg.frame(&mut NullSurface, SIZE);

        let edited = pg.code().replace("Math.cos", "Math.tan");
        pg.set_code(edited);
        let out = pg.frame(&mut NullSurface, SIZE);
        assert_eq!(pg.error(), Some(&CodeError::ProtectedCodeModified));
        assert!(out.open_modal);
    }

    #[test]
    fn modal_opens_exactly_once_per_error_streak() {
        let mut pg = Playground::new();
        pg.toggle_play();
        let edited = pg.code().replace("Math.cos", "Math.tan");
        pg.set_code(edited);

        let first = pg.frame(&mut NullSurface, SIZE);
        let second = pg.frame(&mut NullSurface, SIZE);
        assert!(first.open_modal);
        assert!(!second.open_modal);

        // A successful frame clears the streak; the next violation re-arms.
        pg.set_code(pg.concept().default_code().to_string());
        pg.frame(&mut NullSurface, SIZE);
        assert!(pg.error().is_none());

        let edited = pg.concept().default_code().replace("anguloRad", "anguloX");
        pg.set_code(edited);
        let third = pg.frame(&mut NullSurface, SIZE);
        assert!(third.open_modal);
    }

    #[test]
    fn removing_the_params_block_raises_params_not_found() {
        let mut pg = Playground::new();
        let without_params = pg
            .code()
            .lines()
            .filter(|l| !l.contains("const params") && !l.contains(':') && *l != "};")
            .collect::<Vec<_>>()
            .join("\n");
        pg.set_code(without_params);
        pg.toggle_play();
        pg.frame(&mut NullSurface, SIZE);
        assert_eq!(pg.error(), Some(&CodeError::ParamsNotFound));
    }

    #[test]
    fn error_banner_is_drawn_instead_of_the_simulation() {
        let mut pg = Playground::new();
        pg.set_code("nothing here".to_string());
        pg.toggle_play();
        let mut rec = RecordingSurface::new();
        pg.frame(&mut rec, SIZE);

        let texts = rec.texts();
        assert!(texts
            .iter()
            .any(|t| t.starts_with("Erro no código: Parâmetros não encontrados")));
        // No projectile disc was drawn.
        assert!(!rec.ops.iter().any(|op| matches!(op, DrawOp::Circle { .. })));
    }

    #[test]
    fn play_pause_play_restarts_from_defaults_without_error() {
        let mut pg = Playground::new();
        pg.toggle_play();
        for _ in 0..10 {
            pg.frame(&mut NullSurface, SIZE);
        }
        assert!(pg.error().is_none());

        pg.toggle_play(); // pause
        assert!(!pg.is_playing());
        pg.frame(&mut NullSurface, SIZE);

        pg.toggle_play(); // play again
        let out = pg.frame(&mut NullSurface, SIZE);
        assert!(pg.error().is_none());
        assert!(!out.open_modal);
    }
}
