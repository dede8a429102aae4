//! End-to-end playground scenarios, driven the way the web loop drives the
//! core: one `frame` call per tick against a recording surface.

use phizics::draw::{DrawOp, RecordingSurface};
use phizics::{CodeError, Concept, Playground, SurfaceSize};

const SIZE: SurfaceSize = SurfaceSize {
    width: 800.0,
    height: 600.0,
};

fn run_frames(pg: &mut Playground, n: usize) -> RecordingSurface {
    let mut rec = RecordingSurface::new();
    for _ in 0..n {
        pg.frame(&mut rec, SIZE);
    }
    rec
}

#[test]
fn projectile_flight_draws_arc_disc_vectors_and_readouts() {
    let mut pg = Playground::new();
    pg.toggle_play();
    let rec = run_frames(&mut pg, 1);

    assert!(rec
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::DashedPolyline { points, .. } if points.len() == 100)));
    assert!(rec
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::Circle { radius, .. } if *radius == 15.0)));

    let texts = rec.texts();
    assert!(texts.iter().any(|t| t.starts_with("Tempo: ")));
    assert!(texts.iter().any(|t| t.starts_with("Velocidade X: ")));
    assert!(texts.iter().any(|t| t.starts_with("Altura: ")));
    assert!(texts.contains(&"Vx"));
    assert!(texts.contains(&"Vy"));
}

#[test]
fn full_projectile_flight_lands_and_relaunches() {
    let mut pg = Playground::new();
    pg.toggle_play();

    // Fly until the launch readout reappears at t=0.0s, proving the state
    // was discarded at the terminal condition and re-seeded.
    let mut seen_launch_again = false;
    let mut seen_late_flight = false;
    for i in 0..2_000 {
        let mut rec = RecordingSurface::new();
        pg.frame(&mut rec, SIZE);
        let texts = rec.texts();
        if texts.iter().any(|t| *t == "Tempo: 0.0s") && i > 10 {
            seen_launch_again = true;
            break;
        }
        if texts.iter().any(|t| *t == "Tempo: 1.0s") {
            seen_late_flight = true;
        }
    }
    assert!(seen_late_flight, "projectile never got one second into flight");
    assert!(seen_launch_again, "projectile never landed and re-seeded");
}

#[test]
fn switching_concepts_mid_error_fully_recovers() {
    let mut pg = Playground::new();
    pg.toggle_play();
    pg.set_code(pg.code().replace("Math.cos", "Math.tan"));

    let mut rec = RecordingSurface::new();
    let out = pg.frame(&mut rec, SIZE);
    assert!(out.open_modal);
    assert_eq!(pg.error(), Some(&CodeError::ProtectedCodeModified));

    pg.set_concept(Concept::Pendulum);
    assert!(pg.error().is_none());
    assert_eq!(pg.code(), Concept::Pendulum.default_code());

    pg.toggle_play();
    let mut rec = RecordingSurface::new();
    let out = pg.frame(&mut rec, SIZE);
    assert!(!out.open_modal);
    assert!(pg.error().is_none());
    // Pendulum rod + bob drawn.
    assert!(rec.ops.iter().any(|op| matches!(op, DrawOp::Circle { .. })));
}

#[test]
fn error_frames_self_heal_once_text_is_fixed() {
    let mut pg = Playground::new();
    pg.set_concept(Concept::Friction);
    pg.toggle_play();

    pg.set_code("const params = { massa: oops };".to_string());
    pg.frame(&mut RecordingSurface::new(), SIZE);
    assert!(matches!(pg.error(), Some(CodeError::ParamParse { .. })));

    // Loop keeps running; restoring the text recovers without any reset.
    pg.set_code(Concept::Friction.default_code().to_string());
    pg.frame(&mut RecordingSurface::new(), SIZE);
    assert!(pg.error().is_none());
}

#[test]
fn collision_readouts_follow_the_restitution_formula() {
    let mut pg = Playground::new();
    pg.set_concept(Concept::Collision);
    pg.toggle_play();

    let mut saw_before = false;
    let mut saw_after = false;
    for _ in 0..2_000 {
        let mut rec = RecordingSurface::new();
        pg.frame(&mut rec, SIZE);
        let texts = rec.texts();
        if texts.contains(&"Status: Antes da colisão") {
            saw_before = true;
        }
        if texts.contains(&"Status: Após colisão") {
            saw_after = true;
            // Default params: v1' = (2·10 + 1·(−8) + 1·0.9·(−18)) / 3 = −1.4
            assert!(texts.contains(&"Bola 1 - v: -1.4 m/s | m: 2 kg"));
            assert!(texts.contains(&"Bola 2 - v: 14.8 m/s | m: 1 kg"));
            break;
        }
    }
    assert!(saw_before && saw_after);
}
