//! Canonical code snippets, one per concept.
//!
//! Each snippet is both the editable default shown in the code panel and the
//! ground truth the validator compares against. The function bodies are
//! illustrative only: the playground never executes them, it just protects
//! them from edits.

pub const PROJECTILE: &str = r#"// Lançamento de Projétil
const params = {
  velocidadeInicial: 20,
  angulo: 45,
  gravidade: 9.8,
  massa: 1.0
};

function simularProjetil(ctx, canvas, p) {
  const anguloRad = (p.angulo * Math.PI) / 180;
  const vx = p.velocidadeInicial * Math.cos(anguloRad);
  const vy = -p.velocidadeInicial * Math.sin(anguloRad);

  // x(t) = x0 + vx * t
  // y(t) = y0 + vy * t + (1/2) * g * t²
}"#;

pub const COLLISION: &str = r#"// Colisão Elástica
const params = {
  massa1: 2.0,
  massa2: 1.0,
  velocidade1: 10,
  velocidade2: -8,
  coeficienteRestituicao: 0.9
};

function simularColisao(m1, m2, v1, v2, e) {
  const v1Final = (m1*v1 + m2*v2 + m2*e*(v2-v1)) / (m1+m2);
  const v2Final = (m1*v1 + m2*v2 + m1*e*(v1-v2)) / (m1+m2);
  return { v1Final, v2Final };
}"#;

pub const FRICTION: &str = r#"// Atrito e Deslizamento
const params = {
  massa: 5.0,
  forcaAplicada: 25,
  coeficienteAtrito: 0.3,
  gravidade: 9.8
};

function simularAtrito(m, F, μ, g) {
  const N = m * g;
  const Fat = μ * N;
  const Fres = F - Fat;
  const a = Fres / m;
}"#;

pub const PENDULUM: &str = r#"// Pêndulo Simples
const params = {
  comprimento: 150,
  anguloInicial: 30,
  massa: 2.0,
  gravidade: 9.8
};

function simularPendulo(L, θ, m, g) {
  const α = -(g / L) * Math.sin(θ);
  // ω(t+Δt) = ω(t) + α*Δt
  // θ(t+Δt) = θ(t) + ω*Δt
}"#;
