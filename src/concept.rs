//! The four physics concepts the playground can simulate.

use crate::snippets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Concept {
    Projectile,
    Collision,
    Friction,
    Pendulum,
}

impl Concept {
    pub fn all() -> [Concept; 4] {
        [
            Concept::Projectile,
            Concept::Collision,
            Concept::Friction,
            Concept::Pendulum,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Concept::Projectile => "projectile",
            Concept::Collision => "collision",
            Concept::Friction => "friction",
            Concept::Pendulum => "pendulum",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Concept::Projectile => "Lançamento de Projétil",
            Concept::Collision => "Colisão",
            Concept::Friction => "Atrito",
            Concept::Pendulum => "Pêndulo",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Concept::Projectile => "🎯",
            Concept::Collision => "💥",
            Concept::Friction => "📦",
            Concept::Pendulum => "⚖️",
        }
    }

    /// Static prompt drawn on the canvas while paused.
    pub fn play_prompt(self) -> &'static str {
        match self {
            Concept::Projectile => "▶️ Clique em PLAY para lançar o projétil",
            Concept::Collision => "▶️ Clique em PLAY para ver a colisão",
            Concept::Friction => "▶️ Clique em PLAY para aplicar força",
            Concept::Pendulum => "▶️ Clique em PLAY para soltar o pêndulo",
        }
    }

    /// Canonical editable snippet; also the validator's ground truth.
    pub fn default_code(self) -> &'static str {
        match self {
            Concept::Projectile => snippets::PROJECTILE,
            Concept::Collision => snippets::COLLISION,
            Concept::Friction => snippets::FRICTION,
            Concept::Pendulum => snippets::PENDULUM,
        }
    }
}
