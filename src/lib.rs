//! Phizics core: the headless half of an educational physics playground.
//!
//! Everything in this crate runs without a browser: the canonical code
//! snippets, the parameter extractor, the protected-code validator, the four
//! per-concept simulators and the frame-driven playground state machine. The
//! web front-end (`phizics_web`) only supplies a canvas-backed [`draw::Surface`]
//! and forwards UI events.

pub mod concept;
pub mod draw;
pub mod error;
pub mod fmt;
pub mod params;
pub mod playground;
pub mod sims;
pub mod snippets;
pub mod tips;
pub mod validate;

pub use concept::Concept;
pub use draw::{Surface, SurfaceSize};
pub use error::CodeError;
pub use params::ParamSet;
pub use playground::{FrameOutcome, Playground};
pub use sims::SimState;
pub use tips::{Tip, TipPicker, TIPS};
