//! Error types for the code panel pipeline.
//!
//! All of these are caught at the frame boundary and rendered as an inline
//! banner; none of them ends the session.

use thiserror::Error;

/// Failures raised while turning the editable text into a runnable frame.
///
/// The display strings are user-facing (they are drawn on the canvas and in
/// the code-panel badge), so they stay in the app's language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// No `const params = { ... };` block was found in the editable text.
    #[error("Parâmetros não encontrados")]
    ParamsNotFound,

    /// A parameter block was found but is not a plain `key: number` list.
    #[error("Parâmetros inválidos: {detail}")]
    ParamParse { detail: String },

    /// The function body diverged from the canonical snippet.
    #[error("Você modificou código protegido! Altere apenas os valores dentro de \"params\".")]
    ProtectedCodeModified,
}

impl CodeError {
    /// Whether this error should trigger the hint modal.
    pub fn is_protected_code(&self) -> bool {
        matches!(self, CodeError::ProtectedCodeModified)
    }
}
