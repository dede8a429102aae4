//! Parameter extraction from the editable text.
//!
//! The playground re-derives the parameters every animation frame from the
//! first `const params = { ... };` block in the code panel. The block is
//! *parsed*, never evaluated: only a flat `key: numberLiteral` list is
//! accepted, so arbitrary code in the editable text stays inert.

use hashbrown::HashMap;

use crate::error::CodeError;

const BLOCK_OPEN: &str = "const params = {";
const BLOCK_CLOSE: &str = "};";

/// A flat name → number mapping, re-derived from the editable text each frame.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSet {
    values: HashMap<String, f64>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Look a parameter up, falling back to the concept default when the user
    /// deleted the entry. Missing keys never break a running simulation.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extract and parse the first parameter block of `code`.
///
/// Fails with [`CodeError::ParamsNotFound`] when the delimiters are missing
/// and with [`CodeError::ParamParse`] when the block contains anything other
/// than `identifier: number` entries (line comments are tolerated).
pub fn extract_params(code: &str) -> Result<ParamSet, CodeError> {
    let start = code.find(BLOCK_OPEN).ok_or(CodeError::ParamsNotFound)?;
    let body_start = start + BLOCK_OPEN.len();
    let body_len = code[body_start..]
        .find(BLOCK_CLOSE)
        .ok_or(CodeError::ParamsNotFound)?;
    let body = &code[body_start..body_start + body_len];

    parse_entries(body)
}

fn parse_entries(body: &str) -> Result<ParamSet, CodeError> {
    let mut set = ParamSet::new();

    // Strip line comments first so a commented-out entry does not parse.
    let mut cleaned = String::with_capacity(body.len());
    for line in body.lines() {
        let code_part = match line.find("//") {
            Some(i) => &line[..i],
            None => line,
        };
        cleaned.push_str(code_part);
        cleaned.push('\n');
    }

    for entry in cleaned.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            // Trailing comma or blank line.
            continue;
        }

        let (key, value) = entry.split_once(':').ok_or_else(|| CodeError::ParamParse {
            detail: format!("entrada sem ':': \"{}\"", entry.trim()),
        })?;

        let key = key.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(CodeError::ParamParse {
                detail: format!("nome inválido: \"{key}\""),
            });
        }

        let value = parse_number(value.trim()).ok_or_else(|| CodeError::ParamParse {
            detail: format!("valor não numérico para \"{key}\""),
        })?;

        set.insert(key, value);
    }

    Ok(set)
}

/// Accepts plain numeric literals only: optional sign, digits, decimal point,
/// exponent. `f64::from_str` alone would also accept `inf`/`NaN` spellings.
fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    let ok = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !ok {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
