//! Protected-code validation.
//!
//! A coarse textual gate, not a semantic check: both texts are split at the
//! first `function ` keyword and the remainders are compared with all
//! whitespace stripped. Editing only the parameter block never trips it;
//! editing anything from the function keyword onward (comments included)
//! does. Removing the keyword entirely escapes the gate; its only job is
//! nudging learners back to the parameter block, not enforcing correctness.

use crate::error::CodeError;

const FUNCTION_KEYWORD: &str = "function ";

/// Compare the protected region of `user_code` against `canonical`.
pub fn validate_protected(user_code: &str, canonical: &str) -> Result<(), CodeError> {
    let user_body = function_part(user_code);
    let canonical_body = function_part(canonical);

    if let (Some(user_body), Some(canonical_body)) = (user_body, canonical_body) {
        if strip_whitespace(user_body) != strip_whitespace(canonical_body) {
            return Err(CodeError::ProtectedCodeModified);
        }
    }

    Ok(())
}

fn function_part(code: &str) -> Option<&str> {
    code.split_once(FUNCTION_KEYWORD).map(|(_, tail)| tail)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
