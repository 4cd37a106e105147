//! Per-shape value derivation.
//!
//! Geometric shapes measure themselves (area or length). Text is read as a
//! formula when it evaluates, otherwise as a memo:
//! - `"<expr>="` or an already solved `"<expr>=<result>"` is rewritten to
//!   `"<expr>=<result>"`, so re-deriving after a move is stable;
//! - a bare expression is replaced by its result;
//! - anything that fails to evaluate, or has other text after `=`, keeps
//!   its text and gets no value.
//!
//! Formula results are truncated at three decimals; every stored value is
//! then rounded to five.

use takeoffkit_core::{round_stored, truncate_3};

use crate::eval::{evaluate, format_result};
use crate::model::{DesignText, DesignerShape, DrawingObject, Shape};

/// Recomputes `obj.value` from its current geometry or text.
pub fn derive_value(obj: &mut DrawingObject) {
    if obj.manual_value && !obj.is_text() {
        return;
    }

    obj.value = match &mut obj.shape {
        Shape::Text(text) => derive_text(text),
        shape => shape.measure().map(round_stored),
    };
    tracing::debug!("Derived value {:?} for {}", obj.value, obj.id);
}

fn derive_text(text: &mut DesignText) -> Option<f64> {
    if text.summary || text.text.trim().is_empty() {
        return None;
    }

    if let Some((prefix, suffix)) = text.text.split_once('=') {
        let result = truncate_3(evaluate(prefix).ok()?);
        let solved = format_result(result);
        // Anything after '=' other than this result is a memo
        let suffix = suffix.trim();
        if !suffix.is_empty() && suffix != solved {
            return None;
        }
        text.text = format!("{}={}", prefix, solved);
        return Some(round_stored(result));
    }

    let result = truncate_3(evaluate(&text.text).ok()?);
    // Keep the formula visible when it has no finite result
    if result.is_finite() {
        text.text = format_result(result);
    }
    Some(round_stored(result))
}
