//! Vector math primitives shared by the store and the arena
//!
//! Every function checks operand lengths up front. Nothing here truncates to
//! the shorter operand or lets NaN escape from a zero-norm division.

use crate::error::{ArenaError, Result};

/// Ensure two operands have the same length
#[inline]
pub fn check_dims(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ArenaError::dimension_mismatch(expected, actual));
    }
    Ok(())
}

/// Reject NaN and infinite coordinates
pub fn check_finite(values: &[f32]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(ArenaError::invalid_input(format!(
            "non-finite coordinate {} at index {}",
            values[i], i
        ))),
        None => Ok(()),
    }
}

// Accumulation runs in f64 so squares of large f32 coordinates cannot
// overflow and squares of tiny ones cannot flush to zero.

/// Dot product of two equal-length vectors
pub fn dot(a: &[f32], b: &[f32]) -> Result<f32> {
    check_dims(a.len(), b.len())?;
    Ok(dot_f64(a, b) as f32)
}

fn dot_f64(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}

fn magnitude_f64(v: &[f32]) -> f64 {
    v.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
}

/// Euclidean norm
#[inline]
pub fn magnitude(v: &[f32]) -> f32 {
    magnitude_f64(v) as f32
}

/// Euclidean distance: `sqrt(sum((a_i - b_i)^2))`
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    check_dims(a.len(), b.len())?;
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum();
    if sum.is_nan() {
        return Err(ArenaError::invalid_input("distance over non-finite coordinates"));
    }
    Ok(sum.sqrt() as f32)
}

/// Cosine similarity: `dot(a, b) / (|a| * |b|)`
///
/// Returns [`ArenaError::ZeroMagnitude`] if either vector has zero norm and
/// [`ArenaError::InvalidInput`] if the result is not finite. The result is
/// clamped to `[-1, 1]` to absorb rounding on parallel inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    check_dims(a.len(), b.len())?;
    let norms = magnitude_f64(a) * magnitude_f64(b);
    if norms == 0.0 {
        return Err(ArenaError::ZeroMagnitude);
    }
    let similarity = dot_f64(a, b) / norms;
    if !similarity.is_finite() {
        return Err(ArenaError::invalid_input(
            "cosine similarity over non-finite coordinates",
        ));
    }
    Ok((similarity as f32).clamp(-1.0, 1.0))
}
