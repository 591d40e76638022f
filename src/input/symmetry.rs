/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Space group symmetry operations in `x, y, z` notation

use super::errors::{InputError, Result};
use crate::atoms::Vector3D;

/// Fractional values this close to 1 wrap to 0
const WRAP_EPSILON: f64 = 1e-8;

/// An affine operation on fractional coordinates: `r' = R r + t`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryOperation {
    rotation: [[f64; 3]; 3],
    translation: [f64; 3],
}

impl SymmetryOperation {
    /// The identity operation `x, y, z`
    pub fn identity() -> Self {
        Self {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0; 3],
        }
    }

    /// Parse an operation such as `-x+y, 1/2+z, x`
    pub fn parse(operation: &str) -> Result<Self> {
        let components: Vec<&str> = operation.split(',').collect();
        if components.len() != 3 {
            return Err(invalid(operation, "expected three comma separated components"));
        }

        let mut rotation = [[0.0; 3]; 3];
        let mut translation = [0.0; 3];
        for (row, component) in components.iter().enumerate() {
            let (coefficients, constant) = parse_component(component)
                .map_err(|reason| invalid(operation, &reason))?;
            rotation[row] = coefficients;
            translation[row] = constant;
        }

        Ok(Self {
            rotation,
            translation,
        })
    }

    /// Apply the operation to a fractional position
    pub fn apply(&self, p: &Vector3D) -> Vector3D {
        let row = |i: usize| {
            let r = self.rotation[i];
            r[0] * p.x + r[1] * p.y + r[2] * p.z + self.translation[i]
        };
        Vector3D::new(row(0), row(1), row(2))
    }
}

fn invalid(operation: &str, reason: &str) -> InputError {
    InputError::InvalidSymmetry {
        operation: operation.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse one component into axis coefficients and a constant offset
fn parse_component(component: &str) -> std::result::Result<([f64; 3], f64), String> {
    let expr: String = component
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    if expr.is_empty() {
        return Err("empty component".to_string());
    }

    let mut coefficients = [0.0; 3];
    let mut constant = 0.0;

    // Split into signed terms, keeping each sign with its term
    let mut terms = Vec::new();
    let mut current = String::new();
    for c in expr.chars() {
        if (c == '+' || c == '-') && !current.is_empty() && !current.ends_with(['+', '-']) {
            terms.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    terms.push(current);

    for term in terms {
        let (sign, body) = match term.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, term.strip_prefix('+').unwrap_or(&term)),
        };
        if body.is_empty() {
            return Err(format!("dangling sign in '{}'", component.trim()));
        }

        match body.char_indices().last() {
            Some((idx, axis @ ('x' | 'y' | 'z'))) => {
                let factor = body[..idx].trim_end_matches('*');
                let factor = if factor.is_empty() {
                    1.0
                } else {
                    parse_number(factor)?
                };
                let axis = match axis {
                    'x' => 0,
                    'y' => 1,
                    _ => 2,
                };
                coefficients[axis] += sign * factor;
            }
            _ => constant += sign * parse_number(body)?,
        }
    }

    Ok((coefficients, constant))
}

/// Parse `1/2`, `0.25` or `3`
fn parse_number(text: &str) -> std::result::Result<f64, String> {
    let value = match text.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.parse().map_err(|_| format!("invalid number '{}'", text))?;
            let den: f64 = den.parse().map_err(|_| format!("invalid number '{}'", text))?;
            if den == 0.0 {
                return Err(format!("zero denominator in '{}'", text));
            }
            num / den
        }
        None => text.parse().map_err(|_| format!("invalid term '{}'", text))?,
    };
    Ok(value)
}

/// Wrap a fractional coordinate into `[0, 1)`
pub fn wrap_fractional(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    if 1.0 - wrapped < WRAP_EPSILON {
        0.0
    } else {
        wrapped
    }
}

/// Whether two fractional positions coincide modulo lattice translations
pub fn periodic_match(a: &Vector3D, b: &Vector3D, tolerance: f64) -> bool {
    (0..3).all(|axis| {
        let d = (a[axis] - b[axis]).rem_euclid(1.0);
        d.min(1.0 - d) < tolerance
    })
}
