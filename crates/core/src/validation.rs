//! Input validation helpers for plots, activities and accounts.
//!
//! Each helper returns `CoreError::Validation` naming the offending field so
//! handlers can forward the message unchanged.

use crate::error::CoreError;
use crate::geometry::{Polygon, MIN_POLYGON_VERTICES};

/// Upper bound on vertices accepted for a single plot boundary.
pub const MAX_POLYGON_VERTICES: usize = 10_000;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Reject empty or whitespace-only strings.
pub fn validate_required(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate a plot boundary before it is measured and persisted.
///
/// The ring must have at least [`MIN_POLYGON_VERTICES`] vertices on top of
/// the checks in [`validate_coordinates`].
pub fn validate_polygon(polygon: &Polygon) -> Result<(), CoreError> {
    let n = polygon.len();
    if n < MIN_POLYGON_VERTICES {
        return Err(CoreError::Validation(format!(
            "coordinates must contain at least {MIN_POLYGON_VERTICES} points, got {n}"
        )));
    }
    validate_coordinates(polygon)
}

/// Validate vertex values without requiring a closed area.
///
/// Every vertex must be finite and inside the valid longitude/latitude
/// ranges, and the ring may hold at most [`MAX_POLYGON_VERTICES`] vertices.
/// Used on its own by the measurement preview, where a degenerate ring is
/// legitimately measured as zero.
pub fn validate_coordinates(polygon: &Polygon) -> Result<(), CoreError> {
    let n = polygon.len();
    if n > MAX_POLYGON_VERTICES {
        return Err(CoreError::Validation(format!(
            "coordinates must contain at most {MAX_POLYGON_VERTICES} points, got {n}"
        )));
    }

    for (i, v) in polygon.vertices().iter().enumerate() {
        if !v.lng.is_finite() || !v.lat.is_finite() {
            return Err(CoreError::Validation(format!(
                "coordinate {i} is not a finite number"
            )));
        }
        if !(-180.0..=180.0).contains(&v.lng) {
            return Err(CoreError::Validation(format!(
                "coordinate {i} longitude must be between -180 and 180, got {}",
                v.lng
            )));
        }
        if !(-90.0..=90.0).contains(&v.lat) {
            return Err(CoreError::Validation(format!(
                "coordinate {i} latitude must be between -90 and 90, got {}",
                v.lat
            )));
        }
    }
    Ok(())
}

/// Minimal shape check: one `@` with non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::Validation(format!(
            "email '{email}' is not a valid address"
        )));
    }
    Ok(())
}

/// Enforce the minimum password length.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}
