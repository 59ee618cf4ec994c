//! GeoProximityResolver: bounded search region + distance ordering.

use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::params::{RawParams, TypedParams};

/// Search radius applied when the caller supplies coordinates without one.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Result ordering directive carried by a geo query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoOrdering {
    DistanceAscending,
}

/// Proximity-search directive: everything the storage collaborator needs to
/// run "within radius of center, nearest first". Distance computation itself
/// happens in storage; this clause only guarantees the request is
/// well-formed and unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoClause {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub ordering: GeoOrdering,
}

/// Resolve the geo clause for a clinic query.
///
/// Activates when any of lat/lng/radius appears in the raw parameters.
/// Coordinates must come as a pair: one without the other is reported as
/// `missing`, never silently ignored. Range errors for the coordinates are
/// the parser's job; this resolver owns pairing, the radius policy default,
/// and the radius > 0 rule.
///
/// Presence is checked against the raw parameters so a malformed coordinate
/// (already reported as `invalid_type`) is not double-reported as missing.
pub(crate) fn resolve(
    raw: &RawParams,
    typed: &TypedParams,
    errors: &mut Vec<ValidationError>,
) -> Option<GeoClause> {
    let lat_supplied = raw.contains_key("lat");
    let lng_supplied = raw.contains_key("lng");
    let radius_supplied = raw.contains_key("radius");

    if !lat_supplied && !lng_supplied && !radius_supplied {
        return None;
    }

    if lat_supplied != lng_supplied {
        let absent = if lat_supplied { "lng" } else { "lat" };
        errors.push(ValidationError::missing(absent));
    } else if !lat_supplied && radius_supplied {
        // radius alone selects nothing to search around
        errors.push(ValidationError::missing("lat"));
        errors.push(ValidationError::missing("lng"));
    }

    let radius_km = match typed.get_f64("radius") {
        Some(r) if r <= 0.0 => {
            errors.push(ValidationError::invalid_range(
                "radius",
                "'radius' must be greater than 0",
            ));
            return None;
        }
        Some(r) => r,
        None if radius_supplied => return None, // parser already flagged it
        None => DEFAULT_RADIUS_KM,
    };

    let (latitude, longitude) = match (typed.get_f64("lat"), typed.get_f64("lng")) {
        (Some(lat), Some(lng)) => (lat, lng),
        // absent or unparseable; errors are already on the list
        _ => return None,
    };

    debug!(
        latitude,
        longitude, radius_km, "resolved geo proximity clause"
    );

    Some(GeoClause {
        center: GeoPoint {
            longitude,
            latitude,
        },
        radius_km,
        ordering: GeoOrdering::DistanceAscending,
    })
}
