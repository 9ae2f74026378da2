use crate::model::record::GeoPosition;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// equirectangular projection centered on a reference latitude: degrees map
/// to meters east/north of the meridian/equator, with longitudes compressed
/// by the cosine of the reference latitude. over the extent of a survey
/// scope (a colony or ward, well under ~50 km) the Euclidean distance in
/// this plane tracks the great-circle distance to well below GPS capture
/// error, which makes it usable as the nearest-neighbor metric directly.
#[derive(Debug, Clone, Copy)]
pub struct LocalProjection {
    cos_ref_lat: f64,
}

impl LocalProjection {
    pub fn new(reference_latitude: f64) -> LocalProjection {
        LocalProjection {
            cos_ref_lat: reference_latitude.to_radians().cos(),
        }
    }

    /// project to planar meters as an rstar-compatible point.
    pub fn project(&self, position: &GeoPosition) -> [f64; 2] {
        let x = position.longitude.to_radians() * self.cos_ref_lat * EARTH_RADIUS_METERS;
        let y = position.latitude.to_radians() * EARTH_RADIUS_METERS;
        [x, y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, Haversine, Length};

    #[test]
    fn test_planar_distance_tracks_haversine_at_survey_extent() {
        // two points ~2.5 km apart in the survey region
        let a = GeoPosition {
            latitude: 29.9695,
            longitude: 76.8783,
        };
        let b = GeoPosition {
            latitude: 29.9850,
            longitude: 76.8950,
        };
        let projection = LocalProjection::new(a.latitude);
        let pa = projection.project(&a);
        let pb = projection.project(&b);
        let planar = ((pa[0] - pb[0]).powi(2) + (pa[1] - pb[1]).powi(2)).sqrt();

        let great_circle = Haversine.length(&line_string![
            (x: a.longitude, y: a.latitude),
            (x: b.longitude, y: b.latitude),
        ]);

        let relative_error = (planar - great_circle).abs() / great_circle;
        assert!(
            relative_error < 0.001,
            "planar {planar} m vs haversine {great_circle} m, error {relative_error}"
        );
    }
}
