use serde::{Deserialize, Serialize};

/// a validated WGS84 coordinate pair, in degrees. only geo-tagged records
/// carry one of these; raw ingestion values live on [`super::GeoRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    /// classifies a raw ingestion coordinate pair. returns None when the
    /// record is ungeotagged: a missing value, a non-finite or out-of-range
    /// value, or the (0, 0) sentinel left by devices that never got a fix.
    ///
    /// # Arguments
    ///
    /// * `latitude` - raw latitude as captured, if any
    /// * `longitude` - raw longitude as captured, if any
    ///
    /// # Returns
    ///
    /// A validated position, or None when the pair is unusable
    pub fn from_raw(latitude: Option<f64>, longitude: Option<f64>) -> Option<GeoPosition> {
        let lat = latitude?;
        let lon = longitude?;
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        if lat == 0.0 && lon == 0.0 {
            return None;
        }
        Some(GeoPosition {
            latitude: lat,
            longitude: lon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        let pos = GeoPosition::from_raw(Some(29.9695), Some(76.8783)).unwrap();
        assert_eq!(pos.latitude, 29.9695);
        assert_eq!(pos.longitude, 76.8783);
    }

    #[test]
    fn test_missing_component_is_ungeotagged() {
        assert!(GeoPosition::from_raw(Some(29.9695), None).is_none());
        assert!(GeoPosition::from_raw(None, Some(76.8783)).is_none());
        assert!(GeoPosition::from_raw(None, None).is_none());
    }

    #[test]
    fn test_sentinel_origin_is_ungeotagged() {
        assert!(GeoPosition::from_raw(Some(0.0), Some(0.0)).is_none());
        // a single zero component is still a valid coordinate
        assert!(GeoPosition::from_raw(Some(0.0), Some(76.8783)).is_some());
    }

    #[test]
    fn test_non_finite_is_ungeotagged() {
        assert!(GeoPosition::from_raw(Some(f64::NAN), Some(76.8783)).is_none());
        assert!(GeoPosition::from_raw(Some(29.9695), Some(f64::INFINITY)).is_none());
    }

    #[test]
    fn test_out_of_range_is_ungeotagged() {
        assert!(GeoPosition::from_raw(Some(91.0), Some(76.8783)).is_none());
        assert!(GeoPosition::from_raw(Some(29.9695), Some(-180.5)).is_none());
    }
}
