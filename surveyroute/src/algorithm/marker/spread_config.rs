use serde::{Deserialize, Serialize};

/// presentation tuning for marker deconfliction. these are display
/// constants inherited from the map frontend, kept as configuration data
/// rather than hard-coded semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadConfig {
    /// angular step between consecutive displaced markers, in degrees of
    /// arc around the collision point.
    pub angle_step_degrees: f64,
    /// displaced markers per ring before the radius grows by another unit.
    pub ring_size: u32,
    /// radius growth per ring, in coordinate degrees. the default is about
    /// 15 meters of latitude.
    pub radius_unit_degrees: f64,
    /// decimal places of latitude/longitude used to detect collisions. the
    /// default (6) groups captures within ~0.11 m, below GPS error.
    pub collision_precision: u32,
}

impl Default for SpreadConfig {
    fn default() -> SpreadConfig {
        SpreadConfig {
            angle_step_degrees: 45.0,
            ring_size: 8,
            radius_unit_degrees: 0.000135,
            collision_precision: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_overrides() {
        let config: SpreadConfig = serde_json::from_str(r#"{ "ring_size": 6 }"#).unwrap();
        assert_eq!(config.ring_size, 6);
        assert_eq!(config.angle_step_degrees, 45.0);
    }
}
