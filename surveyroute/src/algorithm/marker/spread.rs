use super::{MarkerPlacement, SpreadConfig};
use crate::model::record::{GeoPosition, GeoRecord, RecordId};
use itertools::Itertools;
use std::collections::HashMap;

/// computes display coordinates for a record set, spreading markers whose
/// coordinates collide so they stay individually clickable on the map.
/// pure and infallible: stored data is never touched, records without a
/// usable position are simply omitted from the output, and re-invocation
/// over the same input yields the same placements.
///
/// within a collision group (ordered by `upload_order`), the first record
/// keeps its true coordinate; each later member is placed on a spiral
/// around it, stepping the configured angle per member and widening by one
/// radius unit per full ring.
///
/// # Arguments
///
/// * `records` - the record set currently being rendered, in any order
/// * `config` - presentation tuning (angle step, ring size, radius unit)
///
/// # Returns
///
/// A placement for every geo-tagged record in the input
pub fn spread_markers(
    records: &[GeoRecord],
    config: &SpreadConfig,
) -> HashMap<RecordId, MarkerPlacement> {
    let mut groups: HashMap<(i64, i64), Vec<(u64, &RecordId, GeoPosition)>> = HashMap::new();
    for record in records.iter() {
        if let Some(position) = record.position() {
            groups
                .entry(collision_key(&position, config.collision_precision))
                .or_default()
                .push((record.upload_order, &record.id, position));
        }
    }

    let mut placements = HashMap::new();
    for members in groups.into_values() {
        let ordered = members
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
            .collect_vec();
        for (rank, (_, id, position)) in ordered.into_iter().enumerate() {
            let placement = if rank == 0 {
                MarkerPlacement {
                    display_latitude: position.latitude,
                    display_longitude: position.longitude,
                    displaced: false,
                }
            } else {
                displaced_placement(&position, rank as u32, config)
            };
            placements.insert(id.clone(), placement);
        }
    }
    placements
}

/// spiral slot for the rank-th displaced member of a collision group
/// (rank >= 1): angle advances one step per member, radius grows one unit
/// per completed ring.
fn displaced_placement(
    position: &GeoPosition,
    rank: u32,
    config: &SpreadConfig,
) -> MarkerPlacement {
    let ring = ((rank - 1) / config.ring_size.max(1)) + 1;
    let angle = (rank as f64 * config.angle_step_degrees).to_radians();
    let radius = ring as f64 * config.radius_unit_degrees;
    // widen longitude by 1/cos(lat) so rings stay metrically round;
    // clamped away from the poles where the correction blows up
    let lon_scale = position.latitude.to_radians().cos().max(1e-6);
    MarkerPlacement {
        display_latitude: position.latitude + radius * angle.cos(),
        display_longitude: position.longitude + radius * angle.sin() / lon_scale,
        displaced: true,
    }
}

fn collision_key(position: &GeoPosition, precision: u32) -> (i64, i64) {
    // floats have no usable key equality; scale to integers at the
    // configured precision
    let scale = 10f64.powi(precision as i32);
    (
        (position.latitude * scale).round() as i64,
        (position.longitude * scale).round() as i64,
    )
}
