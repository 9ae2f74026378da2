use super::{LocalProjection, RoutePoint};
use crate::model::record::{GeoPosition, RecordId};
use geo::{Coord, Haversine, Length, LineString};
use rstar::primitives::GeomWithData;
use rstar::RTree;

type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// computes a deterministic field-walking order over one scope's geo-tagged
/// records: a nearest-neighbor path (not a closed tour) starting from the
/// lexicographically smallest (latitude, longitude) pair. every ordering tie
/// falls through `upload_order` to the record id, so an unchanged input set
/// always reproduces the same permutation bit for bit.
///
/// the nearest-unvisited query is served by an rstar R-tree over locally
/// projected planar coordinates, with points removed as they are visited,
/// keeping each step near O(log n) instead of a full scan.
///
/// # Arguments
///
/// * `points` - the geo-tagged subset of one scope, in any order
///
/// # Returns
///
/// Record ids as a permutation of the input, in visiting order. empty input
/// yields an empty order.
pub fn walk_order(points: &[RoutePoint]) -> Vec<RecordId> {
    let anchor = match anchor_index(points) {
        Some(index) => index,
        None => return vec![],
    };
    let projection = LocalProjection::new(points[anchor].position.latitude);
    let projected = points
        .iter()
        .map(|p| projection.project(&p.position))
        .collect::<Vec<_>>();

    let mut tree: RTree<IndexedPoint> = RTree::bulk_load(
        projected
            .iter()
            .enumerate()
            .map(|(index, xy)| GeomWithData::new(*xy, index))
            .collect(),
    );

    let mut order = Vec::with_capacity(points.len());
    tree.remove(&GeomWithData::new(projected[anchor], anchor));
    order.push(anchor);
    let mut cursor = projected[anchor];

    while tree.size() > 0 {
        let next = match nearest_unvisited(&tree, &cursor, points) {
            Some(index) => index,
            None => break,
        };
        tree.remove(&GeomWithData::new(projected[next], next));
        order.push(next);
        cursor = projected[next];
    }

    order.into_iter().map(|index| points[index].id.clone()).collect()
}

/// haversine length of a visiting order, in meters. reported alongside
/// arrangement results; the sequencing metric itself is the planar
/// projection, not this.
pub fn path_length_meters(path: &[GeoPosition]) -> f64 {
    let line: LineString<f64> = path
        .iter()
        .map(|p| Coord {
            x: p.longitude,
            y: p.latitude,
        })
        .collect();
    Haversine.length(&line)
}

/// the deterministic starting point: smallest (latitude, longitude) under
/// f64 total ordering, ties by ingestion rank.
fn anchor_index(points: &[RoutePoint]) -> Option<usize> {
    (0..points.len()).min_by(|&a, &b| {
        let pa = &points[a];
        let pb = &points[b];
        pa.position
            .latitude
            .total_cmp(&pb.position.latitude)
            .then(pa.position.longitude.total_cmp(&pb.position.longitude))
            .then(pa.upload_order.cmp(&pb.upload_order))
            .then(pa.id.cmp(&pb.id))
    })
}

/// nearest remaining point to the cursor. the iterator yields candidates in
/// ascending distance, so scanning stops at the first strictly farther one;
/// among candidates at exactly the minimal distance (duplicate GPS captures)
/// the smallest ingestion rank wins.
fn nearest_unvisited(
    tree: &RTree<IndexedPoint>,
    cursor: &[f64; 2],
    points: &[RoutePoint],
) -> Option<usize> {
    let mut iter = tree.nearest_neighbor_iter_with_distance_2(cursor);
    let (first, best_distance) = iter.next()?;
    let mut best = first.data;
    for (candidate, distance) in iter {
        if distance > best_distance {
            break;
        }
        if tie_break_rank(points, candidate.data) < tie_break_rank(points, best) {
            best = candidate.data;
        }
    }
    Some(best)
}

fn tie_break_rank(points: &[RoutePoint], index: usize) -> (u64, &RecordId) {
    (points[index].upload_order, &points[index].id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn create_point(id: &str, lat: f64, lon: f64, order: u64) -> RoutePoint {
        RoutePoint {
            id: RecordId::from(id),
            upload_order: order,
            position: GeoPosition {
                latitude: lat,
                longitude: lon,
            },
        }
    }

    fn ids(order: &[RecordId]) -> Vec<&str> {
        order.iter().map(|id| id.0.as_str()).collect()
    }

    #[test]
    fn test_empty_input_empty_order() {
        assert!(walk_order(&[]).is_empty());
    }

    #[test]
    fn test_single_point() {
        let points = vec![create_point("only", 29.9695, 76.8783, 1)];
        assert_eq!(ids(&walk_order(&points)), vec!["only"]);
    }

    #[test]
    fn test_walks_a_street_west_to_east() {
        // houses along one street; anchor is the southwest-most record and
        // the walk should proceed door to door eastward
        let points = vec![
            create_point("c", 29.9695, 76.8830, 3),
            create_point("a", 29.9695, 76.8783, 1),
            create_point("d", 29.9695, 76.8860, 4),
            create_point("b", 29.9695, 76.8800, 2),
        ];
        assert_eq!(ids(&walk_order(&points)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_anchor_is_smallest_lat_lon_pair() {
        let points = vec![
            create_point("north", 29.9800, 76.8783, 1),
            create_point("south", 29.9600, 76.8900, 2),
        ];
        // lower latitude wins regardless of longitude or upload order
        assert_eq!(ids(&walk_order(&points))[0], "south");
    }

    #[test]
    fn test_duplicate_coordinates_order_by_upload() {
        // manual GPS capture often stamps a whole building with one fix
        let points = vec![
            create_point("second", 29.9500, 76.8300, 2),
            create_point("third", 29.9500, 76.8300, 3),
            create_point("first", 29.9500, 76.8300, 1),
        ];
        assert_eq!(ids(&walk_order(&points)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_cluster_mid_route() {
        let points = vec![
            create_point("start", 29.9500, 76.8300, 1),
            create_point("pair-late", 29.9500, 76.8310, 5),
            create_point("pair-early", 29.9500, 76.8310, 2),
            create_point("far", 29.9500, 76.8340, 3),
        ];
        assert_eq!(
            ids(&walk_order(&points)),
            vec!["start", "pair-early", "pair-late", "far"]
        );
    }

    #[test]
    fn test_order_is_a_permutation() {
        // 5x5 block grid
        let mut points = vec![];
        for i in 0..5 {
            for j in 0..5 {
                points.push(create_point(
                    &format!("p{i}{j}"),
                    29.9500 + 0.0010 * i as f64,
                    76.8300 + 0.0010 * j as f64,
                    (i * 5 + j) as u64,
                ));
            }
        }
        let order = walk_order(&points);
        assert_eq!(order.len(), points.len());
        let sorted_out = order.iter().cloned().sorted().collect_vec();
        let sorted_in = points.iter().map(|p| p.id.clone()).sorted().collect_vec();
        assert_eq!(sorted_out, sorted_in);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let points = vec![
            create_point("a", 29.9711, 76.8821, 4),
            create_point("b", 29.9695, 76.8783, 2),
            create_point("c", 29.9695, 76.8783, 1),
            create_point("d", 29.9730, 76.8650, 3),
            create_point("e", 29.9600, 76.8900, 5),
        ];
        let first = walk_order(&points);
        let second = walk_order(&points);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut points = vec![
            create_point("a", 29.9711, 76.8821, 4),
            create_point("b", 29.9695, 76.8783, 2),
            create_point("c", 29.9730, 76.8650, 3),
            create_point("d", 29.9600, 76.8900, 5),
        ];
        let first = walk_order(&points);
        points.reverse();
        let second = walk_order(&points);
        assert_eq!(first, second);
    }

    #[test]
    fn test_path_length_degenerate_inputs() {
        assert_eq!(path_length_meters(&[]), 0.0);
        let single = GeoPosition {
            latitude: 29.9695,
            longitude: 76.8783,
        };
        assert_eq!(path_length_meters(&[single]), 0.0);
    }

    #[test]
    fn test_path_length_one_millidegree_of_latitude() {
        let a = GeoPosition {
            latitude: 29.9690,
            longitude: 76.8783,
        };
        let b = GeoPosition {
            latitude: 29.9700,
            longitude: 76.8783,
        };
        let length = path_length_meters(&[a, b]);
        // 0.001 degrees of latitude is ~111.2 m
        assert!((110.0..113.0).contains(&length), "got {length}");
    }
}
