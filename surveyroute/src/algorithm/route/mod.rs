mod local_projection;
mod route_point;
mod walk;

pub use local_projection::LocalProjection;
pub use route_point::RoutePoint;
pub use walk::{path_length_meters, walk_order};
