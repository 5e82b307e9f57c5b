pub mod error;
pub mod intersection;
pub mod math;
pub mod polygon;
pub mod random;
pub mod triangulation;

pub use error::{PlanekitError, Result};
pub use intersection::{intersects_concave, intersects_convex, sat_intersects, test_intersection, ConvexIntersection, Gjk, Sat};
pub use math::{Point2, Vector2};
pub use polygon::{Polygon2d, Ring, Triangle};
pub use random::{random_concave_polygon, random_convex_polygon, ConcaveParams};
pub use triangulation::{triangulate, Triangulate};
