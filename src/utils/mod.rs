//! Various unclassified geometric and numerical utilities.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::cross::cross_scalar_vector;
pub use self::inv::inv;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sorted_pair::SortedPair;

mod ccw_face_normal;
mod cross;
mod inv;
mod point_cloud_support_point;
mod sorted_pair;
