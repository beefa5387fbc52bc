//! Region value types and the geometry shared between them.

mod circle;
mod cuboid;
mod grid;
mod rectangle;
mod region;
mod sphere;
mod unions;

pub use circle::CircleRegion;
pub use cuboid::CuboidRegion;
pub use grid::GridBounds;
pub use rectangle::RectangleRegion;
pub use region::Region;
pub use sphere::SphereRegion;
pub use unions::{overlap, union};
