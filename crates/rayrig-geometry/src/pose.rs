/// A camera-to-world pose, the top 3x4 rows of a homogeneous transform.
///
/// # Fields
///
/// * `rotation` - The rotation block of the pose 3x3
/// * `translation` - The camera position in world coordinates 3x1
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// The rotation block of the pose 3x3
    pub rotation: [[f64; 3]; 3],
    /// The camera position in world coordinates 3x1
    pub translation: [f64; 3],
}

impl Pose {
    /// The identity pose (camera at the world origin, no rotation).
    pub fn identity() -> Self {
        Self {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0, 0.0, 0.0],
        }
    }
}
