use crate::pose::Pose;

/// Compute camera-space ray directions for every pixel of an image grid.
///
/// For a pixel at (row, col) the direction is
/// `((col - cx) / fx, (row - cy) / fy, 1)`, in row-major pixel order.
/// Directions are not normalized.
///
/// # Arguments
///
/// * `height` - The image height in pixels.
/// * `width` - The image width in pixels.
/// * `k` - The 3x3 intrinsic matrix (focal lengths and principal point).
///
/// # Returns
///
/// A vector of `height * width` direction vectors in camera space.
///
/// Example:
///
/// ```
/// use rayrig_geometry::ray_directions;
///
/// let k = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let directions = ray_directions(2, 2, &k);
/// assert_eq!(directions.len(), 4);
/// assert_eq!(directions[0], [0.0, 0.0, 1.0]);
/// assert_eq!(directions[3], [1.0, 1.0, 1.0]);
/// ```
pub fn ray_directions(height: usize, width: usize, k: &[[f64; 3]; 3]) -> Vec<[f64; 3]> {
    let (fx, fy) = (k[0][0], k[1][1]);
    let (cx, cy) = (k[0][2], k[1][2]);

    let mut directions = Vec::with_capacity(height * width);
    for row in 0..height {
        for col in 0..width {
            directions.push([(col as f64 - cx) / fx, (row as f64 - cy) / fy, 1.0]);
        }
    }

    directions
}

/// Rotate a set of vectors by a rotation matrix.
///
/// # Arguments
///
/// * `src_vectors` - A set of vectors to be rotated.
/// * `dst_r_src` - A rotation matrix.
/// * `dst_vectors` - A pre-allocated vector to store the rotated vectors.
///
/// PRECONDITION: dst_vectors is a pre-allocated vector of the same size as source.
///
/// Example:
///
/// ```no_run
/// use rayrig_geometry::rotate_vectors;
///
/// let src_vectors = vec![[0.0, 0.0, 1.0], [1.0, 0.0, 1.0]];
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let mut dst_vectors = vec![[0.0; 3]; src_vectors.len()];
/// rotate_vectors(&src_vectors, &rotation, &mut dst_vectors);
/// ```
pub fn rotate_vectors(
    src_vectors: &[[f64; 3]],
    dst_r_src: &[[f64; 3]; 3],
    dst_vectors: &mut [[f64; 3]],
) {
    assert_eq!(src_vectors.len(), dst_vectors.len());

    // create a view of the rotation matrix
    let dst_r_src_mat = {
        let rotation_slice =
            unsafe { std::slice::from_raw_parts(dst_r_src.as_ptr() as *const f64, 9) };
        faer::mat::from_row_major_slice(rotation_slice, 3, 3)
    };

    // create view of the source vectors
    let vectors_in_src = {
        let src_vectors_slice = unsafe {
            std::slice::from_raw_parts(src_vectors.as_ptr() as *const f64, src_vectors.len() * 3)
        };
        // SAFETY: src_vectors_slice is an Nx3 matrix where each row represents a vector
        faer::mat::from_row_major_slice(src_vectors_slice, src_vectors.len(), 3)
    };

    // create a mutable view of the destination vectors
    let mut vectors_in_dst = {
        let dst_vectors_slice = unsafe {
            std::slice::from_raw_parts_mut(
                dst_vectors.as_mut_ptr() as *mut f64,
                dst_vectors.len() * 3,
            )
        };
        // SAFETY: dst_vectors_slice is a 3xN matrix where each column represents a vector
        faer::mat::from_column_major_slice_mut(dst_vectors_slice, 3, dst_vectors.len())
    };

    // perform the matrix multiplication
    faer::linalg::matmul::matmul(
        &mut vectors_in_dst,
        dst_r_src_mat,
        vectors_in_src.transpose(),
        None,
        1.0,
        faer::Parallelism::None,
    );
}

/// Cast camera-space ray directions into world space through a pose.
///
/// Origins are the camera position broadcast to every pixel; directions are
/// rotated by the rotation block of the pose.
///
/// # Arguments
///
/// * `directions` - Camera-space ray directions, one per pixel.
/// * `pose` - The camera-to-world pose.
///
/// # Returns
///
/// World-space ray origins and directions, each of the same length as the
/// input.
///
/// Example:
///
/// ```
/// use rayrig_geometry::{transform_rays, Pose};
///
/// let directions = vec![[0.0, 0.0, 1.0]];
/// let (origins, world) = transform_rays(&directions, &Pose::identity());
/// assert_eq!(origins[0], [0.0, 0.0, 0.0]);
/// assert_eq!(world[0], [0.0, 0.0, 1.0]);
/// ```
pub fn transform_rays(directions: &[[f64; 3]], pose: &Pose) -> (Vec<[f64; 3]>, Vec<[f64; 3]>) {
    let origins = vec![pose.translation; directions.len()];

    let mut world_directions = vec![[0.0; 3]; directions.len()];
    rotate_vectors(directions, &pose.rotation, &mut world_directions);

    (origins, world_directions)
}
