use faer::prelude::*;

use rayrig_geometry::Pose;

use crate::filestorage::Extrinsics;

/// Invert a world-to-camera extrinsic transform into a camera-to-world pose.
///
/// The extrinsic (R, T) is lifted into a 4x4 homogeneous matrix and inverted
/// with a full LU inversion; the top 3x4 rows become the pose. Numerically
/// equivalent to the closed-form rigid inverse `(R^T, -R^T T)`.
///
/// # Arguments
///
/// * `extrinsics` - The world-to-camera rotation and translation.
///
/// # Returns
///
/// The camera-to-world pose.
pub fn camera_to_world(extrinsics: &Extrinsics) -> Pose {
    let (r, t) = (&extrinsics.rotation, &extrinsics.translation);

    let camera_from_world = faer::mat![
        [r[0][0], r[0][1], r[0][2], t[0]],
        [r[1][0], r[1][1], r[1][2], t[1]],
        [r[2][0], r[2][1], r[2][2], t[2]],
        [0.0, 0.0, 0.0, 1.0],
    ];

    let world_from_camera = camera_from_world.partial_piv_lu().inverse();

    let mut rotation = [[0.0; 3]; 3];
    for (i, row) in rotation.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = world_from_camera.read(i, j);
        }
    }

    Pose {
        rotation,
        translation: [
            world_from_camera.read(0, 3),
            world_from_camera.read(1, 3),
            world_from_camera.read(2, 3),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_to_world_identity() {
        let extrinsics = Extrinsics {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0, 0.0, 0.0],
        };

        let pose = camera_to_world(&extrinsics);

        assert_eq!(pose, Pose::identity());
    }

    #[test]
    fn test_camera_to_world_matches_rigid_inverse() {
        // rotation of 90 degrees about the x axis with a translation
        let rotation = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
        let translation = [1.0, 2.0, 3.0];
        let extrinsics = Extrinsics {
            rotation,
            translation,
        };

        let pose = camera_to_world(&extrinsics);

        // R' = R^T, t' = -R^T * t
        let mut expected_rotation = [[0.0; 3]; 3];
        let mut expected_translation = [0.0; 3];
        for i in 0..3 {
            for j in 0..3 {
                expected_rotation[i][j] = rotation[j][i];
            }
            expected_translation[i] = -(rotation[0][i] * translation[0]
                + rotation[1][i] * translation[1]
                + rotation[2][i] * translation[2]);
        }

        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(pose.rotation[i][j], expected_rotation[i][j], epsilon = 1e-12);
            }
            assert_relative_eq!(
                pose.translation[i],
                expected_translation[i],
                epsilon = 1e-12
            );
        }
    }
}
