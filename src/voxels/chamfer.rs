//! Neighborhood and weights of the 3D chamfer distance transform.
//!
//! The integer weights `(41, 58, 71) / 41` are a good rational approximation
//! of `(1, √2, √3)`: the lengths of axial, face-diagonal and space-diagonal
//! steps between voxel centers.

use super::VoxelGrid;
use static_assertions::const_assert;

/// The cost of a step to one of the 6 face-adjacent voxels.
pub const STEP_AXIAL: u32 = 41;
/// The cost of a step to one of the 12 edge-adjacent voxels.
pub const STEP_FACE_DIAGONAL: u32 = 58;
/// The cost of a step to one of the 8 vertex-adjacent voxels.
pub const STEP_SPACE_DIAGONAL: u32 = 71;

const_assert!(STEP_AXIAL < STEP_FACE_DIAGONAL);
const_assert!(STEP_FACE_DIAGONAL < STEP_SPACE_DIAGONAL);
const_assert!(STEP_FACE_DIAGONAL < 2 * STEP_AXIAL);
const_assert!(STEP_SPACE_DIAGONAL < STEP_AXIAL + STEP_FACE_DIAGONAL);

/// One neighbor offset of the chamfer mask, with its weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChamferStep {
    /// The offset along `x`.
    pub dx: isize,
    /// The offset along `y`.
    pub dy: isize,
    /// The offset along `z`.
    pub dz: isize,
    /// The cost of this step.
    pub weight: u32,
}

impl ChamferStep {
    const fn new(dx: isize, dy: isize, dz: isize, weight: u32) -> Self {
        Self { dx, dy, dz, weight }
    }
}

/// The weight of a step with the given offset, based on how many of its
/// components are non-zero.
pub const fn step_weight(dx: isize, dy: isize, dz: isize) -> u32 {
    match (dx != 0) as u32 + (dy != 0) as u32 + (dz != 0) as u32 {
        0 => 0,
        1 => STEP_AXIAL,
        2 => STEP_FACE_DIAGONAL,
        _ => STEP_SPACE_DIAGONAL,
    }
}

/// The 13 neighbors visited before a voxel when scanning by increasing `z`,
/// then `y`, then `x`.
pub const FORWARD_STEPS: [ChamferStep; 13] = [
    // Same row.
    ChamferStep::new(-1, 0, 0, STEP_AXIAL),
    // Same plane.
    ChamferStep::new(-1, -1, 0, STEP_FACE_DIAGONAL),
    ChamferStep::new(0, -1, 0, STEP_AXIAL),
    ChamferStep::new(1, -1, 0, STEP_FACE_DIAGONAL),
    // Previous plane.
    ChamferStep::new(1, 1, -1, STEP_SPACE_DIAGONAL),
    ChamferStep::new(0, 1, -1, STEP_FACE_DIAGONAL),
    ChamferStep::new(-1, 1, -1, STEP_SPACE_DIAGONAL),
    ChamferStep::new(1, 0, -1, STEP_FACE_DIAGONAL),
    ChamferStep::new(0, 0, -1, STEP_AXIAL),
    ChamferStep::new(-1, 0, -1, STEP_FACE_DIAGONAL),
    ChamferStep::new(1, -1, -1, STEP_SPACE_DIAGONAL),
    ChamferStep::new(0, -1, -1, STEP_FACE_DIAGONAL),
    ChamferStep::new(-1, -1, -1, STEP_SPACE_DIAGONAL),
];

/// The 13 neighbors visited before a voxel when scanning by decreasing `z`,
/// then `y`, then `x`.
pub const BACKWARD_STEPS: [ChamferStep; 13] = [
    // Same row.
    ChamferStep::new(1, 0, 0, STEP_AXIAL),
    // Same plane.
    ChamferStep::new(-1, 1, 0, STEP_FACE_DIAGONAL),
    ChamferStep::new(0, 1, 0, STEP_AXIAL),
    ChamferStep::new(1, 1, 0, STEP_FACE_DIAGONAL),
    // Next plane.
    ChamferStep::new(1, 1, 1, STEP_SPACE_DIAGONAL),
    ChamferStep::new(0, 1, 1, STEP_FACE_DIAGONAL),
    ChamferStep::new(-1, 1, 1, STEP_SPACE_DIAGONAL),
    ChamferStep::new(1, 0, 1, STEP_FACE_DIAGONAL),
    ChamferStep::new(0, 0, 1, STEP_AXIAL),
    ChamferStep::new(-1, 0, 1, STEP_FACE_DIAGONAL),
    ChamferStep::new(1, -1, 1, STEP_SPACE_DIAGONAL),
    ChamferStep::new(0, -1, 1, STEP_FACE_DIAGONAL),
    ChamferStep::new(-1, -1, 1, STEP_SPACE_DIAGONAL),
];

/// Lowers `q` to `values[neighbor] + weight` for every step of `steps` whose
/// neighbor lies inside of the grid. The sum saturates at `u32::MAX`.
#[inline]
pub fn relax(
    values: &VoxelGrid<u32>,
    x: usize,
    y: usize,
    z: usize,
    steps: &[ChamferStep],
    mut q: u32,
) -> u32 {
    for step in steps {
        if let Some(id) = values.neighbor_index(x, y, z, step.dx, step.dy, step.dz) {
            q = q.min(values.data()[id].saturating_add(step.weight));
        }
    }

    q
}

/// The chamfer length of the path between two voxels separated by `(dx, dy, dz)`.
///
/// With the 41/58/71 weights the cheapest path first takes space-diagonal
/// steps, then face-diagonal steps, then axial steps. This is the value the
/// two-pass transform converges to when there is a single occupied voxel.
pub fn chamfer_length(dx: usize, dy: usize, dz: usize) -> u32 {
    let mut d = [dx, dy, dz];
    d.sort_unstable();
    let [c, b, a] = d;
    (STEP_SPACE_DIAGONAL as usize * c
        + STEP_FACE_DIAGONAL as usize * (b - c)
        + STEP_AXIAL as usize * (a - b)) as u32
}
