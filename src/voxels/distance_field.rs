use super::chamfer::{self, BACKWARD_STEPS, FORWARD_STEPS, STEP_AXIAL, STEP_SPACE_DIAGONAL};
use super::{OccupancyGrid, VoxelGrid, VoxelGridError, VoxelOccupancy};
use crate::math::{Real, Vector};
use crate::utils::{Interrupt, NoInterrupt};

/// One of the two sweeps of the chamfer distance transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformPass {
    /// The sweep by increasing `z`, `y`, then `x`.
    Forward,
    /// The sweep by decreasing `z`, `y`, then `x`.
    Backward,
}

/// Errors that can occur while computing a distance transform.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum DistanceTransformError {
    /// The distance field could not be sized or allocated.
    #[error(transparent)]
    Allocation(#[from] VoxelGridError),
    /// The transform was aborted by its [`Interrupt`].
    #[error("the distance transform was interrupted during the {pass:?} pass, at z-slice {slice}")]
    Interrupted {
        /// The pass that was running.
        pass: TransformPass,
        /// The z-slice that was about to be processed.
        slice: usize,
    },
}

/// Approximate distances from every voxel of a grid to the closest occupied voxel.
///
/// Distances are stored as integers in chamfer units: a value `v` stands for
/// the physical distance `v * voxel_side / 41`.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceField {
    voxel_side: Real,
    infinity: u32,
    grid: VoxelGrid<u32>,
}

impl DistanceField {
    /// The value given to every voxel before the transform runs.
    ///
    /// This is `ceil(71 * sqrt(Mx² + My² + Mz²))`, longer than any chamfer path
    /// inside of the grid. Fails with [`VoxelGridError::DimensionsOverflow`] if
    /// adding one more step to it would not fit in a `u32`.
    pub fn infinity_for_dims(dims: &Vector<usize>) -> Result<u32, VoxelGridError> {
        let (mx, my, mz) = (dims.x as f64, dims.y as f64, dims.z as f64);
        let infinity = (STEP_SPACE_DIAGONAL as f64 * (mx * mx + my * my + mz * mz).sqrt()).ceil();

        if infinity > (u32::MAX - STEP_SPACE_DIAGONAL) as f64 {
            return Err(VoxelGridError::DimensionsOverflow);
        }

        Ok(infinity as u32)
    }

    /// Computes the chamfer distance transform of `occupancy`.
    pub fn chamfer(occupancy: &OccupancyGrid) -> Result<Self, DistanceTransformError> {
        Self::chamfer_with_interrupt(occupancy, &NoInterrupt)
    }

    /// Computes the chamfer distance transform of `occupancy`, polling
    /// `interrupt` once per z-slice of each pass.
    ///
    /// Occupied voxels get a distance of zero. Every other voxel gets the
    /// length of the shortest path, made of axial (41), face-diagonal (58) and
    /// space-diagonal (71) steps, to an occupied voxel. If no voxel is
    /// occupied, every voxel keeps the [`Self::infinity`] value.
    pub fn chamfer_with_interrupt(
        occupancy: &OccupancyGrid,
        interrupt: &(impl Interrupt + ?Sized),
    ) -> Result<Self, DistanceTransformError> {
        let dims = occupancy.dims();
        let infinity = Self::infinity_for_dims(&dims)?;
        let mut values = VoxelGrid::try_new(dims, infinity)?;
        let mask = occupancy.grid().data();

        log::debug!(
            "Computing the chamfer distance transform of a {}x{}x{} grid.",
            dims.x,
            dims.y,
            dims.z
        );

        for z in 0..dims.z {
            if interrupt.should_abort() {
                return Err(DistanceTransformError::Interrupted {
                    pass: TransformPass::Forward,
                    slice: z,
                });
            }

            for y in 0..dims.y {
                for x in 0..dims.x {
                    let id = values.linear_index(x, y, z);
                    let q = if mask[id] == VoxelOccupancy::Occupied {
                        0
                    } else {
                        chamfer::relax(&values, x, y, z, &FORWARD_STEPS, infinity)
                    };
                    values.data_mut()[id] = q;
                }
            }
        }

        for z in (0..dims.z).rev() {
            if interrupt.should_abort() {
                return Err(DistanceTransformError::Interrupted {
                    pass: TransformPass::Backward,
                    slice: z,
                });
            }

            for y in (0..dims.y).rev() {
                for x in (0..dims.x).rev() {
                    let id = values.linear_index(x, y, z);
                    let q = values.data()[id];

                    if q != 0 {
                        let relaxed = chamfer::relax(&values, x, y, z, &BACKWARD_STEPS, q);
                        values.data_mut()[id] = relaxed;
                    }
                }
            }
        }

        Ok(Self {
            voxel_side: occupancy.voxel_side(),
            infinity,
            grid: values,
        })
    }

    /// The distance, in chamfer units, of the voxel at `(x, y, z)`.
    #[inline]
    pub fn value(&self, x: usize, y: usize, z: usize) -> u32 {
        self.grid.get(x, y, z)
    }

    /// The physical distance of the voxel at `(x, y, z)`.
    #[inline]
    pub fn distance(&self, x: usize, y: usize, z: usize) -> Real {
        self.value(x, y, z) as Real * self.scale()
    }

    /// The factor converting chamfer units to physical distances: `voxel_side / 41`.
    #[inline]
    pub fn scale(&self) -> Real {
        self.voxel_side / STEP_AXIAL as Real
    }

    /// The value given to voxels before the transform (and kept by all voxels
    /// when the grid has no occupied voxel).
    pub fn infinity(&self) -> u32 {
        self.infinity
    }

    /// The side length of the (cubic) voxels.
    pub fn voxel_side(&self) -> Real {
        self.voxel_side
    }

    /// The number of voxels along each axis.
    pub fn dims(&self) -> Vector<usize> {
        self.grid.dims()
    }

    /// The total number of voxels.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Is this field empty? Never true for a successfully computed field.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// The distances of all the voxels, in chamfer units, in linear-index order.
    pub fn values(&self) -> &[u32] {
        self.grid.data()
    }

    /// The underlying voxel storage.
    pub fn grid(&self) -> &VoxelGrid<u32> {
        &self.grid
    }
}
