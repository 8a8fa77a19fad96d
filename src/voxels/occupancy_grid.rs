use super::{VoxelGrid, VoxelGridError};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};

/// The state of one voxel of an [`OccupancyGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VoxelOccupancy {
    /// The voxel contains at least one point of the pattern.
    Occupied = 0,
    /// The voxel is background.
    Empty = 1,
}

/// A binary voxel image of a point pattern observed in a box.
///
/// Each voxel is either [`VoxelOccupancy::Occupied`] (some point fell into it)
/// or [`VoxelOccupancy::Empty`].
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    voxel_side: Real,
    num_occupied: usize,
    grid: VoxelGrid<VoxelOccupancy>,
}

impl OccupancyGrid {
    /// Creates a grid with the given dimensions where every voxel is empty.
    pub fn new(dims: Vector<usize>, voxel_side: Real) -> Result<Self, VoxelGridError> {
        check_voxel_side(voxel_side)?;
        Ok(Self {
            voxel_side,
            num_occupied: 0,
            grid: VoxelGrid::try_new(dims, VoxelOccupancy::Empty)?,
        })
    }

    /// The dimensions of the grid covering `aabb` with cubic voxels of side `voxel_side`.
    ///
    /// Along each axis this is `ceil(extent / voxel_side) + 1`. Fails if `aabb`
    /// is not [valid](Aabb::is_valid).
    pub fn grid_dims(aabb: &Aabb, voxel_side: Real) -> Result<Vector<usize>, VoxelGridError> {
        check_voxel_side(voxel_side)?;

        if !aabb.is_valid() {
            return Err(VoxelGridError::InvalidDimensions);
        }

        let mut dims = Vector::repeat(0);

        for i in 0..DIM {
            let len = ((aabb.maxs[i] - aabb.mins[i]) / voxel_side).ceil() + 1.0;

            if !len.is_finite() || len < 1.0 {
                return Err(VoxelGridError::InvalidDimensions);
            }
            if len >= usize::MAX as Real {
                return Err(VoxelGridError::DimensionsOverflow);
            }

            dims[i] = len as usize;
        }

        Ok(dims)
    }

    /// The integer coordinates of the voxel `point` falls into, if any.
    ///
    /// Along each axis the index is `ceil((coord - min) / voxel_side) - 1`.
    /// Note that this rounding convention shifts points towards the lower
    /// corner: with a voxel side of `0.5`, the point `(0.5, 0.5, 0.5)` of the
    /// unit box falls into the voxel `(0, 0, 0)`, and points lying exactly on
    /// one of the lower faces of the box get an index of `-1` and are
    /// therefore outside of the grid.
    pub fn voxel_key(
        aabb: &Aabb,
        voxel_side: Real,
        dims: &Vector<usize>,
        point: &Point<Real>,
    ) -> Option<Point<usize>> {
        let mut key = Point::origin();

        for i in 0..DIM {
            let id = ((point[i] - aabb.mins[i]) / voxel_side).ceil() - 1.0;

            // NOTE: written this way so NaN coordinates are rejected too.
            if !(id >= 0.0 && id < dims[i] as Real) {
                return None;
            }

            key[i] = id as usize;
        }

        Some(key)
    }

    /// Rasterizes a point pattern observed in `aabb` into a grid of cubic voxels
    /// of side `voxel_side`.
    ///
    /// Points that do not map to a voxel of the grid (see [`Self::voxel_key`])
    /// are silently dropped. This is not an error: it happens for points lying
    /// on the lower faces of the box, outside of the box, or rounded across a
    /// cell edge.
    pub fn rasterize(
        points: &[Point<Real>],
        aabb: &Aabb,
        voxel_side: Real,
    ) -> Result<Self, VoxelGridError> {
        let dims = Self::grid_dims(aabb, voxel_side)?;
        let mut result = Self::new(dims, voxel_side)?;
        let mut num_dropped = 0;

        for pt in points {
            match Self::voxel_key(aabb, voxel_side, &dims, pt) {
                Some(key) => result.occupy(key.x, key.y, key.z),
                None => num_dropped += 1,
            }
        }

        log::debug!(
            "Rasterized {} points into a {}x{}x{} grid ({} occupied voxels, {} points dropped).",
            points.len(),
            dims.x,
            dims.y,
            dims.z,
            result.num_occupied,
            num_dropped
        );

        Ok(result)
    }

    /// Marks the voxel at `(x, y, z)` as occupied.
    pub fn occupy(&mut self, x: usize, y: usize, z: usize) {
        let id = self.grid.linear_index(x, y, z);
        let voxel = &mut self.grid.data_mut()[id];

        if *voxel == VoxelOccupancy::Empty {
            *voxel = VoxelOccupancy::Occupied;
            self.num_occupied += 1;
        }
    }

    /// The state of the voxel at `(x, y, z)`.
    #[inline]
    pub fn voxel(&self, x: usize, y: usize, z: usize) -> VoxelOccupancy {
        self.grid.get(x, y, z)
    }

    /// Is the voxel at `(x, y, z)` occupied?
    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize, z: usize) -> bool {
        self.voxel(x, y, z) == VoxelOccupancy::Occupied
    }

    /// The number of occupied voxels.
    pub fn num_occupied(&self) -> usize {
        self.num_occupied
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

    /// Is this grid empty? Never true for a successfully built grid.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// The underlying voxel storage.
    pub fn grid(&self) -> &VoxelGrid<VoxelOccupancy> {
        &self.grid
    }
}

fn check_voxel_side(voxel_side: Real) -> Result<(), VoxelGridError> {
    if voxel_side.is_finite() && voxel_side > 0.0 {
        Ok(())
    } else {
        Err(VoxelGridError::InvalidVoxelSide(voxel_side))
    }
}
