use super::VoxelGridError;
use crate::math::{Point, Vector};

/// A dense 3D array of voxel values, stored as a single flat buffer.
///
/// The voxel with integer coordinates `(x, y, z)` lives at the linear index
/// `z * dims.x * dims.y + y * dims.x + x`, i.e., `x` varies fastest.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid<T> {
    dims: Vector<usize>,
    data: Vec<T>,
}

impl<T: Copy> VoxelGrid<T> {
    /// Allocates a grid with `dims.x * dims.y * dims.z` voxels, all set to `fill`.
    ///
    /// Fails if any dimension is zero, if the voxel count overflows, or if the
    /// allocator cannot provide the buffer.
    pub fn try_new(dims: Vector<usize>, fill: T) -> Result<Self, VoxelGridError> {
        if dims.iter().any(|d| *d == 0) {
            return Err(VoxelGridError::InvalidDimensions);
        }

        let len = dims
            .x
            .checked_mul(dims.y)
            .and_then(|xy| xy.checked_mul(dims.z))
            .ok_or(VoxelGridError::DimensionsOverflow)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| VoxelGridError::AllocationFailed { voxels: len })?;
        data.resize(len, fill);

        Ok(Self { dims, data })
    }

    /// The value of the voxel at `(x, y, z)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> T {
        self.data[self.linear_index(x, y, z)]
    }

    /// Sets the value of the voxel at `(x, y, z)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) {
        let id = self.linear_index(x, y, z);
        self.data[id] = value;
    }
}

impl<T> VoxelGrid<T> {
    /// The number of voxels along each axis.
    #[inline]
    pub fn dims(&self) -> Vector<usize> {
        self.dims
    }

    /// The total number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Is this grid empty? Grids built with [`VoxelGrid::try_new`] never are.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat buffer of voxel values.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The mutable flat buffer of voxel values.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The linear index of the voxel at `(x, y, z)`.
    #[inline]
    pub fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.dims.x && y < self.dims.y && z < self.dims.z);
        (z * self.dims.y + y) * self.dims.x + x
    }

    /// The integer coordinates of the voxel at the given linear index.
    #[inline]
    pub fn voxel_key(&self, linear_index: usize) -> Point<usize> {
        let x = linear_index % self.dims.x;
        let yz = linear_index / self.dims.x;
        Point::new(x, yz % self.dims.y, yz / self.dims.y)
    }

    /// The linear index of the voxel at `(x + dx, y + dy, z + dz)`, if it lies
    /// inside of this grid.
    #[inline]
    pub fn neighbor_index(
        &self,
        x: usize,
        y: usize,
        z: usize,
        dx: isize,
        dy: isize,
        dz: isize,
    ) -> Option<usize> {
        let nx = x.checked_add_signed(dx).filter(|nx| *nx < self.dims.x)?;
        let ny = y.checked_add_signed(dy).filter(|ny| *ny < self.dims.y)?;
        let nz = z.checked_add_signed(dz).filter(|nz| *nz < self.dims.z)?;
        Some(self.linear_index(nx, ny, nz))
    }

    /// The distance, in voxels, from the voxel at `(x, y, z)` to the closest
    /// face of the grid.
    ///
    /// Along each axis this is `min(c + 1, dim - c)`, so voxels touching a
    /// face have a border distance of 1.
    #[inline]
    pub fn border_distance(&self, x: usize, y: usize, z: usize) -> usize {
        let bx = (x + 1).min(self.dims.x - x);
        let by = (y + 1).min(self.dims.y - y);
        let bz = (z + 1).min(self.dims.z - z);
        bx.min(by).min(bz)
    }
}
