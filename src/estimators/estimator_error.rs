use crate::voxels::{DistanceTransformError, VoxelGridError};

/// Errors that can occur while running one of the [`estimators`](crate::estimators) pipelines.
///
/// When an estimator fails, the table it was given may have been partially
/// updated and its content must be discarded.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum EstimatorError {
    /// The occupancy grid could not be built.
    #[error("rasterization failed: {0}")]
    Rasterization(#[from] VoxelGridError),
    /// The distance transform could not be computed.
    #[error("distance transform failed: {0}")]
    DistanceTransform(#[from] DistanceTransformError),
}
