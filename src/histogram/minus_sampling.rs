use super::HistogramTable;
use crate::math::Real;
use crate::voxels::DistanceField;

/// Accumulates into `table` the border-corrected ("minus sampling") histogram of `field`.
///
/// A voxel is eligible at threshold `t_j` if its distance to the boundary of
/// the grid is at least `t_j`. For every threshold, this adds to `denom[j]`
/// the number of eligible voxels and to `num[j]` the number of eligible
/// voxels lying within `t_j` of the closest point, so `num[j] <= denom[j]`
/// and `denom` is nonincreasing.
///
/// The counts are added to the current content of `table`, which should
/// usually have been zeroed beforehand.
pub fn accumulate_minus_sampling(field: &DistanceField, table: &mut HistogramTable) {
    let thresholds = *table.thresholds();
    let n = thresholds.len();
    let last = n as i64 - 1;
    let scale = field.scale();
    let voxel_side = field.voxel_side();
    let grid = field.grid();
    let dims = grid.dims();

    // Every voxel contributes to a contiguous range of bins of each array:
    // `[0, kbord]` for `denom` and `[kval, kbord]` for `num`. Only record where
    // those ranges start and stop, and sum them up at the end.
    let mut denom_stops = vec![0u64; n];
    let mut num_starts = vec![0u64; n];
    let mut num_stops = vec![0u64; n];

    for z in 0..dims.z {
        for y in 0..dims.y {
            for x in 0..dims.x {
                let border = grid.border_distance(x, y, z);
                let kbord = thresholds.floor_bin(voxel_side * border as Real).min(last);

                if kbord < 0 {
                    // Too close to the boundary for any threshold.
                    continue;
                }

                denom_stops[kbord as usize] += 1;

                let value = grid.get(x, y, z);
                let kval = thresholds.ceil_bin(value as Real * scale).max(0);

                if kval <= kbord {
                    num_starts[kval as usize] += 1;
                    num_stops[kbord as usize] += 1;
                }
            }
        }
    }

    let (num, denom) = table.counts_mut();

    let mut eligible = 0;
    for j in (0..n).rev() {
        eligible += denom_stops[j];
        denom[j] += eligible;
    }

    let mut within = 0;
    for j in 0..n {
        within += num_starts[j];
        num[j] += within;
        within -= num_stops[j];
    }
}
