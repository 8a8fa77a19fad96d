use super::CensoredTable;
use crate::math::Real;
use crate::voxels::DistanceField;

/// Accumulates into `table` the four censoring histograms of `field`.
///
/// For each voxel, let `d` be its distance to the closest point and `b` its
/// distance to the boundary of the grid. The distance `d` is only trusted
/// when `d <= b`: further than `b`, a point outside of the box could have
/// been closer.
/// - If `d <= b` the observation is uncensored: `d` is binned into `obs` and
///   `nco`, and `b` into `cen` and `ncc`.
/// - Otherwise the observation is censored at `b`: `min(d, b)` is binned into
///   `obs` and `b` into `cen` only.
///
/// Values beyond the last threshold go to the `upper_obs` / `upper_cen` tail
/// counters; values before the first threshold are not recorded. The counts
/// are added to the current content of `table`.
pub fn accumulate_censored(field: &DistanceField, table: &mut CensoredTable) {
    let thresholds = *table.thresholds();
    let n = thresholds.len() as i64;
    let scale = field.scale();
    let voxel_side = field.voxel_side();
    let grid = field.grid();
    let dims = grid.dims();

    for z in 0..dims.z {
        for y in 0..dims.y {
            for x in 0..dims.x {
                let real_border = voxel_side * grid.border_distance(x, y, z) as Real;
                let kbord = thresholds.floor_bin(real_border);

                let real_value = grid.get(x, y, z) as Real * scale;
                let kval = thresholds.ceil_bin(real_value);

                if real_value <= real_border {
                    if kval >= n {
                        table.upper_obs += 1;
                    } else if kval >= 0 {
                        table.obs[kval as usize] += 1;
                        table.nco[kval as usize] += 1;
                    }

                    if kbord >= n {
                        table.upper_cen += 1;
                    } else if kbord >= 0 {
                        table.cen[kbord as usize] += 1;
                        table.ncc[kbord as usize] += 1;
                    }
                } else {
                    let kval = kval.min(kbord);

                    if kval >= n {
                        table.upper_obs += 1;
                    } else if kval >= 0 {
                        table.obs[kval as usize] += 1;
                    }

                    if kbord >= n {
                        table.upper_cen += 1;
                    } else if kbord >= 0 {
                        table.cen[kbord as usize] += 1;
                    }
                }
            }
        }
    }
}
