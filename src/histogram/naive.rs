use super::HistogramTable;
use crate::math::Real;
use crate::voxels::DistanceField;

/// Fills `table` with the uncorrected cumulative histogram of `field`.
///
/// After this call, `denom[j]` is the total number of voxels and `num[j]` is
/// the number of voxels whose distance to the closest point is at most `t_j`
/// (an unnormalized empirical distribution function). Both arrays are
/// overwritten.
pub fn accumulate_naive(field: &DistanceField, table: &mut HistogramTable) {
    let thresholds = *table.thresholds();
    let n = thresholds.len();
    let scale = field.scale();

    // first_bin[k] counts the voxels whose smallest bin is k.
    let mut first_bin = vec![0u64; n];

    for value in field.values() {
        let k = thresholds.ceil_bin(*value as Real * scale).max(0);

        if k < n as i64 {
            first_bin[k as usize] += 1;
        }
    }

    let total = field.len() as u64;
    let (num, denom) = table.counts_mut();
    let mut cumulated = 0;

    for j in 0..n {
        cumulated += first_bin[j];
        num[j] = cumulated;
        denom[j] = total;
    }
}
