//! Descriptive statistics over plain `f64` samples.

/// Arithmetic mean. Empty input → 0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Median of a sorted copy; the caller's slice is left untouched.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let avg = mean(values);
    let square_diffs: Vec<f64> = values.iter().map(|value| (value - avg).powi(2)).collect();
    mean(&square_diffs).sqrt()
}

/// Percentile with linear interpolation between the closest ranks.
///
/// `p` is expected in `[0, 100]` and is clamped to that range.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sorted = sorted_copy(values);
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(sorted.len() - 1);
    let weight = rank - lower as f64;

    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Pearson correlation coefficient in `[-1, 1]`.
///
/// Returns 0 when the lengths differ, either side is empty, or either side has
/// no variance.
pub fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() || xs.len() != ys.len() {
        return 0.0;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut numerator = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;

    for (x, y) in xs.iter().zip(ys) {
        let diff_x = x - mean_x;
        let diff_y = y - mean_y;
        numerator += diff_x * diff_y;
        denom_x += diff_x * diff_x;
        denom_y += diff_y * diff_y;
    }

    let denominator = (denom_x * denom_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
