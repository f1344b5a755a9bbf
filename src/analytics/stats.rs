use crate::types::{
    AudioFeatures, CategoricalDimension, CategoricalSummary, FeatureStatistics, NumericDimension,
    NumericSummary,
};

/// Computes per-dimension statistics over a playlist's audio features.
///
/// Absent entries (`None`) are excluded from every statistic through one
/// shared present-filter: a missing vector never contributes zeros, and no
/// statistic sees a different subset of the data than the others. Numeric
/// dimensions with at least one present value get average, minimum, maximum,
/// and median; categorical dimensions get their mode with ties broken by the
/// first-encountered value. Dimensions with no present values are omitted
/// from the result entirely.
///
/// This is a pure function: no I/O, no retries, no external state.
pub fn compute_statistics(vectors: &[Option<AudioFeatures>]) -> FeatureStatistics {
    let present: Vec<&AudioFeatures> = vectors.iter().flatten().collect();

    let mut numeric = Vec::new();
    for dimension in NumericDimension::ALL {
        let values: Vec<f64> = present
            .iter()
            .map(|features| dimension.value_of(features))
            .collect();
        if values.is_empty() {
            continue;
        }

        numeric.push(NumericSummary {
            dimension,
            average: mean(&values),
            minimum: values.iter().copied().fold(f64::INFINITY, f64::min),
            maximum: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            median: median(&values),
        });
    }

    let mut categorical = Vec::new();
    for dimension in CategoricalDimension::ALL {
        let values: Vec<i64> = present
            .iter()
            .map(|features| dimension.value_of(features))
            .collect();
        if let Some(mode) = mode_of(&values) {
            categorical.push(CategoricalSummary { dimension, mode });
        }
    }

    FeatureStatistics {
        numeric,
        categorical,
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn mode_of(values: &[i64]) -> Option<i64> {
    let mut counts: Vec<(i64, u64)> = Vec::new();
    for value in values {
        if let Some(entry) = counts.iter_mut().find(|(seen, _)| seen == value) {
            entry.1 += 1;
        } else {
            counts.push((*value, 1));
        }
    }

    // strictly-greater keeps the first-encountered value on ties
    let mut best: Option<(i64, u64)> = None;
    for (value, count) in counts {
        let replace = match best {
            Some((_, best_count)) => count > best_count,
            None => true,
        };
        if replace {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value)
}
