//! # Scalar series statistics
//!
//! The flight reports summarize each error series with its mean and its
//! population standard deviation (divisor `N`, not `N - 1`). A whole flight
//! is recorded and analyzed, so the series is the population, not a sample
//! drawn from one.

/// Summary of a scalar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl SeriesStats {
    /// Summarizes a series, or `None` for an empty one.
    ///
    /// An empty series has no mean; callers report it as an explicit error
    /// instead of letting `NaN` flow into a summary.
    pub fn of(values: &[f64]) -> Option<SeriesStats> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n;

        Some(SeriesStats {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn known_series() {
        let stats = SeriesStats::of(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(stats.mean, 2.0, epsilon = 1e-12);
        assert_relative_eq!(stats.std_dev, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let stats = SeriesStats::of(&[3.25]).unwrap();
        assert_eq!(stats.mean, 3.25);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn empty_series_is_none() {
        assert!(SeriesStats::of(&[]).is_none());
    }

    #[test]
    fn constant_series_has_zero_spread() {
        let stats = SeriesStats::of(&[1.5; 32]).unwrap();
        assert_relative_eq!(stats.mean, 1.5, epsilon = 1e-12);
        assert_relative_eq!(stats.std_dev, 0.0, epsilon = 1e-12);
    }
}
