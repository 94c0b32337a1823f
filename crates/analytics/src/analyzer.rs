use crate::report::StatisticsReport;
use core_types::CalcError;

/// An immutable calculator of descriptive statistics over one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalAnalyzer {
    data: Vec<f64>,
}

impl StatisticalAnalyzer {
    /// Captures a private copy of `data`.
    ///
    /// # Returns
    ///
    /// `InvalidInput` if `data` is empty or any element is NaN or infinite.
    pub fn new(data: &[f64]) -> Result<Self, CalcError> {
        if data.is_empty() {
            return Err(CalcError::InvalidInput(
                "Data set cannot be empty".to_string(),
            ));
        }
        if let Some(index) = data.iter().position(|x| !x.is_finite()) {
            return Err(CalcError::InvalidInput(format!(
                "Data contains invalid number at index {index}"
            )));
        }

        tracing::debug!(count = data.len(), "Captured sample for analysis");
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Number of values in the sample. Never zero.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The captured sample, in the order it was supplied.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Sum of the sample, using Kahan-Babuska compensated summation.
    ///
    /// An overflowing sum is returned as the signed infinity, uncompensated.
    pub fn sum(&self) -> f64 {
        let mut sum = 0.0_f64;
        let mut compensation = 0.0_f64;
        for &x in &self.data {
            let t = sum + x;
            if !t.is_finite() {
                return t;
            }
            if sum.abs() >= x.abs() {
                compensation += (sum - t) + x;
            } else {
                compensation += (x - t) + sum;
            }
            sum = t;
        }
        sum + compensation
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Middle value of the sorted sample; the average of the two central values when
    /// the length is even.
    pub fn median(&self) -> f64 {
        let sorted = self.sorted();
        let n = sorted.len();
        if n % 2 == 0 {
            midpoint(sorted[n / 2 - 1], sorted[n / 2])
        } else {
            sorted[n / 2]
        }
    }

    /// Most frequent value. Among values sharing the highest frequency, the smallest
    /// one wins.
    pub fn mode(&self) -> f64 {
        let sorted = self.sorted();

        // Runs of equal values appear in ascending order, so only a strictly longer
        // run may replace the current best.
        let mut best = sorted[0];
        let mut best_count = 0;
        let mut run_start = 0;
        for i in 1..=sorted.len() {
            if i == sorted.len() || sorted[i] != sorted[run_start] {
                let count = i - run_start;
                if count > best_count {
                    best = sorted[run_start];
                    best_count = count;
                }
                run_start = i;
            }
        }
        best
    }

    /// Population variance (divides by N, not N - 1).
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        let squared_deviations: f64 = self
            .data
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum();
        squared_deviations / self.len() as f64
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Computes every statistic at once.
    pub fn report(&self) -> StatisticsReport {
        StatisticsReport {
            count: self.len(),
            mean: self.mean(),
            median: self.median(),
            mode: self.mode(),
            variance: self.variance(),
            standard_deviation: self.standard_deviation(),
            sum: self.sum(),
            min: self.min(),
            max: self.max(),
            range: self.range(),
        }
    }

    /// A stably sorted scratch copy; the stored sample is never reordered.
    fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.data.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

/// Average of two finite values that never overflows past either of them.
fn midpoint(a: f64, b: f64) -> f64 {
    let total = a + b;
    if total.is_finite() {
        total / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e9_f64..1e9, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn accessors_are_idempotent(data in finite_vec(1, 60)) {
            let stats = StatisticalAnalyzer::new(&data).unwrap();
            prop_assert_eq!(stats.report(), stats.report());
            prop_assert_eq!(stats.median().to_bits(), stats.median().to_bits());
            prop_assert_eq!(stats.mode().to_bits(), stats.mode().to_bits());
            prop_assert_eq!(stats.values(), &data[..]);
        }

        #[test]
        fn order_statistics_are_bounded(data in finite_vec(1, 60)) {
            let stats = StatisticalAnalyzer::new(&data).unwrap();
            let (min, max) = (stats.min(), stats.max());
            prop_assert!(min <= stats.median() && stats.median() <= max);
            prop_assert!(min <= stats.mode() && stats.mode() <= max);
            prop_assert!(stats.range() >= 0.0);
            prop_assert!(stats.variance() >= 0.0);
        }

        #[test]
        fn mode_is_a_most_frequent_value(data in proptest::collection::vec(-5_i32..5, 1..40)) {
            let values: Vec<f64> = data.iter().map(|&v| v as f64).collect();
            let mode = StatisticalAnalyzer::new(&values).unwrap().mode();
            let count_of = |x: f64| values.iter().filter(|&&v| v == x).count();
            let top = values.iter().map(|&v| count_of(v)).max().unwrap();
            prop_assert_eq!(count_of(mode), top);
            prop_assert!(values.iter().all(|&v| count_of(v) < top || v >= mode));
        }
    }
}
