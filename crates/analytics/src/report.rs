use serde::{Deserialize, Serialize};

/// Every descriptive statistic of one sample.
///
/// This struct is the output of `StatisticalAnalyzer::report` and is what the front
/// end renders as a table or as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    /// Population variance (divides by N).
    pub variance: f64,
    pub standard_deviation: f64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl StatisticsReport {
    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, f64); 9] {
        [
            ("Mean", self.mean),
            ("Median", self.median),
            ("Mode", self.mode),
            ("Std Dev", self.standard_deviation),
            ("Variance", self.variance),
            ("Sum", self.sum),
            ("Min", self.min),
            ("Max", self.max),
            ("Range", self.range),
        ]
    }
}
