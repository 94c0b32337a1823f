use analytics::{StatisticalAnalyzer, StatisticsReport};
use core_types::{CalcError, Operation};
use engine::Engine;
use history::HistoryLog;

/// History label recorded for a statistics request.
pub const STATISTICS_LABEL: &str = "Statistical Analysis";

/// A completed calculation as it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub label: String,
    pub result: f64,
}

/// One user's calculator: an engine plus the history of what it computed.
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    history: HistoryLog,
}

impl Session {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            history: HistoryLog::new(),
        }
    }

    /// Evaluates `op` and records it. Nothing is recorded when evaluation fails.
    pub fn calculate(
        &mut self,
        op: Operation,
        operands: &[f64],
    ) -> Result<Calculation, CalcError> {
        let result = self.engine.evaluate(op, operands)?;
        let label = op.label(operands);
        self.history.add_entry(label.clone(), result)?;
        Ok(Calculation { label, result })
    }

    /// Analyzes `values` and records the mean under [`STATISTICS_LABEL`].
    pub fn analyze(&mut self, values: &[f64]) -> Result<StatisticsReport, CalcError> {
        let report = StatisticalAnalyzer::new(values)?.report();
        self.history.add_entry(STATISTICS_LABEL, report.mean)?;
        Ok(report)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
