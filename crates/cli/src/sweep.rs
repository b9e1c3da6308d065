//! Sweep bookkeeping for the CLI harness.

/// Which future shape a variant awaits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskShape {
    /// Plain `async fn` future, composed on the stack.
    Inline,
    /// The same routine behind a `BoxFuture`.
    Boxed,
}

/// Outcome counts and wall time for one variant's pass over the dataset.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Pairs that yielded non-empty lyrics.
    pub ok: usize,
    /// Pairs absorbed into an empty result (non-success HTTP status).
    pub empty: usize,
    /// Pairs whose fetch returned an error (transport, no-content).
    pub failed: usize,
    /// Wall time for the whole sweep.
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_report_default_is_zeroed() {
        let report = SweepReport::default();
        assert_eq!(report.ok + report.empty + report.failed, 0);
        assert_eq!(report.elapsed_ms, 0);
    }

    #[test]
    fn test_task_shape_is_copy() {
        let shape = TaskShape::Boxed;
        let copied = shape;
        assert_eq!(shape, copied);
    }
}
