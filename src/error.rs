use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid goal score for `{metric}`: {score} (must be finite and > 0)")]
    InvalidGoalScore { metric: String, score: f64 },

    #[error("misaligned metric/goal arity: {metrics} metrics, {goals} goals")]
    MetricGoalArityMismatch { metrics: usize, goals: usize },

    #[error("no goal configured for metric `{metric}`")]
    GoalNotFound { metric: String },

    #[error("invalid sector count: {0} (must be > 0)")]
    InvalidSectorCount(usize),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
