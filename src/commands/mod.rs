//! Command implementations

pub mod analyze;
pub mod next;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use next::{FeedbackEntry, Recommendation, constraints_from_feedback, recommend};
pub use simulate::{SimulationConfig, SimulationStatistics, run_simulation};
pub use solve::{ATTEMPT_BUDGET, GameRecord, GuessStep, SolveConfig, play_game, solve_word};
