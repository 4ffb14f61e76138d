/// Evaluator configuration.
pub mod config;
/// The compact duration value type.
pub mod duration;
/// Library error types.
pub mod error;
/// Left-to-right expression evaluation.
pub mod eval;
/// Binary operators over durations.
pub mod operator;
/// Command-line token classification.
pub mod token;

pub use config::Config;
pub use duration::Duration;
pub use error::{EvalError, ParseDurationError};
pub use eval::{Evaluator, run};
pub use operator::Operator;
pub use token::Token;
