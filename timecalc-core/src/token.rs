use crate::duration::Duration;
use crate::operator::Operator;

/// Token that turns on diagnostics for the rest of the run.
pub const DEBUG_FLAG: &str = "--debug";

/// What a single command-line argument means to the evaluator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    DebugFlag,
    Duration(Duration),
    Operator(Operator),
    Unrecognized,
}

impl Token {
    /// Classify `raw`. The duration grammar sees the token untrimmed, operator
    /// symbols are matched after trimming.
    pub fn classify(raw: &str) -> Self {
        if raw == DEBUG_FLAG {
            return Token::DebugFlag;
        }

        if let Some(duration) = Duration::parse(raw) {
            return Token::Duration(duration);
        }

        match Operator::from_symbol(raw) {
            Some(operator) => Token::Operator(operator),
            None => Token::Unrecognized,
        }
    }
}
