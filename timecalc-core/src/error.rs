use thiserror::Error;

/// A token that does not follow the `[<n>d][<n>h][<n>m][<n>[.<n>]s]` grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid duration literal: {input}")]
pub struct ParseDurationError {
    pub input: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operator was pending but there was no left-hand value to apply it to.
    /// Every applied result refills the left-hand slot, so token input alone
    /// never reaches this; it guards the evaluator's internal state.
    #[error("syntax error")]
    Syntax { token: String },
}
