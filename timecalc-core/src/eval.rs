//! Left-to-right accumulation of duration tokens.
//!
//! There is no precedence: each operator is applied as soon as its right-hand
//! duration arrives, and the result becomes the left-hand side of the next
//! operator. A trailing operator or value with nothing after it is dropped.

use tracing::debug;

use crate::config::Config;
use crate::duration::Duration;
use crate::error::EvalError;
use crate::operator::Operator;
use crate::token::Token;

#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: Config,
    accumulator: Option<Duration>,
    value: Option<Duration>,
    operator: Option<Operator>,
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.config.debug
    }

    /// Running result so far, `None` until the first duration is seen.
    pub fn accumulator(&self) -> Option<Duration> {
        self.accumulator
    }

    /// Consume one token.
    pub fn feed(&mut self, raw: &str) -> Result<(), EvalError> {
        match Token::classify(raw) {
            Token::DebugFlag => self.config.debug = true,
            Token::Duration(duration) => self.push_duration(raw, duration)?,
            Token::Operator(operator) => self.operator = Some(operator),
            Token::Unrecognized => {
                if self.config.debug {
                    debug!(token = %raw, "failed to parse operator or duration");
                }
            }
        }

        Ok(())
    }

    pub fn finish(self) -> Option<Duration> {
        self.accumulator
    }

    fn push_duration(&mut self, raw: &str, duration: Duration) -> Result<(), EvalError> {
        if self.accumulator.is_none() {
            self.accumulator = Some(duration);
            self.value = Some(duration);
            return Ok(());
        }

        let Some(operator) = self.operator else {
            // A second bare value replaces the first.
            self.value = Some(duration);
            return Ok(());
        };

        let Some(lhs) = self.value else {
            if self.config.debug {
                debug!(
                    accumulator = ?self.accumulator,
                    operator = ?self.operator,
                    value = ?self.value,
                    token = %raw,
                    "syntax error"
                );
            }
            return Err(EvalError::Syntax {
                token: raw.to_owned(),
            });
        };

        let result = operator.apply(lhs, duration);
        if self.config.debug {
            debug!(%lhs, %operator, rhs = %duration, %result, "applied operator");
        }

        self.accumulator = Some(result);
        self.value = Some(result);
        self.operator = None;
        Ok(())
    }
}

/// Evaluate `tokens` in order and return the final accumulated duration.
pub fn run<I, S>(tokens: I, config: Config) -> Result<Option<Duration>, EvalError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut evaluator = Evaluator::new(config);
    for token in tokens {
        evaluator.feed(token.as_ref())?;
    }

    Ok(evaluator.finish())
}
