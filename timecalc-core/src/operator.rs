use std::fmt;

use crate::duration::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub const ALL: [Operator; 2] = [Operator::Add, Operator::Sub];

    /// Look up an operator by symbol, ignoring surrounding whitespace.
    pub fn from_symbol(raw: &str) -> Option<Self> {
        let symbol = raw.trim();
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
        }
    }

    pub fn apply(self, lhs: Duration, rhs: Duration) -> Duration {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Operator;
    use crate::duration::Duration;

    #[test]
    fn symbols_match_after_trimming() {
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol(" - "), Some(Operator::Sub));
        assert_eq!(Operator::from_symbol("\t+\n"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("*"), None);
        assert_eq!(Operator::from_symbol("++"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn applies_left_to_right() {
        let lhs = Duration::new(0, 0, 1, 30.0);
        let rhs = Duration::new(0, 0, 1, 0.0);
        assert_eq!(Operator::Add.apply(lhs, rhs), Duration::new(0, 0, 2, 30.0));
        assert_eq!(Operator::Sub.apply(lhs, rhs), Duration::new(0, 0, 0, 30.0));
        assert_eq!(Operator::Sub.to_string(), "-");
    }
}
