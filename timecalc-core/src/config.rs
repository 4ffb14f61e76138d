use timecalc_utils::env::env_flag;

/// Environment variable that enables diagnostics from process start.
pub const DEBUG_LOG_ENV: &str = "DEBUG_LOG";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit diagnostic events for unrecognized tokens and operator application.
    pub debug: bool,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            debug: env_flag(DEBUG_LOG_ENV),
        }
    }

    /// Turn diagnostics on when `debug` is set. An already-enabled flag stays on.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = self.debug || debug;
        self
    }
}
