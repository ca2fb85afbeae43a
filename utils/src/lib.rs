use std::{fmt, str::FromStr};

use anyhow::Context;
use clap::ArgMatches;

/// LogLevel
///
/// Minimum level of messages that will be logged.  `None` silences logging.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

const LEVELS: [(LogLevel, &str); 6] = [
    (LogLevel::Error, "error"),
    (LogLevel::Warn, "warn"),
    (LogLevel::Info, "info"),
    (LogLevel::Debug, "debug"),
    (LogLevel::Trace, "trace"),
    (LogLevel::None, "none"),
];

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        LEVELS
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(l, _)| *l)
            .ok_or("no match")
    }
}

impl LogLevel {
    pub fn is_none(&self) -> bool {
        *self == Self::None
    }

    /// Verbosity passed to stderrlog (0 = errors only).  `None` maps to 0 and
    /// relies on the quiet flag.
    pub fn verbosity(&self) -> usize {
        match self {
            Self::Error | Self::None => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Debug => 3,
            Self::Trace => 4,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = LEVELS
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown");
        f.write_str(name)
    }
}

/// Initialize logging from command line arguments
///
/// Expects the matches to come from a model defining `loglevel`, `quiet` and `timestamp`
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let verbose = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .unwrap_or(LogLevel::Warn);
    let quiet = verbose.is_none() || m.get_flag("quiet");
    let ts = m
        .get_one::<stderrlog::Timestamp>("timestamp")
        .copied()
        .unwrap_or(stderrlog::Timestamp::Off);

    stderrlog::new()
        .quiet(quiet)
        .verbosity(verbose.verbosity())
        .timestamp(ts)
        .init()
        .with_context(|| "Could not initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_ignores_case() {
        assert_eq!(LogLevel::from_str("DEBUG"), Ok(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("Warn"), Ok(LogLevel::Warn));
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn none_level_is_quiet() {
        let l = LogLevel::from_str("none").unwrap();
        assert!(l.is_none());
        assert_eq!(l.verbosity(), 0);
        assert_eq!(l.to_string(), "none");
    }

    #[test]
    fn verbosity_increases_with_detail() {
        let v: Vec<_> = ["error", "warn", "info", "debug", "trace"]
            .iter()
            .map(|s| LogLevel::from_str(s).unwrap())
            .inspect(|l| assert!(!l.is_none()))
            .map(|l| l.verbosity())
            .collect();
        assert_eq!(v, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn display_matches_parse() {
        for s in ["error", "warn", "info", "debug", "trace", "none"] {
            assert_eq!(LogLevel::from_str(s).unwrap().to_string(), s);
        }
    }
}
