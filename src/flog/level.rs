use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Severity tag written into each record. No filtering is done on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Info,
    Debug,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Info, Level::Debug, Level::Warning, Level::Error];

    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level {0:?}, expected one of info, debug, warning, error")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_record_format() {
        let tags: Vec<_> = Level::ALL.iter().map(|l| l.tag()).collect();
        assert_eq!(tags, ["INFO", "DEBUG", "WARNING", "ERROR"]);
        assert_eq!(Level::default(), Level::Info);
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Info".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" DEBUG ".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        assert!("trace".parse::<Level>().is_err());
    }
}
