use std::num::ParseIntError;

use thiserror::Error;

use crate::diagram::InputFormat;

/// Broad class of an options error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    UnknownParameter,
    InvalidValue,
    MalformedNumber,
    MissingRequired,
}

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("too few arguments")]
    Usage,

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("invalid type '{0}': type must be 'all', 'coverage', 'coveragemap' or 'alignment'.")]
    InvalidDiagramType(String),

    #[error("invalid inputfmt '{0}': inputfmt must be 'psl', 'coords', 'pileup', 'sam' or 'tiling'.")]
    InvalidInputFormat(String),

    #[error("could not parse '{value}' as an integer for {flag}")]
    Parse {
        flag: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("You must specify an input format")]
    MissingInputFormat,

    #[error("coverage maps are currently only possible for PSL or SAM files, not {0}")]
    CoverageMapFormat(InputFormat),

    #[error("SAM files can only produce coverage maps at the moment")]
    SamRequiresCoverageMap,

    #[error("For SAM files, you must specify a -tsize")]
    SamRequiresTargetSize,

    #[error("For pileup files, you can only plot coverage diagrams.")]
    PileupRequiresCoverage,

    #[error("you must specify a {0} parameter.")]
    MissingParameter(&'static str),
}

impl OptionsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage => ErrorKind::Usage,
            Self::UnknownParameter(_) => ErrorKind::UnknownParameter,
            Self::InvalidDiagramType(_) | Self::InvalidInputFormat(_) => ErrorKind::InvalidValue,
            Self::Parse { .. } => ErrorKind::MalformedNumber,
            Self::MissingInputFormat
            | Self::CoverageMapFormat(_)
            | Self::SamRequiresCoverageMap
            | Self::SamRequiresTargetSize
            | Self::PileupRequiresCoverage
            | Self::MissingParameter(_) => ErrorKind::MissingRequired,
        }
    }

    /// Process exit status for this error.
    ///
    /// Validation failures exit with 0 so existing pipelines calling al2tex keep working.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Usage | ErrorKind::MalformedNumber => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(OptionsError::Usage.exit_code(), 1);
        assert_eq!(
            OptionsError::UnknownParameter("-bogus".to_owned()).exit_code(),
            0
        );
        assert_eq!(OptionsError::MissingParameter("-in").exit_code(), 0);
        let e = OptionsError::Parse {
            flag: "-tsize".to_owned(),
            value: "big".to_owned(),
            source: "big".parse::<u32>().unwrap_err(),
        };
        assert_eq!(e.kind(), ErrorKind::MalformedNumber);
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn messages_name_the_offender() {
        let e = OptionsError::UnknownParameter("-bogus".to_owned());
        assert_eq!(e.to_string(), "Unknown parameter: -bogus");
        let e = OptionsError::MissingParameter("-outdir");
        assert_eq!(e.to_string(), "you must specify a -outdir parameter.");
        let e = OptionsError::CoverageMapFormat(InputFormat::Coords);
        assert!(e.to_string().ends_with("not coords"));
    }
}
