use std::{fmt, str::FromStr};

/// DiagramType
///
/// Kind of diagram requested with -type.  `All` asks for every concrete diagram
/// the input format supports.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramType {
    Coverage,
    CoverageMap,
    Alignment,
    All,
}

impl DiagramType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coverage => "coverage",
            Self::CoverageMap => "coveragemap",
            Self::Alignment => "alignment",
            Self::All => "all",
        }
    }

    /// Does this request cover the diagram `kind`?
    pub fn includes(&self, kind: DiagramType) -> bool {
        *self == Self::All || *self == kind
    }
}

impl FromStr for DiagramType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coverage" => Ok(Self::Coverage),
            "coveragemap" => Ok(Self::CoverageMap),
            "alignment" => Ok(Self::Alignment),
            "all" => Ok(Self::All),
            _ => Err("no match"),
        }
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// InputFormat
///
/// Format of the alignment file given with -in (or the files named in -list for pileup)
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Psl,
    Coords,
    Pileup,
    Sam,
    Tiling,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Psl => "psl",
            Self::Coords => "coords",
            Self::Pileup => "pileup",
            Self::Sam => "sam",
            Self::Tiling => "tiling",
        }
    }
}

impl FromStr for InputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psl" => Ok(Self::Psl),
            "coords" => Ok(Self::Coords),
            "pileup" => Ok(Self::Pileup),
            "sam" => Ok(Self::Sam),
            "tiling" => Ok(Self::Tiling),
            _ => Err("no match"),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
