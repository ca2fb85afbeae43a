use std::{
    fmt,
    path::{Path, PathBuf, MAIN_SEPARATOR_STR},
};

use crate::diagram::{DiagramType, InputFormat};

pub const DEFAULT_OUTPUT_FILENAME: &str = "diagram.tex";
pub const DEFAULT_ROW_HEIGHT: i32 = 10;

/// Config
///
/// Configuration info for the program
/// This is generated from the command line arguments
/// Once set it is read only
///
/// diagram_type - which diagram(s) to draw
/// input_format - format of the alignment input
/// input_filename - alignment file (not used for pileup input)
/// output_dir - directory for the LaTeX output
/// output_filename - leaf name of the LaTeX output
/// list_filename - list of pileup files
/// domains_filename - optional protein domain annotation
/// max_coverage, max_targets, target_size - plot limits (0 = unset)
/// row_height, row_spacer - coverage map row geometry
///
/// Fields with a default are held as Option so the summary only shows
/// what was given on the command line
///
#[derive(Debug, Clone)]
pub struct Config {
    diagram_type: Option<DiagramType>,
    input_format: Option<InputFormat>,
    input_filename: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_filename: Option<PathBuf>,
    list_filename: Option<PathBuf>,
    domains_filename: Option<PathBuf>,
    max_coverage: Option<i32>,
    max_pages: i32,
    max_targets: Option<i32>,
    target_size: Option<i32>,
    row_height: Option<i32>,
    row_spacer: Option<i32>,
    new_heat_map_for_each_contig: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diagram_type: None,
            input_format: None,
            input_filename: None,
            output_dir: None,
            output_filename: None,
            list_filename: None,
            domains_filename: None,
            max_coverage: None,
            max_pages: 0,
            max_targets: None,
            target_size: None,
            row_height: None,
            row_spacer: None,
            new_heat_map_for_each_contig: false,
        }
    }
}

impl Config {
    pub(crate) fn set_diagram_type(&mut self, d: DiagramType) {
        self.diagram_type = Some(d)
    }

    pub(crate) fn set_input_format(&mut self, f: InputFormat) {
        self.input_format = Some(f)
    }

    pub(crate) fn set_input_filename<P: AsRef<Path>>(&mut self, p: P) {
        self.input_filename = Some(p.as_ref().to_owned())
    }

    pub(crate) fn set_output_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.output_dir = Some(dir.as_ref().to_owned())
    }

    pub(crate) fn set_output_filename<P: AsRef<Path>>(&mut self, p: P) {
        self.output_filename = Some(p.as_ref().to_owned())
    }

    pub(crate) fn set_list_filename<P: AsRef<Path>>(&mut self, p: P) {
        self.list_filename = Some(p.as_ref().to_owned())
    }

    pub(crate) fn set_domains_filename<P: AsRef<Path>>(&mut self, p: P) {
        self.domains_filename = Some(p.as_ref().to_owned())
    }

    pub(crate) fn set_max_coverage(&mut self, x: i32) {
        self.max_coverage = Some(x)
    }

    pub(crate) fn set_max_targets(&mut self, x: i32) {
        self.max_targets = Some(x)
    }

    pub(crate) fn set_target_size(&mut self, x: i32) {
        self.target_size = Some(x)
    }

    pub(crate) fn set_row_height(&mut self, x: i32) {
        self.row_height = Some(x)
    }

    pub(crate) fn set_row_spacer(&mut self, x: i32) {
        self.row_spacer = Some(x)
    }

    pub fn diagram_type(&self) -> Option<DiagramType> {
        self.diagram_type
    }

    pub fn input_format(&self) -> Option<InputFormat> {
        self.input_format
    }

    pub fn input_filename(&self) -> Option<&Path> {
        self.input_filename.as_deref()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn output_filename(&self) -> &Path {
        self.output_filename
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_FILENAME))
    }

    pub fn list_filename(&self) -> Option<&Path> {
        self.list_filename.as_deref()
    }

    pub fn domains_filename(&self) -> Option<&Path> {
        self.domains_filename.as_deref()
    }

    pub fn max_coverage(&self) -> i32 {
        self.max_coverage.unwrap_or(0)
    }

    pub fn max_pages(&self) -> i32 {
        self.max_pages
    }

    pub fn max_targets(&self) -> i32 {
        self.max_targets.unwrap_or(0)
    }

    pub fn target_size(&self) -> i32 {
        self.target_size.unwrap_or(0)
    }

    pub fn row_height(&self) -> i32 {
        self.row_height.unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    pub fn row_spacer(&self) -> i32 {
        self.row_spacer.unwrap_or(0)
    }

    pub fn new_heat_map_for_each_contig(&self) -> bool {
        self.new_heat_map_for_each_contig
    }

    /// Final component of the input filename
    pub fn input_filename_leaf(&self) -> Option<&str> {
        self.input_filename
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
    }

    /// Output directory, a path separator and the output filename.  The filename is
    /// always placed under the directory, even if it is absolute.  Pileup runs may
    /// have no output directory, in which case this is just the output filename.
    pub fn output_file_path(&self) -> PathBuf {
        let name = self.output_filename();
        match self.output_dir.as_deref() {
            Some(d) => {
                let mut s = d.as_os_str().to_owned();
                s.push(MAIN_SEPARATOR_STR);
                s.push(name);
                PathBuf::from(s)
            }
            None => name.to_owned(),
        }
    }

    /// Escape a display name for LaTeX
    pub fn filter_name(s: &str) -> String {
        s.replace('|', "$|$").replace('_', "\\_")
    }
}

fn line<T: fmt::Display>(f: &mut fmt::Formatter, label: &str, v: T) -> fmt::Result {
    writeln!(f, "{:>16}: {}", label, v)
}

fn opt_line<T: fmt::Display>(
    f: &mut fmt::Formatter,
    label: &str,
    v: Option<T>,
) -> fmt::Result {
    match v {
        Some(x) => line(f, label, x),
        None => Ok(()),
    }
}

/// Summary of settings, one right aligned `label: value` line for each field
/// set on the command line
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(d) = self.diagram_type {
            line(f, "Diagram type", d)?
        }
        if let Some(x) = self.input_format {
            line(f, "Input format", x)?
        }
        if let Some(p) = self.input_filename() {
            line(f, "Input filename", p.display())?
        }
        if let Some(p) = self.list_filename() {
            line(f, "List filename", p.display())?
        }
        if let Some(p) = self.domains_filename() {
            line(f, "Domains filename", p.display())?
        }
        if let Some(p) = self.output_dir() {
            line(f, "Output directory", p.display())?
        }
        opt_line(
            f,
            "Output filename",
            self.output_filename.as_deref().map(|p| p.display()),
        )?;
        opt_line(f, "Max targets", self.max_targets)?;
        opt_line(f, "Max coverage", self.max_coverage)?;
        opt_line(f, "Target size", self.target_size)?;
        opt_line(f, "Row height", self.row_height)?;
        opt_line(f, "Row spacer", self.row_spacer)
    }
}
