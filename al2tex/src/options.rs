use std::str::FromStr;

use crate::{
    config::Config,
    diagram::{DiagramType, InputFormat},
    error::OptionsError,
};

/// Flags recognized by the diagram options parser, with their value placeholders
pub const FLAGS: &[(&str, &str)] = &[
    ("-type", "coverage|coveragemap|alignment|all"),
    ("-inputfmt", "psl|coords|pileup|tiling|sam"),
    ("-in", "<filename>"),
    ("-outdir", "<directory>"),
    ("-out", "<leafname>"),
    ("-list", "<filename>"),
    ("-domains", "<filename>"),
    ("-maxtargets", "<int>"),
    ("-maxcoverage", "<int>"),
    ("-tsize", "<int>"),
    ("-rowheight", "<int>"),
    ("-rowspacer", "<int>"),
];

/// Usage summary listing all diagram options
pub fn usage(prog: &str) -> String {
    let mut s = format!("Syntax {} [options]\n\nOptions:\n", prog);
    for (flag, val) in FLAGS {
        s.push_str(&format!("    {} {}\n", flag, val));
    }
    s
}

/// Signed 32 bit integer, as accepted by the original Java front end
fn parse_int(flag: &str, value: &str) -> Result<i32, OptionsError> {
    value.parse::<i32>().map_err(|e| OptionsError::Parse {
        flag: flag.to_owned(),
        value: value.to_owned(),
        source: e,
    })
}

/// Parse diagram options from a flat list of tokens (program name excluded).
///
/// Tokens are taken in (flag, value) pairs.  Flag names are case insensitive.
/// A final flag with no value is ignored.
pub fn parse_options<S: AsRef<str>>(args: &[S]) -> Result<Config, OptionsError> {
    if args.len() <= 1 {
        return Err(OptionsError::Usage);
    }

    let mut cfg = Config::default();
    let mut pairs = args.chunks_exact(2);

    for pair in pairs.by_ref() {
        let (flag, value) = (pair[0].as_ref(), pair[1].as_ref());
        match flag.to_lowercase().as_str() {
            "-type" => {
                let d = DiagramType::from_str(value)
                    .map_err(|_| OptionsError::InvalidDiagramType(value.to_owned()))?;
                info!("Diagram type: {}", d);
                cfg.set_diagram_type(d)
            }
            "-inputfmt" => {
                let f = InputFormat::from_str(value)
                    .map_err(|_| OptionsError::InvalidInputFormat(value.to_owned()))?;
                info!("Input format: {}", f);
                cfg.set_input_format(f)
            }
            "-in" => {
                info!("Input filename: {}", value);
                cfg.set_input_filename(value)
            }
            "-list" => {
                info!("List filename: {}", value);
                cfg.set_list_filename(value)
            }
            "-domains" => {
                info!("Domains filename: {}", value);
                cfg.set_domains_filename(value)
            }
            "-outdir" => {
                info!("Output directory: {}", value);
                cfg.set_output_dir(value)
            }
            "-out" => {
                info!("Output filename: {}", value);
                cfg.set_output_filename(value)
            }
            "-maxtargets" => {
                let x = parse_int(flag, value)?;
                info!("Max targets: {}", x);
                cfg.set_max_targets(x)
            }
            "-maxcoverage" => {
                let x = parse_int(flag, value)?;
                info!("Max coverage: {}", x);
                cfg.set_max_coverage(x)
            }
            "-tsize" => {
                let x = parse_int(flag, value)?;
                info!("Target size: {}", x);
                cfg.set_target_size(x)
            }
            "-rowheight" => {
                let x = parse_int(flag, value)?;
                info!("Row height: {}", x);
                cfg.set_row_height(x)
            }
            "-rowspacer" => {
                let x = parse_int(flag, value)?;
                info!("Row spacer: {}", x);
                cfg.set_row_spacer(x)
            }
            _ => return Err(OptionsError::UnknownParameter(flag.to_owned())),
        }
    }

    if let [flag] = pairs.remainder() {
        warn!("Ignoring option {} with no value", flag.as_ref())
    }

    validate(&cfg)?;
    debug!("Options validated");
    Ok(cfg)
}

/// Cross field checks, run after all flags have been read.  The first failure is returned.
fn validate(cfg: &Config) -> Result<(), OptionsError> {
    let fmt = cfg.input_format().ok_or(OptionsError::MissingInputFormat)?;
    let dtype = cfg.diagram_type();

    if dtype == Some(DiagramType::CoverageMap)
        && !matches!(fmt, InputFormat::Psl | InputFormat::Sam)
    {
        return Err(OptionsError::CoverageMapFormat(fmt));
    }

    if fmt == InputFormat::Sam {
        if dtype != Some(DiagramType::CoverageMap) {
            return Err(OptionsError::SamRequiresCoverageMap);
        }
        if cfg.target_size() == 0 {
            return Err(OptionsError::SamRequiresTargetSize);
        }
    }

    if fmt == InputFormat::Pileup {
        if dtype != Some(DiagramType::Coverage) {
            return Err(OptionsError::PileupRequiresCoverage);
        }
        if cfg.output_filename().as_os_str().is_empty() {
            return Err(OptionsError::MissingParameter("-out"));
        }
        if cfg.list_filename().is_none() {
            return Err(OptionsError::MissingParameter("-list"));
        }
    } else {
        if dtype.is_none() {
            return Err(OptionsError::MissingParameter("-type"));
        }
        if cfg.input_filename().is_none() {
            return Err(OptionsError::MissingParameter("-in"));
        }
        if cfg.output_dir().is_none() {
            return Err(OptionsError::MissingParameter("-outdir"));
        }
    }
    Ok(())
}
