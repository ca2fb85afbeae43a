use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    Command,
};

use utils::{init_log, LogLevel};

use crate::{config::Config, options};

/// Set up definition of command options for clap
///
/// Only the logging options are handled by clap.  Everything from the first
/// unrecognized token onwards is collected unchanged and passed to the diagram
/// options parser, so single dash long flags like `-inputfmt` reach it intact.
fn cli_model() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .author(crate_authors!())
        .after_help(options::usage(crate_name!()))
        .arg(
            Arg::new("timestamp")
                .long("timestamp")
                .value_parser(value_parser!(stderrlog::Timestamp))
                .value_name("GRANULARITY")
                .default_value("none")
                .help("Prepend log entries with a timestamp"),
        )
        .arg(
            Arg::new("loglevel")
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("warn")
                .help("Set log level"),
        )
        .arg(
            Arg::new("quiet")
                .action(ArgAction::SetTrue)
                .long("quiet")
                .conflicts_with("loglevel")
                .help("Silence all output"),
        )
        .arg(
            Arg::new("options")
                .value_parser(value_parser!(String))
                .value_name("OPTION VALUE")
                .num_args(1..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .help("Diagram options given as flag/value pairs"),
        )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = cli_model().get_matches();

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let args: Vec<String> = m
        .get_many::<String>("options")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    trace!("Diagram option tokens: {:?}", args);

    let cfg = options::parse_options(&args)?;
    Ok(cfg)
}
