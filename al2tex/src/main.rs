#[macro_use]
extern crate log;

use std::process;

use al2tex::{cli, options::usage, Config, ErrorKind, OptionsError};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let cfg = match cli::handle_cli() {
        Ok(cfg) => cfg,
        Err(e) => match e.downcast_ref::<OptionsError>() {
            Some(err) => {
                if err.kind() == ErrorKind::Usage {
                    print!("{}", usage(clap::crate_name!()))
                } else {
                    println!("Error: {}", err)
                }
                process::exit(err.exit_code())
            }
            None => return Err(e).with_context(|| "Error processing command line arguments"),
        },
    };

    print!("{}", cfg);

    if let Some(leaf) = cfg.input_filename_leaf() {
        debug!("Diagram title: {}", Config::filter_name(leaf));
    }
    info!(
        "LaTeX output will be written to {}",
        cfg.output_file_path().display()
    );
    Ok(())
}
