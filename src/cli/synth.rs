use std::fs;

use clap::{Arg, ArgMatches, Command};

use cellwatch::stack::manifest_parameters;
use cellwatch::PredictionStack;

use crate::context;

pub fn args() -> Command {
    context::environment_args(
        Command::new("synth").about("synthesize the provisioning manifest"),
    )
    .arg(
        Arg::new("output")
            .long("output")
            .help("write the manifest to a file instead of stdout")
            .num_args(1),
    )
}

pub fn handlers(matches: &ArgMatches) -> anyhow::Result<()> {
    let environment = context::environment(matches)?;
    let params = context::params(matches);

    let graph = PredictionStack::build(&environment, &params)?;
    let manifest = graph.into_manifest(manifest_parameters(&environment, &params))?;
    let json = manifest.to_json()?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, &json)?;

            tracing::info!("manifest written to {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}
