use clap::{ArgMatches, Command};

use cellwatch::PredictionStack;
use cellwatch_core::validate;

use crate::context;

pub fn args() -> Command {
    context::environment_args(
        Command::new("validate").about("construct and validate the graph without emitting"),
    )
}

pub fn handlers(matches: &ArgMatches) -> anyhow::Result<()> {
    let environment = context::environment(matches)?;
    let params = context::params(matches);

    let graph = PredictionStack::build(&environment, &params)?;
    validate(&graph)?;

    tracing::info!(
        "graph valid: {} resources, {} edges",
        graph.len(),
        graph.edges().len()
    );

    Ok(())
}
