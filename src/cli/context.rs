use std::env;

use anyhow::Context as _;
use clap::{Arg, ArgMatches, Command};

use cellwatch::environment::DEFAULT_PARTITION;
use cellwatch::{Environment, StackParams};

/// Flags shared by every subcommand; each falls back to a CELLWATCH_*
/// environment variable so CI can apply without repeating them.
pub fn environment_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("account")
                .long("account")
                .help("target account id (or CELLWATCH_ACCOUNT)")
                .num_args(1),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .help("target region (or CELLWATCH_REGION)")
                .num_args(1),
        )
        .arg(
            Arg::new("partition")
                .long("partition")
                .help("deployment partition (or CELLWATCH_PARTITION)")
                .num_args(1),
        )
        .arg(
            Arg::new("endpoint-name")
                .long("endpoint-name")
                .help("ML hosting endpoint name override")
                .num_args(1),
        )
}

pub fn environment(matches: &ArgMatches) -> anyhow::Result<Environment> {
    let account = flag_or_env(matches, "account", "CELLWATCH_ACCOUNT")?;
    let region = flag_or_env(matches, "region", "CELLWATCH_REGION")?;

    let partition = matches
        .get_one::<String>("partition")
        .cloned()
        .or_else(|| env::var("CELLWATCH_PARTITION").ok())
        .unwrap_or_else(|| DEFAULT_PARTITION.to_owned());

    Ok(Environment::new(&account, &region, &partition))
}

pub fn params(matches: &ArgMatches) -> StackParams {
    let mut params = StackParams::default();

    if let Some(endpoint_name) = matches.get_one::<String>("endpoint-name") {
        params.endpoint_name = endpoint_name.clone();
    }

    params
}

fn flag_or_env(matches: &ArgMatches, flag: &str, var: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(flag)
        .cloned()
        .or_else(|| env::var(var).ok())
        .with_context(|| format!("--{flag} or {var} must be set"))
}
