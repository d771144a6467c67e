use clap::Command;

mod context;
mod resources;
mod synth;
mod validate;

fn cli() -> Command {
    Command::new("cellwatch")
        .about("deterministic provisioning graphs for battery alarm prediction")
        .version("0.1.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(synth::args())
        .subcommand(validate::args())
        .subcommand(resources::args())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("synth", submatches)) => synth::handlers(submatches),
        Some(("validate", submatches)) => validate::handlers(submatches),
        Some(("resources", submatches)) => resources::handlers(submatches),
        _ => unreachable!(), // If all subcommands are defined above, anything else is unreachable
    }
}
