use ascii_table::{Align, AsciiTable};
use clap::{ArgMatches, Command};

use cellwatch::PredictionStack;

use crate::context;

pub fn args() -> Command {
    context::environment_args(
        Command::new("resources").about("list resources in apply order"),
    )
}

pub fn handlers(matches: &ArgMatches) -> anyhow::Result<()> {
    let environment = context::environment(matches)?;
    let params = context::params(matches);

    let graph = PredictionStack::build(&environment, &params)?;
    let order = graph.apply_order()?;

    let table_data: Vec<Vec<String>> = order
        .iter()
        .map(|id| {
            let resource = graph.get(id).expect("ordered ids exist");

            vec![
                id.to_string(),
                resource.kind().to_owned(),
                resource.physical_name().unwrap_or("-").to_owned(),
            ]
        })
        .collect();

    let mut ascii_table = AsciiTable::default();

    ascii_table
        .column(0)
        .set_header("ID")
        .set_align(Align::Left);

    ascii_table
        .column(1)
        .set_header("KIND")
        .set_align(Align::Left);

    ascii_table
        .column(2)
        .set_header("PHYSICAL NAME")
        .set_align(Align::Left);

    ascii_table.print(table_data);

    Ok(())
}
