mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::RankWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_profiles {
        let store = workflow::profile_store(cli.profile_dir.clone())?;
        for name in store.list()? {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;
    jobsieve::logging::initialize(resolved.log_level.as_deref())?;

    if cli.print_config {
        resolved.print_summary();
    }

    let workflow = RankWorkflow::from_settings(&resolved)?;
    let result = workflow.run()?;

    match resolved.output {
        OutputFormat::Plain => print_plain(&result, resolved.limit),
        OutputFormat::Json => print_json(&result, resolved.limit)?,
    }

    Ok(())
}
