use clap::Parser;
use glform::commands::{cmd_convert, cmd_inspect};
use glform::config::{load_config, Cli, Commands, ConvertSettings};
use glform::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            padding,
            split,
            stdout,
        } => {
            let settings =
                ConvertSettings::resolve(&input, output, padding, split, stdout, &config);
            cmd_convert(&input, &settings)?;
        }
        Commands::Inspect { input, pretty } => {
            println!("{}", cmd_inspect(&input, pretty)?);
        }
    }

    Ok(())
}
