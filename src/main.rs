use clap::Parser;
use commission_fees::{input::Format, run::run, Error};
use log::error;
use std::{fs::File, path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(
    name = "commission_fees",
    version,
    about = "Calculate the commission fee of each operation"
)]
struct Cli {
    /// Operations file: a JSON array, or a CSV file
    input: PathBuf,

    /// Input format (guessed from the file extension by default)
    #[arg(long, value_enum)]
    format: Option<Format>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), Error> {
    if !cli.input.is_file() {
        return Err(Error::MissingInput(cli.input));
    }

    let format = cli.format.unwrap_or_else(|| Format::from_path(&cli.input));
    let input = File::open(&cli.input)?;

    run(input, format, std::io::stdout().lock())?;

    Ok(())
}
