use std::io;
use std::process::ExitCode;

use wordle_solver::cli::{self, CliInterface, Command};
use wordle_solver::wordbank::resolve_wordbank;
use wordle_solver::{Result, Simulator, game_loop, logging, run_batch};

fn main() -> ExitCode {
    let cli = cli::parse_cli();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let wordbank = resolve_wordbank(cli.wordbank_path.as_deref())?;

    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => {
            let config = cli.game_config(None);
            let mut interface = CliInterface::new(io::stdin().lock());
            game_loop(&wordbank, &config, &mut interface);
        }
        Command::Solve { solution, opening } => {
            let simulator = Simulator::new(&wordbank, cli.game_config(opening))?;
            let record = simulator.play(&solution)?;
            cli::display_game_record(&record);
        }
        Command::Batch {
            opening,
            jobs,
            details,
        } => {
            let report = run_batch(&wordbank, cli.game_config(opening), jobs)?;
            cli::display_batch_report(&report, details);
        }
    }
    Ok(())
}
