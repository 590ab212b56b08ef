use clap::Parser;
use log::debug;
use std::process::ExitCode;

use quickpick_cli::cli_args::Args;
use quickpick_cli::navigator;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("Choosing between {} options", args.options.len());

    match navigator::navigate(&args.message, &args.options) {
        Some(index) => {
            if args.print_index {
                println!("{index}");
            } else {
                println!("{}", args.options[index]);
            }
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
