use clap::Parser;

use testgap::cli::{Cli, ColorChoice, Commands};
use testgap::commands::{run_discover, run_functions, run_init, run_signature};
use testgap::output::ColorMode;

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    let color_mode = color_choice_to_mode(cli.color);

    let exit_code = match &cli.command {
        Commands::Signature(args) => run_signature(args, &cli, color_mode),
        Commands::Functions(args) => run_functions(args, &cli, color_mode),
        Commands::Discover(args) => run_discover(args, &cli, color_mode),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
