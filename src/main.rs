use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "declfix")]
#[command(version = VERSION)]
#[command(about = "Rewrite stale C++ forward declarations into include directives")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source tree and rewrite forward declarations of known classes
    Rewrite(commands::rewrite::RewriteArgs),
    /// Inspect the class-name table
    Classlist(commands::classlist::ClasslistArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
