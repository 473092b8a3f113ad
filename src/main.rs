use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "bfi", version, about = "A tape-machine Brainfuck interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a Brainfuck program from arguments or a file
    Run(commands::run::RunArgs),
    /// Start a Brainfuck REPL (read-eval-print loop)
    Repl(commands::repl::ReplArgs),
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Run(args) => commands::run::run(args),
        Command::Repl(args) => commands::repl::run(args),
    };

    std::process::exit(code);
}
