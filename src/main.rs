use clap::Parser;
use codesplit::cli::{Cli, Commands};
use codesplit::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Split(args) => codesplit::cli::split::run(args, &printer)?,
        Commands::List(args) => codesplit::cli::list::run(args, &printer)?,
        Commands::Show(args) => codesplit::cli::show::run(args, &printer)?,
        Commands::Completions(args) => codesplit::cli::completions::run(args)?,
    }

    Ok(())
}
