#![forbid(unsafe_code)]

mod cli_input;
mod errors;

use clap::Parser;
use cli_input::{Args, InlineCommand, SplitCommand, SubCommand};
use colored::Colorize;
use errors::CliError;
use std::{fs, process};

fn main() {
    let args = Args::parse();

    let exit_code = match try_main(args) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{} {error}", "error:".red().bold());
            1
        }
    };

    process::exit(exit_code);
}

fn try_main(args: Args) -> Result<(), CliError> {
    match args.command {
        SubCommand::Inline(cmd) => inline(&cmd),
        SubCommand::Split(cmd) => split(&cmd),
    }
}

fn inline(cmd: &InlineCommand) -> Result<(), CliError> {
    let source = fs::read_to_string(&cmd.path).map_err(CliError::ReadInput)?;
    let inlined = operation_inliner::inline(&source)?;

    print!("{inlined}");

    Ok(())
}

fn split(cmd: &SplitCommand) -> Result<(), CliError> {
    let source = fs::read_to_string(&cmd.path).map_err(CliError::ReadInput)?;

    let definitions = document_splitter::split(&source)?;
    let files = document_splitter::group(&definitions);

    // Nothing is written unless the whole document split cleanly.
    fs::create_dir_all(&cmd.out_dir).map_err(CliError::WriteOutput)?;

    for file in &files {
        fs::write(cmd.out_dir.join(&file.filename), &file.content).map_err(CliError::WriteOutput)?;

        println!("{} {}", "written".green().bold(), file.filename);
    }

    println!(
        "{} definitions across {} files",
        definitions.len(),
        files.len()
    );

    Ok(())
}
