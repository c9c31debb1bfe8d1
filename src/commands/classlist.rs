use std::path::Path;

use clap::{Args, Subcommand};
use serde::Serialize;

use declfix::classlist::ClassList;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ClasslistArgs {
    #[command(subcommand)]
    command: ClasslistCommand,
}

#[derive(Subcommand)]
enum ClasslistCommand {
    /// Show the class-name table in effect
    Show {
        /// Class list file overriding the built-in table
        #[arg(long)]
        classlist: Option<String>,
    },
    /// Check whether a name is in the table
    Check {
        /// Class name to look up
        name: String,
        /// Class list file overriding the built-in table
        #[arg(long)]
        classlist: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ClasslistOutput {
    #[serde(rename = "classlist.show")]
    Show {
        builtin: bool,
        total: usize,
        names: Vec<String>,
    },
    #[serde(rename = "classlist.check")]
    Check { name: String, known: bool },
}

pub fn run(
    args: ClasslistArgs,
    _global: &crate::commands::GlobalArgs,
) -> CmdResult<ClasslistOutput> {
    match args.command {
        ClasslistCommand::Show { classlist } => {
            let list = ClassList::load(classlist.as_deref().map(Path::new))?;
            Ok((
                ClasslistOutput::Show {
                    builtin: classlist.is_none(),
                    total: list.len(),
                    names: list.names().to_vec(),
                },
                0,
            ))
        }
        ClasslistCommand::Check { name, classlist } => {
            let list = ClassList::load(classlist.as_deref().map(Path::new))?;
            let known = list.contains(&name);
            let exit_code = if known { 0 } else { 1 };
            Ok((ClasslistOutput::Check { name, known }, exit_code))
        }
    }
}
