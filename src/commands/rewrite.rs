use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use declfix::classlist::ClassList;
use declfix::log_status;
use declfix::rewrite;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct RewriteArgs {
    /// Root directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Class list file overriding the built-in table (one name per line)
    #[arg(long)]
    pub classlist: Option<String>,

    /// Apply changes to disk (default is dry-run)
    #[arg(long)]
    pub write: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RewriteOutput {
    #[serde(rename = "rewrite")]
    Rewrite {
        root: String,
        dry_run: bool,
        classes: usize,
        files_scanned: usize,
        total_replacements: usize,
        total_files: usize,
        edits: Vec<EditSummary>,
        applied: bool,
    },
}

#[derive(Serialize)]
pub struct EditSummary {
    pub file: String,
    pub replacements: Vec<ReplacementSummary>,
}

#[derive(Serialize)]
pub struct ReplacementSummary {
    pub class_name: String,
    pub include: String,
}

/// Per-replacement status line. A dry-run announces a plan, not a write.
fn status_line(dry_run: bool, class_name: &str, file: &str) -> String {
    if dry_run {
        format!(
            "would replace forward declaration of {} with inclusion in: {}",
            class_name, file
        )
    } else {
        format!(
            "replacing forward declaration of {} with inclusion in: {}",
            class_name, file
        )
    }
}

pub fn run(args: RewriteArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RewriteOutput> {
    let root = PathBuf::from(&args.path);
    if !root.is_dir() {
        return Err(declfix::Error::validation_invalid_argument(
            "path",
            format!("'{}' is not a directory", root.display()),
        ));
    }

    let list = ClassList::load(args.classlist.as_deref().map(Path::new))?;

    let mut result = rewrite::scan(&list, &root)?;

    for edit in &result.edits {
        for replacement in &edit.replacements {
            log_status!(
                "rewrite",
                "{}",
                status_line(!args.write, &replacement.class_name, &edit.file)
            );
        }
    }

    if args.write {
        rewrite::apply(&mut result)?;
    }

    Ok((
        RewriteOutput::Rewrite {
            root: root.display().to_string(),
            dry_run: !args.write,
            classes: list.len(),
            files_scanned: result.files_scanned,
            total_replacements: result.total_replacements,
            total_files: result.total_files,
            edits: result
                .edits
                .iter()
                .map(|e| EditSummary {
                    file: e.file.clone(),
                    replacements: e
                        .replacements
                        .iter()
                        .map(|r| ReplacementSummary {
                            class_name: r.class_name.clone(),
                            include: r.include.clone(),
                        })
                        .collect(),
                })
                .collect(),
            applied: result.applied,
        },
        0,
    ))
}
