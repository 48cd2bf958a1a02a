use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use sheet_sync_core::{apply_sync, ExitCode, SyncError, SyncOptions, SyncOutcome, SyncRequest};

const DEFAULT_SOURCE: &str = "sheet.html";
const DEFAULT_PREVIEW: &str = "preview.html";

#[derive(Parser, Debug)]
#[command(author, version, about = "Sync sheet markup into a browser preview harness", long_about = None)]
struct Cli {
    /// Path to the sheet source file
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Path to the preview file to rewrite
    #[arg(value_name = "PREVIEW", default_value = DEFAULT_PREVIEW)]
    preview: PathBuf,

    /// Plain copy: keep worker scripts and skip script preservation
    #[arg(long = "flat", conflicts_with_all = ["keep_worker_script", "no_preserve_script"])]
    flat: bool,

    /// Leave any worker-script block in the copied markup
    #[arg(long = "keep-worker-script")]
    keep_worker_script: bool,

    /// Do not re-emit the preview's inline script after the copied markup
    #[arg(long = "no-preserve-script")]
    no_preserve_script: bool,

    /// Print diff without writing changes
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Force creation of backup (default behaviour)
    #[arg(long = "backup")]
    backup: bool,

    /// Disable backup creation
    #[arg(long = "no-backup", conflicts_with = "backup")]
    no_backup: bool,

    /// Suppress informational output (progress, diffs, success messages)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(exit) | Err(exit) => std::process::ExitCode::from(exit as u8),
    }
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    if cli.source == cli.preview {
        eprintln!("SOURCE and PREVIEW must name different files");
        return Err(ExitCode::InvalidArguments);
    }

    if !cli.quiet {
        println!(
            "Reading {} and {}...",
            cli.source.display(),
            cli.preview.display()
        );
    }

    let request = SyncRequest {
        source: cli.source.clone(),
        dest: cli.preview.clone(),
        options: build_options(&cli),
    };

    match apply_sync(request) {
        Ok(outcome) => {
            handle_success(&cli, &outcome);
            Ok(ExitCode::Success)
        }
        Err(err) => {
            let exit = err.exit_code();
            handle_error(&err);
            Err(exit)
        }
    }
}

fn build_options(cli: &Cli) -> SyncOptions {
    let backup = match (cli.backup, cli.no_backup) {
        (_, true) => false,
        (true, false) => true,
        (false, false) => true,
    };

    SyncOptions {
        strip_worker_block: !(cli.flat || cli.keep_worker_script),
        preserve_inline_script: !(cli.flat || cli.no_preserve_script),
        dry_run: cli.dry_run,
        backup,
    }
}

fn handle_success(cli: &Cli, outcome: &SyncOutcome) {
    if cli.quiet {
        return;
    }

    if cli.dry_run {
        if let Some(diff) = &outcome.diff {
            print!("{diff}");
            io::stdout().flush().ok();
        } else {
            println!("No changes (dry run)");
        }
        return;
    }

    if outcome.changed {
        if let Some(diff) = &outcome.diff {
            print!("{diff}");
        }
        println!("Updated {}", cli.preview.display());
    } else {
        println!("{} is already up to date.", cli.preview.display());
    }
}

fn handle_error(err: &SyncError) {
    match err {
        SyncError::MissingAnchor { marker } => {
            eprintln!("Error: could not find {marker} marker in the preview file");
        }
        SyncError::Io(io_err) => {
            eprintln!("I/O error: {io_err}");
        }
    }
}
