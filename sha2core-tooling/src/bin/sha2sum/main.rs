use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::Result;
use log::{debug, info};
use structopt::StructOpt;

use sha2core_tooling::check::CheckStatus;
use sha2core_tooling::settings::SETTINGS;
use sha2core_tooling::{format_line, hash_path, parse_check_list, read_input, verify, STDIN_PATH};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sha2sum",
    version = "0.1",
    about = "Prints or checks SHA-256 digests. Each input is loaded fully into memory, up to the \
        `max_input_size` setting (env: SHA2CORE_MAX_INPUT_SIZE)."
)]
struct Opt {
    #[structopt(
        short = "c",
        long = "check",
        help = "Read digests from the given check lists and verify them."
    )]
    check: bool,
    #[structopt(
        parse(from_os_str),
        help = "Files to hash; reads standard input when none or `-` is given."
    )]
    files: Vec<PathBuf>,
}

/// Prints one digest line per input, returns the number of inputs that could not be hashed.
fn print_digests(files: &[PathBuf]) -> usize {
    let mut errors = 0;
    for path in files {
        match hash_path(path, SETTINGS.max_input_size) {
            Ok(digest) => println!(
                "{}",
                format_line(&digest, &path.display().to_string(), SETTINGS.uppercase)
            ),
            Err(err) => {
                debug!("{}: {:#}", path.display(), err);
                eprintln!("sha2sum: {}: {:#}", path.display(), err);
                errors += 1;
            }
        }
    }
    errors
}

/// Verifies every check list, returns false if any entry did not match.
fn check_lists(files: &[PathBuf]) -> Result<bool> {
    let mut success = true;
    for path in files {
        let text = read_input(path, SETTINGS.max_input_size)?;
        let entries = parse_check_list(&String::from_utf8_lossy(&text))?;
        info!("checking {} entries from {}", entries.len(), path.display());

        let report = verify(&entries, SETTINGS.max_input_size);
        for (name, status) in &report.results {
            match status {
                CheckStatus::Ok => println!("{}: OK", name),
                CheckStatus::Failed => println!("{}: FAILED", name),
                CheckStatus::Unreadable => println!("{}: FAILED open or read", name),
            }
        }

        if report.failed() > 0 {
            eprintln!(
                "sha2sum: WARNING: {} computed checksum(s) did NOT match",
                report.failed()
            );
        }
        if report.unreadable() > 0 {
            eprintln!(
                "sha2sum: WARNING: {} listed file(s) could not be read",
                report.unreadable()
            );
        }
        success &= report.is_success();
    }
    Ok(success)
}

fn main() -> Result<()> {
    fil_logger::init();

    let opt = Opt::from_args();
    let files = if opt.files.is_empty() {
        vec![Path::new(STDIN_PATH).to_path_buf()]
    } else {
        opt.files
    };

    let success = if opt.check {
        check_lists(&files)?
    } else {
        print_digests(&files) == 0
    };

    if !success {
        exit(1);
    }
    Ok(())
}
