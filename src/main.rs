//! ArchTUI Users - main entry point
//!
//! Hosts the user editor in the terminal and writes the resulting user list
//! as JSON for the installer to consume.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use archtui_users::cli::{Cli, Commands, EditArgs};
use archtui_users::{
    TerminalPrompter, TerminalSession, Translator, UsersFile, ask_for_additional_users,
    validate_username,
};

/// Initialize logging into `path`; `RUST_LOG` overrides the default `info` level
fn init_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Logging is best effort; the editor still works without it
    if let Err(e) = init_logging(&cli.log_file) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    info!("ArchTUI Users starting up");

    match cli.command {
        Some(Commands::Validate { usernames }) => validate_usernames(&usernames),
        Some(Commands::Check { file }) => check_users_file(&file),
        Some(Commands::Edit(args)) => run_editor(&args),
        None => {
            debug!("No command specified, launching editor");
            run_editor(&EditArgs::default())
        }
    }
}

/// Check each username and exit non-zero if any is rejected
fn validate_usernames(usernames: &[String]) -> Result<()> {
    let mut failed = false;

    for username in usernames {
        match validate_username(username) {
            Ok(()) => println!("✓ {}", username),
            Err(e) => {
                failed = true;
                eprintln!("✗ {}", e);
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Load and validate a users file
fn check_users_file(path: &Path) -> Result<()> {
    info!("Validating users file: {:?}", path);

    match UsersFile::load_from_file(path).and_then(|file| file.validate().map(|_| file)) {
        Ok(file) => {
            info!("Users file validation successful");
            println!("✓ Users file is valid: {} user(s)", file.users.len());
            Ok(())
        }
        Err(e) => {
            error!("Users file validation failed: {:#}", e);
            eprintln!("✗ Users file validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the interactive editor and write the result
fn run_editor(args: &EditArgs) -> Result<()> {
    let translator = match &args.translations {
        Some(path) => Translator::from_file(path)
            .with_context(|| format!("Failed to load translations from {:?}", path))?,
        None => Translator::identity(),
    };

    let initial = match &args.users {
        Some(path) => {
            let file = UsersFile::load_from_file(path)?;
            file.validate()
                .with_context(|| format!("Invalid users file {:?}", path))?;
            file.users
        }
        None => Vec::new(),
    };

    let users = {
        // Dropping the session restores the terminal before anything is printed
        let _session = TerminalSession::enter()?;
        let mut prompter = TerminalPrompter::stdout(translator.tr("User Accounts"))?;
        ask_for_additional_users(&mut prompter, &translator, &args.prompt, &initial)?
    };

    let file = UsersFile::new(users);
    match &args.output {
        Some(path) => {
            file.save_to_file(path)?;
            info!("Saved {} user(s) to {:?}", file.users.len(), path);
            println!("✓ Saved {} user(s) to {:?}", file.users.len(), path);
        }
        None => println!("{}", file.to_json()?),
    }

    Ok(())
}
