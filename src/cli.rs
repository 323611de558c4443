use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ArchTUI Users - create and edit the user accounts for an installation
#[derive(Parser)]
#[command(name = "archtui-users")]
#[command(about = "Interactive editor for the user accounts an Arch Linux installation creates")]
#[command(version)]
pub struct Cli {
    /// Log file. The terminal belongs to the editor, so logs never go to stdout.
    #[arg(long, global = true, default_value = "/tmp/archtui-users.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit the user list interactively (default)
    Edit(EditArgs),
    /// Check usernames against the useradd naming rules
    Validate {
        /// Usernames to check
        #[arg(required = true)]
        usernames: Vec<String>,
    },
    /// Validate a users file
    Check {
        /// Path to the users JSON file
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// Users file to start from
    #[arg(short, long)]
    pub users: Option<PathBuf>,

    /// Where to write the resulting users file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON message catalog for translated prompts
    #[arg(short, long)]
    pub translations: Option<PathBuf>,

    /// Text shown above the user list
    #[arg(short, long, default_value = "")]
    pub prompt: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
