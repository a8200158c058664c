use board_model::BoardType;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "board")]
#[command(about = "Decode, validate and patch board records", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BOARD_BUILD_COMMIT"), ")"))]
pub struct Cli {
    /// Path to config file (or set BOARD_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "BOARD_CONFIG")]
    pub config: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new board record
    New(NewArgs),
    /// Check a board for structural validity
    Validate {
        /// Board JSON file, or - for stdin
        #[arg(long, default_value = "-")]
        board: String,
    },
    /// Apply a patch to a board
    Patch(PatchArgs),
    /// Decode wire JSON, yielding null or [] on malformed input
    Decode(DecodeCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct NewArgs {
    #[arg(long)]
    pub team_id: String,
    /// O (open) or P (private)
    #[arg(long = "type", default_value = "O")]
    pub board_type: BoardType,
    #[arg(long)]
    pub created_by: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub channel_id: Option<String>,
}

#[derive(Args)]
pub struct PatchArgs {
    /// Board JSON file, or - for stdin
    #[arg(long)]
    pub board: String,
    /// Patch JSON file, or - for stdin
    #[arg(long)]
    pub patch: String,
    /// Record this user and the current time on the patched board
    #[arg(long)]
    pub modified_by: Option<String>,
    /// Skip validation of the patch and the result
    #[arg(long)]
    pub no_validate: bool,
}

#[derive(Args)]
pub struct DecodeCommand {
    #[command(subcommand)]
    pub kind: DecodeKind,
}

#[derive(Subcommand)]
pub enum DecodeKind {
    /// A single board
    Board {
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// An array of boards
    Boards {
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// A single board member
    Member {
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// An array of board members
    Members {
        #[arg(long, default_value = "-")]
        input: String,
    },
}
