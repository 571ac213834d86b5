use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Inspect and normalize component schedule payloads.
///
/// Every command reads one JSON document from a file, or from stdin when
/// the path is `-`.
#[derive(Parser, Debug)]
#[command(name = "studyplan", about = "Component schedule codec tools")]
pub struct CliArgs {
    /// Compact output (overrides OUTPUT_PRETTY)
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a schedule body and print its canonical encoding
    Normalize {
        /// Input file, or `-` for stdin
        input: String,
    },

    /// Decode a schedule body and report the first error, if any
    Validate {
        /// Input file, or `-` for stdin
        input: String,
    },

    /// Attach identity to a schedule body
    Stamp {
        /// Input file, or `-` for stdin
        input: String,

        /// Owning component
        #[arg(long)]
        component_id: Uuid,

        /// Schedule id (a fresh v4 id when omitted)
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Decode and normalize a full notifications config
    Notifications {
        /// Input file, or `-` for stdin
        input: String,
    },
}

impl Command {
    pub fn input(&self) -> &str {
        match self {
            Command::Normalize { input }
            | Command::Validate { input }
            | Command::Stamp { input, .. }
            | Command::Notifications { input } => input,
        }
    }
}
