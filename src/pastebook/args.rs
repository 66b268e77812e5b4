use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pastebook", version)]
#[command(about = "Write, browse and share short text pastes, stored locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new paste
    #[command(alias = "n")]
    Create {
        /// Title of the paste
        #[arg(required = false)]
        title: Option<String>,

        /// Content of the paste (opens the editor if omitted)
        #[arg(required = false)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Edit a paste you own (by id or edit link)
    #[command(alias = "e")]
    Edit {
        /// Paste id, edit link or share link
        paste: String,

        /// New title (keeps the current one if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New content (keeps the current one if omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// List pastes
    #[command(alias = "ls")]
    List {
        /// Only show pastes whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search paste titles
    Search { term: String },

    /// Show a paste
    #[command(alias = "v")]
    View {
        /// Paste id or link
        paste: String,
    },

    /// Copy a paste's content to the clipboard
    Copy {
        /// Paste id or link
        paste: String,
    },

    /// Share a link to a paste
    Share {
        /// Paste id or link
        paste: String,
    },

    /// Delete a paste you own
    #[command(alias = "rm")]
    Delete {
        /// Paste id or link
        paste: String,
    },

    /// Delete every paste on this machine
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Print the identity pastes are written as
    Whoami,

    /// Write as a different identity
    Login { identity: String },

    /// Tell whether you own a paste
    Owns {
        /// Paste id or link
        paste: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (share-base-url, log-filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
