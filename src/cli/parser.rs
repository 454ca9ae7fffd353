use clap::{Parser, Subcommand};

/// Command-line interface definition for fitstart
#[derive(Parser)]
#[command(
    name = "fitstart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track body weight and weekly workouts in a local progress log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Add a progress entry
    Add {
        /// Date of the entry (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(
            long = "weight",
            short = 'w',
            allow_hyphen_values = true,
            help = "Body weight in kg"
        )]
        weight: String,

        #[arg(
            long = "workouts",
            short = 'n',
            default_value = "",
            allow_hyphen_values = true,
            help = "Workouts this week (0-14)"
        )]
        workouts: String,

        #[arg(long = "notes", help = "Free-form notes")]
        notes: Option<String>,
    },

    /// Delete one entry by id
    Del {
        /// Entry id as shown by `list`
        id: String,
    },

    /// Delete ALL entries
    Clear {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List all entries
    List,

    /// Show latest weight, latest workouts and total entries
    Summary,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
