use clap::{Parser, Subcommand};

/// Command-line interface definition for enturno,
/// the CLI client for the STA shift-attendance backend.
#[derive(Parser)]
#[command(
    name = "enturno",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out and take breaks against the STA attendance backend",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration directory (useful for tests)
    #[arg(global = true, long = "config-dir")]
    pub config_dir: Option<String>,

    /// Override the backend base URL for this invocation
    #[arg(global = true, long = "url")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authenticate and persist the session token
    Login {
        /// Account username
        username: String,

        /// Password (prompted with hidden input when omitted)
        #[arg(long = "password")]
        password: Option<String>,
    },

    /// Discard the persisted session token
    Logout,

    /// Change the account password
    Passwd {
        /// New password (prompted with confirmation when omitted)
        #[arg(long = "new")]
        new_password: Option<String>,
    },

    /// Show profile, today's attendance and the current state
    Status,

    /// Clock in
    In {
        /// Coordinates override, "lat,lon" in decimal degrees
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Start a break
    Pause {
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// End the current break
    Resume {
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Clock out
    Out {
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Print the stable device identifier
    Device,

    /// Manage the configuration file (initialize or view)
    Config {
        #[arg(long = "init", help = "Write a fresh configuration file")]
        init: bool,

        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
