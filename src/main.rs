use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashly::cli::{
    handle_format, handle_layout_command, handle_listen, handle_normalize,
    handle_session_command, handle_set, handle_theme_command, handle_type, LayoutCommands,
    SessionCommands, ThemeCommands,
};
use cashly::config::{paths::CashlyPaths, settings::Settings};
use cashly::stores::ClientStores;
use cashly::tui::{run_amount_entry, EntryOutcome};

#[derive(Parser)]
#[command(
    name = "cashly",
    version,
    about = "Cashly client toolkit",
    long_about = "Terminal front end for the Cashly client core: calculator-style \
                  currency entry, API response normalization, client state and the \
                  live notification feed."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format text as a currency field would
    Format {
        /// Field text; non-digits are dropped
        text: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay keystrokes through a currency field ('<' is Backspace)
    Type {
        /// Keys, typed in order
        keys: String,
    },

    /// Load a numeric value into a currency field
    Set {
        /// Amount; omit or pass "none" for no value
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enter an amount interactively
    Amount {
        /// Starting amount
        #[arg(short, long)]
        initial: Option<f64>,
        /// Field label
        #[arg(short, long, default_value = "Amount")]
        label: String,
    },

    /// Normalize an API response (file or stdin) into view-model JSON
    Normalize {
        /// JSON file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Treat the body as a list endpoint
        #[arg(long)]
        list: bool,
    },

    /// Follow the notification feed
    Listen {
        /// WebSocket URL (defaults to the configured one)
        #[arg(long)]
        url: Option<String>,
        /// Seconds to wait before reconnecting
        #[arg(long)]
        delay: Option<u64>,
    },

    /// Theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Dashboard widget layout
    #[command(subcommand)]
    Layout(LayoutCommands),

    /// Stored session
    #[command(subcommand)]
    Session(SessionCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CashlyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    cashly::logging::init(&settings.log_level);

    match cli.command {
        Commands::Format { text, json } => handle_format(&text, json)?,
        Commands::Type { keys } => handle_type(&keys)?,
        Commands::Set { value, json } => handle_set(value.as_deref(), json)?,
        Commands::Amount { initial, label } => match run_amount_entry(&label, initial)? {
            EntryOutcome::Confirmed(value) => println!("{}", value),
            EntryOutcome::Cancelled => println!("Cancelled"),
        },
        Commands::Normalize { file, list } => handle_normalize(file.as_deref(), list)?,
        Commands::Listen { url, delay } => handle_listen(&settings, url, delay)?,
        Commands::Theme(cmd) => {
            let mut stores = ClientStores::open(&paths)?;
            handle_theme_command(&mut stores, cmd)?;
        }
        Commands::Layout(cmd) => {
            let mut stores = ClientStores::open(&paths)?;
            handle_layout_command(&mut stores, cmd)?;
        }
        Commands::Session(cmd) => {
            let mut stores = ClientStores::open(&paths)?;
            handle_session_command(&mut stores, cmd)?;
        }
        Commands::Config => {
            println!("Cashly Configuration");
            println!("====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("State directory:   {}", paths.state_dir().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("API base URL:      {}", settings.api_base_url);
            println!("Notifications URL: {}", settings.notifications_url);
            println!("Reconnect delay:   {}s", settings.reconnect_delay_secs);
            println!("Log level:         {}", settings.log_level);
        }
    }

    Ok(())
}
