use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List subreddits matching a query
    Search {
        /// Text to search for
        query: String,
    },

    /// Compute the hourly posting histogram of a subreddit
    Analyze {
        /// Subreddit name (3-21 letters, digits or underscores)
        subreddit: String,

        /// IANA timezone for the hour buckets (defaults to the config value)
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Type, pick and analyze line by line
    ///
    /// Plain lines are treated as the contents of the search box.
    /// Commands: `:pick <n>`, `:tz <zone>`, `:go`, `:quit`.
    Interactive {
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Show or change the colour-scheme preference
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommand>,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print the current preference
    Show,
    /// Persist a preference
    Set {
        #[arg(value_parser = ["light", "dark"])]
        theme: String,
    },
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}
