use clap::{Parser, Subcommand};
use custdna_profile::ViewKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "custdna")]
#[command(
    author,
    version,
    about = "Customer DNA interaction classifier and profile service"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP service
    Serve {
        /// Configuration file path
        #[arg(short, long, default_value = "custdna.yaml")]
        config: String,

        /// Listen address
        #[arg(short, long)]
        listen: Option<String>,

        /// Listen port
        #[arg(short = 'P', long)]
        port: Option<u16>,

        /// Customer store document
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify one interaction and print the finished record
    Classify {
        /// Contact channel (email, phone, chat, social, ...)
        #[arg(long)]
        channel: String,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<f64>,

        /// Interaction text
        #[arg(long)]
        content: Option<String>,

        /// ISO-8601 timestamp
        #[arg(long)]
        date: Option<String>,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Configuration file path
        #[arg(short, long, default_value = "custdna.yaml")]
        config: String,
    },

    /// Print a customer's DNA profile
    Profile {
        /// Customer store document
        #[arg(short, long, default_value = "db.json")]
        data: PathBuf,

        /// Customer id
        #[arg(long)]
        customer: u64,

        /// detailed or compact
        #[arg(long, default_value = "detailed", value_parser = parse_view)]
        view: ViewKind,

        /// Configuration file path
        #[arg(short, long, default_value = "custdna.yaml")]
        config: String,
    },
}

fn parse_view(s: &str) -> Result<ViewKind, String> {
    s.parse().map_err(|e: custdna_core::Error| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::try_parse_from([
            "custdna",
            "classify",
            "--channel",
            "email",
            "--duration",
            "45",
            "--seed",
            "7",
        ])
        .unwrap();

        match cli.command {
            Commands::Classify { channel, duration, seed, content, .. } => {
                assert_eq!(channel, "email");
                assert_eq!(duration, Some(45.0));
                assert_eq!(seed, Some(7));
                assert!(content.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_profile_view() {
        let cli = Cli::try_parse_from(["custdna", "profile", "--customer", "3", "--view", "Compact"])
            .unwrap();
        match cli.command {
            Commands::Profile { customer, view, data, .. } => {
                assert_eq!(customer, 3);
                assert_eq!(view, ViewKind::Compact);
                assert_eq!(data, PathBuf::from("db.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["custdna", "profile", "--customer", "3", "--view", "wide"])
            .is_err());
    }
}
