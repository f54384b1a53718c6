use clap::Parser;

/// Interactive deduction assistant for the Clue family of board games.
#[derive(Debug, Parser)]
#[command(
    name = "mdclue",
    author,
    version,
    about = "Tracks who can hold which card and recommends the next accusation"
)]
pub struct Cli {
    /// Number of real players at the table, including you.
    #[arg(value_name = "PLAYERS")]
    pub players: u8,

    /// Cards dealt to each player. Defaults to the size of the hand you
    /// enter at setup.
    #[arg(long, value_name = "COUNT")]
    pub hand_size: Option<usize>,

    /// How many ranked guesses to print.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_n: usize,

    /// Seed for the recommendation tie-break.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log level filter (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
