use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "studentdb", about = "In-memory fixed-capacity student record store")]
pub struct Args {
    /// Maximum number of records the store can hold
    #[arg(short = 'c', long, value_name = "N", default_value_t = 10)]
    pub capacity: usize,

    /// Record to insert, as ID,NAME,GPA (repeatable; defaults to the seed records)
    #[arg(short = 'r', long = "record", value_name = "ID,NAME,GPA", allow_hyphen_values = true)]
    pub records: Vec<String>,

    /// Identifier to look up after listing
    #[arg(short = 'f', long, value_name = "ID", default_value_t = 102, allow_hyphen_values = true)]
    pub find: i32,

    /// Write result to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
