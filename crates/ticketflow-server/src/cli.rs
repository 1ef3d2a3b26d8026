use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ticketflow-server")]
#[command(about = "Ticketflow AI classification and support chat API", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Completion API base URL
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Completion API model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    pub listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "8080")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
