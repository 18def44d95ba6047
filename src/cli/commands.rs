use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vajrascan", version, about = "Multi-cloud IaC misconfiguration scan orchestrator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a local IaC file and print the risk report
    Scan(ScanArgs),
    /// Start the HTTP upload/scan server
    Serve(ServeArgs),
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// IaC file to scan
    pub file: String,

    /// Scanner executable to invoke
    #[arg(long, default_value = "vajra-scanner")]
    pub scanner: String,

    /// Scanner execution budget in seconds
    #[arg(long, default_value = "60")]
    pub timeout: u64,

    /// Emit the dashboard view model as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Scanner executable to invoke
    #[arg(long, default_value = "vajra-scanner")]
    pub scanner: String,

    /// Scanner execution budget in seconds
    #[arg(long, default_value = "60")]
    pub timeout: u64,

    /// Directory for transient uploads
    #[arg(long, default_value = "./uploads")]
    pub upload_dir: String,

    /// Max concurrent scanner processes
    #[arg(long, default_value = "3")]
    pub workers: usize,
}
