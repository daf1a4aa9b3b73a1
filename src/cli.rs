use clap::Parser;

/// Collects one employee record interactively and prints the elapsed
/// tenure relative to today's date.
#[derive(Debug, Parser)]
#[command(name = "staz", version, about)]
pub struct Args {
    /// Emit the summary as JSON instead of the formatted report
    #[arg(long)]
    pub json: bool,
}
