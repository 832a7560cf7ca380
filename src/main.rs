// main.rs - sigtools dispatcher
//
// `sigtools <TOOL> [options]` forwards everything after the tool name to the
// tool itself, so `sigtools SigProfilerAssignment -h` prints the tool's help.

use clap::{Parser, Subcommand};
use sigtools::tools::{assignment, extractor, reheader, single_sample};

#[derive(Parser)]
#[command(name = "sigtools")]
#[command(about = "SigProfilerTools: mutational signature and SURVIVOR VCF utilities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(override_usage = "sigtools <TOOL> [options]")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign known mutational signatures to samples and mutations
    #[command(name = "SigProfilerAssignment", alias = "sigprofilerassignment", disable_help_flag = true)]
    Assignment(ToolArgs),
    /// Extract mutational signatures de novo (NMF)
    #[command(name = "SigProfilerExtractor", alias = "sigprofilerextractor", disable_help_flag = true)]
    Extractor(ToolArgs),
    /// Fit signatures to single samples
    #[command(name = "SigProfilerSingleSample", alias = "sigprofilersinglesample", disable_help_flag = true)]
    SingleSample(ToolArgs),
    /// Add a sample legend to SURVIVOR's merged VCF
    #[command(name = "SurvivorVcfReheader", alias = "survivorvcfreheader", disable_help_flag = true)]
    Reheader(ToolArgs),
}

#[derive(clap::Args)]
struct ToolArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assignment(tool) => assignment::run(&tool.args),
        Commands::Extractor(tool) => extractor::run(&tool.args),
        Commands::SingleSample(tool) => single_sample::run(&tool.args),
        Commands::Reheader(tool) => reheader::run(&tool.args),
    }
}
