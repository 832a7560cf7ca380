// extractor.rs - SigProfilerExtractor wrapper

use super::{parse_or_exit, print_sample_config};
use crate::cli::aliases::no_flags;
use crate::cli::validation::{ensure_output_dir, validate_extractor, ExtractorOptions};
use crate::cli::ExtractorArgs;
use crate::core::call::path_value;
use crate::core::{select_backend, AnalysisBackend, LibraryCall};
use std::time::Instant;

pub const MODULE: &str = "SigProfilerExtractor.sigpro";
pub const FUNCTION: &str = "sigProfilerExtractor";

/// Build the `sigProfilerExtractor` call; the opportunity genome follows the reference genome
pub fn build_call(options: &ExtractorOptions) -> LibraryCall {
    LibraryCall::new(MODULE, FUNCTION)
        .arg(options.file_type.as_str())
        .arg(path_value(&options.output_dir))
        .arg(path_value(&options.input_dir))
        .kwarg("reference_genome", options.reference_genome.as_str())
        .kwarg("opportunity_genome", options.reference_genome.as_str())
        .kwarg("exome", options.restrict_to_exome)
        .kwarg("minimum_signatures", options.minimum_signatures)
        .kwarg("maximum_signatures", options.maximum_signatures)
        .kwarg("nmf_replicates", options.nmf_replicates)
        .kwarg("make_decomposition_plots", options.make_decomposition_plots)
        .kwarg("cpu", options.cpu)
}

pub fn execute(options: &ExtractorOptions, backend: &dyn AnalysisBackend) -> Result<(), String> {
    if backend.writes_output() {
        ensure_output_dir(&options.output_dir)?;
    }

    println!(
        "🚀 SigProfilerExtractor v{} ({} backend)",
        env!("CARGO_PKG_VERSION"),
        backend.name()
    );
    println!("📂 Input: {}", options.input_dir.display());
    println!(
        "🧮 Signatures: {}..={} | NMF replicates: {} | {}{}",
        options.minimum_signatures,
        options.maximum_signatures,
        options.nmf_replicates,
        options.reference_genome.as_str(),
        if options.restrict_to_exome { " (exome)" } else { "" }
    );

    let start = Instant::now();
    backend.invoke(&build_call(options))?;

    println!(
        "✅ Signature extraction completed in {:.2}s, results in {}",
        start.elapsed().as_secs_f64(),
        options.output_dir.display()
    );
    Ok(())
}

/// Full command line flow; `argv` excludes the program name
pub fn run(argv: &[String]) -> Result<(), String> {
    if argv.is_empty() {
        no_flags();
        return Ok(());
    }

    let mut args = parse_or_exit(ExtractorArgs::from_argv(argv));

    if args.runtime.generate_config {
        print_sample_config();
        return Ok(());
    }
    if let Some(config_path) = args.runtime.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let options = validate_extractor(&args)?;
    let backend = select_backend(
        args.runtime.python.as_deref(),
        args.runtime.configured_python.as_deref(),
        args.runtime.dry_run,
    )?;
    execute(&options, backend.as_ref())
}
