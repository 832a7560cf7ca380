// assignment.rs - SigProfilerAssignment wrapper
//
// Assigns previously known mutational signatures to individual samples and
// individual somatic mutations through `SigProfilerAssignment.Analyzer.cosmic_fit`.

use super::{parse_or_exit, print_sample_config};
use crate::cli::aliases::no_flags;
use crate::cli::validation::{ensure_output_dir, validate_assignment, AssignmentOptions};
use crate::cli::AssignmentArgs;
use crate::core::call::path_value;
use crate::core::{select_backend, AnalysisBackend, LibraryCall};
use serde_json::Value;
use std::time::Instant;

pub const MODULE: &str = "SigProfilerAssignment.Analyzer";
pub const FUNCTION: &str = "cosmic_fit";

/// Build the `cosmic_fit` call for validated options
pub fn build_call(options: &AssignmentOptions) -> LibraryCall {
    let subgroups: Vec<Value> = options
        .exclude_signature_subgroups
        .iter()
        .map(|s| Value::from(s.as_str()))
        .collect();

    LibraryCall::new(MODULE, FUNCTION)
        .arg(path_value(&options.samples))
        .arg(path_value(&options.output))
        .kwarg("input_type", options.input_type.as_str())
        .kwarg("context_type", options.context_type.as_str())
        .kwarg("exome", options.exome)
        .kwarg("genome_build", options.genome_build.as_str())
        .kwarg("cosmic_version", options.cosmic_version.to_value())
        .kwarg_opt("signature_database", options.signature_database.as_deref().map(path_value))
        .kwarg("exclude_signature_subgroups", subgroups)
        .kwarg("export_probabilities", options.export_probabilities)
        .kwarg(
            "export_probabilities_per_mutation",
            options.export_probabilities_per_mutation,
        )
        .kwarg("make_plots", options.make_plots)
        .kwarg_opt(
            "sample_reconstruction_plots",
            options.sample_reconstruction_plots.map(|f| f.as_str()),
        )
        .kwarg("signatures", Value::Null)
        .kwarg("nnls_add_penalty", options.nnls_add_penalty)
        .kwarg("nnls_remove_penalty", options.nnls_remove_penalty)
        .kwarg("initial_remove_penalty", options.initial_remove_penalty)
        .kwarg("collapse_to_SBS96", options.collapse_to_sbs96)
        .kwarg("connected_sigs", true)
        .kwarg("verbose", options.verbose)
        .kwarg("devopts", Value::Null)
}

/// Create the output folder and hand the call to `backend`
pub fn execute(options: &AssignmentOptions, backend: &dyn AnalysisBackend) -> Result<(), String> {
    if backend.writes_output() {
        ensure_output_dir(&options.output)?;
    }

    println!(
        "🚀 SigProfilerAssignment v{} ({} backend)",
        env!("CARGO_PKG_VERSION"),
        backend.name()
    );
    println!("📂 Samples: {} ({})", options.samples.display(), options.input_type.as_str());
    println!(
        "🧬 Context: {} | COSMIC v{} | {}{}",
        options.context_type.as_str(),
        options.cosmic_version.as_str(),
        options.genome_build.as_str(),
        if options.exome { " (exome)" } else { "" }
    );
    if let Some(db) = &options.signature_database {
        println!("📚 Signature database: {}", db.display());
    }

    let start = Instant::now();
    backend.invoke(&build_call(options))?;

    println!(
        "✅ Signature assignment completed in {:.2}s, results in {}",
        start.elapsed().as_secs_f64(),
        options.output.display()
    );
    Ok(())
}

/// Full command line flow; `argv` excludes the program name
pub fn run(argv: &[String]) -> Result<(), String> {
    if argv.is_empty() {
        no_flags();
        return Ok(());
    }

    let mut args = parse_or_exit(AssignmentArgs::from_argv(argv));

    if args.runtime.generate_config {
        print_sample_config();
        return Ok(());
    }
    if let Some(config_path) = args.runtime.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let options = validate_assignment(&args)?;
    let backend = select_backend(
        args.runtime.python.as_deref(),
        args.runtime.configured_python.as_deref(),
        args.runtime.dry_run,
    )?;
    execute(&options, backend.as_ref())
}
