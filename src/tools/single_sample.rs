// single_sample.rs - SigProfilerSingleSample wrapper

use super::{parse_or_exit, print_sample_config};
use crate::cli::aliases::no_flags;
use crate::cli::validation::{ensure_output_dir, validate_single_sample, SingleSampleOptions};
use crate::cli::SingleSampleArgs;
use crate::core::call::path_value;
use crate::core::{select_backend, AnalysisBackend, LibraryCall};
use std::time::Instant;

pub const MODULE: &str = "sigproSS.spss";
pub const FUNCTION: &str = "single_sample";

pub fn build_call(options: &SingleSampleOptions) -> LibraryCall {
    LibraryCall::new(MODULE, FUNCTION)
        .arg(path_value(&options.input_dir))
        .arg(path_value(&options.output_dir))
        .kwarg("ref", options.reference_genome.as_str())
        .kwarg("exome", options.restrict_to_exome)
}

pub fn execute(options: &SingleSampleOptions, backend: &dyn AnalysisBackend) -> Result<(), String> {
    if backend.writes_output() {
        ensure_output_dir(&options.output_dir)?;
    }

    println!(
        "🚀 SigProfilerSingleSample v{} ({} backend)",
        env!("CARGO_PKG_VERSION"),
        backend.name()
    );
    println!("📂 Input: {}", options.input_dir.display());

    let start = Instant::now();
    backend.invoke(&build_call(options))?;

    println!(
        "✅ Single-sample fitting completed in {:.2}s, results in {}",
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

    let mut args = parse_or_exit(SingleSampleArgs::from_argv(argv));

    if args.runtime.generate_config {
        print_sample_config();
        return Ok(());
    }
    if let Some(config_path) = args.runtime.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let options = validate_single_sample(&args)?;

    // --debug: show what would be used and stop before touching anything
    if args.debug {
        println!("{:#?}", options);
        return Ok(());
    }

    let backend = select_backend(
        args.runtime.python.as_deref(),
        args.runtime.configured_python.as_deref(),
        args.runtime.dry_run,
    )?;
    execute(&options, backend.as_ref())
}
