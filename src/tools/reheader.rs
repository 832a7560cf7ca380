// reheader.rs - Tool to add sample legend to survivor's output

use super::{parse_or_exit, print_sample_config};
use crate::cli::aliases::no_flags;
use crate::cli::validation::{validate_reheader, ReheaderOptions};
use crate::cli::ReheaderArgs;
use crate::vcf::reheader::COMMAND_META_KEY;
use crate::vcf::{add_source_legend, open_input, write_reheadered, VcfHeader, VcfWriter};
use std::time::Instant;

/// Provenance value in the manner of bcftools: command line and UTC date.
/// Control characters are escaped so the value stays on one header line.
pub fn command_meta_value(command_line: &str) -> String {
    let mut escaped = String::with_capacity(command_line.len());
    for c in command_line.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    format!(
        "{}; Date={}",
        escaped,
        chrono::Utc::now().format("%a %b %e %H:%M:%S %Y")
    )
}

/// Read the input header, check it against the source names, then write the
/// reheadered VCF. Nothing is written when validation fails.
pub fn execute(options: &ReheaderOptions, command_line: &str) -> Result<(), String> {
    let start = Instant::now();
    let input_label = options
        .input_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let (mut reader, compressed) = open_input(options.input_file.as_deref())?;
    let mut header = VcfHeader::read_from(&mut reader)
        .map_err(|e| format!("Invalid VCF header in '{}': {}", input_label, e))?;

    if let Some(previous) = header.meta_value(COMMAND_META_KEY) {
        eprintln!("🔁 Input was already reheadered ({}), replacing its legend", previous);
    }

    let command = options
        .command_header
        .then(|| command_meta_value(command_line));
    add_source_legend(&mut header, &options.source_files, command.as_deref())?;

    let mut writer = VcfWriter::create(options.output_file.as_deref())?;
    let gzip_output = writer.is_compressed();
    let stats = write_reheadered(&header, &mut reader, &mut writer, compressed)?;
    writer.finish()?;

    // Status goes to stderr, stdout may be the VCF itself
    if stats.truncated {
        eprintln!(
            "⚠️  Warning: '{}' is truncated, copied the {} records decoded before the end",
            input_label, stats.records
        );
    }
    for (sample, source) in header.samples().iter().zip(&options.source_files) {
        eprintln!("🏷️  {} → {}", sample, source);
    }
    eprintln!(
        "✅ Reheadered {} records ({} bytes) in {:.2}s{}",
        stats.records,
        stats.bytes,
        start.elapsed().as_secs_f64(),
        options
            .output_file
            .as_ref()
            .map(|p| format!(
                ", written to: {}{}",
                p.display(),
                if gzip_output { " (gzip)" } else { "" }
            ))
            .unwrap_or_default()
    );
    Ok(())
}

/// Full command line flow; `argv` excludes the program name
pub fn run(argv: &[String]) -> Result<(), String> {
    if argv.is_empty() {
        no_flags();
        return Ok(());
    }

    let mut args = parse_or_exit(ReheaderArgs::from_argv(argv));

    if args.generate_config {
        print_sample_config();
        return Ok(());
    }
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let options = validate_reheader(&args)?;
    let command_line = std::iter::once("survivor_vcf_reheader")
        .chain(argv.iter().map(String::as_str))
        .collect::<Vec<&str>>()
        .join(" ");
    execute(&options, &command_line)
}
