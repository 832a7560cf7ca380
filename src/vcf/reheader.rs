// reheader.rs - Sample legend for SURVIVOR merged VCFs
//
// SURVIVOR names each sample column after the input callset. The legend adds
// one `##<sample>_source=<program>` line per column so the caller behind each
// column is recorded in the file itself.

use super::header::VcfHeader;
use super::io::{copy_records, CopyStats};
use std::io::{BufRead, Write};

/// Meta key of the provenance line
pub const COMMAND_META_KEY: &str = "sigtools_reheaderCommand";

/// Meta key recording the program behind `sample`
pub fn source_key(sample: &str) -> String {
    format!("{}_source", sample)
}

/// Check that every sample column gets exactly one source name
pub fn check_sample_count(header: &VcfHeader, source_files: &[String]) -> Result<(), String> {
    let samples = header.samples().len();
    if samples != source_files.len() {
        return Err(format!(
            "Number of samples and input files must be the same ({} samples in header: {}; {} source names: {})",
            samples,
            header.samples().join(", "),
            source_files.len(),
            source_files.join(", ")
        ));
    }
    Ok(())
}

/// Add the source legend (and optional provenance line) to `header`
pub fn add_source_legend(
    header: &mut VcfHeader,
    source_files: &[String],
    command: Option<&str>,
) -> Result<(), String> {
    check_sample_count(header, source_files)?;

    let keys: Vec<String> = header.samples().iter().map(|s| source_key(s)).collect();
    for (key, source) in keys.iter().zip(source_files) {
        header.add_meta(key, source);
    }
    if let Some(command) = command {
        header.add_meta(COMMAND_META_KEY, command);
    }
    Ok(())
}

/// Write the rewritten header and stream the records that follow it in `reader`
pub fn write_reheadered<R: BufRead + ?Sized, W: Write + ?Sized>(
    header: &VcfHeader,
    reader: &mut R,
    writer: &mut W,
    compressed_input: bool,
) -> Result<CopyStats, String> {
    header.write_to(writer)?;
    copy_records(reader, writer, compressed_input)
}
