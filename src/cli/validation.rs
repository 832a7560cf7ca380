// validation.rs - Input validation utilities

use crate::cli::args::{AssignmentArgs, ExtractorArgs, ReheaderArgs, SingleSampleArgs};
use crate::cli::types::{
    ContextType, CosmicVersion, FileType, GenomeBuild, InputType, PlotFormat, ReferenceGenome,
    SignatureSubgroup,
};
use std::fs::create_dir_all;
use std::path::{Component, Path, PathBuf};

const RESTRICTED_EXOME_DIR: &str = "restrictedExome";
const NOT_RESTRICTED_EXOME_DIR: &str = "notRestrictedExome";

/// Validated options for SigProfilerAssignment
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOptions {
    pub samples: PathBuf,
    pub output: PathBuf,
    pub input_type: InputType,
    pub context_type: ContextType,
    pub cosmic_version: CosmicVersion,
    pub exome: bool,
    pub genome_build: GenomeBuild,
    pub signature_database: Option<PathBuf>,
    pub exclude_signature_subgroups: Vec<SignatureSubgroup>,
    pub export_probabilities: bool,
    pub export_probabilities_per_mutation: bool,
    pub make_plots: bool,
    pub sample_reconstruction_plots: Option<PlotFormat>,
    pub nnls_add_penalty: f64,
    pub nnls_remove_penalty: f64,
    pub initial_remove_penalty: f64,
    /// SBS-96 inputs are refitted without collapsing higher contexts
    pub collapse_to_sbs96: bool,
    pub verbose: bool,
}

/// Validated options for SigProfilerExtractor
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorOptions {
    pub input_dir: PathBuf,
    /// Results folder, already suffixed with the exome mode
    pub output_dir: PathBuf,
    pub file_type: FileType,
    pub reference_genome: ReferenceGenome,
    pub minimum_signatures: i64,
    pub maximum_signatures: i64,
    pub nmf_replicates: i64,
    pub cpu: i64,
    pub restrict_to_exome: bool,
    pub make_decomposition_plots: bool,
}

/// Validated options for SigProfilerSingleSample
#[derive(Debug, Clone, PartialEq)]
pub struct SingleSampleOptions {
    pub input_dir: PathBuf,
    /// Results folder, already suffixed with the exome mode
    pub output_dir: PathBuf,
    pub reference_genome: ReferenceGenome,
    pub restrict_to_exome: bool,
}

/// Validated options for the SURVIVOR reheader; sample counts are checked
/// once the input header has been read
#[derive(Debug, Clone, PartialEq)]
pub struct ReheaderOptions {
    /// `None` reads stdin
    pub input_file: Option<PathBuf>,
    /// `None` writes stdout
    pub output_file: Option<PathBuf>,
    pub source_files: Vec<String>,
    pub command_header: bool,
}

/// Resolve `path` against the working directory and drop `.`/`..` components
pub fn absolute_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, String> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err("Empty path".to_string());
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| format!("Failed to resolve working directory: {}", e))?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Append the exome-mode folder used by the extractor and single-sample tools
pub fn exome_results_dir(base: &Path, restrict_to_exome: bool) -> PathBuf {
    if restrict_to_exome {
        base.join(RESTRICTED_EXOME_DIR)
    } else {
        base.join(NOT_RESTRICTED_EXOME_DIR)
    }
}

/// Create `dir` (and parents) unless it already exists
pub fn ensure_output_dir(dir: &Path) -> Result<(), String> {
    if dir.is_dir() {
        return Ok(());
    }
    create_dir_all(dir)
        .map_err(|e| format!("Failed to create output directory '{}': {}", dir.display(), e))?;
    println!("📁 Created output directory: {}", dir.display());
    Ok(())
}

fn validate_penalty(name: &str, value: f64) -> Result<f64, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("--{} must be a non-negative number, got {}", name, value));
    }
    Ok(value)
}

/// Validate SigProfilerAssignment arguments
pub fn validate_assignment(args: &AssignmentArgs) -> Result<AssignmentOptions, String> {
    let samples = args.samples.as_ref().ok_or("--samples is required")?;
    let output = args.output.as_ref().ok_or("--output is required")?;

    if args.export_probabilities_per_mutation && args.input_type != InputType::Vcf {
        return Err(format!(
            "--export_probabilities_per_mutation is only available when input_type is \"vcf\" (got \"{}\")",
            args.input_type.as_str()
        ));
    }

    if args.signature_database.is_some() && !args.exclude_signature_subgroups.is_empty() {
        return Err(
            "--exclude_signature_subgroups is only available with the COSMIC reference signatures, not with --signature_database"
                .to_string(),
        );
    }

    let signature_database = match &args.signature_database {
        Some(path) => Some(absolute_path(path)?),
        None => None,
    };

    Ok(AssignmentOptions {
        samples: absolute_path(samples)?,
        output: absolute_path(output)?,
        input_type: args.input_type,
        context_type: args.context_type,
        cosmic_version: args.cosmic_version,
        exome: args.exome,
        genome_build: args.genome_build,
        signature_database,
        exclude_signature_subgroups: args.exclude_signature_subgroups.clone(),
        export_probabilities: args.export_probabilities,
        export_probabilities_per_mutation: args.export_probabilities_per_mutation,
        make_plots: args.make_plots,
        sample_reconstruction_plots: args.sample_reconstruction_plots,
        nnls_add_penalty: validate_penalty("nnls_add_penalty", args.nnls_add_penalty)?,
        nnls_remove_penalty: validate_penalty("nnls_remove_penalty", args.nnls_remove_penalty)?,
        initial_remove_penalty: validate_penalty(
            "initial_remove_penalty",
            args.initial_remove_penalty,
        )?,
        collapse_to_sbs96: args.context_type == ContextType::Sbs96,
        verbose: args.verbose,
    })
}

/// Validate SigProfilerExtractor arguments
pub fn validate_extractor(args: &ExtractorArgs) -> Result<ExtractorOptions, String> {
    let input_dir = args.input_dir.as_ref().ok_or("--input_dir is required")?;

    if args.minimum_signatures < 1 {
        return Err(format!(
            "the value of the option minimum_signatures must be at least 1, got {}",
            args.minimum_signatures
        ));
    }
    if args.minimum_signatures > args.maximum_signatures {
        return Err(
            "the value of the option minimum_signatures must be smaller than the value of the option maximum_signatures"
                .to_string(),
        );
    }
    if args.nmf_replicates < 1 {
        return Err(format!(
            "the value of the option nmf_replicates must be at least 1, got {}",
            args.nmf_replicates
        ));
    }
    if args.cpu == 0 || args.cpu < -1 {
        return Err(format!("--cpu must be -1 (all cores) or a positive number, got {}", args.cpu));
    }

    let output_base = absolute_path(&args.output_dir)?;

    Ok(ExtractorOptions {
        input_dir: absolute_path(input_dir)?,
        output_dir: exome_results_dir(&output_base, args.restrict_to_exome),
        file_type: args.file_type,
        reference_genome: args.reference_genome,
        minimum_signatures: args.minimum_signatures,
        maximum_signatures: args.maximum_signatures,
        nmf_replicates: args.nmf_replicates,
        cpu: args.cpu,
        restrict_to_exome: args.restrict_to_exome,
        make_decomposition_plots: args.make_decomposition_plots,
    })
}

/// Validate SigProfilerSingleSample arguments
pub fn validate_single_sample(args: &SingleSampleArgs) -> Result<SingleSampleOptions, String> {
    let input_dir = args.input_dir.as_ref().ok_or("--input_dir is required")?;
    let output_base = absolute_path(&args.output_dir)?;

    Ok(SingleSampleOptions {
        input_dir: absolute_path(input_dir)?,
        output_dir: exome_results_dir(&output_base, args.restrict_to_exome),
        reference_genome: args.reference_genome,
        restrict_to_exome: args.restrict_to_exome,
    })
}

/// Validate SURVIVOR reheader arguments
pub fn validate_reheader(args: &ReheaderArgs) -> Result<ReheaderOptions, String> {
    let input_file = args.input_file.as_ref().ok_or("--input_file is required")?;

    if args.source_files.is_empty() {
        return Err("--source_files needs at least one program name".to_string());
    }
    if let Some(bad) = args
        .source_files
        .iter()
        .find(|s| s.trim().is_empty() || s.contains(['\n', '\r']))
    {
        return Err(format!("Invalid source name {:?}", bad));
    }

    let input_file = if input_file == "-" {
        None
    } else {
        Some(absolute_path(input_file)?)
    };
    let output_file = if args.output_file == "-" {
        None
    } else {
        Some(absolute_path(&args.output_file)?)
    };

    if input_file.is_some() && input_file == output_file {
        return Err("--output_file must differ from --input_file".to_string());
    }

    Ok(ReheaderOptions {
        input_file,
        output_file,
        source_files: args.source_files.clone(),
        command_header: !args.no_command_header,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_absolute_path_normalizes() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_path("a/./b/../c").unwrap(), cwd.join("a/c"));
        assert_eq!(absolute_path("/tmp/x/../y").unwrap(), PathBuf::from("/tmp/y"));
        assert_eq!(absolute_path(".").unwrap(), cwd);
        assert!(absolute_path("").is_err());
    }

    #[test]
    fn test_assignment_requires_samples_and_output() {
        let args = AssignmentArgs::from_argv(&argv(&["-O", "out"])).unwrap();
        assert_eq!(validate_assignment(&args).unwrap_err(), "--samples is required");

        let args = AssignmentArgs::from_argv(&argv(&["-S", "muts.txt"])).unwrap();
        assert_eq!(validate_assignment(&args).unwrap_err(), "--output is required");
    }

    #[test]
    fn test_assignment_normalizes_and_derives_collapse() {
        let args = AssignmentArgs::from_argv(&argv(&["-S", "muts", "-O", "out/../res"])).unwrap();
        let options = validate_assignment(&args).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(options.samples, cwd.join("muts"));
        assert_eq!(options.output, cwd.join("res"));
        assert!(options.collapse_to_sbs96);

        let args = AssignmentArgs::from_argv(&argv(&["-S", "m", "-O", "o", "-ct", "1536"])).unwrap();
        assert!(!validate_assignment(&args).unwrap().collapse_to_sbs96);
    }

    #[test]
    fn test_assignment_cross_option_checks() {
        let args = AssignmentArgs::from_argv(&argv(&["-S", "m", "-O", "o", "-it", "matrix", "-eppm"])).unwrap();
        assert!(validate_assignment(&args).is_err());

        let args = AssignmentArgs::from_argv(&argv(&[
            "-S", "m", "-O", "o", "-sdb", "sigs.tsv", "-ess", "UV_signatures",
        ]))
        .unwrap();
        assert!(validate_assignment(&args).is_err());

        let args = AssignmentArgs::from_argv(&argv(&["-S", "m", "-O", "o", "-sdb", "sigs.tsv"])).unwrap();
        let options = validate_assignment(&args).unwrap();
        assert!(options.signature_database.unwrap().is_absolute());

        let args = AssignmentArgs::from_argv(&argv(&["-S", "m", "-O", "o", "--nnls_add_penalty=-0.1"])).unwrap();
        assert!(validate_assignment(&args).is_err());
    }

    #[test]
    fn test_extractor_min_greater_than_max() {
        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "-m", "6", "-M", "5"])).unwrap();
        let err = validate_extractor(&args).unwrap_err();
        assert!(err.contains("minimum_signatures must be smaller"));

        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "-m", "5", "-M", "5"])).unwrap();
        assert!(validate_extractor(&args).is_ok());
    }

    #[test]
    fn test_extractor_rejects_missing_input_and_bad_counts() {
        let args = ExtractorArgs::from_argv(&argv(&["-O", "out"])).unwrap();
        assert_eq!(validate_extractor(&args).unwrap_err(), "--input_dir is required");

        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "-m", "0"])).unwrap();
        assert!(validate_extractor(&args).is_err());

        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "-N", "0"])).unwrap();
        assert!(validate_extractor(&args).is_err());

        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "--cpu", "0"])).unwrap();
        assert!(validate_extractor(&args).is_err());
    }

    #[test]
    fn test_exome_suffix_on_output_dir() {
        let cwd = std::env::current_dir().unwrap();

        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "-O", "res"])).unwrap();
        let options = validate_extractor(&args).unwrap();
        assert_eq!(options.output_dir, cwd.join("res").join("notRestrictedExome"));
        assert_eq!(options.input_dir, cwd.join("vcfs"));

        let args = SingleSampleArgs::from_argv(&argv(&["-I", "vcfs", "-E"])).unwrap();
        let options = validate_single_sample(&args).unwrap();
        assert_eq!(options.output_dir, cwd.join("restrictedExome"));
    }

    #[test]
    fn test_single_sample_requires_input() {
        let args = SingleSampleArgs::from_argv(&argv(&["-E"])).unwrap();
        assert_eq!(validate_single_sample(&args).unwrap_err(), "--input_dir is required");
    }

    #[test]
    fn test_reheader_validation() {
        let args = ReheaderArgs::from_argv(&argv(&["-O", "out.vcf"])).unwrap();
        assert_eq!(validate_reheader(&args).unwrap_err(), "--input_file is required");

        let args = ReheaderArgs::from_argv(&argv(&["-I", "-"])).unwrap();
        let options = validate_reheader(&args).unwrap();
        assert!(options.input_file.is_none());
        assert!(options.output_file.is_none());
        assert!(options.command_header);

        let args = ReheaderArgs::from_argv(&argv(&["-I", "a.vcf", "-O", "./a.vcf"])).unwrap();
        assert!(validate_reheader(&args).is_err());

        let args = ReheaderArgs::from_argv(&argv(&["-I", "a.vcf", "-S", " "])).unwrap();
        assert!(validate_reheader(&args).is_err());
    }

    #[test]
    fn test_ensure_output_dir_creates_nested() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("a").join("b");
        ensure_output_dir(&target).unwrap();
        assert!(target.is_dir());
        ensure_output_dir(&target).unwrap();
    }
}
