// args.rs - Command line arguments definition

use crate::cli::aliases::expand_short_aliases;
use crate::cli::types::{
    ContextType, CosmicVersion, FileType, GenomeBuild, InputType, PlotFormat, ReferenceGenome,
    SignatureSubgroup,
};
use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, Parser};
use std::collections::HashSet;

/// Source names used when `--source_files` is not given
pub const DEFAULT_SOURCE_FILES: [&str; 3] = ["Delly_v0.8.1", "Lumpy_v0.3.0", "Manta_v1.4.0"];

pub const DEFAULT_NNLS_ADD_PENALTY: f64 = 0.05;
pub const DEFAULT_NNLS_REMOVE_PENALTY: f64 = 0.01;
pub const DEFAULT_INITIAL_REMOVE_PENALTY: f64 = 0.05;

/// Options shared by the tools that hand work to the Python backend
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RuntimeArgs {
    /// PATH TOML configuration file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// BOOL Print a sample configuration file and exit
    #[arg(long = "generate_config")]
    pub generate_config: bool,

    /// PATH Python interpreter with the SigProfiler packages installed
    /// (default: $SIGTOOLS_PYTHON, then python3)
    #[arg(long = "python", value_name = "PATH")]
    pub python: Option<String>,

    /// BOOL Print the library call instead of running it
    #[arg(long = "dry_run")]
    pub dry_run: bool,

    /// Interpreter from the config file, below $SIGTOOLS_PYTHON in precedence
    #[arg(skip)]
    pub configured_python: Option<String>,
}

/// Ids of the options typed on the command line, as opposed to clap defaults
fn given_on_cli(matches: &ArgMatches) -> HashSet<String> {
    matches
        .ids()
        .filter(|id| matches.value_source(id.as_str()) == Some(ValueSource::CommandLine))
        .map(|id| id.to_string())
        .collect()
}

/// Parse `argv` (without the program name) after expanding multi-letter short flags
fn parse_with_aliases<T: Parser>(
    program: &str,
    argv: &[String],
    aliases: &[(&str, &str)],
) -> Result<(T, HashSet<String>), clap::Error> {
    let mut full_args = vec![program.to_string()];
    full_args.extend(expand_short_aliases(argv, aliases));

    let mut matches = T::command().try_get_matches_from(full_args)?;
    let given = given_on_cli(&matches);
    let parsed = T::from_arg_matches_mut(&mut matches)?;
    Ok((parsed, given))
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sigprofilerassignment",
    about = "Enables assignment of previously known mutational signatures to individual samples and individual somatic mutations.",
    override_usage = "SigProfilerTools SigProfilerAssignment [options]"
)]
pub struct AssignmentArgs {
    /// PATH Path to the input somatic mutations file (if using segmentation
    /// file/mutational matrix) or input folder (mutation calling file/s).
    #[arg(short = 'S', long = "samples", value_name = "PATH", help_heading = "Mandatory arguments")]
    pub samples: Option<String>,

    /// PATH Path to the output folder.
    #[arg(short = 'O', long = "output", value_name = "PATH", help_heading = "Mandatory arguments")]
    pub output: Option<String>,

    /// STR Accepted input types. [-it]
    #[arg(long = "input_type", value_enum, default_value_t = InputType::Vcf)]
    pub input_type: InputType,

    /// STR Required context type if input_type is "vcf". context_type takes which
    /// context type of the input data is considered for assignment. [-ct]
    #[arg(long = "context_type", value_enum, default_value_t = ContextType::Sbs96)]
    pub context_type: ContextType,

    /// FLOAT Defines the version of the COSMIC reference signatures. [-cv]
    #[arg(long = "cosmic_version", value_enum, default_value_t = CosmicVersion::V3_3)]
    pub cosmic_version: CosmicVersion,

    /// BOOL Defines if the exome renormalized COSMIC signatures will be used.
    #[arg(short = 'E', long = "exome")]
    pub exome: bool,

    /// STR The reference genome build, used for select the appropriate version of
    /// the COSMIC reference signatures, as well as processing the mutation calling file/s. [-gb]
    #[arg(long = "genome_build", value_enum, default_value_t = GenomeBuild::GRCh37)]
    pub genome_build: GenomeBuild,

    /// PATH Path to the input set of known mutational signatures (only in case that
    /// COSMIC reference signatures are not used), a tab delimited file that contains
    /// the signature matrix where the rows are mutation types and columns are
    /// signature IDs. [-sdb]
    #[arg(long = "signature_database", value_name = "PATH")]
    pub signature_database: Option<String>,

    /// LIST Removes the signatures corresponding to specific subtypes to improve
    /// refitting (only available when using default COSMIC reference signatures). [-ess]
    #[arg(long = "exclude_signature_subgroups", value_enum, num_args = 1..)]
    pub exclude_signature_subgroups: Vec<SignatureSubgroup>,

    /// BOOL Disables the probability matrix per mutational context for all samples
    /// (created by default). [-ep]
    #[arg(long = "export_probabilities", action = ArgAction::SetFalse)]
    pub export_probabilities: bool,

    /// BOOL Defines if the probability matrices per mutation for all samples are
    /// created. Only available when input_type is "vcf". [-eppm]
    #[arg(long = "export_probabilities_per_mutation")]
    pub export_probabilities_per_mutation: bool,

    /// BOOL Disables making and saving plots (enabled by default).
    #[arg(short = 'P', long = "make_plots", action = ArgAction::SetFalse)]
    pub make_plots: bool,

    /// STR Select the output format for sample reconstruction plots. [-srp]
    #[arg(long = "sample_reconstruction_plots", value_enum)]
    pub sample_reconstruction_plots: Option<PlotFormat>,

    /// FLOAT Penalty applied when adding a signature during NNLS refitting.
    #[arg(long = "nnls_add_penalty", default_value_t = DEFAULT_NNLS_ADD_PENALTY)]
    pub nnls_add_penalty: f64,

    /// FLOAT Penalty applied when removing a signature during NNLS refitting.
    #[arg(long = "nnls_remove_penalty", default_value_t = DEFAULT_NNLS_REMOVE_PENALTY)]
    pub nnls_remove_penalty: f64,

    /// FLOAT Penalty applied in the initial signature removal round.
    #[arg(long = "initial_remove_penalty", default_value_t = DEFAULT_INITIAL_REMOVE_PENALTY)]
    pub initial_remove_penalty: f64,

    /// BOOL Prints detailed statements.
    #[arg(short = 'V', long = "verbose")]
    pub verbose: bool,

    #[command(flatten)]
    pub runtime: RuntimeArgs,

    /// Options given on the command line; a config file never overrides these
    #[arg(skip)]
    pub given: HashSet<String>,
}

impl AssignmentArgs {
    pub const SHORT_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("-it", "--input_type"),
        ("-ct", "--context_type"),
        ("-cv", "--cosmic_version"),
        ("-gb", "--genome_build"),
        ("-sdb", "--signature_database"),
        ("-ess", "--exclude_signature_subgroups"),
        ("-ep", "--export_probabilities"),
        ("-eppm", "--export_probabilities_per_mutation"),
        ("-srp", "--sample_reconstruction_plots"),
    ];

    pub fn from_argv(argv: &[String]) -> Result<Self, clap::Error> {
        let (mut args, given) =
            parse_with_aliases::<Self>("sigprofilerassignment", argv, Self::SHORT_ALIASES)?;
        args.given = given;
        Ok(args)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sigprofilerextractor",
    version,
    about = "Script to use SigProfilerExtractor",
    override_usage = "sigprofilerextractor [options]"
)]
pub struct ExtractorArgs {
    /// PATH Path to the input files
    #[arg(short = 'I', long = "input_dir", value_name = "PATH", help_heading = "Mandatory arguments")]
    pub input_dir: Option<String>,

    /// PATH Path to the results folder. Results are written to its
    /// restrictedExome or notRestrictedExome subfolder, not next to the inputs
    #[arg(short = 'O', long = "output_dir", value_name = "PATH", default_value = ".")]
    pub output_dir: String,

    /// STR Type of input files
    #[arg(short = 'T', long = "file_type", value_enum, default_value_t = FileType::Vcf)]
    pub file_type: FileType,

    /// STR Reference genome to use
    #[arg(short = 'G', long = "reference_genome", value_enum, default_value_t = ReferenceGenome::GRCh37)]
    pub reference_genome: ReferenceGenome,

    /// INT Minimum number of signatures to extract
    #[arg(short = 'm', long = "minimum_signatures", default_value_t = 1, allow_negative_numbers = true)]
    pub minimum_signatures: i64,

    /// INT Maximum number of signatures to extract
    #[arg(short = 'M', long = "maximum_signatures", default_value_t = 5, allow_negative_numbers = true)]
    pub maximum_signatures: i64,

    /// INT Number of replicates
    #[arg(short = 'N', long = "nmf_replicates", default_value_t = 100, allow_negative_numbers = true)]
    pub nmf_replicates: i64,

    /// INT Number of processor cores to use (-1 uses all of them)
    #[arg(long = "cpu", default_value_t = -1, allow_negative_numbers = true)]
    pub cpu: i64,

    /// BOOL Restrict analysis to exome
    #[arg(short = 'E', long = "restrict_to_exome")]
    pub restrict_to_exome: bool,

    /// BOOL Make decomposition plots
    #[arg(short = 'P', long = "make_decomposition_plots")]
    pub make_decomposition_plots: bool,

    #[command(flatten)]
    pub runtime: RuntimeArgs,

    /// Options given on the command line; a config file never overrides these
    #[arg(skip)]
    pub given: HashSet<String>,
}

impl ExtractorArgs {
    pub fn from_argv(argv: &[String]) -> Result<Self, clap::Error> {
        let (mut args, given) = parse_with_aliases::<Self>("sigprofilerextractor", argv, &[])?;
        args.given = given;
        Ok(args)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sigprofilersinglesample",
    version,
    about = "Script to use SigProfilerSingleSample",
    override_usage = "sigprofilersinglesample [options]"
)]
pub struct SingleSampleArgs {
    /// PATH Path to the input files
    #[arg(short = 'I', long = "input_dir", value_name = "PATH", help_heading = "Mandatory arguments")]
    pub input_dir: Option<String>,

    /// PATH Path to the results folder. Results are written to its
    /// restrictedExome or notRestrictedExome subfolder, not next to the inputs
    #[arg(short = 'O', long = "output_dir", value_name = "PATH", default_value = ".")]
    pub output_dir: String,

    /// STR Reference genome to use
    #[arg(short = 'G', long = "reference_genome", value_enum, default_value_t = ReferenceGenome::GRCh37)]
    pub reference_genome: ReferenceGenome,

    /// BOOL Restrict analysis to exome
    #[arg(short = 'E', long = "restrict_to_exome")]
    pub restrict_to_exome: bool,

    /// BOOL Print options values and exit
    #[arg(short = 'D', long = "debug")]
    pub debug: bool,

    #[command(flatten)]
    pub runtime: RuntimeArgs,

    /// Options given on the command line; a config file never overrides these
    #[arg(skip)]
    pub given: HashSet<String>,
}

impl SingleSampleArgs {
    pub fn from_argv(argv: &[String]) -> Result<Self, clap::Error> {
        let (mut args, given) = parse_with_aliases::<Self>("sigprofilersinglesample", argv, &[])?;
        args.given = given;
        Ok(args)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "survivor_vcf_reheader",
    version,
    about = "Tool to add sample legend to survivor's output",
    override_usage = "survivor_vcf_reheader [options]"
)]
pub struct ReheaderArgs {
    /// FILE Survivor's output file ('-' reads stdin)
    #[arg(short = 'I', long = "input_file", value_name = "FILE")]
    pub input_file: Option<String>,

    /// FILE New output file name ('-' writes stdout, '.gz' compresses)
    #[arg(short = 'O', long = "output_file", value_name = "FILE", default_value = "-")]
    pub output_file: String,

    /// STR Name and versions of the programs, one per sample column
    #[arg(
        short = 'S',
        long = "source_files",
        num_args = 1..,
        default_values_t = DEFAULT_SOURCE_FILES.map(String::from)
    )]
    pub source_files: Vec<String>,

    /// BOOL Do not record the reheader command line in the output header
    #[arg(long = "no_command_header")]
    pub no_command_header: bool,

    /// PATH TOML configuration file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// BOOL Print a sample configuration file and exit
    #[arg(long = "generate_config")]
    pub generate_config: bool,

    /// Options given on the command line; a config file never overrides these
    #[arg(skip)]
    pub given: HashSet<String>,
}

impl ReheaderArgs {
    pub fn from_argv(argv: &[String]) -> Result<Self, clap::Error> {
        let (mut args, given) = parse_with_aliases::<Self>("survivor_vcf_reheader", argv, &[])?;
        args.given = given;
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assignment_defaults() {
        let args = AssignmentArgs::from_argv(&argv(&["-S", "muts", "-O", "out"])).unwrap();
        assert_eq!(args.samples.as_deref(), Some("muts"));
        assert_eq!(args.input_type, InputType::Vcf);
        assert_eq!(args.context_type, ContextType::Sbs96);
        assert_eq!(args.cosmic_version, CosmicVersion::V3_3);
        assert_eq!(args.genome_build, GenomeBuild::GRCh37);
        assert!(args.export_probabilities);
        assert!(args.make_plots);
        assert!(!args.exome);
        assert!(args.exclude_signature_subgroups.is_empty());
        assert!(args.sample_reconstruction_plots.is_none());
        assert_eq!(args.nnls_remove_penalty, DEFAULT_NNLS_REMOVE_PENALTY);
    }

    #[test]
    fn test_assignment_short_aliases_and_inverted_flags() {
        let args = AssignmentArgs::from_argv(&argv(&[
            "-S", "muts", "-it", "seg:FACETS", "-ct", "ID", "-cv", "3.1", "-ep", "-P",
            "-ess", "UV_signatures", "Tobacco_signatures", "-srp", "png",
        ]))
        .unwrap();
        assert_eq!(args.input_type, InputType::SegFacets);
        assert_eq!(args.context_type, ContextType::Id);
        assert_eq!(args.cosmic_version, CosmicVersion::V3_1);
        assert!(!args.export_probabilities);
        assert!(!args.make_plots);
        assert_eq!(
            args.exclude_signature_subgroups,
            vec![SignatureSubgroup::Uv, SignatureSubgroup::Tobacco]
        );
        assert_eq!(args.sample_reconstruction_plots, Some(PlotFormat::Png));
    }

    #[test]
    fn test_assignment_rejects_unknown_choice() {
        assert!(AssignmentArgs::from_argv(&argv(&["-S", "x", "-gb", "hg19"])).is_err());
        assert!(AssignmentArgs::from_argv(&argv(&["-S", "x", "-cv", "4"])).is_err());
    }

    #[test]
    fn test_extractor_defaults_and_negative_numbers() {
        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "-m", "-2"])).unwrap();
        assert_eq!(args.output_dir, ".");
        assert_eq!(args.minimum_signatures, -2);
        assert_eq!(args.maximum_signatures, 5);
        assert_eq!(args.nmf_replicates, 100);
        assert_eq!(args.cpu, -1);
        assert_eq!(args.reference_genome, ReferenceGenome::GRCh37);
    }

    #[test]
    fn test_single_sample_flags() {
        let args = SingleSampleArgs::from_argv(&argv(&["-I", "vcfs", "-E", "-D", "-G", "GRCh38"])).unwrap();
        assert!(args.restrict_to_exome);
        assert!(args.debug);
        assert_eq!(args.reference_genome, ReferenceGenome::GRCh38);
    }

    #[test]
    fn test_reheader_source_defaults() {
        let args = ReheaderArgs::from_argv(&argv(&["-I", "merged.vcf"])).unwrap();
        assert_eq!(args.output_file, "-");
        assert_eq!(args.source_files, DEFAULT_SOURCE_FILES.map(String::from));
        assert!(!args.given.contains("source_files"));

        let args = ReheaderArgs::from_argv(&argv(&["-I", "merged.vcf", "-S", "a", "b"])).unwrap();
        assert_eq!(args.source_files, vec!["a".to_string(), "b".to_string()]);
        assert!(args.given.contains("source_files"));
    }

    #[test]
    fn test_output_dir_help_names_exome_subfolders() {
        use clap::CommandFactory;

        for mut command in [ExtractorArgs::command(), SingleSampleArgs::command()] {
            let help = command.render_long_help().to_string();
            assert!(help.contains("notRestrictedExome"), "{}", help);
            assert!(help.contains("not next to the inputs"), "{}", help);
        }
    }
}
