// config.rs - Configuration file support

use crate::cli::types::{
    ContextType, CosmicVersion, FileType, GenomeBuild, InputType, PlotFormat, ReferenceGenome,
    SignatureSubgroup,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by every tool that runs the Python backend
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    pub python: Option<String>,
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssignmentConfig {
    pub samples: Option<String>,
    pub output: Option<String>,
    pub input_type: Option<InputType>,
    pub context_type: Option<ContextType>,
    pub cosmic_version: Option<CosmicVersion>,
    pub exome: Option<bool>,
    pub genome_build: Option<GenomeBuild>,
    pub signature_database: Option<String>,
    pub exclude_signature_subgroups: Option<Vec<SignatureSubgroup>>,
    pub export_probabilities: Option<bool>,
    pub export_probabilities_per_mutation: Option<bool>,
    pub make_plots: Option<bool>,
    pub sample_reconstruction_plots: Option<PlotFormat>,
    pub nnls_add_penalty: Option<f64>,
    pub nnls_remove_penalty: Option<f64>,
    pub initial_remove_penalty: Option<f64>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
    pub file_type: Option<FileType>,
    pub reference_genome: Option<ReferenceGenome>,
    pub minimum_signatures: Option<i64>,
    pub maximum_signatures: Option<i64>,
    pub nmf_replicates: Option<i64>,
    pub cpu: Option<i64>,
    pub restrict_to_exome: Option<bool>,
    pub make_decomposition_plots: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SingleSampleConfig {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
    pub reference_genome: Option<ReferenceGenome>,
    pub restrict_to_exome: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReheaderConfig {
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    pub source_files: Option<Vec<String>>,
    pub no_command_header: Option<bool>,
}

/// Contents of a `sigtools.toml` file, one optional table per tool
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub runtime: RuntimeConfig,
    pub assignment: AssignmentConfig,
    pub extractor: ExtractorConfig,
    pub single_sample: SingleSampleConfig,
    pub reheader: ReheaderConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        // stderr: the reheader may be streaming a VCF on stdout
        eprintln!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# sigtools.toml - Configuration file for the sigtools command line wrappers
# Command line arguments will override these settings

# =============================================================================
# RUNTIME (sigprofilerassignment, sigprofilerextractor, sigprofilersinglesample)
# =============================================================================
[runtime]

# Python interpreter with SigProfilerAssignment, SigProfilerExtractor and
# sigproSS installed. --python and $SIGTOOLS_PYTHON take precedence
# python = "/opt/conda/bin/python"

# Print the library call instead of running it
dry_run = false

# =============================================================================
# SIGPROFILERASSIGNMENT
# =============================================================================
[assignment]

# Input somatic mutations file or folder of mutation calling files
# samples = "/path/to/vcfs"

# Output folder (created if missing)
# output = "/path/to/results"

# vcf, seg:ASCAT, seg:ASCAT_NGS, seg:SEQUENZA, seg:ABSOLUTE, seg:BATTENBERG,
# seg:FACETS, seg:PURPLE, seg:TCGA, matrix
input_type = "vcf"

# 96, 288, 1536, DINUC, ID
context_type = "96"

# 1, 2, 3, 3.1, 3.2, 3.3
cosmic_version = "3.3"

# GRCh37, GRCh38, mm9, mm10, rn6
genome_build = "GRCh37"

exome = false

# Custom signature matrix instead of the COSMIC reference signatures
# signature_database = "/path/to/signatures.tsv"

# exclude_signature_subgroups = ["UV_signatures", "Tobacco_signatures"]

export_probabilities = true
export_probabilities_per_mutation = false
make_plots = true

# pdf, png, both
# sample_reconstruction_plots = "pdf"

nnls_add_penalty = 0.05
nnls_remove_penalty = 0.01
initial_remove_penalty = 0.05

verbose = false

# =============================================================================
# SIGPROFILEREXTRACTOR
# =============================================================================
[extractor]

# input_dir = "/path/to/vcfs"
output_dir = "."
file_type = "vcf"

# GRCh37, GRCh38
reference_genome = "GRCh37"

minimum_signatures = 1
maximum_signatures = 5
nmf_replicates = 100

# -1 uses every core
cpu = -1

restrict_to_exome = false
make_decomposition_plots = false

# =============================================================================
# SIGPROFILERSINGLESAMPLE
# =============================================================================
[single_sample]

# input_dir = "/path/to/vcfs"
output_dir = "."
reference_genome = "GRCh37"
restrict_to_exome = false

# =============================================================================
# SURVIVOR VCF REHEADER
# =============================================================================
[reheader]

# input_file = "merged.vcf"

# '-' writes to stdout, a '.gz' suffix compresses the output
output_file = "-"

# One name per sample column, in column order
source_files = ["Delly_v0.8.1", "Lumpy_v0.3.0", "Manta_v1.4.0"]

no_command_header = false
"#
        .to_string()
    }
}
