// merge.rs - Merge configuration file with CLI arguments
//
// CLI values take precedence. A config value is only applied to options that
// were not typed on the command line.

use crate::cli::args::{AssignmentArgs, ExtractorArgs, ReheaderArgs, RuntimeArgs, SingleSampleArgs};
use crate::cli::config::{Config, RuntimeConfig};
use std::collections::HashSet;

/// Fill `target` from `value` unless option `id` was given on the command line
fn fill_unless_given<T>(given: &HashSet<String>, id: &str, target: &mut T, value: Option<T>) {
    if given.contains(id) {
        return;
    }
    if let Some(value) = value {
        *target = value;
    }
}

/// Switch on `flag` when the config enables it
fn fill_switch(flag: &mut bool, value: Option<bool>) {
    if !*flag && value.unwrap_or(false) {
        *flag = true;
    }
}

impl RuntimeArgs {
    pub fn merge_with_config(mut self, config: RuntimeConfig) -> Self {
        self.configured_python = config.python;
        fill_switch(&mut self.dry_run, config.dry_run);
        self
    }
}

impl AssignmentArgs {
    /// Merge with configuration from file
    pub fn merge_with_config(mut self, config: Config) -> Self {
        let section = config.assignment;
        let given = &self.given;

        // Input/Output
        if self.samples.is_none() {
            self.samples = section.samples;
        }
        if self.output.is_none() {
            self.output = section.output;
        }
        if self.signature_database.is_none() {
            self.signature_database = section.signature_database;
        }

        // Choices
        fill_unless_given(given, "input_type", &mut self.input_type, section.input_type);
        fill_unless_given(given, "context_type", &mut self.context_type, section.context_type);
        fill_unless_given(
            given,
            "cosmic_version",
            &mut self.cosmic_version,
            section.cosmic_version,
        );
        fill_unless_given(given, "genome_build", &mut self.genome_build, section.genome_build);
        if self.sample_reconstruction_plots.is_none() {
            self.sample_reconstruction_plots = section.sample_reconstruction_plots;
        }
        if self.exclude_signature_subgroups.is_empty() {
            self.exclude_signature_subgroups = section.exclude_signature_subgroups.unwrap_or_default();
        }

        // Penalties
        fill_unless_given(
            given,
            "nnls_add_penalty",
            &mut self.nnls_add_penalty,
            section.nnls_add_penalty,
        );
        fill_unless_given(
            given,
            "nnls_remove_penalty",
            &mut self.nnls_remove_penalty,
            section.nnls_remove_penalty,
        );
        fill_unless_given(
            given,
            "initial_remove_penalty",
            &mut self.initial_remove_penalty,
            section.initial_remove_penalty,
        );

        // Flags that default to on can only be switched off by the config
        fill_unless_given(
            given,
            "export_probabilities",
            &mut self.export_probabilities,
            section.export_probabilities,
        );
        fill_unless_given(given, "make_plots", &mut self.make_plots, section.make_plots);
        fill_switch(&mut self.exome, section.exome);
        fill_switch(
            &mut self.export_probabilities_per_mutation,
            section.export_probabilities_per_mutation,
        );
        fill_switch(&mut self.verbose, section.verbose);

        self.runtime = self.runtime.merge_with_config(config.runtime);
        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

impl ExtractorArgs {
    /// Merge with configuration from file
    pub fn merge_with_config(mut self, config: Config) -> Self {
        let section = config.extractor;
        let given = &self.given;

        if self.input_dir.is_none() {
            self.input_dir = section.input_dir;
        }
        fill_unless_given(given, "output_dir", &mut self.output_dir, section.output_dir);
        fill_unless_given(given, "file_type", &mut self.file_type, section.file_type);
        fill_unless_given(
            given,
            "reference_genome",
            &mut self.reference_genome,
            section.reference_genome,
        );
        fill_unless_given(
            given,
            "minimum_signatures",
            &mut self.minimum_signatures,
            section.minimum_signatures,
        );
        fill_unless_given(
            given,
            "maximum_signatures",
            &mut self.maximum_signatures,
            section.maximum_signatures,
        );
        fill_unless_given(
            given,
            "nmf_replicates",
            &mut self.nmf_replicates,
            section.nmf_replicates,
        );
        fill_unless_given(given, "cpu", &mut self.cpu, section.cpu);
        fill_switch(&mut self.restrict_to_exome, section.restrict_to_exome);
        fill_switch(&mut self.make_decomposition_plots, section.make_decomposition_plots);

        self.runtime = self.runtime.merge_with_config(config.runtime);
        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

impl SingleSampleArgs {
    /// Merge with configuration from file
    pub fn merge_with_config(mut self, config: Config) -> Self {
        let section = config.single_sample;
        let given = &self.given;

        if self.input_dir.is_none() {
            self.input_dir = section.input_dir;
        }
        fill_unless_given(given, "output_dir", &mut self.output_dir, section.output_dir);
        fill_unless_given(
            given,
            "reference_genome",
            &mut self.reference_genome,
            section.reference_genome,
        );
        fill_switch(&mut self.restrict_to_exome, section.restrict_to_exome);

        self.runtime = self.runtime.merge_with_config(config.runtime);
        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

impl ReheaderArgs {
    /// Merge with configuration from file
    pub fn merge_with_config(mut self, config: Config) -> Self {
        let section = config.reheader;
        let given = &self.given;

        if self.input_file.is_none() {
            self.input_file = section.input_file;
        }
        fill_unless_given(given, "output_file", &mut self.output_file, section.output_file);
        fill_unless_given(given, "source_files", &mut self.source_files, section.source_files);
        fill_switch(&mut self.no_command_header, section.no_command_header);

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{ContextType, GenomeBuild, ReferenceGenome, SignatureSubgroup};

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_values_win_over_config() {
        let config = Config::from_toml_str(
            r#"
            [runtime]
            python = "/opt/conda/bin/python"

            [assignment]
            samples = "from_config"
            output = "results"
            genome_build = "GRCh38"
            context_type = "ID"
            make_plots = false
            exclude_signature_subgroups = ["UV_signatures"]
            "#,
        )
        .unwrap();

        let args = AssignmentArgs::from_argv(&argv(&["-S", "from_cli", "-ct", "288"]))
            .unwrap()
            .merge_with_config(config);

        assert_eq!(args.samples.as_deref(), Some("from_cli"));
        assert_eq!(args.output.as_deref(), Some("results"));
        assert_eq!(args.genome_build, GenomeBuild::GRCh38);
        assert_eq!(args.context_type, ContextType::Sbs288);
        assert!(!args.make_plots);
        assert_eq!(args.exclude_signature_subgroups, vec![SignatureSubgroup::Uv]);
        assert!(args.runtime.python.is_none());
        assert_eq!(args.runtime.configured_python.as_deref(), Some("/opt/conda/bin/python"));
    }

    #[test]
    fn test_extractor_config_fills_defaults_only() {
        let config = Config::from_toml_str(
            "[extractor]\ninput_dir = \"vcfs\"\nminimum_signatures = 3\nmaximum_signatures = 10\nrestrict_to_exome = true\n",
        )
        .unwrap();

        let args = ExtractorArgs::from_argv(&argv(&["-M", "8"]))
            .unwrap()
            .merge_with_config(config);

        assert_eq!(args.input_dir.as_deref(), Some("vcfs"));
        assert_eq!(args.minimum_signatures, 3);
        assert_eq!(args.maximum_signatures, 8);
        assert!(args.restrict_to_exome);
    }

    #[test]
    fn test_reheader_sources_from_config() {
        let config = Config::from_toml_str(
            "[reheader]\nsource_files = [\"Sniffles\", \"cuteSV\"]\noutput_file = \"out.vcf\"\n",
        )
        .unwrap();

        let args = ReheaderArgs::from_argv(&argv(&["-I", "in.vcf"]))
            .unwrap()
            .merge_with_config(config.clone());
        assert_eq!(args.source_files, vec!["Sniffles".to_string(), "cuteSV".to_string()]);
        assert_eq!(args.output_file, "out.vcf");

        let args = ReheaderArgs::from_argv(&argv(&["-I", "in.vcf", "-S", "Delly"]))
            .unwrap()
            .merge_with_config(config);
        assert_eq!(args.source_files, vec!["Delly".to_string()]);
    }

    #[test]
    fn test_single_sample_merge() {
        let config = Config::from_toml_str(
            "[single_sample]\ninput_dir = \"in\"\noutput_dir = \"out\"\n[runtime]\ndry_run = true\n",
        )
        .unwrap();
        let args = SingleSampleArgs::from_argv(&argv(&["-G", "GRCh38"]))
            .unwrap()
            .merge_with_config(config);
        assert_eq!(args.input_dir.as_deref(), Some("in"));
        assert_eq!(args.output_dir, "out");
        assert_eq!(args.reference_genome, ReferenceGenome::GRCh38);
        assert!(args.runtime.dry_run);
    }

    #[test]
    fn test_explicit_default_value_beats_config() {
        let config = Config::from_toml_str(
            "[extractor]\nreference_genome = \"GRCh38\"\nminimum_signatures = 3\n[reheader]\nsource_files = [\"Sniffles\"]\n",
        )
        .unwrap();

        let args = ExtractorArgs::from_argv(&argv(&["-I", "vcfs", "-G", "GRCh37", "-m", "1"]))
            .unwrap()
            .merge_with_config(config.clone());
        assert_eq!(args.reference_genome, ReferenceGenome::GRCh37);
        assert_eq!(args.minimum_signatures, 1);

        let args = ReheaderArgs::from_argv(&argv(&[
            "-I",
            "in.vcf",
            "-S",
            "Delly_v0.8.1",
            "Lumpy_v0.3.0",
            "Manta_v1.4.0",
        ]))
        .unwrap()
        .merge_with_config(config);
        assert_eq!(args.source_files.len(), 3);
    }
}
