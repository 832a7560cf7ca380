// types.rs - Accepted choices for the signature tool options

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input data accepted by SigProfilerAssignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum InputType {
    #[value(name = "vcf")]
    #[serde(rename = "vcf")]
    Vcf,
    #[value(name = "seg:ASCAT")]
    #[serde(rename = "seg:ASCAT")]
    SegAscat,
    #[value(name = "seg:ASCAT_NGS")]
    #[serde(rename = "seg:ASCAT_NGS")]
    SegAscatNgs,
    #[value(name = "seg:SEQUENZA")]
    #[serde(rename = "seg:SEQUENZA")]
    SegSequenza,
    #[value(name = "seg:ABSOLUTE")]
    #[serde(rename = "seg:ABSOLUTE")]
    SegAbsolute,
    #[value(name = "seg:BATTENBERG")]
    #[serde(rename = "seg:BATTENBERG")]
    SegBattenberg,
    #[value(name = "seg:FACETS")]
    #[serde(rename = "seg:FACETS")]
    SegFacets,
    #[value(name = "seg:PURPLE")]
    #[serde(rename = "seg:PURPLE")]
    SegPurple,
    #[value(name = "seg:TCGA")]
    #[serde(rename = "seg:TCGA")]
    SegTcga,
    #[value(name = "matrix")]
    #[serde(rename = "matrix")]
    Matrix,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Vcf => "vcf",
            InputType::SegAscat => "seg:ASCAT",
            InputType::SegAscatNgs => "seg:ASCAT_NGS",
            InputType::SegSequenza => "seg:SEQUENZA",
            InputType::SegAbsolute => "seg:ABSOLUTE",
            InputType::SegBattenberg => "seg:BATTENBERG",
            InputType::SegFacets => "seg:FACETS",
            InputType::SegPurple => "seg:PURPLE",
            InputType::SegTcga => "seg:TCGA",
            InputType::Matrix => "matrix",
        }
    }
}

/// Mutational context used for assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ContextType {
    #[value(name = "96")]
    #[serde(rename = "96")]
    Sbs96,
    #[value(name = "288")]
    #[serde(rename = "288")]
    Sbs288,
    #[value(name = "1536")]
    #[serde(rename = "1536")]
    Sbs1536,
    #[value(name = "DINUC")]
    #[serde(rename = "DINUC")]
    Dinuc,
    #[value(name = "ID")]
    #[serde(rename = "ID")]
    Id,
}

impl ContextType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextType::Sbs96 => "96",
            ContextType::Sbs288 => "288",
            ContextType::Sbs1536 => "1536",
            ContextType::Dinuc => "DINUC",
            ContextType::Id => "ID",
        }
    }
}

/// COSMIC reference signature release
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum CosmicVersion {
    #[value(name = "1")]
    #[serde(rename = "1")]
    V1,
    #[value(name = "2")]
    #[serde(rename = "2")]
    V2,
    #[value(name = "3")]
    #[serde(rename = "3")]
    V3,
    #[value(name = "3.1")]
    #[serde(rename = "3.1")]
    V3_1,
    #[value(name = "3.2")]
    #[serde(rename = "3.2")]
    V3_2,
    #[value(name = "3.3")]
    #[serde(rename = "3.3")]
    V3_3,
}

impl CosmicVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            CosmicVersion::V1 => "1",
            CosmicVersion::V2 => "2",
            CosmicVersion::V3 => "3",
            CosmicVersion::V3_1 => "3.1",
            CosmicVersion::V3_2 => "3.2",
            CosmicVersion::V3_3 => "3.3",
        }
    }

    /// The library compares versions numerically, so whole releases stay integers
    pub fn to_value(&self) -> Value {
        match self {
            CosmicVersion::V1 => Value::from(1),
            CosmicVersion::V2 => Value::from(2),
            CosmicVersion::V3 => Value::from(3),
            CosmicVersion::V3_1 => Value::from(3.1),
            CosmicVersion::V3_2 => Value::from(3.2),
            CosmicVersion::V3_3 => Value::from(3.3),
        }
    }
}

/// Reference genome builds known to SigProfilerAssignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum GenomeBuild {
    #[value(name = "GRCh37")]
    #[serde(rename = "GRCh37")]
    GRCh37,
    #[value(name = "GRCh38")]
    #[serde(rename = "GRCh38")]
    GRCh38,
    #[value(name = "mm9")]
    #[serde(rename = "mm9")]
    Mm9,
    #[value(name = "mm10")]
    #[serde(rename = "mm10")]
    Mm10,
    #[value(name = "rn6")]
    #[serde(rename = "rn6")]
    Rn6,
}

impl GenomeBuild {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenomeBuild::GRCh37 => "GRCh37",
            GenomeBuild::GRCh38 => "GRCh38",
            GenomeBuild::Mm9 => "mm9",
            GenomeBuild::Mm10 => "mm10",
            GenomeBuild::Rn6 => "rn6",
        }
    }
}

/// Human reference genomes accepted by the extractor and single-sample tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReferenceGenome {
    #[value(name = "GRCh37")]
    #[serde(rename = "GRCh37")]
    GRCh37,
    #[value(name = "GRCh38")]
    #[serde(rename = "GRCh38")]
    GRCh38,
}

impl ReferenceGenome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceGenome::GRCh37 => "GRCh37",
            ReferenceGenome::GRCh38 => "GRCh38",
        }
    }
}

/// Input file type for SigProfilerExtractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum FileType {
    #[value(name = "vcf")]
    #[serde(rename = "vcf")]
    Vcf,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Vcf => "vcf",
        }
    }
}

/// Output format of the sample reconstruction plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum PlotFormat {
    #[value(name = "pdf")]
    #[serde(rename = "pdf")]
    Pdf,
    #[value(name = "png")]
    #[serde(rename = "png")]
    Png,
    #[value(name = "both")]
    #[serde(rename = "both")]
    Both,
}

impl PlotFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotFormat::Pdf => "pdf",
            PlotFormat::Png => "png",
            PlotFormat::Both => "both",
        }
    }
}

/// COSMIC signature subgroups that can be excluded from refitting
/// (see https://github.com/AlexandrovLab/SigProfilerAssignment#-signature-subgroups)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SignatureSubgroup {
    #[value(name = "MMR_deficiency_signatures")]
    #[serde(rename = "MMR_deficiency_signatures")]
    MmrDeficiency,
    #[value(name = "POL_deficiency_signatures")]
    #[serde(rename = "POL_deficiency_signatures")]
    PolDeficiency,
    #[value(name = "HR_deficiency_signatures")]
    #[serde(rename = "HR_deficiency_signatures")]
    HrDeficiency,
    #[value(name = "BER_deficiency_signatures")]
    #[serde(rename = "BER_deficiency_signatures")]
    BerDeficiency,
    #[value(name = "Chemotherapy_signatures")]
    #[serde(rename = "Chemotherapy_signatures")]
    Chemotherapy,
    #[value(name = "Immunosuppressants_signatures")]
    #[serde(rename = "Immunosuppressants_signatures")]
    Immunosuppressants,
    #[value(name = "Treatment_signatures")]
    #[serde(rename = "Treatment_signatures")]
    Treatment,
    #[value(name = "APOBEC_signatures")]
    #[serde(rename = "APOBEC_signatures")]
    Apobec,
    #[value(name = "Tobacco_signatures")]
    #[serde(rename = "Tobacco_signatures")]
    Tobacco,
    #[value(name = "UV_signatures")]
    #[serde(rename = "UV_signatures")]
    Uv,
    #[value(name = "AA_signatures")]
    #[serde(rename = "AA_signatures")]
    AristolochicAcid,
    #[value(name = "Colibactin_signatures")]
    #[serde(rename = "Colibactin_signatures")]
    Colibactin,
    #[value(name = "Artifact_signatures")]
    #[serde(rename = "Artifact_signatures")]
    Artifact,
    #[value(name = "Lymphoid_signatures")]
    #[serde(rename = "Lymphoid_signatures")]
    Lymphoid,
}

impl SignatureSubgroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureSubgroup::MmrDeficiency => "MMR_deficiency_signatures",
            SignatureSubgroup::PolDeficiency => "POL_deficiency_signatures",
            SignatureSubgroup::HrDeficiency => "HR_deficiency_signatures",
            SignatureSubgroup::BerDeficiency => "BER_deficiency_signatures",
            SignatureSubgroup::Chemotherapy => "Chemotherapy_signatures",
            SignatureSubgroup::Immunosuppressants => "Immunosuppressants_signatures",
            SignatureSubgroup::Treatment => "Treatment_signatures",
            SignatureSubgroup::Apobec => "APOBEC_signatures",
            SignatureSubgroup::Tobacco => "Tobacco_signatures",
            SignatureSubgroup::Uv => "UV_signatures",
            SignatureSubgroup::AristolochicAcid => "AA_signatures",
            SignatureSubgroup::Colibactin => "Colibactin_signatures",
            SignatureSubgroup::Artifact => "Artifact_signatures",
            SignatureSubgroup::Lymphoid => "Lymphoid_signatures",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_names_match_library_strings() {
        let input = InputType::from_str("seg:ASCAT_NGS", false).unwrap();
        assert_eq!(input, InputType::SegAscatNgs);
        assert_eq!(input.as_str(), "seg:ASCAT_NGS");

        let context = ContextType::from_str("DINUC", false).unwrap();
        assert_eq!(context.as_str(), "DINUC");

        assert!(GenomeBuild::from_str("hg19", false).is_err());
        assert!(ReferenceGenome::from_str("mm10", false).is_err());
    }

    #[test]
    fn test_cosmic_version_is_numeric() {
        assert_eq!(CosmicVersion::V3_3.to_value(), serde_json::json!(3.3));
        assert_eq!(CosmicVersion::V2.to_value(), serde_json::json!(2));
        assert_eq!(
            CosmicVersion::from_str("3.1", false).unwrap(),
            CosmicVersion::V3_1
        );
    }

    #[test]
    fn test_every_subgroup_round_trips_through_clap() {
        for subgroup in SignatureSubgroup::value_variants() {
            let parsed = SignatureSubgroup::from_str(subgroup.as_str(), false).unwrap();
            assert_eq!(&parsed, subgroup);
        }
        assert_eq!(SignatureSubgroup::value_variants().len(), 14);
    }
}
