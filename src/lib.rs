// lib.rs - sigtools library root

//! # sigtools - command line wrappers for mutational signature analysis
//!
//! Four tools share this library:
//!
//! - **sigprofilerassignment**: refit known (COSMIC or custom) signatures with
//!   SigProfilerAssignment
//! - **sigprofilerextractor**: de novo extraction by NMF with SigProfilerExtractor
//! - **sigprofilersinglesample**: single-sample fitting with sigproSS
//! - **survivor_vcf_reheader**: record which caller produced each sample column
//!   of a SURVIVOR merged VCF
//!
//! The signature tools only validate options and build one [`LibraryCall`];
//! the computation happens in the Python packages, reached through an
//! [`AnalysisBackend`].
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use sigtools::prelude::*;
//!
//! let args = ExtractorArgs::from_argv(&["-I".to_string(), "vcfs".to_string()])
//!     .map_err(|e| e.to_string())?;
//! let options = validate_extractor(&args)?;
//! let backend = PythonBackend::locate(None, None)?;
//! sigtools::tools::extractor::execute(&options, &backend)?;
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod tools;
pub mod vcf;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{
        validate_assignment, validate_extractor, validate_reheader, validate_single_sample,
        AssignmentArgs, Config, ExtractorArgs, ReheaderArgs, SingleSampleArgs,
    };
    pub use crate::core::{AnalysisBackend, DryRunBackend, LibraryCall, PythonBackend};
    pub use crate::vcf::VcfHeader;
}

pub use crate::core::{AnalysisBackend, LibraryCall};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "sigtools v{} - SigProfiler and SURVIVOR command line wrappers",
        VERSION
    )
}
