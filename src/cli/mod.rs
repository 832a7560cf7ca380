// mod.rs - CLI module

pub mod aliases;
pub mod args;
pub mod config;
pub mod merge;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use args::{AssignmentArgs, ExtractorArgs, ReheaderArgs, RuntimeArgs, SingleSampleArgs};
pub use config::Config;
pub use validation::{
    validate_assignment, validate_extractor, validate_reheader, validate_single_sample,
    AssignmentOptions, ExtractorOptions, ReheaderOptions, SingleSampleOptions,
};
