// mod.rs - VCF header handling for the SURVIVOR reheader

pub mod header;
pub mod io;
pub mod reheader;

// Re-export main types for convenience
pub use header::VcfHeader;
pub use io::{open_input, CopyStats, VcfWriter};
pub use reheader::{add_source_legend, check_sample_count, write_reheadered};
