// mod.rs - External library calls and the backends that run them

pub mod backend;
pub mod call;

pub use backend::{select_backend, AnalysisBackend, DryRunBackend, PythonBackend};
pub use call::LibraryCall;
