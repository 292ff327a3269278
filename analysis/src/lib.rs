//! Boundary to the external language-analysis engine.
//!
//! The engine (parsing, type checking, incremental re-analysis) lives outside
//! this workspace. [`AnalysisEngine`] is the outbound query surface the
//! adapters consume; [`AnalysisSession`] binds one engine handle to one
//! logical file and owns everything the adapters share for that file.

pub mod engine;
pub mod files;
pub mod line_index;
pub mod session;

pub use engine::{AnalysisEngine, EngineError, EngineQuery, EngineResult};
pub use files::VirtualFiles;
pub use line_index::LineIndex;
pub use session::{AnalysisSession, Generation};
