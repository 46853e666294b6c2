pub mod data_sources;
pub mod session;
pub mod size;
pub mod variables;

pub use session::SafeSession;
pub use size::CardSize;
