pub mod data_sources;
pub mod user_variable;
