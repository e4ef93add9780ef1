//! The roadmap engine: curated catalog, fallback synthesis, topic-to-resource
//! matching, and completion decoration.

pub mod assembler;
pub mod curated;
pub mod domains;
pub mod fallback;
pub mod handlers;
pub mod matcher;
pub mod progress;
