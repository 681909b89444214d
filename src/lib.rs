pub mod globs;

pub use globs::{matches_any, Glob};
