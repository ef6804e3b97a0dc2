// TabStash shared type definitions
// Each submodule defines types used across the extension.

pub mod errors;
pub mod message;
pub mod settings;
pub mod stash;
pub mod toolbar;
pub mod window;
