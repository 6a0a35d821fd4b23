pub mod auto;
pub mod clock;
pub mod install;
pub mod status;
pub mod undo;
pub mod version;
