pub mod nav;
pub mod outline;
pub mod prompt;
pub mod theme;
