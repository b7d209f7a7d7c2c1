mod analysis;
mod job;
mod menu;

pub use analysis::*;
pub use job::*;
pub use menu::*;
