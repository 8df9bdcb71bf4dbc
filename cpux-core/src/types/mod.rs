//! Value types for host information

mod cpu;
mod memory;
mod model_name;

pub use cpu::*;
pub use memory::*;
pub use model_name::*;
