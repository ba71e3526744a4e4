mod intake;
mod triage;

pub use intake::*;
pub use triage::*;
