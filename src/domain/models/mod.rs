mod advice;
mod request_state;
mod symptom;

pub use advice::*;
pub use request_state::*;
pub use symptom::*;
