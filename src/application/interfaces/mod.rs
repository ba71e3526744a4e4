mod advice_gateway;
mod generation_service;

pub use advice_gateway::*;
pub use generation_service::*;
