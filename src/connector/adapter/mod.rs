mod gemini_client;
mod http_advice_gateway;
mod mock_generation;

pub use gemini_client::*;
pub use http_advice_gateway::*;
pub use mock_generation::*;
