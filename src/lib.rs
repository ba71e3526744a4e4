pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AdviceGateway, GenerationService, IntakeWidget, TriageUseCase};

pub use connector::{GeminiClient, HttpAdviceGateway, MockGeneration};

pub use domain::{AdviceResult, DomainError, RequestState, SymptomQuery};
