use anyhow::Result;

use crate::cli::Commands;

use super::controller::AskController;

pub struct Router {
    ask_controller: AskController,
}

impl Router {
    pub fn new() -> Self {
        Self {
            ask_controller: AskController::new(),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { symptoms, server } => self.ask_controller.ask(symptoms, server).await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
