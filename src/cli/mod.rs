use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the advice HTTP service
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,

        /// Serve canned advice instead of calling the Gemini API
        #[arg(long)]
        mock: bool,
    },

    /// Submit symptoms to a running advice service and print the advice
    Ask {
        symptoms: String,

        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        server: String,
    },
}
