//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    error::TimerError,
    render::DialRenderer,
    state::DurationInput,
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "arc-timer")]
#[command(about = "A countdown timer service with a stepped progress arc")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Initial minutes (0-9)
    #[arg(short, long, default_value = "0")]
    pub minutes: u32,

    /// Initial seconds (0-59)
    #[arg(short, long, default_value = "20")]
    pub seconds: u32,

    /// Width and height of the rendered dial
    #[arg(long, default_value = "300")]
    pub dial_size: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Initial selector values, validated against their ranges
    pub fn duration_input(&self) -> Result<DurationInput, TimerError> {
        DurationInput::new(self.minutes, self.seconds)
    }

    pub fn renderer(&self) -> DialRenderer {
        DialRenderer::square(self.dial_size)
    }
}
