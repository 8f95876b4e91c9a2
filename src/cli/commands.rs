use clap::{Parser, Subcommand};
use sparkform::core::actions::Surface;

/// `sparkform` - AI-assisted form filling: enhance relay, profile wizard, assistant actions.
#[derive(Parser, Debug)]
#[command(name = "sparkform")]
#[command(version)]
#[command(about = "AI-assisted form filling with streamed enhancements.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the gateway server (enhance relay, actions, sessions)
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Enhance a piece of text and print the result as it streams
    Enhance {
        /// What the text is, interpolated into the instruction
        #[arg(short, long, default_value = "")]
        context: String,

        /// Send the request through a running gateway instead of the provider
        #[arg(long)]
        relay: Option<String>,

        /// Text to enhance
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Fill in the skilled trades profile interactively
    Wizard {
        /// Send enhancements through a running gateway instead of the provider
        #[arg(long)]
        relay: Option<String>,
    },

    /// Print the assistant action declarations
    Actions {
        /// Only this surface's actions
        #[arg(short, long, value_enum)]
        surface: Option<Surface>,

        /// Print the function-calling JSON schema instead of a summary
        #[arg(long)]
        schema: bool,
    },
}
