use clap::Parser;

use email_writer::config::AppConfig;
use email_writer::generator::{EmailRequest, ReplyGenerator};
use email_writer::server;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the server
    #[arg(short, long, action)]
    serve: bool,

    /// Set the server host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Set the server port
    #[arg(long, default_value = "9092")]
    port: String,

    /// Generate a reply for this email content and print it
    #[arg(short, long)]
    email: Option<String>,

    /// Tone for the generated reply
    #[arg(short, long)]
    tone: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env()?;

    if let Some(email_content) = args.email {
        let generator = ReplyGenerator::new(reqwest::Client::new(), config.clone());
        let request = EmailRequest {
            email_content,
            tone: args.tone,
        };
        let reply = generator.generate(&request).await?;
        println!("{}", reply);
        return Ok(());
    }

    if args.serve {
        server::serve(args.host, args.port, config).await;
    }

    Ok(())
}
