use clap::Parser;
use owo_colors::OwoColorize;
use referent::presentation::{Action, ReferentClient, render};
use tracing_subscriber::EnvFilter;

/// Russian summaries, theses, Telegram posts and translations of English
/// web articles
#[derive(Parser, Debug)]
#[command(name = "referent")]
#[command(version)]
#[command(about = "Turn an English article into Russian text", long_about = None)]
struct Args {
    /// Article URL (http or https)
    #[arg(value_name = "URL")]
    url: String,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = Action::Summary)]
    action: Action,

    /// Base URL of the referent API server
    #[arg(
        long,
        env = "REFERENT_SERVER",
        default_value = "http://127.0.0.1:8080",
        value_name = "URL"
    )]
    server: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn print_step(message: &str) {
    eprintln!("{} {}", "→".dimmed(), message.bright_cyan());
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("referent=debug"))
            .with_writer(std::io::stderr)
            .init();
    }

    let client = match ReferentClient::new(&args.server) {
        Ok(client) => client,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(2);
        }
    };

    print_step(&format!("{} for {}", args.action.label(), args.url.trim()));

    match client.run(args.action, &args.url).await {
        Ok(text) => {
            eprintln!("{}", args.action.label().bold().green());
            println!("{}", render(args.action, &text));
            Ok(())
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
