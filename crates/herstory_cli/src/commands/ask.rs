//! Ask command - One question to one leader.

use anyhow::Result;
use clap::Args;
use tracing::info;

use herstory_chat::ChatError;
use herstory_personas::PersonaRegistry;

use super::{bootstrap, GatewayArgs};

#[derive(Args)]
pub struct AskArgs {
    /// Leader to ask, exactly as listed by `herstory personas`
    #[arg(short, long)]
    persona: String,

    /// Print the exchange as JSON
    #[arg(long)]
    json: bool,

    /// The question
    question: String,
}

pub async fn execute(gateway: &GatewayArgs, args: AskArgs) -> Result<()> {
    // Reject unknown leaders before rendering any avatar
    PersonaRegistry::builtin()
        .lookup(&args.persona)
        .map_err(ChatError::from)?;
    info!("Asking {}", args.persona);

    let app = bootstrap(gateway).await?;
    let mut session = app.session();
    let reply = session.ask(&args.question, &args.persona).await?;

    let Some(exchange) = reply.transcript.last() else {
        anyhow::bail!("Transcript is empty after asking {}", args.persona);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(exchange)?);
    } else {
        println!("{}", exchange.question_line());
        println!("{}", exchange.answer_line());
        super::chat::print_avatar_summary(&args.persona, reply.avatar);
    }
    Ok(())
}
