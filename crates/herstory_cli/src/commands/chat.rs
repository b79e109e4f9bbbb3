//! Chat command - Interactive session with the leaders.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use herstory_chat::{ChatError, ConversationSession, Exchange};
use herstory_gateway::Avatar;
use herstory_personas::PersonaRegistry;

use super::{bootstrap, GatewayArgs};

#[derive(Args)]
pub struct ChatArgs {
    /// Leader to start with
    #[arg(short, long)]
    persona: Option<String>,

    /// Write the current leader's avatar as PNG into this directory
    #[arg(long)]
    avatar_dir: Option<PathBuf>,
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Empty,
    Quit,
    ListPersonas,
    History,
    SwitchPersona(&'a str),
    Question(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some(("/persona", name)) => Input::SwitchPersona(name.trim()),
        _ => match trimmed {
            "/quit" | "/exit" => Input::Quit,
            "/personas" | "/persona" => Input::ListPersonas,
            "/history" => Input::History,
            // Questions keep the line exactly as typed, minus the newline
            _ => Input::Question(line.trim_end_matches(['\r', '\n'])),
        },
    }
}

pub async fn execute(gateway: &GatewayArgs, args: ChatArgs) -> Result<()> {
    // Reject an unknown starting leader before rendering any avatar
    if let Some(name) = &args.persona {
        PersonaRegistry::builtin()
            .lookup(name)
            .map_err(ChatError::from)?;
    }
    if let Some(dir) = &args.avatar_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create avatar directory {}", dir.display()))?;
    }

    println!("🌟 Her Story: AI Women's Leadership Platform");
    println!("   Rendering leader avatars...");
    let app = bootstrap(gateway).await?;
    let mut session = app.session();

    if let Some(name) = &args.persona {
        let avatar = session.select_persona(name)?;
        print_avatar_summary(name, avatar);
        export_avatar(args.avatar_dir.as_deref(), name, avatar);
    }

    println!();
    println!("Commands: /persona <name>, /personas, /history, /quit");
    print_personas(&app.registry().all_names());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", session.selected_persona().unwrap_or("choose a leader"));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::ListPersonas => print_personas(&app.registry().all_names()),
            Input::History => print_history(&session),
            Input::SwitchPersona(name) => match session.select_persona(name) {
                Ok(avatar) => {
                    print_avatar_summary(name, avatar);
                    export_avatar(args.avatar_dir.as_deref(), name, avatar);
                }
                Err(ChatError::Persona(e)) => println!("⚠️  {}", e),
                Err(e) => return Err(e.into()),
            },
            Input::Question(question) => {
                let reply = match session.ask_selected(question).await {
                    Ok(reply) => reply,
                    Err(ChatError::NoPersonaSelected) => {
                        println!("⚠️  Choose a leader first with /persona <name>");
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                if let Some(exchange) = reply.transcript.last() {
                    print_exchange(exchange);
                    export_avatar(args.avatar_dir.as_deref(), &exchange.persona, reply.avatar);
                }
            }
        }
    }

    info!(
        "Chat session {} ended after {} exchanges",
        session.id(),
        session.transcript().len()
    );
    Ok(())
}

fn print_personas(names: &[&str]) {
    println!("Leaders: {}", names.join(", "));
}

fn print_exchange(exchange: &Exchange) {
    println!("{}", exchange.question_line());
    println!("{}", exchange.answer_line());
}

fn print_history(session: &ConversationSession) {
    if session.transcript().is_empty() {
        println!("(no questions yet)");
        return;
    }
    for exchange in session.transcript().iter() {
        print_exchange(exchange);
    }
}

pub(crate) fn print_avatar_summary(name: &str, avatar: &Avatar) {
    let (width, height) = avatar.dimensions();
    if avatar.is_placeholder() {
        println!("🖼️  {} avatar: placeholder {}x{}", name, width, height);
    } else {
        println!("🖼️  {} avatar: {}x{}", name, width, height);
    }
}

/// File name for a persona's exported avatar, e.g. `susan-b-anthony.png`.
fn avatar_file_name(name: &str) -> String {
    let slug = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("{}.png", slug)
}

fn export_avatar(dir: Option<&Path>, name: &str, avatar: &Avatar) {
    let Some(dir) = dir else {
        return;
    };
    let path = dir.join(avatar_file_name(name));
    // Best effort: a failed write is logged, the chat goes on
    if let Err(e) = avatar.save_png(&path) {
        warn!("Failed to write avatar to {}: {}", path.display(), e);
    }
}
