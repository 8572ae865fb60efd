//! # Solace Binary
//!
//! Terminal front end: loads settings, assembles one session and drives it
//! from stdin. The companion's scheduled reply is fired from the same loop.

mod commands;
mod render;
mod wiring;

use std::time::Duration as StdDuration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use commands::{Command, HELP};
use configs::{LogFormat, Settings};
use services::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings);
    tracing::debug!(?settings, "settings loaded");

    let mut session = wiring::build_session(&settings)?;
    println!("🌱 Solace, a safe space. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let wait = reply_wait(&session);
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => println!("{}", dispatch(&mut session, command)),
                    Err(e) => println!("{e}"),
                }
            }
            _ = sleep_until_due(wait) => {
                if let Some(reply) = session.chat.poll() {
                    println!("{}", render::chat_message(&reply));
                }
            }
        }
    }

    tracing::info!("session closed");
    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match settings.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Time left until the pending companion reply, if any.
fn reply_wait(session: &Session) -> Option<StdDuration> {
    session
        .chat
        .next_due()
        .map(|due| (due - session.now()).to_std().unwrap_or(StdDuration::ZERO))
}

async fn sleep_until_due(wait: Option<StdDuration>) {
    match wait {
        Some(wait) => tokio::time::sleep(wait).await,
        None => std::future::pending().await,
    }
}

/// Runs one command and renders the outcome. Rejected mutations are shown
/// to the user, never propagated.
fn dispatch(session: &mut Session, command: Command) -> String {
    match command {
        Command::Help => HELP.to_owned(),
        Command::Moods => render::moods(),
        Command::Feed => render::community_feed(session),
        Command::Post { mood, body } => match session.community.create_post(&body, mood) {
            Ok(post) => render::post_line(session, &post),
            Err(e) => e.to_string(),
        },
        Command::Thread(post_id) => match session.community.list_comments(&post_id) {
            Ok(comments) => render::thread(session, comments),
            Err(e) => e.to_string(),
        },
        Command::Comment { post, body } => match session.community.append_comment(&post, &body) {
            Ok(comment) => render::thread(session, std::slice::from_ref(&comment)),
            Err(e) => e.to_string(),
        },
        Command::React { post, comment } => match session.community.react(&post, comment.as_ref()) {
            Ok(count) => format!("♥ {count}"),
            Err(e) => e.to_string(),
        },
        Command::Express => render::expression_feed(session),
        Command::ExpressPost { mood, body } => match session.expression.create_post(&body, mood) {
            Ok(post) => render::expression_line(session, &post),
            Err(e) => e.to_string(),
        },
        Command::ExpressReact(id) => match session.expression.react(&id) {
            Ok(count) => format!("♥ {count}"),
            Err(e) => e.to_string(),
        },
        Command::Journal => render::journal(session),
        Command::Entry { mood, title, body, tags } => {
            match session.journal.add_entry(mood, &title, &body, &tags) {
                Ok(entry) => render::journal_line(&entry),
                Err(e) => e.to_string(),
            }
        }
        Command::Resources { category, search } => {
            render::resource_list(&session.resources.filter(category, &search))
        }
        Command::Resource(id) => match session.resources.get(&id) {
            Ok(resource) => render::resource_detail(resource),
            Err(e) => e.to_string(),
        },
        Command::Chat(text) => match session.chat.send(&text) {
            Ok(outcome) => render::chat_message(&outcome.message),
            Err(e) => e.to_string(),
        },
        Command::Json => serde_json::to_string_pretty(session.community.list_posts())
            .unwrap_or_else(|e| format!("failed to encode feed: {e}")),
        Command::Quit => String::new(),
    }
}
