//! Interactive terminal chat client.
//!
//! Drives the same [`ChatResponder`] the HTTP server uses, keeping the
//! conversation in memory for the session. Type `salir` or `exit` to quit.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use engine::Conversation;
use hf_client::HfClient;
use lexicon::phrases;
use server::ChatResponder;
use tmdb_client::TmdbClient;

#[derive(Parser, Debug)]
#[command(name = "cine-chat", about = "Chat de recomendación de películas")]
struct Args {
    /// TMDb API key; defaults to the TMDB_API_KEY environment variable
    #[arg(long)]
    tmdb_key: Option<String>,

    /// Hugging Face API token; defaults to HUGGINGFACE_API_KEY
    #[arg(long)]
    hf_key: Option<String>,

    /// Log filter (e.g. "debug", "server=debug")
    #[arg(long, default_value = "warn")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let tmdb_key = args.tmdb_key.or_else(|| env::var("TMDB_API_KEY").ok());
    let hf_key = args.hf_key.or_else(|| env::var("HUGGINGFACE_API_KEY").ok());
    if tmdb_key.is_none() {
        eprintln!(
            "{}",
            "Sin TMDB_API_KEY: las recomendaciones estarán vacías.".yellow()
        );
    }

    let responder = ChatResponder::new(TmdbClient::new(tmdb_key), HfClient::new(hf_key));
    let mut conversation = Conversation::new();

    // The greeting is part of the conversation so that follow-up routing
    // sees it like any other assistant turn.
    println!("{} {}", "cine-chat>".cyan().bold(), phrases::WELCOME);
    conversation.push_assistant(phrases::WELCOME);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "tú>".green().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let message = line?.trim().to_string();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("salir") || message.eq_ignore_ascii_case("exit") {
            println!("{} ¡Hasta pronto!", "cine-chat>".cyan().bold());
            break;
        }

        conversation.push_user(&message);
        let reply = responder.respond(&message, &conversation).await;
        conversation.push_assistant(reply.clone());

        println!("{} {}", "cine-chat>".cyan().bold(), reply);
    }

    Ok(())
}
