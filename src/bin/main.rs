use clap::Parser;
use crossterm::style::Stylize;
use faq_core::loader::load_knowledge_base;
use faq_core::{EngineConfig, FaqEngine, IntentReply};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Chat with the FAQ matcher from a terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Knowledge base JSON file.
    #[arg(long, default_value = "data/faq.json")]
    kb: PathBuf,
    /// Engine config JSON file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log correction and matching decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => match EngineConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {}", "[ERROR]".red(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let mut engine = match FaqEngine::from_file(config, &args.kb) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("FAQ assistant. Ask a question, ':reload' to re-read the knowledge base, 'exit' to quit.");
    println!("---------------------------------------------------------------");

    let mut lines = stdin().lock().lines();
    loop {
        print!("\n{} ", ">".bold());
        if stdout().flush().is_err() {
            break;
        }
        let Some(Ok(input)) = lines.next() else {
            break;
        };

        match input.trim() {
            "exit" => break,
            "" => continue,
            ":reload" => match load_knowledge_base(&args.kb) {
                Ok(items) => {
                    let count = items.len();
                    engine.rebuild(items);
                    println!("Reloaded {} entries from '{}'", count, args.kb.display());
                }
                Err(e) => eprintln!("{} {}", "[ERROR]".red(), e),
            },
            text => {
                for reply in engine.respond(text) {
                    print_reply(&reply);
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_reply(reply: &IntentReply<'_>) {
    if reply.corrected != reply.intent.trim() {
        println!("{} {}", "(understood as)".dim(), reply.corrected.as_str().italic());
    }

    match reply.best {
        Some(found) => {
            println!(
                "{} {}",
                found.item.question.as_str().bold().green(),
                format!("(score: {:.2})", found.score).dim()
            );
            println!("{}", found.item.answer);
            if !found.item.follow_ups.is_empty() {
                println!("\nYou could also ask:");
                for (i, follow_up) in found.item.follow_ups.iter().enumerate() {
                    println!("  {}: {}", i + 1, follow_up.as_str().cyan());
                }
            }
        }
        None => println!("{}", "Sorry, I don't have an answer for that yet.".yellow()),
    }

    if !reply.suggestions.is_empty() {
        println!("\nRelated questions:");
        for suggestion in &reply.suggestions {
            println!(
                "  - {} {}",
                suggestion.item.question,
                format!("(score: {:.2})", suggestion.score).dim()
            );
        }
    }
}
