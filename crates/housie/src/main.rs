//! Terminal Housie number caller.
//!
//! Draws random numbers from 1..=90, announces each draw through a system
//! text-to-speech command, and highlights called numbers on a grid. Cells,
//! controls, and the title respond to both keys and mouse clicks. A hidden
//! gesture on the title unlocks pre-selection of the call order.

mod app;
mod caller;
mod event;
mod runtime;
mod speech;
mod ui;

use clap::Parser;
use std::path::PathBuf;

use app::App;
use housie_core::POOL_SIZE;
use runtime::{Program, ProgramOptions, RuntimeError};
use speech::Announcer;

#[derive(Debug, Parser)]
#[command(name = "housie", version, about = "Terminal Housie number caller")]
struct Args {
    /// Disable spoken announcements.
    #[arg(long)]
    mute: bool,

    /// Text-to-speech command to run per announcement (default: first of
    /// say, espeak-ng, espeak, spd-say found on PATH).
    #[arg(long, value_name = "CMD")]
    speech_command: Option<String>,

    /// Append debug output to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), RuntimeError> {
    let args = Args::parse();

    let announcer = if args.mute {
        Announcer::muted()
    } else if let Some(command) = args.speech_command {
        Announcer::with_command(command)
    } else {
        Announcer::detect()
    };

    let options = ProgramOptions {
        log_file: args.log_file,
        ..ProgramOptions::default()
    };

    let app = Program::new(App::new(), announcer, options)?.run().await?;

    let called = app.game().called().len();
    println!("Called {called} of {POOL_SIZE} numbers.");
    Ok(())
}
