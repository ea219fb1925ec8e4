use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use minesweeper_common::protocol::Outcome;
use minesweeper_engine::{
    GameEngine,
    config::{Config, OutputFormat},
    display, prompt,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

fn show<W: Write>(
    output: &mut W,
    engine: &GameEngine,
    reveal_all: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let view = engine.view(reveal_all);
    match format {
        OutputFormat::Text => write!(output, "{CLEAR_SCREEN}{}", display::render(&view))?,
        OutputFormat::Json => writeln!(output, "{}", display::render_json(&view)?)?,
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::from_env();
    info!("Starting minesweeper with {:?}", config);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    writeln!(output, "{}\n", display::TITLE)?;
    let Some(params) = prompt::read_params(&mut input, &mut output, &config)? else {
        info!("Setup abandoned");
        return Ok(());
    };

    let mut engine = match config.seed {
        Some(seed) => GameEngine::setup(params, &mut StdRng::seed_from_u64(seed))?,
        None => GameEngine::setup(params, &mut rand::rng())?,
    };

    show(&mut output, &engine, false, config.output)?;
    loop {
        write!(output, "COMMAND: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed mid-game");
            break;
        }

        let report = engine.handle(&line);
        let reveal_all = matches!(report.outcome, Outcome::Loser | Outcome::Done);
        show(&mut output, &engine, reveal_all, config.output)?;

        if let Some(banner) = display::banner(report.outcome) {
            writeln!(output, "\n   {banner}")?;
        }
        if report.outcome.is_terminal() {
            break;
        }
    }

    write!(output, "Press ENTER key to close . . .")?;
    output.flush()?;
    input.read_line(&mut String::new())?;

    Ok(())
}
