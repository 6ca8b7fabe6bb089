use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::input::{self, GameInput};
use flappy::{logging, ui, Game, GameConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "flappy", version)]
#[command(about = "Steer through the gaps in a terminal side-scroller")]
struct Args {
    /// JSON config file (default: the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logical field width
    #[arg(long)]
    width: Option<f64>,

    /// Logical field height
    #[arg(long)]
    height: Option<f64>,

    /// Seed for obstacle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Animation frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Append structured logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Save the effective config to the default location and exit
    #[arg(long)]
    write_config: bool,
}

impl Args {
    fn resolve_config(&self) -> io::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load_from(path)?,
            None => GameConfig::load_or_default(),
        };
        if let Some(width) = self.width {
            config.field.width = width;
        }
        if let Some(height) = self.height {
            config.field.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            config.frame_rate = fps;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init_file_logging(path)?;
    }

    let config = args.resolve_config()?;

    if args.write_config {
        let path = GameConfig::default_path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        config.save_to(&path)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    tracing::info!(?config, "starting");
    let mut game = Game::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game, config.frame_interval());

    // Restore terminal even if the loop failed
    let restored = restore_terminal(&mut terminal);

    tracing::info!(sessions = game.session, "exiting");
    result.and(restored)
}

/// Undo raw mode, the alternate screen and the hidden cursor. Every step runs;
/// the first failure is returned.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = terminal.backend_mut().execute(LeaveAlternateScreen).map(|_| ());
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Host scheduler: deliver animation frames at a fixed rate, fire due timers,
/// redraw, and poll input until the next frame is due.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game,
    frame_interval: Duration,
) -> io::Result<()> {
    let clock = Instant::now();

    loop {
        let frame_start = Instant::now();
        let now = clock.elapsed().as_secs_f64() * 1000.0;

        game.run_due_timers(now);
        if game.wants_frame() {
            game.on_animation_frame(now);
        }

        terminal.draw(|frame| ui::draw(frame, game))?;

        loop {
            let remaining = frame_interval.saturating_sub(frame_start.elapsed());
            if !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match input::map_key(key) {
                    Some(GameInput::Quit) => return Ok(()),
                    Some(input) => {
                        game.handle_input(input);
                    }
                    None => {}
                }
            }
            if remaining.is_zero() {
                break;
            }
        }
    }
}
