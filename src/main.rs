use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::input::{map_key, GameInput};
use flappy::ui::draw_ui;
use flappy::{GameConfig, JumpOutcome, Session, SessionEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Environment variable naming a log file. Logging to the terminal would
/// scribble over the game, so without it nothing is logged.
const LOG_FILE_ENV: &str = "FLAPPY_LOG_FILE";

#[derive(Debug, Default)]
struct CliArgs {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn print_help() {
    println!("Flappy - terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed <N>       Fixed seed for pipe placement");
    println!("  --config <PATH>  Config file (default: platform config dir)");
    println!("  --version        Show version information");
    println!("  --help           Show this help message\n");
    println!("Controls: Space/Up/Enter to jump or restart, q/Esc to quit.");
    println!("Set {} to a path to write logs there.", LOG_FILE_ENV);
}

fn exit_with_usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'flappy --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliArgs {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match args.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => parsed.seed = Some(seed),
                _ => exit_with_usage_error("--seed expects a non-negative integer"),
            },
            "--config" => match args.next() {
                Some(path) => parsed.config_path = Some(PathBuf::from(path)),
                None => exit_with_usage_error("--config expects a file path"),
            },
            other => exit_with_usage_error(&format!("Unknown argument: {}", other)),
        }
    }

    parsed
}

fn init_logging() {
    let Ok(path) = std::env::var(LOG_FILE_ENV) else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("Could not open log file {}: {}", path, e),
    }
}

fn main() -> io::Result<()> {
    let args = parse_args();
    init_logging();

    let config_path = args.config_path.or_else(GameConfig::default_path);
    let mut config = GameConfig::load_or_default(config_path.as_deref());
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    log::info!("{}", build_info::version_line());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config);

    // Restore the terminal even when the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main thread: draw after completed ticks, forward input to the session.
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: GameConfig) -> io::Result<()> {
    let poll_interval = config.frame_duration();
    let (events_tx, events_rx) = mpsc::channel();
    let mut session = Session::new(config, events_tx);
    session.start()?;

    let mut needs_redraw = true;
    loop {
        if drain_events(&events_rx) {
            needs_redraw = true;
        }
        if needs_redraw {
            let snapshot = session.snapshot();
            terminal.draw(|frame| draw_ui(frame, &snapshot))?;
            needs_redraw = false;
        }

        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key_event) => match map_key(key_event) {
                    GameInput::Jump => {
                        if session.jump()? == JumpOutcome::Restarted {
                            needs_redraw = true;
                        }
                    }
                    GameInput::Quit => break,
                    GameInput::Other => {}
                },
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }
    }

    session.stop();
    log::info!("Session ended");
    Ok(())
}

/// Returns true if anything worth redrawing arrived.
fn drain_events(events: &Receiver<SessionEvent>) -> bool {
    let mut redraw = false;
    loop {
        match events.try_recv() {
            Ok(SessionEvent::GameOver { score }) => {
                log::debug!("Game over event, score {}", score);
                redraw = true;
            }
            Ok(_) => redraw = true,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return redraw,
        }
    }
}
