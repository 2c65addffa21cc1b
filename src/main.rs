//! Poly Oven entry point
//!
//! Runs the kitchen at a fixed timestep in the terminal. Commands are read
//! from stdin on a helper thread and applied one press per tick.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use argh::FromArgs;

use poly_oven::Settings;
use poly_oven::consts::*;
use poly_oven::platform::input::HELP;
use poly_oven::platform::{Command, InputQueue, parse_line};
use poly_oven::sim::{GameEvent, KitchenState, tick};
use poly_oven::ui::{self, EventStream, Hud, LogEffects};

#[derive(FromArgs)]
/// Bake pastries on the Poly Oven to match the orders on the counter.
struct Args {
    /// order seed (overrides the settings file)
    #[argh(option)]
    seed: Option<u64>,

    /// settings file to load
    #[argh(option, default = "PathBuf::from(Settings::FILE_NAME)")]
    settings: PathBuf,

    /// stream events as JSON lines instead of drawing the HUD
    #[argh(switch)]
    json: bool,

    /// write the effective settings back to the settings file
    #[argh(switch)]
    save_settings: bool,
}

enum Output {
    Hud(Hud),
    Json(EventStream<io::Stdout>),
}

/// Game instance holding all state
struct Game {
    state: KitchenState,
    input: InputQueue,
    output: Output,
    effects: LogEffects,
    accumulator: f32,
    show_descriptions: bool,
    ansi_colors: bool,
}

impl Game {
    fn new(seed: u64, settings: &Settings, json: bool) -> Self {
        let output = if json {
            Output::Json(EventStream::new(io::stdout()))
        } else {
            Output::Hud(Hud::new(settings.ansi_colors))
        };
        let mut game = Self {
            state: KitchenState::with_timing(seed, settings.timing()),
            input: InputQueue::new(),
            output,
            effects: LogEffects,
            accumulator: 0.0,
            show_descriptions: settings.show_descriptions,
            ansi_colors: settings.ansi_colors,
        };
        game.flush_events();
        game
    }

    /// Apply a line of commands. Returns false when the player quits.
    fn handle_line(&mut self, line: &str) -> bool {
        for parsed in parse_line(line) {
            match parsed {
                Ok(Command::Quit) => return false,
                Ok(Command::Help) => eprintln!("{}", HELP),
                Ok(command) => self.input.push(command),
                Err(e) => {
                    log::warn!("{}", e);
                    eprintln!("{}", e);
                }
            }
        }
        true
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.next_input();
            tick(&mut self.state, &input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.flush_events();
        }
    }

    fn flush_events(&mut self) {
        let mut events = self.state.drain_events();
        if !self.show_descriptions {
            events.retain(|e| !matches!(e, GameEvent::ButtonDescription { .. }));
        }
        if events.is_empty() {
            return;
        }

        match &mut self.output {
            Output::Hud(hud) => ui::dispatch(&events, hud, &mut self.effects),
            Output::Json(stream) => {
                stream.set_tick(self.state.time_ticks);
                if let Err(e) = stream.write_events(&events) {
                    log::warn!("Event stream write failed: {}", e);
                }
            }
        }
    }

    fn render(&mut self) {
        let Output::Hud(hud) = &mut self.output else {
            return;
        };
        if !hud.take_dirty() {
            return;
        }
        let mut stdout = io::stdout().lock();
        if self.ansi_colors {
            // Clear screen, cursor home
            let _ = write!(stdout, "\x1b[2J\x1b[H");
        }
        let _ = write!(stdout, "{}\n> ", hud.render());
        let _ = stdout.flush();
    }

    /// No queued commands and no pending banners or plate resets
    fn is_settled(&self) -> bool {
        self.input.is_idle() && self.state.timers.is_empty()
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("Stopped reading input: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut settings = Settings::load(&args.settings);
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.save_settings {
        settings.save(&args.settings);
    }

    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Poly Oven starting with seed {}", seed);

    let mut game = Game::new(seed, &settings, args.json);
    if !args.json {
        eprintln!("{}", HELP);
    }

    let lines = spawn_stdin_reader();
    let frame = Duration::from_secs_f32(1.0 / settings.frame_rate as f32);
    let mut last_time = Instant::now();
    let mut input_open = true;

    loop {
        while input_open {
            match lines.try_recv() {
                Ok(line) => {
                    if !game.handle_line(&line) {
                        log::info!("Player left the kitchen");
                        return;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::info!("Input closed, finishing pending actions");
                    input_open = false;
                }
            }
        }

        let now = Instant::now();
        game.update((now - last_time).as_secs_f32());
        last_time = now;
        game.render();

        if !input_open && game.is_settled() {
            break;
        }
        thread::sleep(frame);
    }
    log::info!(
        "Kitchen closed after {} ticks, {} orders generated",
        game.state.time_ticks,
        game.state.counter.orders_generated()
    );
}
