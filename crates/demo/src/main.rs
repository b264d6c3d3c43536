mod script;
mod tui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use glam::Vec3;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use script::DemoScript;
use strider::{ControllerConfig, Simulation};
use tui::DemoStats;

#[derive(Parser)]
#[command(name = "strider-demo")]
#[command(about = "Scripted first-person movement demo")]
struct Args {
    #[arg(short, long, default_value_t = 60)]
    tick_rate: u32,

    #[arg(short, long, default_value_t = DemoScript::DURATION, help = "Scripted run duration in seconds")]
    seconds: f32,

    #[arg(long, help = "Log state once per second instead of drawing the TUI")]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ControllerConfig::default();
    let mut sim = Simulation::new(config, args.tick_rate, Vec3::new(0.0, 0.5, 0.0))?;
    let script = DemoScript::new();

    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        run_headless(&mut sim, &script, args.tick_rate, args.seconds);
    } else {
        run_with_tui(&mut sim, &script, args.seconds)?;
    }

    Ok(())
}

fn run_headless(sim: &mut Simulation, script: &DemoScript, tick_rate: u32, seconds: f32) {
    let dt = sim.dt();
    let total_ticks = (seconds * tick_rate as f32) as u64;
    log::info!("running {total_ticks} scripted ticks at {tick_rate} Hz");

    for tick in 0..total_ticks {
        let t = tick as f32 * dt;
        sim.step(script.sample(t));

        if tick % tick_rate as u64 == 0 {
            let feet = sim.feet_position();
            log::info!(
                "[{:>5.1}s] {:<13} pos ({:6.2}, {:5.2}, {:6.2})  grounded {:<5}  height {:.2}",
                t,
                script.phase_name(t),
                feet.x,
                feet.y,
                feet.z,
                sim.grounded(),
                sim.state.current_height,
            );
        }
    }

    let feet = sim.feet_position();
    log::info!(
        "run complete at ({:.2}, {:.2}, {:.2}) after {} ticks",
        feet.x,
        feet.y,
        feet.z,
        sim.tick_count()
    );
}

fn run_with_tui(sim: &mut Simulation, script: &DemoScript, seconds: f32) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let start = Instant::now();
    let mut last = Instant::now();

    let result = loop {
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    break Ok(());
                }
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last).as_secs_f32();
        last = now;

        // The script loops so the demo keeps roaming until quit.
        let t = start.elapsed().as_secs_f32() % seconds;
        sim.update(delta, script.sample(t));

        let stats = DemoStats::collect(sim, script.phase_name(t), t);
        terminal.draw(|frame| tui::render(frame, &stats))?;
    };

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    result
}
