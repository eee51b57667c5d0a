//! Maze Chase entry point
//!
//! Thin terminal shell around the simulation core: a crossterm renderer
//! consuming read-only snapshots, a keyboard adapter writing intents into a
//! pending [`TickInput`], and a fixed-interval scheduler. No game logic
//! lives here.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};

use maze_chase::consts::TICK_INTERVAL_MS;
use maze_chase::sim::{Direction, GamePhase, GameState, GhostKind, TickInput, tick};

fn main() -> io::Result<()> {
    env_logger::init();
    let seed = read_seed();
    log::info!("starting run with seed {seed}");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, seed);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn read_seed() -> u64 {
    std::env::var("MAZE_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
}

fn read_tick_interval() -> Duration {
    let ms = std::env::var("MAZE_TICK_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(TICK_INTERVAL_MS);
    Duration::from_millis(ms)
}

fn run(stdout: &mut Stdout, seed: u64) -> io::Result<()> {
    let mut game = GameState::reference(seed);
    let mut pending = TickInput::default();
    let tick_interval = read_tick_interval();
    let mut last_tick = Instant::now();

    draw(stdout, &game)?;
    loop {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                if apply_key(key.code, &game, &mut pending) {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            // Pausing stops the tick schedule; only a pause or restart
            // intent gets a tick through to be consumed.
            let paused = game.phase == GamePhase::Paused;
            if !paused || pending.pause || pending.restart {
                tick(&mut game, &pending);
            }
            pending = TickInput::default();
            draw(stdout, &game)?;
        }
        thread::sleep(Duration::from_millis(2));
    }
}

/// Translate one key press into pending intents. Returns true to quit.
fn apply_key(code: KeyCode, game: &GameState, pending: &mut TickInput) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
        return true;
    }
    if game.phase == GamePhase::GameOver {
        // Any other key starts a new run
        pending.restart = true;
        return false;
    }
    match code {
        KeyCode::Up => pending.direction = Some(Direction::Up),
        KeyCode::Down => pending.direction = Some(Direction::Down),
        KeyCode::Left => pending.direction = Some(Direction::Left),
        KeyCode::Right => pending.direction = Some(Direction::Right),
        KeyCode::Char('p') => pending.pause = true,
        KeyCode::Char('r') => pending.restart = true,
        _ => {}
    }
    false
}

fn ghost_color(kind: GhostKind) -> Color {
    match kind {
        GhostKind::Blue => Color::Cyan,
        GhostKind::Orange => Color::DarkYellow,
        GhostKind::Pink => Color::Magenta,
        GhostKind::Red => Color::Red,
    }
}

fn draw(stdout: &mut Stdout, game: &GameState) -> io::Result<()> {
    let snap = game.snapshot();
    let tile = game.tile_size();
    let rows = (game.board_height() / tile) as usize;
    let cols = (game.board_width() / tile) as usize;

    let mut cells = vec![vec![("  ", Color::Reset); cols]; rows];
    let tile_of = |x: i32, y: i32| (x.div_euclid(tile) as usize, y.div_euclid(tile) as usize);
    // Moving actors sit between tiles; snap to the nearest one
    let nearest_tile = |x: i32, y: i32| tile_of(x + tile / 2, y + tile / 2);

    for wall in snap.walls {
        let (c, r) = tile_of(wall.pos.x, wall.pos.y);
        cells[r][c] = ("██", Color::DarkBlue);
    }
    for pellet in snap.pellets {
        let (c, r) = tile_of(pellet.pos.x, pellet.pos.y);
        cells[r][c] = ("· ", Color::White);
    }
    for ghost in snap.ghosts {
        let (c, r) = nearest_tile(ghost.actor.pos.x, ghost.actor.pos.y);
        if r < rows && c < cols {
            cells[r][c] = ("M ", ghost_color(ghost.kind));
        }
    }
    {
        let (c, r) = nearest_tile(snap.player.pos.x, snap.player.pos.y);
        if r < rows && c < cols {
            cells[r][c] = ("C ", Color::Yellow);
        }
    }

    stdout.queue(Clear(ClearType::All))?;
    for (r, row) in cells.iter().enumerate() {
        stdout.queue(MoveTo(0, r as u16))?;
        for (text, color) in row {
            stdout.queue(SetForegroundColor(*color))?;
            stdout.queue(Print(text))?;
        }
    }
    stdout.queue(ResetColor)?;

    stdout.queue(MoveTo(0, rows as u16))?;
    stdout.queue(Print(format!("x{}  Score: {}", snap.lives, snap.score)))?;
    stdout.queue(MoveTo(0, rows as u16 + 1))?;
    if snap.game_over {
        stdout.queue(SetForegroundColor(Color::Red))?;
        stdout.queue(Print(format!(
            "GAME OVER: {} - press any key to play again, q to quit",
            snap.score
        )))?;
    } else if snap.paused {
        stdout.queue(SetForegroundColor(Color::Yellow))?;
        stdout.queue(Print("PAUSED - press p to resume"))?;
    } else {
        stdout.queue(Print("Arrows: move | p: pause | r: restart | q: quit"))?;
    }
    stdout.queue(ResetColor)?;

    stdout.flush()
}
