#[macro_use]
extern crate log;
extern crate colog;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use ansi_term::Colour::{Black, Blue, Green, Red, White, Yellow};
use ansi_term::Style;
use clap::Arg;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};

use boxworld_backend::save::SavedGame;
use boxworld_backend::*;

/// What the front end got out of one key press.
enum Input {
    Command(Command),
    Quit,
}

/// A blocking keyboard source. Picked once at startup; the game loop only
/// ever talks to this interface.
trait InputSource {
    fn read(&mut self) -> io::Result<Input>;
}

/// Key reading through crossterm. Raw mode is only enabled around the
/// blocking read so that ordinary println rendering keeps working.
struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn read(&mut self) -> io::Result<Input> {
        terminal::enable_raw_mode()?;
        let result = read_key();
        terminal::disable_raw_mode()?;
        result
    }
}

/// Block until a key press comes in and translate it. Keys that mean nothing
/// here become `Command::Nothing`.
fn read_key() -> io::Result<Input> {
    use self::Direction::*;
    loop {
        if let Event::Key(KeyEvent {
                              code,
                              kind: KeyEventKind::Press,
                              ..
                          }) = event::read()?
        {
            return Ok(match code {
                          KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
                          KeyCode::Char('h') | KeyCode::Left => Input::Command(Command::Move(Left)),
                          KeyCode::Char('j') | KeyCode::Down => Input::Command(Command::Move(Down)),
                          KeyCode::Char('k') | KeyCode::Up => Input::Command(Command::Move(Up)),
                          KeyCode::Char('l') | KeyCode::Right => {
                              Input::Command(Command::Move(Right))
                          }
                          KeyCode::Char('b') | KeyCode::Char('u') => Input::Command(Command::Undo),
                          KeyCode::Char('r') => Input::Command(Command::Restart),
                          _ => Input::Command(Command::Nothing),
                      });
        }
    }
}

fn style(sprite: Sprite) -> Style {
    match sprite {
        Sprite::Player => Style::new().on(Blue),
        Sprite::BoxMisplaced => Style::new().on(Red),
        Sprite::BoxOnTarget => Style::new().on(Green),
        Sprite::Target => Style::new().on(Yellow),
        Sprite::Void => Style::new().on(Black),
        Sprite::Floor => Style::new().on(White),
    }
}

const LEGEND: [(Sprite, &str); 4] = [(Sprite::Player, "Player"),
                                     (Sprite::BoxMisplaced, "Box on the wrong square"),
                                     (Sprite::BoxOnTarget, "Box on a target square"),
                                     (Sprite::Target, "Target square")];

/// Redraw the whole screen: every cell as a two-column coloured block, the
/// legend beside the first rows, the key help underneath.
fn render(level: &Level) -> io::Result<()> {
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    for (row, line) in level.sprites().chunks(level.columns()).enumerate() {
        for &sprite in line {
            print!("{}", style(sprite).paint("  "));
        }
        match LEGEND.get(row) {
            Some(&(sprite, text)) => println!("   {} {}", style(sprite).paint("  "), text),
            None => println!(),
        }
    }
    println!();
    println!("h/j/k/l move   b undo   r restart   q quit");
    stdout.flush()
}

fn session_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("session")
        .to_string()
}

fn main() {
    colog::init();

    let matches = clap::Command::new("boxworld")
        .about("A small box-pushing puzzle for the terminal.")
        .arg(Arg::new("level")
                 .short('l')
                 .long("level")
                 .takes_value(true)
                 .default_value("levels/level01")
                 .help("The file containing the level."))
        .arg(Arg::new("resume")
                 .long("resume")
                 .help("Resume the suspended session for this level."))
        .get_matches();

    let path = matches.value_of("level").unwrap();
    let name = session_name(path);

    let game = if matches.is_present("resume") {
        match SavedGame::read(&name) {
            Some(saved) => Game::from_saved(saved),
            None => {
                info!("No saved session for {}, starting fresh.", name);
                Game::load_file(path)
            }
        }
    } else {
        Game::load_file(path)
    };

    let mut game = match game {
        Ok(game) => game,
        Err(err) => {
            error!("Failed to load level {}: {}", path, err);
            process::exit(1);
        }
    };

    // The one place where the input implementation is chosen.
    let mut input: Box<dyn InputSource> = Box::new(CrosstermInput);

    loop {
        if let Err(err) = render(game.level()) {
            error!("Failed to draw the level: {}", err);
            process::exit(1);
        }

        if game.is_won() {
            println!("You won!");
            SavedGame::remove(&name);
            break;
        }

        match input.read() {
            Ok(Input::Quit) => {
                match game.to_saved(&name).write() {
                    Ok(()) => info!("Session saved, resume with --resume."),
                    Err(err) => error!("Could not save the session: {}", err),
                }
                break;
            }
            Ok(Input::Command(command)) => {
                if let Err(err) = game.execute(command) {
                    error!("{}", err);
                    process::exit(1);
                }
            }
            Err(err) => {
                error!("Failed to read input: {}", err);
                process::exit(1);
            }
        }
    }
}
