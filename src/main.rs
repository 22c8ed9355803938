use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use bpaf::Bpaf;
use keylight_core::{Color, ColorMap, FitMode, KeyId, Keyboard, KeyboardError, Layout};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::detection::{board_kind, BoardKind};

mod config;
mod detection;
mod dump;
mod lock;

/// A key name or numeric id with the color to light it in
#[derive(Clone, Debug, PartialEq)]
struct KeyColor {
    key: String,
    color: Color,
}

impl FromStr for KeyColor {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, color) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=COLOR, got {s}"))?;
        Ok(Self {
            key: key.trim().to_string(),
            color: color.trim().parse()?,
        })
    }
}

impl KeyColor {
    /// Find the key on a layout by name, falling back to a raw id
    fn resolve(&self, layout: &Layout) -> Result<KeyId, String> {
        layout
            .key_by_name(&self.key)
            .or_else(|| self.key.parse().ok().map(KeyId))
            .ok_or_else(|| format!("unknown key for {}: {}", layout.name, self.key))
    }
}

#[derive(Clone, Debug, Bpaf)]
enum Command {
    /// Light keys with individual colors
    #[bpaf(command)]
    Colors {
        /// Color for every key that is not listed (hex: #RRGGBB or #RGB)
        #[bpaf(short, long("default"), argument("COLOR"))]
        default: Option<Color>,
        /// Key name or id and its color, e.g. escape=#ff0000
        #[bpaf(positional("KEY=COLOR"))]
        keys: Vec<KeyColor>,
    },
    /// Light every key with one color
    #[bpaf(command)]
    Fill {
        /// Color (hex: #RRGGBB or #RGB)
        #[bpaf(positional("COLOR"))]
        color: Color,
    },
    /// Draw an image across the keyboard
    #[bpaf(command, fallback_to_usage)]
    Image {
        /// How to place the image: fit (letterbox), fill (crop) or stretch
        #[bpaf(short, long, argument("MODE"))]
        fit: Option<FitMode>,
        /// Path to the image to sample
        #[bpaf(positional("PATH"), guard(|p| p.exists(), "file not found"))]
        path: PathBuf,
    },
    /// Light each key in turn over a white background, row by row
    #[bpaf(command)]
    Sweep {
        /// Color of the lit key
        #[bpaf(short, long, argument("COLOR"))]
        color: Option<Color>,
        /// How long each key stays lit, e.g. 200ms
        #[bpaf(short, long, argument("DURATION"))]
        delay: Option<humantime::Duration>,
    },
    /// List key names, ids and packed offsets
    #[bpaf(command)]
    Keys,
    /// Print the config file path, writing the defaults if it does not exist
    #[bpaf(command)]
    Config,
}

#[derive(Clone, Debug, Bpaf)]
#[bpaf(options, version, descr(env!("CARGO_PKG_DESCRIPTION")))]
struct Cli {
    #[bpaf(external(board_kind), optional)]
    board: Option<BoardKind>,
    /// Print the frames instead of sending them to a keyboard
    #[bpaf(long("dry-run"))]
    dry_run: bool,
    /// Log protocol details to stderr
    #[bpaf(short, long)]
    verbose: bool,
    #[bpaf(external(command))]
    command: Command,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "keylight=debug,keylight_core=debug,corsair_protocol=debug,k70rgb=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn list_keys(layout: &Layout) {
    println!("{} ({} leds)", layout.name, layout.keys.len());
    println!("{:<14} {:>4} {:>7} {:>8}", "name", "id", "offset", "window");
    for key in layout.keys {
        let window = layout
            .sampling_window(key.id)
            .map(|(x, y)| format!("{x},{y}"))
            .unwrap_or_else(|_| "-".into());
        println!(
            "{:<14} {:>4} {:>7} {:>8}",
            key.name, key.id, key.offset, window
        );
    }
}

/// Light each drawable key alone, to check the led mapping by eye
fn sweep(board: &mut dyn Keyboard, color: Color, delay: Duration) -> Result<(), KeyboardError> {
    let layout = board.layout();
    for &key in layout.key_rows.iter().flat_map(|row| row.iter()) {
        board.draw_colors(&ColorMap::from([(key, color)]), Color::WHITE)?;
        println!("{}", layout.name_of(key).unwrap_or("?"));
        std::thread::sleep(delay);
    }
    board.draw_colors(&ColorMap::new(), Color::WHITE)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = cli().run();
    init_logging(cli.verbose);
    let config = Config::load()?;
    let board_kind = match cli.board {
        Some(board) => board,
        None => config.board()?,
    };

    // commands that never touch the device
    match cli.command {
        Command::Keys => {
            list_keys(board_kind.layout());
            return Ok(());
        },
        Command::Config => {
            match Config::path() {
                Some(path) if path.exists() => println!("{}", path.display()),
                _ => {
                    let path = config.save_with_header()?;
                    println!("created default config at {}", path.display());
                },
            }
            return Ok(());
        },
        _ => {},
    }

    // serialize device sessions with other instances
    let _lock = if cli.dry_run {
        None
    } else {
        Some(lock::Lock::acquire()?)
    };
    let mut board = if cli.dry_run {
        board_kind.dry_run()?
    } else {
        board_kind.as_board(config.device.interface)?
    };

    match cli.command {
        Command::Colors { default, keys } => {
            let default = match default {
                Some(color) => color,
                None => config.default_color()?,
            };
            let layout = board.layout();
            let colors = keys
                .iter()
                .map(|k| Ok((k.resolve(layout)?, k.color)))
                .collect::<Result<ColorMap, String>>()?;
            board.draw_colors(&colors, default)?;
            println!("lit {} keys on {}, {default} elsewhere", colors.len(), board.info().name);
        },
        Command::Fill { color } => {
            board.draw_colors(&ColorMap::new(), color)?;
            println!("filled {} with {color}", board.info().name);
        },
        Command::Image { fit, path } => {
            let fit = match fit {
                Some(fit) => fit,
                None => config.fit()?,
            };
            let image = ::image::open(&path)
                .map_err(|e| KeyboardError::UnsupportedImage(e.to_string()))?;
            board.draw_image(&image, fit)?;
            println!("drew {} on {} ({fit})", path.display(), board.info().name);
        },
        Command::Sweep { color, delay } => {
            let color = match color {
                Some(color) => color,
                None => config.sweep_color()?,
            };
            let delay = delay.map_or(config.sweep.delay, Into::into);
            sweep(board.as_mut(), color, delay)?;
        },
        Command::Keys | Command::Config => unreachable!("handled above"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_colors() {
        let kc: KeyColor = "escape=#ff0000".parse().unwrap();
        assert_eq!(kc.key, "escape");
        assert_eq!(kc.color, Color::new(255, 0, 0));
        assert!("escape".parse::<KeyColor>().is_err());
        assert!("escape=red".parse::<KeyColor>().is_err());
    }

    #[test]
    fn resolve_names_and_ids() {
        let layout = &k70rgb::LAYOUT;
        let by_name: KeyColor = "Space=#fff".parse().unwrap();
        assert_eq!(by_name.resolve(layout), Ok(k70rgb::keys::SPACE));
        let by_id: KeyColor = "136=#fff".parse().unwrap();
        assert_eq!(by_id.resolve(layout), Ok(k70rgb::keys::BRIGHTNESS));
        let unknown: KeyColor = "hyper=#fff".parse().unwrap();
        assert!(unknown.resolve(layout).is_err());
    }

    #[test]
    fn parse_command_line() {
        let parsed = cli()
            .run_inner(&["--k70rgb", "--dry-run", "colors", "-d", "#000", "w=#0f0", "a=#0f0"])
            .unwrap();
        assert_eq!(parsed.board, Some(BoardKind::K70rgb));
        assert!(parsed.dry_run);
        let Command::Colors { default, keys } = parsed.command else {
            panic!("expected colors command");
        };
        assert_eq!(default, Some(Color::BLACK));
        assert_eq!(keys.len(), 2);

        let parsed = cli().run_inner(&["sweep", "--delay", "1s"]).unwrap();
        assert_eq!(parsed.board, None);
        let Command::Sweep { delay, .. } = parsed.command else {
            panic!("expected sweep command");
        };
        let delay: Option<Duration> = delay.map(Into::into);
        assert_eq!(delay, Some(Duration::from_secs(1)));
    }

    #[test]
    fn dry_run_draws_without_a_device() {
        let mut board = BoardKind::Auto.dry_run().unwrap();
        board.draw_colors(&ColorMap::new(), Color::WHITE).unwrap();
        sweep(board.as_mut(), Color::BLACK, Duration::ZERO).unwrap();
    }
}
