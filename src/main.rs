use clap::{Args, Parser, Subcommand};
use log::warn;
use uuid::Uuid;

use gradient_studio::config::{PresetStore, ThemeStore};
use gradient_studio_core::{export_code, random_gradient, render, ExportFormat};
use gradient_studio_types::{ColorStop, GradientConfig, GradientType, Preset, Theme};

/// Gradient Studio - compose, preview, and export multi-stop color gradients
#[derive(Parser, Debug)]
#[command(name = "gradient-studio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the gradient expression for a configuration
    Render(GradientArgs),
    /// Export a gradient as styling code
    Export {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Output format: css, scss, or tailwind
        #[arg(short = 'f', long, value_name = "FORMAT", default_value = "css", value_parser = parse_format)]
        format: ExportFormat,
    },
    /// Manage saved gradient presets
    Preset {
        #[command(subcommand)]
        command: PresetCommand,
    },
    /// Get or set the editor theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PresetCommand {
    /// Save a gradient under a name
    Save {
        name: String,

        #[command(flatten)]
        gradient: GradientArgs,
    },
    /// List saved presets, oldest first
    List,
    /// Print the gradient expression of a preset
    Show { id: Uuid },
    /// Export a preset as styling code
    Export {
        id: Uuid,

        /// Output format: css, scss, or tailwind
        #[arg(short = 'f', long, value_name = "FORMAT", default_value = "css", value_parser = parse_format)]
        format: ExportFormat,
    },
    /// Delete a preset by id
    Delete { id: Uuid },
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Print the active theme
    Get,
    /// Select and persist a theme
    Set {
        /// One of: light, dark, neon, vintage, ocean, sunset
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

/// Gradient configuration flags shared by several subcommands.
#[derive(Args, Debug)]
struct GradientArgs {
    /// Gradient type: linear, radial, or conic
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "linear", value_parser = parse_gradient_type)]
    gradient_type: GradientType,

    /// Angle in degrees (ignored for radial gradients)
    #[arg(short = 'a', long, value_name = "DEGREES", default_value_t = 90.0)]
    angle: f64,

    /// Color stop as COLOR:POS, e.g. -s '#3b82f6:0' (repeatable; defaults
    /// to the editor's seed stops)
    #[arg(short = 's', long = "stop", value_name = "COLOR:POS", value_parser = parse_stop)]
    stops: Vec<ColorStop>,

    /// Randomize stop colors and angle instead of using the flags above
    #[arg(short = 'r', long)]
    random: bool,
}

impl GradientArgs {
    fn to_config(&self) -> GradientConfig {
        if self.random {
            return random_gradient(self.gradient_type);
        }
        let stops = if self.stops.is_empty() {
            GradientConfig::seed_stops()
        } else {
            self.stops.clone()
        };
        GradientConfig::new(self.gradient_type, self.angle, stops)
    }
}

/// Parse a stop string "COLOR:POS" into a ColorStop
fn parse_stop(s: &str) -> Result<ColorStop, String> {
    let (color, position) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("Expected format: COLOR:POS (e.g. #3b82f6:0), got: {s}"))?;
    let color = color
        .trim()
        .parse()
        .map_err(|e| format!("Invalid color: {e}"))?;
    let position: u8 = position
        .trim()
        .parse()
        .map_err(|e| format!("Invalid position: {e}"))?;
    if position > 100 {
        return Err(format!("Position must be 0-100, got: {position}"));
    }
    Ok(ColorStop::new(color, position))
}

fn parse_gradient_type(s: &str) -> Result<GradientType, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn print_preset(preset: &Preset) {
    println!(
        "{}  {}  {:<20}  {}",
        preset.id,
        preset.created_at.format("%Y-%m-%d %H:%M"),
        preset.name,
        render(&preset.config)
    );
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Command::Render(gradient) => {
            println!("{}", render(&gradient.to_config()));
        }
        Command::Export { gradient, format } => {
            println!("{}", export_code(&gradient.to_config(), format));
        }
        Command::Preset { command } => run_preset(command)?,
        Command::Theme { command } => run_theme(command)?,
    }

    Ok(())
}

fn run_preset(command: PresetCommand) -> anyhow::Result<()> {
    let mut store = PresetStore::open_default()?;

    match command {
        PresetCommand::Save { name, gradient } => {
            let preset = store.save(&name, gradient.to_config())?;
            println!("Saved preset '{}' ({})", preset.name, preset.id);
        }
        PresetCommand::List => {
            if store.presets().is_empty() {
                println!("No saved presets");
            }
            for preset in store.presets() {
                print_preset(preset);
            }
        }
        PresetCommand::Show { id } => {
            let preset = store.load(id)?;
            println!("{}", render(&preset.config));
        }
        PresetCommand::Export { id, format } => {
            let preset = store.load(id)?;
            println!("{}", export_code(&preset.config, format));
        }
        PresetCommand::Delete { id } => {
            if !store.delete(id) {
                eprintln!("No preset with id {id}");
            }
        }
    }

    Ok(())
}

fn run_theme(command: ThemeCommand) -> anyhow::Result<()> {
    let store = ThemeStore::open_default()?;

    match command {
        ThemeCommand::Get => println!("{}", store.get()),
        ThemeCommand::Set { theme } => {
            // Best-effort: an unwritable config dir should not kill the session
            if let Err(e) = store.set(theme) {
                warn!("Could not persist theme selection: {e}");
            }
            println!("Theme set to {theme}");
        }
    }

    Ok(())
}
