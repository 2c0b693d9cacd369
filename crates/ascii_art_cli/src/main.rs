use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ascii_art::{AsciiRenderer, RampKind, RenderConfig, DEFAULT_CELL_ASPECT};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert an image to ASCII art")]
struct Cli {
    /// Input image path
    image: PathBuf,
    /// Save the ASCII art to this file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    settings: RenderSettings,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Output width in characters
    #[arg(short = 'W', long, env = "IMG2ASCII_WIDTH", default_value_t = 100)]
    width: u32,
    /// Glyph ramp used to map brightness to characters
    #[arg(short, long, value_enum, env = "IMG2ASCII_RAMP", default_value = "default")]
    ramp: RampPreset,
    /// Invert the brightness mapping
    #[arg(short, long, default_value_t = false)]
    invert: bool,
    /// Color each glyph with its source pixel (24-bit ANSI)
    #[arg(short, long, default_value_t = false)]
    color: bool,
    /// Force grayscale output even when --color is given
    #[arg(short, long, default_value_t = false)]
    grayscale_only: bool,
    /// Apply the color as background instead of foreground
    #[arg(short, long, default_value_t = false)]
    background: bool,
    /// Character cell height/width correction
    #[arg(long, default_value_t = DEFAULT_CELL_ASPECT)]
    cell_aspect: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RampPreset {
    Default,
    Extended,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.settings.to_config()?;
    debug!("render config: {:?}", config);

    let output = AsciiRenderer
        .render_path(&cli.image, &config)
        .with_context(|| format!("failed to render {:?}", cli.image))?;
    let lines = output.lines();
    info!("rendered {} lines from {:?}", lines.len(), cli.image);

    match cli.output {
        Some(path) => {
            save(&path, &lines).with_context(|| format!("failed to write {:?}", path))?;
            println!("Saved ASCII art to: {}", path.display());
        },
        None => {
            let stdout = io::stdout();
            print_lines(&mut stdout.lock(), &lines)?;
        },
    }

    Ok(())
}

fn print_lines<W: Write>(out: W, lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

fn save(path: &Path, lines: &[String]) -> io::Result<()> {
    fs::write(path, lines.join("\n"))
}

impl RenderSettings {
    fn to_config(&self) -> Result<RenderConfig> {
        let config = RenderConfig::builder()
            .output_width(self.width)
            .ramp(self.ramp.to_kind())
            .invert(self.invert)
            .color(self.color && !self.grayscale_only)
            .background(self.background)
            .cell_aspect(self.cell_aspect)
            .build()?;
        Ok(config)
    }
}

impl RampPreset {
    fn to_kind(self) -> RampKind {
        match self {
            RampPreset::Default => RampKind::Default,
            RampPreset::Extended => RampKind::Extended,
        }
    }
}
