//! `glyphtgs` CLI: export font glyphs as centered SVGs and convert them
//! into Telegram animated stickers.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::Parser;
use log::{error, info};

use glyphtgs_core::config::{DEFAULT_OUTLINE_WIDTH, DEFAULT_OUTPUT_DIR};
use glyphtgs_core::{
    ArtifactStore, CharacterSet, ConvertError, Converter, ExportConfig, RunReport, StyleSpec,
};
use glyphtgs_fonts::{FontData, FontError};
use glyphtgs_graphics::types::Color;

#[derive(Parser)]
#[expect(clippy::struct_excessive_bools, reason = "independent CLI flags")]
#[command(
    version,
    about = "Convert characters of a TTF/OTF font into centered SVG glyphs and TGS stickers"
)]
struct Cli {
    /// Path to the TTF/OTF font file
    font: PathBuf,

    /// Path to the file containing the characters to convert
    chars: PathBuf,

    /// Target directory for the output files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Glyph scale factor, clamped to [0.1, 1.0]
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Keep the intermediate SVG files
    #[arg(long)]
    svg: bool,

    /// Only write SVG files; do not run the converter
    #[arg(long)]
    svg_only: bool,

    /// Fill color (#rgb, #rrggbb or a name). Default: black, or white with --outline
    #[arg(long, value_parser = parse_color)]
    fill: Option<Color>,

    /// Draw an outline around each glyph
    #[arg(long)]
    outline: bool,

    /// Outline color
    #[arg(long, default_value = "black", value_parser = parse_color)]
    outline_color: Color,

    /// Outline width in font units, clamped to [1, 100] and then scaled
    #[arg(long, default_value_t = DEFAULT_OUTLINE_WIDTH)]
    outline_width: f64,

    /// Program invoked as `PROGRAM <input.svg> <output.tgs>`
    #[arg(long, default_value = "lottie_convert.py")]
    converter: String,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse::<Color>().map_err(|e| e.to_string())
}

impl Cli {
    fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::default().with_scale(self.scale);
        config.output_dir.clone_from(&self.output);
        config.keep_vector = self.svg || self.svg_only;
        config.style = StyleSpec {
            fill: self.fill,
            outline: self.outline,
            outline_color: self.outline_color,
            outline_width: self.outline_width,
        };
        config
    }

    const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

/// Problems that stop the run before any character is processed.
#[derive(Debug)]
enum CliError {
    Font(FontError),
    Chars { path: PathBuf, source: io::Error },
    OutputDir { path: PathBuf, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font(e) => write!(f, "incorrect font file: {e}"),
            Self::Chars { path, source } => {
                write!(f, "cannot read character list {}: {source}", path.display())
            }
            Self::OutputDir { path, source } => {
                write!(f, "cannot create output directory {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Artifact store and converter
// ---------------------------------------------------------------------------

/// Writes artifacts into a directory on disk.
struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Use `root`, creating it if needed.
    fn create(root: &Path) -> Result<Self, CliError> {
        fs::create_dir_all(root).map_err(|source| CliError::OutputDir {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }
}

impl ArtifactStore for DirectoryStore {
    fn write_artifact(&self, file_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.root.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn remove_artifact(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Runs an external program to turn an SVG into a TGS file.
struct CommandConverter {
    program: String,
}

impl Converter for CommandConverter {
    fn extension(&self) -> &str {
        "tgs"
    }

    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConvertError> {
        let output = Command::new(&self.program)
            .arg(source)
            .arg(target)
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map_or_else(|| output.status.to_string(), |line| line.trim().to_owned());
        Err(ConvertError::Failed {
            target: target.to_path_buf(),
            detail,
        })
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(&cli) {
        Ok(report) => {
            print_summary(&report);
            if report.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RunReport, CliError> {
    let text = fs::read_to_string(&cli.chars).map_err(|source| CliError::Chars {
        path: cli.chars.clone(),
        source,
    })?;
    let chars = CharacterSet::load(&text);

    let font = FontData::from_file(&cli.font).map_err(CliError::Font)?;
    info!(
        "Loaded {} ({} glyphs, {} units per em)",
        cli.font.display(),
        font.glyph_count(),
        font.units_per_em()
    );

    let config = cli.export_config();
    let store = DirectoryStore::create(&config.output_dir)?;
    let converter = CommandConverter {
        program: cli.converter.clone(),
    };
    let converter: Option<&dyn Converter> = if cli.svg_only {
        None
    } else {
        Some(&converter)
    };

    info!(
        "Exporting {} characters to {}",
        chars.len(),
        config.output_dir.display()
    );
    Ok(glyphtgs_core::run(&font, &chars, &config, &store, converter))
}

/// Per-character lines are logged by the run itself; this is the tally.
fn print_summary(report: &RunReport) {
    info!(
        "Done: {} exported, {} skipped",
        report.exported.len(),
        report.skipped.len()
    );
}
