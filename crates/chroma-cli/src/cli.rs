//! CLI argument definitions for the chroma palette tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use chroma_model::HarmonyKind;

#[derive(Parser)]
#[command(
    name = "chroma",
    version,
    about = "Generate harmonious, WCAG-audited color palettes",
    long_about = "Generate harmonious color palettes from a single base color.\n\n\
                  Exports CSS custom properties, Tailwind config, and structured JSON,\n\
                  and audits every palette against WCAG 2.1 contrast thresholds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Palette store directory (default: OS data dir or $CHROMA_STORE).
    #[arg(long = "store", value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a new palette from a base color.
    Generate(GenerateArgs),

    /// Export a saved palette as CSS custom properties.
    Css(CssArgs),

    /// Export a saved palette as a Tailwind config.
    Tailwind(PaletteIdArg),

    /// Export a saved palette as structured JSON.
    Export(PaletteIdArg),

    /// Run a WCAG contrast audit over a saved palette.
    A11y(A11yArgs),

    /// List saved palettes.
    List,

    /// Compute the WCAG contrast ratio between two colors.
    Contrast(ContrastArgs),

    /// Blend two colors and print gradient stops.
    Blend(BlendArgs),

    /// Delete a saved palette.
    Delete(PaletteIdArg),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Base color as hex (e.g. "#3b82f6" or "3b82f6").
    #[arg(value_name = "BASE_COLOR")]
    pub base_color: String,

    /// Harmony scheme to apply.
    #[arg(value_enum, value_name = "HARMONY")]
    pub harmony: HarmonyArg,

    /// Display name for the palette (defaults to the harmony name).
    #[arg(long = "name", default_value = "")]
    pub name: String,

    /// Persist the palette to the store.
    #[arg(long = "save")]
    pub save: bool,

    /// Print the full JSON export instead of the swatch table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CssArgs {
    /// Id of a saved palette.
    #[arg(value_name = "PALETTE_ID")]
    pub palette_id: String,

    /// Prefix for the generated custom properties.
    #[arg(long = "prefix", default_value = "palette")]
    pub prefix: String,
}

#[derive(Parser)]
pub struct A11yArgs {
    /// Id of a saved palette.
    #[arg(value_name = "PALETTE_ID")]
    pub palette_id: String,

    /// Print the audit report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PaletteIdArg {
    /// Id of a saved palette.
    #[arg(value_name = "PALETTE_ID")]
    pub palette_id: String,
}

#[derive(Parser)]
pub struct ContrastArgs {
    /// First color as hex.
    #[arg(value_name = "COLOR1")]
    pub color1: String,

    /// Second color as hex.
    #[arg(value_name = "COLOR2")]
    pub color2: String,
}

#[derive(Parser)]
pub struct BlendArgs {
    /// First color as hex.
    #[arg(value_name = "COLOR1")]
    pub color1: String,

    /// Second color as hex.
    #[arg(value_name = "COLOR2")]
    pub color2: String,

    /// Blend ratio: 0 yields COLOR1, 1 yields COLOR2.
    #[arg(long = "ratio", default_value_t = 0.5)]
    pub ratio: f64,

    /// Number of gradient stops to print.
    #[arg(long = "stops", default_value_t = 5)]
    pub stops: usize,
}

/// CLI harmony choices, mapped onto the model enum.
#[derive(Clone, Copy, ValueEnum)]
pub enum HarmonyArg {
    Complementary,
    Triadic,
    Analogous,
    Monochromatic,
    SplitComplementary,
    Tetradic,
}

impl From<HarmonyArg> for HarmonyKind {
    fn from(arg: HarmonyArg) -> Self {
        match arg {
            HarmonyArg::Complementary => HarmonyKind::Complementary,
            HarmonyArg::Triadic => HarmonyKind::Triadic,
            HarmonyArg::Analogous => HarmonyKind::Analogous,
            HarmonyArg::Monochromatic => HarmonyKind::Monochromatic,
            HarmonyArg::SplitComplementary => HarmonyKind::SplitComplementary,
            HarmonyArg::Tetradic => HarmonyKind::Tetradic,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
