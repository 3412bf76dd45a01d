use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::info;

use chroma_core::{harmony, ops, wcag};
use chroma_model::{Color, Palette};
use chroma_store::PaletteStore;

use crate::cli::{A11yArgs, BlendArgs, ContrastArgs, CssArgs, GenerateArgs, PaletteIdArg};
use crate::render;

pub fn run_generate(args: &GenerateArgs, store_dir: Option<&Path>) -> Result<i32> {
    let palette = harmony::generate(&args.base_color, args.harmony.into(), &args.name)?;
    if args.json {
        println!(
            "{}",
            chroma_export::to_json(&palette).context("serialize palette")?
        );
    } else {
        render::print_palette(&palette);
    }
    if args.save {
        let store = open_store(store_dir)?;
        store.put(&palette).context("save palette")?;
        info!(id = %palette.id, "palette saved");
        println!();
        println!("saved {}", palette.id);
    }
    Ok(0)
}

pub fn run_css(args: &CssArgs, store_dir: Option<&Path>) -> Result<i32> {
    let store = open_store(store_dir)?;
    match load(&store, &args.palette_id)? {
        Some(palette) => {
            println!("{}", chroma_export::to_css_vars(&palette, &args.prefix));
            Ok(0)
        }
        None => not_found(&args.palette_id),
    }
}

pub fn run_tailwind(args: &PaletteIdArg, store_dir: Option<&Path>) -> Result<i32> {
    let store = open_store(store_dir)?;
    match load(&store, &args.palette_id)? {
        Some(palette) => {
            println!("{}", chroma_export::to_tailwind(&palette));
            Ok(0)
        }
        None => not_found(&args.palette_id),
    }
}

pub fn run_export(args: &PaletteIdArg, store_dir: Option<&Path>) -> Result<i32> {
    let store = open_store(store_dir)?;
    match load(&store, &args.palette_id)? {
        Some(palette) => {
            println!(
                "{}",
                chroma_export::to_json(&palette).context("serialize palette")?
            );
            Ok(0)
        }
        None => not_found(&args.palette_id),
    }
}

pub fn run_a11y(args: &A11yArgs, store_dir: Option<&Path>) -> Result<i32> {
    let store = open_store(store_dir)?;
    match load(&store, &args.palette_id)? {
        Some(palette) => {
            let report = wcag::audit(&palette);
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize audit report")?
                );
            } else {
                render::print_audit(&report);
            }
            Ok(0)
        }
        None => not_found(&args.palette_id),
    }
}

pub fn run_list(store_dir: Option<&Path>) -> Result<i32> {
    let store = open_store(store_dir)?;
    let summaries = store.list().context("list palettes")?;
    if summaries.is_empty() {
        println!("(no palettes saved)");
    } else {
        render::print_list(&summaries);
    }
    Ok(0)
}

pub fn run_contrast(args: &ContrastArgs) -> Result<i32> {
    let first = Color::parse(&args.color1)?;
    let second = Color::parse(&args.color2)?;
    let ratio = wcag::contrast_ratio(&first, &second);
    let grade = wcag::grade(ratio);
    println!("ratio {ratio}:1  grade={grade}");
    println!(
        "AA-normal  (>={}): {}",
        wcag::AA_NORMAL,
        pass_mark(ratio >= wcag::AA_NORMAL)
    );
    println!(
        "AA-large   (>={}): {}",
        wcag::AA_LARGE,
        pass_mark(ratio >= wcag::AA_LARGE)
    );
    println!(
        "AAA-normal (>={}): {}",
        wcag::AAA_NORMAL,
        pass_mark(ratio >= wcag::AAA_NORMAL)
    );
    Ok(0)
}

pub fn run_blend(args: &BlendArgs) -> Result<i32> {
    let first = Color::parse(&args.color1)?;
    let second = Color::parse(&args.color2)?;
    let blended = ops::blend(&first, &second, args.ratio);
    println!("blend @ {:.2}: {blended}", args.ratio.clamp(0.0, 1.0));
    let stops = ops::gradient_stops(&first, &second, args.stops)?;
    for (index, stop) in stops.iter().enumerate() {
        println!("  stop {index}: {stop}");
    }
    Ok(0)
}

pub fn run_delete(args: &PaletteIdArg, store_dir: Option<&Path>) -> Result<i32> {
    let store = open_store(store_dir)?;
    if store.delete(&args.palette_id).context("delete palette")? {
        println!("deleted {}", args.palette_id);
        Ok(0)
    } else {
        not_found(&args.palette_id)
    }
}

fn load(store: &PaletteStore, id: &str) -> Result<Option<Palette>> {
    store.get(id).context("read palette store")
}

fn not_found(id: &str) -> Result<i32> {
    eprintln!("not found: {id}");
    Ok(1)
}

fn pass_mark(pass: bool) -> &'static str {
    if pass { "✓" } else { "✗" }
}

fn open_store(store_dir: Option<&Path>) -> Result<PaletteStore> {
    let root = match store_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_store_dir()?,
    };
    PaletteStore::open(root).context("open palette store")
}

/// Store directory precedence: `--store` flag, `CHROMA_STORE` env var,
/// then the OS data directory.
fn default_store_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("CHROMA_STORE")
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("", "", "chroma")
        .context("could not determine a data directory for the palette store")?;
    Ok(dirs.data_dir().join("palettes"))
}
