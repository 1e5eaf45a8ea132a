//! Command line front end: list, generate and inspect fixture decks.

use clap::{Parser, Subcommand};
use pptx_fixtures::fixtures::{FixtureSpec, build_and_save, catalog, report};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "pptx-fixtures", version, about = "Generate and inspect .pptx test fixtures")]
struct Opts {
    #[command(subcommand)]
    sub: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// List the fixtures in the catalog
    List,

    /// Build one fixture
    Generate {
        /// Fixture name, as printed by `list`
        name: String,

        /// Output path; defaults to the fixture's own path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the slides and shapes of a .pptx file
    Inspect {
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let opts = Opts::parse();
    match opts.sub {
        Subcommands::List => {
            list(&catalog::all());
            ExitCode::SUCCESS
        },
        Subcommands::Generate { name, output } => generate(&name, output),
        Subcommands::Inspect { path } => inspect(&path),
    }
}

fn list(fixtures: &[FixtureSpec]) {
    for fixture in fixtures {
        println!(
            "{:<16} {:<28} {} slides  {}",
            fixture.name,
            fixture.default_output,
            fixture.slide_count(),
            fixture.description
        );
    }
}

fn generate(name: &str, output: Option<PathBuf>) -> ExitCode {
    let Some(fixture) = catalog::find(name) else {
        eprintln!("unknown fixture '{}'; run `pptx-fixtures list`", name);
        return ExitCode::FAILURE;
    };

    let output = output.unwrap_or_else(|| PathBuf::from(fixture.default_output));
    let outcome = build_and_save(&fixture, &output);
    if let Err(err) = report(&fixture, &outcome, &mut std::io::stdout().lock()) {
        log::error!("cannot write report: {}", err);
    }

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(feature = "pptx")]
fn inspect(path: &std::path::Path) -> ExitCode {
    match print_package(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] Cannot inspect {}: {}", path.display(), err);
            ExitCode::FAILURE
        },
    }
}

#[cfg(not(feature = "pptx"))]
fn inspect(path: &std::path::Path) -> ExitCode {
    eprintln!(
        "[ERROR] Cannot inspect {}: built without the pptx feature",
        path.display()
    );
    ExitCode::FAILURE
}

#[cfg(feature = "pptx")]
fn print_package(path: &std::path::Path) -> pptx_fixtures::Result<()> {
    use pptx_fixtures::ooxml::pptx::{Package, ShapeKind};

    let pkg = Package::open(path)?;
    let pres = pkg.presentation()?;

    print!("{}: {} slides", path.display(), pres.slide_count()?);
    if let Some((width, height)) = pres.slide_size()? {
        print!(", {:.2}in x {:.2}in", width.as_inches(), height.as_inches());
    }
    println!();

    for (i, slide) in pres.slides()?.iter().enumerate() {
        println!(
            "Slide {} [{}]: {}",
            i + 1,
            slide.layout_name().unwrap_or("?"),
            slide.title().unwrap_or_default()
        );

        for shape in slide.shapes() {
            let kind = match shape.kind() {
                ShapeKind::Placeholder { ph_type, idx } => format!(
                    "placeholder {} idx {}",
                    ph_type.as_xml().unwrap_or("obj"),
                    idx
                ),
                ShapeKind::TextBox => "text box".to_string(),
                ShapeKind::AutoShape { preset } => {
                    format!("auto shape {}", preset.as_deref().unwrap_or("custom"))
                },
                ShapeKind::Other(element) => element.clone(),
            };
            print!("  #{} {} ({})", shape.id(), shape.name(), kind);
            if let (Some((x, y)), Some((cx, cy))) = (shape.offset(), shape.extent()) {
                print!(
                    " at {:.2},{:.2}in size {:.2}x{:.2}in",
                    x.as_inches(),
                    y.as_inches(),
                    cx.as_inches(),
                    cy.as_inches()
                );
            }
            if let Some(fill) = shape.fill() {
                print!(" fill #{}", fill.to_hex());
            }
            if let Some(line) = shape.line() {
                if let (Some(color), Some(width)) = (line.color, line.width) {
                    print!(" line #{} {:.1}pt", color.to_hex(), width.as_pt());
                }
            }
            println!();

            if let Some(frame) = shape.text_frame() {
                for paragraph in frame.paragraphs().iter().filter(|p| !p.text().is_empty()) {
                    print!("    {}{:?}", "  ".repeat(paragraph.level() as usize), paragraph.text());
                    if let Some(size) = paragraph.font_size() {
                        print!(" {}pt", size);
                    }
                    if paragraph.bold() == Some(true) {
                        print!(" bold");
                    }
                    println!();
                }
            }
        }
    }

    Ok(())
}
