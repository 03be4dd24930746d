use anyhow::{Context, Result};
use antipattern_md::config::MarkdownConfig;
use antipattern_md::load;
use antipattern_md::{AntipatternRenderer, CatalogueRenderer, repair_tables};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "antipattern-md", version, about = "Generate antipattern catalogue pages")]
struct Cli {
    /// TOML file overriding page names and the application title
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one antipattern page
    Antipattern {
        /// Template field definitions (JSON)
        #[arg(short, long)]
        template: PathBuf,
        /// Captured field values (JSON)
        #[arg(long)]
        values: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Leave two-dash table rows as they are
        #[arg(long)]
        no_repair: bool,
    },
    /// Render the catalogue page
    Catalogue {
        /// Categories and records (JSON)
        #[arg(long)]
        catalogue: PathBuf,
        /// Home page to link back to
        #[arg(long)]
        home: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Widen two-dash table separator rows in a Markdown file
    Repair {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MarkdownConfig::load(path)?,
        None => MarkdownConfig::default(),
    };

    match cli.command {
        Command::Antipattern {
            template,
            values,
            output,
            no_repair,
        } => {
            let template = load::template_from_json(&read(&template)?)
                .with_context(|| format!("Failed to load template {}", template.display()))?;
            let values = load::values_from_json(&read(&values)?)
                .with_context(|| format!("Failed to load values {}", values.display()))?;

            let renderer = AntipatternRenderer::new(config)?;
            let mut md = renderer.render(&values, &template.fields)?;
            if !no_repair {
                md = repair_tables(&md);
            }
            write(output.as_deref(), &md)
        }
        Command::Catalogue {
            catalogue,
            home,
            output,
        } => {
            let catalogue = load::catalogue_from_json(&read(&catalogue)?)
                .with_context(|| format!("Failed to load catalogue {}", catalogue.display()))?;

            let renderer = CatalogueRenderer::new(config)?;
            let md = match home.as_deref() {
                Some(home) => renderer.render(&catalogue, home),
                None => renderer.render_default_home(&catalogue),
            };
            write(output.as_deref(), &md)
        }
        Command::Repair { input, output } => {
            let md = repair_tables(&read(&input)?);
            write(output.as_deref(), &md)
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}
