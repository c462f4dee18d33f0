//! pagesieve CLI - blank page removal for PDF files

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagesieve::report::{self, Cleanliness, JsonFormat, Report};
use pagesieve::{remove_pages_from_file, ClassifyOptions, IndicatorPolicy, PageSelection, Sieve};

#[derive(Parser)]
#[command(name = "pagesieve")]
#[command(version)]
#[command(about = "Find and remove blank pages in PDF files", long_about = None)]
struct Cli {
    /// Input PDF file (cleaned with default settings)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    classify: ClassifyArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every page and report blank ones without writing anything
    Analyze {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        #[command(flatten)]
        classify: ClassifyArgs,
    },

    /// Remove blank pages and write a cleaned copy
    Clean {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to <name>_cleaned.pdf next to the input)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Classify and report, but do not write the output file
        #[arg(long)]
        dry_run: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        classify: ClassifyArgs,
    },

    /// Remove specific pages by number
    Remove {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Pages to remove (e.g., "2,3", "2-5")
        #[arg(short, long)]
        pages: String,

        /// Output file (defaults to <name>_trimmed.pdf next to the input)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct ClassifyArgs {
    /// Non-whitespace characters at which a page always counts as content
    #[arg(long, env = "PAGESIEVE_MIN_CHARS", default_value_t = 50)]
    min_chars: usize,

    /// Wording test for short pages
    #[arg(long, value_enum, env = "PAGESIEVE_POLICY", default_value = "legacy")]
    policy: PolicyArg,

    /// Apply Unicode NFKC normalization (expands ligatures) before counting
    #[arg(long)]
    normalize: bool,

    /// Classify pages one at a time
    #[arg(long)]
    sequential: bool,
}

impl ClassifyArgs {
    fn to_options(&self) -> ClassifyOptions {
        let options = ClassifyOptions::new()
            .with_min_content_chars(self.min_chars)
            .with_policy(self.policy.into())
            .with_unicode_normalization(self.normalize);
        if self.sequential {
            options.sequential()
        } else {
            options
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum PolicyArg {
    /// Any short page containing common words like "page", "is" or "a"
    Legacy,
    /// Only short pages saying e.g. "intentionally left blank"
    Strict,
}

impl From<PolicyArg> for IndicatorPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Legacy => IndicatorPolicy::Legacy,
            PolicyArg::Strict => IndicatorPolicy::Strict,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            json,
            compact,
            classify,
        }) => cmd_analyze(&input, json, compact, classify.to_options()),
        Some(Commands::Clean {
            input,
            output,
            dry_run,
            json,
            classify,
        }) => cmd_clean(
            &input,
            output.as_deref(),
            dry_run,
            json,
            classify.to_options(),
        ),
        Some(Commands::Remove {
            input,
            pages,
            output,
        }) => cmd_remove(&input, &pages, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: clean if input is provided
            if let Some(input) = cli.input {
                cmd_clean(
                    &input,
                    cli.output.as_deref(),
                    false,
                    false,
                    cli.classify.to_options(),
                )
            } else {
                println!("{}", "Usage: pagesieve <FILE> [OUTPUT]".yellow());
                println!("       pagesieve --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_analyze(
    input: &Path,
    json: bool,
    compact: bool,
    options: ClassifyOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Analyzing {} with {:?}", input.display(), options);
    let spinner = spinner(format!("Analyzing {}...", input.display()));
    let result = Sieve::with_options(options).analyze(input);
    spinner.finish_and_clear();
    let report = result?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", report::to_json(&report, format)?);
    } else {
        print!("{}", report::to_text(&report));
        print_status(&report);
    }

    Ok(())
}

fn cmd_clean(
    input: &Path,
    output: Option<&Path>,
    dry_run: bool,
    json: bool,
    options: ClassifyOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| sibling_path(input, "cleaned"));

    if is_same_file(input, &output) {
        return Err("output file must differ from the input file".into());
    }
    log::debug!(
        "Cleaning {} into {} with {:?}",
        input.display(),
        output.display(),
        options
    );

    let mut sieve = Sieve::with_options(options);
    if dry_run {
        sieve = sieve.dry_run();
    }

    let spinner = spinner(format!("Cleaning {}...", input.display()));
    let result = sieve.clean(input, &output);
    spinner.finish_and_clear();
    let report = result?;

    if json {
        println!("{}", report::to_json(&report, JsonFormat::Pretty)?);
        return Ok(());
    }

    print!("{}", report::to_text(&report));

    let removed = report.summary.as_ref().map_or(0, |s| s.removed);
    if dry_run {
        println!(
            "\n{} {} pages would be removed",
            "Dry run:".yellow().bold(),
            removed
        );
    } else if removed == 0 {
        println!(
            "\n{} {}",
            "No blank pages detected, copy saved to".green(),
            output.display()
        );
    } else {
        println!("\n{} {}", "Saved to".green().bold(), output.display());
    }

    Ok(())
}

fn cmd_remove(
    input: &Path,
    pages: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = PageSelection::parse(pages)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| sibling_path(input, "trimmed"));

    if is_same_file(input, &output) {
        return Err("output file must differ from the input file".into());
    }
    log::debug!("Removing {:?} from {}", selection, input.display());

    let summary = remove_pages_from_file(input, &output, &selection)?;

    for number in 1..=summary.total {
        if summary.removed_ordinals.contains(&number) {
            println!("Page {:2}: {}", number, "Removed".red());
        } else {
            println!("Page {:2}: {}", number, "Kept".green());
        }
    }

    println!();
    println!("{}: {}", "Total pages".bold(), summary.total);
    println!("{}: {}", "Kept pages".bold(), summary.kept);
    println!("{}: {}", "Removed pages".bold(), summary.removed);
    println!("\n{} {}", "Saved to".green().bold(), output.display());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagesieve".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Blank page removal for PDF files");
    println!();
    println!("License: MIT");
}

fn print_status(report: &Report) {
    let blank = report.classification.blank_count();
    let line = match report.cleanliness {
        Cleanliness::Clean => "No blank pages found".green().bold(),
        Cleanliness::Mostly => format!("{} blank pages found", blank).yellow().bold(),
        Cleanliness::NeedsAttention => format!("{} blank pages found", blank).red().bold(),
    };
    println!("{}", line);
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Whether two paths name the same file, after resolving `.`/`..` and links.
///
/// A path that does not exist yet never matches an existing one.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// `<dir>/<stem>_<suffix>.pdf` next to `input`.
fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}_{}.pdf", stem, suffix))
}
