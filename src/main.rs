use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use invidx::config::AppConfig;
use invidx::index::{read_index_file, write_index_file, BuildOptions, IndexBuilder, RecordOrder, WriteMode};
use invidx::shell::{Shell, ShellOptions};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser)]
#[command(name = "invidx")]
#[command(about = "Build a plain-text inverted index and search it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to <config dir>/invidx/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index file from a file or directory
    Index {
        /// Index file to write
        output: PathBuf,

        /// File or directory to index
        input: PathBuf,

        /// What to do when the index file already exists (asks when omitted)
        #[arg(short, long, value_enum)]
        mode: Option<Existing>,

        /// Keep records in first-seen order instead of by count
        #[arg(long)]
        legacy_order: bool,

        /// Record pairs per line in the index file
        #[arg(long)]
        records_per_line: Option<usize>,

        /// Follow symbolic links while walking directories
        #[arg(long)]
        follow_links: bool,

        /// No progress spinner or summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// Load an index file and answer `sa` / `so` queries from stdin (`q` quits)
    Search {
        /// Index file to load
        index: PathBuf,

        /// Match query words exactly as typed instead of lowercasing them
        #[arg(long)]
        case_sensitive: bool,

        /// When to highlight result paths
        #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
        color: ColorWhen,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Existing {
    Overwrite,
    Append,
    Cancel,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    invidx::logging::init(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Index {
            output,
            input,
            mode,
            legacy_order,
            records_per_line,
            follow_links,
            quiet,
        } => {
            let options = BuildOptions {
                record_order: if legacy_order {
                    RecordOrder::Legacy
                } else {
                    config.record_order
                },
                follow_links: follow_links || config.follow_links,
                show_progress: !quiet,
            };
            let per_line = records_per_line.unwrap_or(config.records_per_line);
            if per_line == 0 {
                bail!("--records-per-line must be at least 1");
            }
            run_index(&output, &input, mode, options, per_line, quiet)?;
        }
        Commands::Search {
            index,
            case_sensitive,
            color,
        } => {
            let options = ShellOptions {
                fold_case: config.fold_query_case && !case_sensitive,
            };
            let choice = match color {
                ColorWhen::Always => ColorChoice::Always,
                ColorWhen::Never => ColorChoice::Never,
                ColorWhen::Auto if config.color && io::stdout().is_terminal() => ColorChoice::Auto,
                ColorWhen::Auto => ColorChoice::Never,
            };
            run_search(&index, options, choice)?;
        }
    }

    Ok(())
}

fn run_index(
    output: &Path,
    input: &Path,
    mode: Option<Existing>,
    options: BuildOptions,
    per_line: usize,
    quiet: bool,
) -> Result<()> {
    if same_file(output, input) {
        bail!("Target index file and file to be indexed are the same");
    }

    let write_mode = if output.exists() {
        let choice = match mode {
            Some(choice) => choice,
            None => prompt_existing()?,
        };
        match choice {
            Existing::Overwrite => WriteMode::Overwrite,
            Existing::Append => WriteMode::Append,
            Existing::Cancel => return Ok(()),
        }
    } else {
        WriteMode::Overwrite
    };

    let (index, stats) = IndexBuilder::new(options).build(input).with_context(|| {
        format!(
            "Could not index {}. Does the given file or directory exist?",
            input.display()
        )
    })?;

    write_index_file(output, &index, write_mode, per_line)
        .with_context(|| format!("Failed to write index file {}", output.display()))?;

    if !quiet {
        println!(
            "Indexed {} documents ({} tokens) into {}",
            stats.documents,
            index.len(),
            output.display()
        );
        if stats.skipped > 0 {
            eprintln!("({} entries could not be read)", stats.skipped);
        }
    }

    Ok(())
}

fn run_search(path: &Path, options: ShellOptions, color: ColorChoice) -> Result<()> {
    let index = read_index_file(path).with_context(|| format!("Failed to load index {}", path.display()))?;

    let mut out = StandardStream::stdout(color);
    let mut err = io::stderr();
    let stats = Shell::new(&index, options).run(io::stdin().lock(), &mut out, &mut err)?;

    tracing::info!(queries = stats.queries, invalid = stats.invalid, "search session ended");
    Ok(())
}

/// Ask on stdout and read the answer from stdin. End of input cancels.
fn prompt_existing() -> Result<Existing> {
    let stdin = io::stdin();
    loop {
        println!("File already exists. Type '1' to overwrite, '2' to append, or '3' to cancel.");
        io::stdout().flush()?;

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer)? == 0 {
            return Ok(Existing::Cancel);
        }
        match answer.trim() {
            "1" => return Ok(Existing::Overwrite),
            "2" => return Ok(Existing::Append),
            "3" => return Ok(Existing::Cancel),
            _ => continue,
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
