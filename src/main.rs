use clap::{Parser, Subcommand};
use model_composer::{FileAction, GeneratedFile, Generator, Project};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "compose")]
#[command(about = "Scaffold Eloquent collection and query builder classes and compose them into models")]
struct Cli {
    /// Project base directory (the one containing app/)
    #[arg(long, default_value = ".", global = true)]
    base: PathBuf,

    /// Root namespace of the project
    #[arg(long, default_value = "App", global = true)]
    root_namespace: String,

    /// Print the generated files as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a model class plus its collection and query builder
    Model {
        /// Name of the model
        name: String,

        /// Skip generating the companion composition classes
        #[arg(long)]
        without_composition: bool,

        /// Overwrite existing class files
        #[arg(long)]
        force: bool,
    },
    /// Create a collection class, optionally composing it into a model
    Collection {
        /// Name of the collection
        name: String,

        /// Model to compose the collection into
        #[arg(short, long)]
        model: Option<String>,

        /// Overwrite existing class files
        #[arg(long)]
        force: bool,
    },
    /// Create a query builder class, optionally composing it into a model
    QueryBuilder {
        /// Name of the query builder
        name: String,

        /// Model to compose the builder into
        #[arg(short, long)]
        model: Option<String>,

        /// Collection returned by the builder's get()
        #[arg(short, long)]
        collection: Option<String>,

        /// Overwrite existing class files
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let project = Project::new(&cli.base, &cli.root_namespace);
    let start = Instant::now();

    let result = match &cli.command {
        Commands::Model {
            name,
            without_composition,
            force,
        } => Generator::new(&project, *force).make_model(name, !without_composition),
        Commands::Collection { name, model, force } => {
            Generator::new(&project, *force).make_collection(name, model.as_deref())
        }
        Commands::QueryBuilder {
            name,
            model,
            collection,
            force,
        } => Generator::new(&project, *force).make_query_builder(
            name,
            model.as_deref(),
            collection.as_deref(),
        ),
    };

    match result {
        Ok(files) => report(&files, cli.json, start.elapsed()),
        Err(err) => {
            if io::stderr().is_terminal() {
                eprint!("{}", err.render_color());
            } else {
                eprint!("{}", err.render());
            }
            std::process::exit(1);
        }
    }
}

fn report(files: &[GeneratedFile], json: bool, elapsed: Duration) {
    if json {
        println!("{}", serde_json::to_string(files).unwrap());
        return;
    }
    for file in files {
        print_generated(file);
    }
    print_summary(files.len(), elapsed);
}

fn print_generated(file: &GeneratedFile) {
    let is_tty = io::stderr().is_terminal();
    let suffix = match file.action {
        FileAction::Created => "",
        FileAction::Updated => " (updated)",
    };
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}{}", file.path.display(), suffix);
    } else {
        eprintln!("  ✓ {}{}", file.path.display(), suffix);
    }
}

fn print_summary(count: usize, elapsed: Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);
    let files_word = if count == 1 { "file" } else { "files" };

    if is_tty {
        eprintln!("\n\x1b[1m✨ Generated {} {} in {}\x1b[0m", count, files_word, time_str);
    } else {
        eprintln!("\n✨ Generated {} {} in {}", count, files_word, time_str);
    }
}

fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
