use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use phpdoc_typemask::{
    AnnotationParser, Config, ContextSnapshot, TypeContext, TypeSource, resolve_signature,
    scan_file, translate_signature,
};

/// Resolve PHPDoc type annotations into type masks.
#[derive(Debug, Parser)]
#[command(name = "phpdoc-typemask", version, about)]
struct Cli {
    /// Config file (defaults to ./phpdoc-typemask.toml, then the user config).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (repeat for trace output).  RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve annotation strings such as `int[]` or `?Foo`.
    Resolve {
        /// Current namespace (overrides the config file).
        #[arg(long)]
        namespace: Option<String>,

        /// Import as `Alias=Fully\Qualified\Name` (or just the target).
        #[arg(long = "use", value_name = "ALIAS=TARGET")]
        imports: Vec<String>,

        /// Treat names as already fully qualified.
        #[arg(long)]
        fully_qualified: bool,

        #[arg(required = true)]
        annotations: Vec<String>,
    },
    /// Resolve the documented signature of every routine in PHP files.
    Scan {
        /// Files or directories to scan.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct ResolvedAnnotation {
    annotation: String,
    mask: String,
}

#[derive(Debug, Serialize)]
struct RoutineReport {
    file: PathBuf,
    routine: String,
    parameters: Vec<ParameterReport>,
    returns: String,
    return_source: &'static str,
}

#[derive(Debug, Serialize)]
struct ParameterReport {
    name: String,
    mask: String,
    source: &'static str,
}

#[derive(Debug, Serialize)]
struct ScanReport {
    routines: Vec<RoutineReport>,
    types: ContextSnapshot,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match Config::load(cli.config.as_deref(), &working_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Resolve {
            namespace,
            imports,
            fully_qualified,
            annotations,
        } => run_resolve(
            &config,
            namespace.as_deref(),
            &imports,
            fully_qualified,
            &annotations,
            cli.json,
        ),
        Command::Scan { paths } => run_scan(&config, &paths, cli.json),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_resolve(
    config: &Config,
    namespace: Option<&str>,
    imports: &[String],
    fully_qualified: bool,
    annotations: &[String],
    json: bool,
) -> ExitCode {
    let mut naming = config.naming_context();
    if namespace.is_some() {
        naming.set_namespace(namespace);
    }
    for import in imports {
        match import.split_once('=') {
            Some((alias, target)) => naming.add_alias(alias.trim(), target.trim()),
            None => naming.add_import(import.trim()),
        }
    }

    let mut ctx = TypeContext::new();
    let parser = AnnotationParser::new(Some(&naming));
    let resolved: Vec<ResolvedAnnotation> = annotations
        .iter()
        .map(|annotation| {
            let mask = if fully_qualified {
                let names = phpdoc_typemask::split_alternatives(annotation);
                parser.parse_many(&mut ctx, &names, true)
            } else {
                parser.parse_text(&mut ctx, annotation)
            };
            ResolvedAnnotation {
                annotation: annotation.clone(),
                mask: ctx.describe(&mask),
            }
        })
        .collect();

    if json {
        return print_json(&resolved);
    }
    for entry in &resolved {
        println!("{}\t{}", entry.annotation, entry.mask);
    }
    ExitCode::SUCCESS
}

fn run_scan(config: &Config, paths: &[PathBuf], json: bool) -> ExitCode {
    let mut project = TypeContext::new();
    let mut routines = Vec::new();
    let mut failed = false;

    for file in php_files(config, paths) {
        let found = match scan_file(&file) {
            Ok(found) => found,
            Err(e) => {
                tracing::error!("{e}");
                failed = true;
                continue;
            }
        };

        for routine in &found {
            // Each routine is analysed in its own context, then merged.
            let mut local = TypeContext::new();
            let signature = resolve_signature(&mut local, routine);
            let merged = translate_signature(&mut project, &local, &signature);

            routines.push(RoutineReport {
                file: file.clone(),
                routine: routine.display_name(),
                parameters: merged
                    .parameters
                    .iter()
                    .map(|p| ParameterReport {
                        name: p.name.clone(),
                        mask: project.describe(&p.mask),
                        source: source_label(p.source),
                    })
                    .collect(),
                returns: project.describe(&merged.return_mask),
                return_source: source_label(merged.return_source),
            });
        }
    }

    let code = if json {
        print_json(&ScanReport {
            routines,
            types: project.snapshot(),
        })
    } else {
        for report in &routines {
            let params: Vec<String> = report
                .parameters
                .iter()
                .map(|p| format!("{} ${}", p.mask, p.name))
                .collect();
            println!(
                "{}: {}({}): {}",
                report.file.display(),
                report.routine,
                params.join(", "),
                report.returns
            );
        }
        ExitCode::SUCCESS
    };

    if failed { ExitCode::FAILURE } else { code }
}

/// Expand `paths` into PHP files, walking directories with `.gitignore`
/// rules applied.
fn php_files(config: &Config, paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        let walker = ignore::WalkBuilder::new(path)
            .hidden(!config.scan.hidden)
            .build();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let p = entry.path();
                    if entry.file_type().is_some_and(|t| t.is_file()) && config.is_php_file(p) {
                        files.push(p.to_path_buf());
                    }
                }
                Err(e) => tracing::warn!("skipping unreadable entry: {e}"),
            }
        }
    }
    files.sort();
    files
}

fn source_label(source: TypeSource) -> &'static str {
    match source {
        TypeSource::DocBlock => "docblock",
        TypeSource::Native => "native",
        TypeSource::None => "none",
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("failed to serialise output: {e}");
            ExitCode::FAILURE
        }
    }
}
