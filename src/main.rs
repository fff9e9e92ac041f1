use clap::{Parser as ClapParser, Subcommand};
use rql_lexer::cli::{self, CliError, OutputFormat, TokenizeOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "rql")]
#[command(about = "rql - Tokenize and validate RQL / FIQL query strings")]
#[command(version)]
struct Cli {
    /// Log lexer activity to stderr (honours RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a query
    Tokenize {
        /// The RQL query (reads from stdin if not provided)
        query: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Only validate the query
    Check {
        /// The RQL query (reads from stdin if not provided)
        query: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'rql docs' to list categories)
        category: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Tokenize {
            query,
            format,
            pretty,
        } => run_tokenize(query, format, pretty),
        Commands::Check { query } => run_check(query),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoQuery),
    }
}

fn run_tokenize(query: Option<String>, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let options = TokenizeOptions {
        query: read_query(query)?,
        format,
        pretty,
    };
    let rendered = cli::execute_tokenize(&options)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn run_check(query: Option<String>) -> Result<(), CliError> {
    cli::execute_check(&read_query(query)?)?;
    println!("Syntax is valid");
    Ok(())
}
