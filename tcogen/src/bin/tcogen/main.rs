mod context;
mod generate;
mod help;
mod output;
mod theme;

use std::path::PathBuf;

use clap::{ColorChoice, CommandFactory, FromArgMatches, Parser};

use output::{OutputFormat, OutputOptions, Reporter};

#[derive(Parser)]
#[command(name = "tcogen")]
#[command(version)]
#[command(
    about = "Functional options generator for templ component records",
    long_about = r#"Walks a source tree and writes functional options for templ components:

• Finds structs marked with a //templ:component-opts line comment
• Writes <file>_tcogen.rs next to every annotated <file>.rs
• Seeds default constructors from #[opts(default = "...")] tags
• Never scans its own output or templ-generated files
"#
)]
struct Cli {
    /// Directory to walk (defaults to the current directory)
    root: Option<PathBuf>,

    /// How to print the run summary
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Only print errors
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Print progress notes and debug logs
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Parse arguments with the themed help and its appendix.
    fn parse_themed() -> Self {
        let color = *theme::HELP_COLOR;
        let matches = Cli::command()
            .styles(theme::help_styles())
            .color(if color { ColorChoice::Auto } else { ColorChoice::Never })
            .after_long_help(help::appendix(color))
            .get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let Cli {
        root,
        output,
        quiet,
        verbose,
        no_color,
    } = Cli::parse_themed();
    init_logging(verbose);

    if no_color {
        colored::control::set_override(false);
    }

    let reporter = Reporter::new(OutputOptions {
        format: output,
        quiet,
        verbose,
        no_color,
    });

    if let Err(err) = generate::handle_generate(root, &reporter) {
        reporter.failed(&err);
        std::process::exit(1);
    }
}
