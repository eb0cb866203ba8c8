use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use tga_compositor::image_pipeline::{
    CompositeConfig, CompositePipeline, HeaderPolicy, parse_operations,
};
use tga_compositor::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "tgacomp")]
#[command(author, version, about = "Composite uncompressed 24-bit TGA images")]
#[command(long_about = "
Loads a tracking image, applies each operation in order and writes the result.

Operations:
  multiply|subtract|screen|overlay <file>     blend with a second image
  addred|addgreen|addblue <int>               add to one channel
  scalered|scalegreen|scaleblue <int>         multiply one channel
  onlyred|onlygreen|onlyblue                  grayscale from one channel
  combine <green.tga> <blue.tga>              tracking image supplies red
  flip                                        rotate 180 degrees

Options (-v, --header-policy, --no-atomic) must come before <OUTPUT>.
Everything after <INPUT> is read as operations and operands.

Example:
  tgacomp -v out.tga layer1.tga multiply pattern1.tga addgreen 200 flip
")]
struct Cli {
    /// Output file (.tga)
    output: PathBuf,

    /// Tracking image (.tga)
    input: PathBuf,

    /// Operations and their operands, applied left to right
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    operations: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Which header the output file carries
    #[arg(long, value_enum, default_value = "tracking")]
    header_policy: HeaderPolicyArg,

    /// Write the output file directly instead of renaming a staged copy
    #[arg(long)]
    no_atomic: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeaderPolicyArg {
    /// Keep the tracking image's header
    Tracking,
    /// Use the header of the last loaded image
    LastLoaded,
}

impl From<HeaderPolicyArg> for HeaderPolicy {
    fn from(arg: HeaderPolicyArg) -> Self {
        match arg {
            HeaderPolicyArg::Tracking => HeaderPolicy::Tracking,
            HeaderPolicyArg::LastLoaded => HeaderPolicy::LastLoaded,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let operations = parse_operations(&cli.operations).context("Invalid operation list")?;

    let config = CompositeConfig::builder()
        .header_policy(cli.header_policy.into())
        .atomic_write(!cli.no_atomic)
        .build();
    let pipeline = CompositePipeline::new(config);

    info!("Header policy: {:?}", pipeline.config().header_policy);

    pipeline
        .run(&cli.input, &cli.output, &operations)
        .with_context(|| format!("Failed to composite {}", cli.input.display()))?;

    println!("Processing completed. Output saved to: {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    // Bare invocation prints usage and succeeds.
    if std::env::args_os().len() < 2 {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };
    logger::init(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
