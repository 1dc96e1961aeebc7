use std::path::PathBuf;

use clap::Parser;

use photo_print::bootstrap;
use photo_print::services::DirectorySource;
use photo_print::services::printing::build_printer;
use photo_print::AppConfig;

#[derive(Parser)]
#[command(name = "photo-print")]
#[command(about = "Process photos into printable 4x6 sheets with optimal layout")]
struct Cli {
    /// Folder containing large photos for optimized sheets
    big_folder: PathBuf,

    /// Folder containing small photos for 2x2 sheets
    small_folder: PathBuf,

    /// Output folder for processed sheets (default: TOPRINT)
    #[arg(short, long)]
    output_folder: Option<PathBuf>,

    /// Print the processed sheets automatically
    #[arg(short, long)]
    print: bool,

    /// Destination printer (defaults to the system default printer)
    #[arg(long)]
    printer: Option<String>,

    /// Copies printed of each sheet
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    copies: Option<u32>,

    /// Enable verbose output with detailed processing information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_tracing(cli.verbose);
    bootstrap::load_dotenv();

    let mut config = AppConfig::from_env()
        .with_folders(cli.big_folder, cli.small_folder)
        .with_print(cli.print)
        .with_printer(cli.printer)
        .with_copies(cli.copies);
    if let Some(output) = cli.output_folder {
        config = config.with_output_folder(output);
    }
    let config = config.resolve_paths();

    let printer = build_printer(&config);
    photo_print::run(&config, &DirectorySource, &printer)?;
    Ok(())
}
