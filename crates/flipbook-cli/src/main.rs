use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use flipbook_sheet::{Session, SheetOptions, calculate_statistics, load_source_images};

#[derive(Parser)]
#[command(name = "flipbook", about = "Flipbook sheet maker", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a printable grid-sheet PDF from a folder of images
    Generate {
        /// Directory containing the source images
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, default_value = "flipbook_print.pdf")]
        output: PathBuf,

        /// Also save a low-res preview of the first page (PNG)
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Frame ordering
        #[arg(long, default_value = "capture-time", value_enum)]
        sort: SortArg,

        /// Page orientation
        #[arg(long, default_value = "landscape", value_enum)]
        orientation: OrientationArg,

        /// Output paper size
        #[arg(long, default_value = "letter", value_enum)]
        paper: PaperArg,

        /// Grid columns (2-8)
        #[arg(long, default_value = "3")]
        columns: usize,

        /// Grid rows (2-7)
        #[arg(long, default_value = "4")]
        rows: usize,

        /// Show layout statistics only, don't generate the PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    CaptureTime,
    Filename,
    ModifiedTime,
    CreatedTime,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Landscape,
    Portrait,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<SortArg> for flipbook_sheet::SortStrategy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::CaptureTime => Self::CaptureTime,
            SortArg::Filename => Self::Filename,
            SortArg::ModifiedTime => Self::ModifiedTime,
            SortArg::CreatedTime => Self::CreatedTime,
        }
    }
}

impl From<OrientationArg> for flipbook_sheet::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Landscape => Self::Landscape,
            OrientationArg::Portrait => Self::Portrait,
        }
    }
}

impl From<PaperArg> for flipbook_sheet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            preview,
            sort,
            orientation,
            paper,
            columns,
            rows,
            stats_only,
        } => {
            let images = load_source_images(&input).await?;

            let mut session = Session::new();
            session.set_inputs(images);

            let (valid, skipped) = session.input_counts();
            if skipped > 0 {
                println!(
                    "{} valid images loaded (skipped {} hidden/macOS junk files)",
                    valid, skipped
                );
            } else {
                println!("{} valid images loaded", valid);
            }

            let options = SheetOptions {
                sort_strategy: sort.into(),
                orientation: orientation.into(),
                paper_size: paper.into(),
                columns,
                rows,
                ..Default::default()
            };

            if stats_only {
                let stats = calculate_statistics(session.inputs(), &options)?;
                println!("Sheet statistics:");
                println!("  Valid images: {}", stats.valid_images);
                println!("  Skipped hidden files: {}", stats.skipped_hidden);
                println!("  Frames per page: {}", options.capacity());
                println!("  Pages: {}", stats.pages);
                return Ok(());
            }

            let result = session.generate(&options).await?;
            tokio::fs::write(&output, &result.pdf_bytes).await?;
            if let Some(preview_path) = &preview {
                result.preview.save(preview_path)?;
            }

            println!(
                "Ready! {} frames processed -> {} pages",
                result.stats.frames, result.stats.pages
            );
            println!("Saved {}", output.display());
            if let Some(preview_path) = preview {
                println!("Preview saved to {}", preview_path.display());
            }
        }
    }

    Ok(())
}
