use anyhow::{Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use pdf_spread::{
    Background, PdfiumBackend, ProgressObserver, ReadingDirection, SpreadOptions, Stage,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Parser)]
#[command(
    name = "pdfspread",
    about = "Convert PDFs into two-page spread images",
    version
)]
struct Cli {
    /// Directory containing the PDF files (defaults to the current directory)
    input_dir: Option<PathBuf>,

    /// Keep the first page as an unpaired cover
    #[arg(long, alias = "singleTop")]
    single_top: bool,

    /// Pair pages right to left
    #[arg(long)]
    vertical: bool,

    /// Search subdirectories for PDFs too
    #[arg(long)]
    recursive: bool,

    /// Render resolution in dots per inch
    #[arg(long)]
    dpi: Option<u32>,

    /// Canvas colour behind shorter pages, as R,G,B (default 0,0,0)
    #[arg(long)]
    background: Option<Background>,

    /// Continue with the remaining PDFs after a failure
    #[arg(long)]
    keep_going: bool,

    /// Directory containing the Pdfium shared library
    #[arg(long)]
    pdfium_lib: Option<PathBuf>,

    /// Load options from a JSON file (flags given here take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show allocation statistics only, don't write images
    #[arg(long)]
    stats_only: bool,

    /// Hide progress bars
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    async fn options(&self) -> Result<SpreadOptions> {
        let mut options = match &self.config {
            Some(path) => SpreadOptions::load(path).await?,
            None => SpreadOptions::default(),
        };

        if let Some(dir) = &self.input_dir {
            options.input_dir = dir.clone();
        }
        if self.single_top {
            options.single_top = true;
        }
        if self.vertical {
            options.reading_direction = ReadingDirection::RightToLeft;
        }
        if self.recursive {
            options.recursive = true;
        }
        if let Some(dpi) = self.dpi {
            options.dpi = dpi;
        }
        if let Some(background) = self.background {
            options.background = background;
        }
        if self.keep_going {
            options.keep_going = true;
        }
        if let Some(dir) = &self.pdfium_lib {
            options.pdfium_library = Some(dir.clone());
        }

        options.validate()?;
        Ok(options)
    }
}

/// Terminal progress bars, one per pipeline stage
struct BarProgress {
    quiet: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl BarProgress {
    fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                f(bar);
            }
        }
    }
}

impl ProgressObserver for BarProgress {
    fn document_started(&self, path: &Path, index: usize, total: usize) {
        if !self.quiet {
            let name = path.file_name().unwrap_or(path.as_os_str());
            println!("\nProcessing ({}/{}): {}", index + 1, total, name.to_string_lossy());
        }
    }

    fn stage_started(&self, stage: Stage, total: usize) {
        let bar = if self.quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        let label = match stage {
            Stage::Rasterize => "converting to image",
            Stage::Compose => "concatenating images",
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{prefix:>22} [{bar:40.cyan/blue}] {pos}/{len}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_prefix(label);

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn advance(&self, _stage: Stage) {
        self.with_bar(|bar| bar.inc(1));
    }

    fn stage_finished(&self, _stage: Stage) {
        self.with_bar(|bar| bar.finish());
    }

    fn document_finished(&self, _path: &Path, ok: bool) {
        if !ok {
            self.with_bar(|bar| bar.abandon());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.options().await?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        println!("Saved options → {}", path.display());
    }

    if cli.stats_only {
        let stats = pdf_spread::statistics(&options, PdfiumBackend::new).await?;
        println!("Spread Statistics:");
        for (pdf, stats) in stats {
            println!("  {}", pdf.display());
            println!("    Source pages: {}", stats.source_pages);
            println!("    Spreads: {}", stats.spreads);
            println!("    Cover: {}", if stats.cover { "yes" } else { "no" });
            println!(
                "    Trailing single: {}",
                if stats.trailing_single { "yes" } else { "no" }
            );
            println!("    Output files: {}", stats.output_files);
        }
        return Ok(());
    }

    let report = pdf_spread::convert(
        &options,
        PdfiumBackend::new,
        BarProgress::new(cli.quiet),
    )
    .await?;

    println!(
        "\nConverted {} document(s), {} spread(s)",
        report.converted.len(),
        report.spread_count()
    );

    if !report.is_success() {
        for failure in &report.failures {
            warn!("Failed: {}: {}", failure.source.display(), failure.error);
        }
        bail!(
            "{} of {} document(s) failed",
            report.failures.len(),
            report.failures.len() + report.converted.len()
        );
    }

    Ok(())
}
