use clap::Parser;
use clap::error::ErrorKind;
use drawing_thumbs::config::{BackendKind, Settings};
use drawing_thumbs::imaging::{ImageBackend, MagickBackend, RustBackend};
use drawing_thumbs::output::{self, ConsoleReporter};
use drawing_thumbs::process::{self, EXIT_USAGE};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "drawing-thumbs")]
#[command(about = "Thumbnail the newest drawing in every subfolder")]
#[command(long_about = "\
Thumbnail the newest drawing in every subfolder

For each immediate subfolder of ARTEFACT_DRAWING_DIR, finds the most recently
modified .jpg/.jpeg anywhere inside it and writes a 256x256 center-cropped
thumbnail to CONFIG_SYNTH_DIR/<subfolder>.jpg. Folders without a JPEG are
skipped.

  artefact/drawing/
  ├── 00-minimal-av-softmarks/     → config/synth/00-minimal-av-softmarks.jpg
  │   └── take-2/frame-0042.jpg    # newest JPEG in the subtree
  └── 01-dense-grid/               # no JPEG → skipped

Exit status: 0 ok (skips included), 1 usage error, 3 image backend missing,
4 an image could not be read or written.

Set DRAWING_THUMBS_BACKEND=magick to use ImageMagick instead of the built-in
decoder. RUST_LOG=debug shows which file was picked and the crop geometry.")]
#[command(version = env!("DRAWING_THUMBS_VERSION"))]
struct Cli {
    /// Directory whose subfolders hold the drawings
    #[arg(value_name = "ARTEFACT_DRAWING_DIR")]
    source: PathBuf,

    /// Directory the thumbnails are written to (created if missing)
    #[arg(value_name = "CONFIG_SYNTH_DIR")]
    destination: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => return usage_error(&e.to_string()),
    };

    match settings.backend {
        BackendKind::Rust => run(&cli, &settings, &RustBackend::new()),
        BackendKind::Magick => run(&cli, &settings, &MagickBackend::new()),
    }
}

fn run(cli: &Cli, settings: &Settings, backend: &impl ImageBackend) -> ExitCode {
    let result = process::process(
        &cli.source,
        &cli.destination,
        backend,
        &settings.thumbnail,
        &mut ConsoleReporter,
    );

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.exit_code() == EXIT_USAGE => usage_error(&e.to_string()),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn usage_error(message: &str) -> ExitCode {
    for line in output::format_usage_error(program_name().as_str(), message) {
        eprintln!("{line}");
    }
    ExitCode::from(EXIT_USAGE)
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "drawing-thumbs".to_string())
}
