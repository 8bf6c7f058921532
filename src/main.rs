use artbook::{config, generate, output, scan};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    if env!("ARTBOOK_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("ARTBOOK_GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // Leaked once at startup
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "artbook")]
#[command(about = "Static site generator for illustrated artist interviews")]
#[command(long_about = "\
Static site generator for illustrated artist interviews

Each interview is a folder of questions; each question folder holds the
artist's response as images, text, or both.

Content structure:

  content/
  ├── config.toml                     # Site config (optional)
  ├── assets/                         # Copied verbatim to the output root
  └── interviews/
      ├── 001-jane-doe/
      │   ├── metadata.json           # artistName, interviewTitle,
      │   │                           # interviewNumber, totalQuestions,
      │   │                           # description (optional)
      │   ├── question-1/
      │   │   ├── metadata.json       # question, responseType, artist,
      │   │   │                       # interviewNumber, questionNumber
      │   │   └── morning.png         # Image response
      │   └── question-2/
      │       ├── metadata.json
      │       └── response.md         # Text response (or response.txt)
      └── 002-sam-okafor/
          └── ...

responseType is one of: drawing, handwritten, digital, mixed.

Run 'artbook gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".artbook-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check {
        /// Exit with an error if the scan produced warnings
        #[arg(long)]
        strict: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let manifest = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            generate::generate_site(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check { strict } => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            if strict && !manifest.warnings.is_empty() {
                return Err(format!(
                    "{} warning(s) found in {}",
                    manifest.warnings.len(),
                    cli.source.display()
                )
                .into());
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(
    manifest: &scan::Manifest,
    temp_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)?;
    Ok(())
}
