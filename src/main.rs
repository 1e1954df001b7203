use clap::{Parser, Subcommand};
use launcher_icons::config::{self, IconConfig, Overrides};
use launcher_icons::generate::{self, GenerateOutcome};
use launcher_icons::imaging::{RustBackend, plan_icons};
use launcher_icons::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launcher-icons")]
#[command(about = "Generate Android launcher icons from one source image")]
#[command(long_about = "\
Generate Android launcher icons from one source image

Reads a square image (logo.png by default) and writes a resized PNG into
each density directory of an Android resource tree:

  android/app/src/main/res/
  ├── mipmap-mdpi/ic_launcher.png      48x48
  ├── mipmap-hdpi/ic_launcher.png      72x72
  ├── mipmap-xhdpi/ic_launcher.png     96x96
  ├── mipmap-xxhdpi/ic_launcher.png    144x144
  └── mipmap-xxxhdpi/ic_launcher.png   192x192

Existing icons are overwritten. Settings come from icongen.toml in the
current directory when present; run 'launcher-icons gen-config' for a
documented template.")]
#[command(version)]
struct Cli {
    /// Config file (default: icongen.toml in the current directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Source image
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Base resource directory for the density directories
    #[arg(long, global = true)]
    project_path: Option<PathBuf>,

    /// File name written into every density directory
    #[arg(long, global = true)]
    icon_name: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write every icon (the default)
    Generate,
    /// Show the resolved input and planned outputs without writing
    Check,
    /// Print a stock icongen.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or(Command::Generate) {
        Command::Generate => {
            let icon_config = resolve_config(&cli)?;
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    println!("{}", output::format_icon_event(&event));
                }
            });
            let outcome = generate::generate_icons(&RustBackend::new(), &icon_config, Some(tx));
            // The sender is dropped by now, so the printer drains and exits.
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;
            if let GenerateOutcome::InputMissing(input) = outcome? {
                output::print_missing_input(&input);
            }
        }
        Command::Check => {
            let icon_config = resolve_config(&cli)?;
            let plans = plan_icons(&icon_config);
            output::print_plan(
                &icon_config.input_image,
                icon_config.input_image.exists(),
                &plans,
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file layer, apply command-line overrides, and validate.
fn resolve_config(cli: &Cli) -> Result<IconConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let icon_config = config::load_config(cli.config.as_deref(), &cwd)?.with_overrides(Overrides {
        input_image: cli.input.clone(),
        project_path: cli.project_path.clone(),
        icon_name: cli.icon_name.clone(),
    });
    icon_config.validate()?;
    Ok(icon_config)
}
