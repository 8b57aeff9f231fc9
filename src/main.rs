use clap::{Parser, Subcommand};
use engineer_portfolio::i18n::Language;
use engineer_portfolio::logging::{self, LogConfig};
use engineer_portfolio::storage::FileStorage;
use engineer_portfolio::theme::{DocumentRoot, ThemeState};
use engineer_portfolio::{config, generate, output};
use std::io::IsTerminal;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "engineer-portfolio")]
#[command(about = "Bilingual static portfolio site for a mechanical engineer")]
#[command(long_about = "\
Bilingual static portfolio site for a mechanical engineer

The site text is built in (English and Arabic). The source directory only
holds overrides and static files:

  site/
  ├── config.toml                  # Optional overrides of the stock config
  └── assets/                      # Copied to the output root
      ├── Amr_Ammory_CV.pdf
      ├── Amr_Ammory_CV_Arabic.pdf
      └── images/
          ├── hero-background.jpg
          └── projects-showcase.jpg

Output:

  dist/
  ├── index.html                   # Home page, both languages
  ├── <base_path>/index.html       # Same page under the deployment prefix
  ├── 404.html
  ├── site.css
  └── site.js

Run 'engineer-portfolio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory (config.toml and assets/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Validate config, translations and gallery data without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// List translation keys with their values
    Keys {
        /// Only show values in this language (en, ar)
        #[arg(long, value_parser = parse_language)]
        lang: Option<Language>,
    },
    /// Show which route a request path resolves to
    Route {
        /// Request path, e.g. /engineer-portfolio/
        path: String,
    },
    /// Show or toggle the persisted dark mode preference
    Theme {
        /// Flip the preference and save it
        #[arg(long)]
        toggle: bool,
        /// Preference file [default: <source>/.engineer-portfolio/state.json]
        #[arg(long)]
        state_file: Option<PathBuf>,
    },
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::parse(code).ok_or_else(|| format!("unknown language '{code}' (expected en or ar)"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let log_config =
        LogConfig::from_verbosity(cli.verbose).with_ansi(std::io::stderr().is_terminal());
    logging::init_logging(&log_config)?;

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&site_config, &cli.source.join("assets"), &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let report = generate::check(&site_config, &cli.source.join("assets"))?;
            output::print_check_output(&report, &cli.source);
            println!("==> Site source is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Keys { lang } => {
            output::print_keys(lang);
        }
        Command::Route { path } => {
            let site_config = config::load_config(&cli.source)?;
            output::print_route(&path, &site_config.base_path);
        }
        Command::Theme { toggle, state_file } => {
            let storage = match state_file {
                Some(path) => FileStorage::new(path),
                None => FileStorage::for_site(&cli.source),
            };
            let mut state = ThemeState::init(storage, DocumentRoot::new());
            if toggle {
                state.toggle();
            }
            let class = state.root().class_attr();
            output::print_theme(state.is_dark_mode(), class.as_deref(), state.storage().path());
        }
    }

    Ok(())
}
