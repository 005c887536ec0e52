// =============================================================================
// PODIUM : Point d'entrée en ligne de commande
// =============================================================================
//
//   podium                      → les trois rapports sur les fixtures d'exemple
//   podium report b2            → un seul rapport
//   podium report --order-by salary
//                               → B1 et B3 re-triés par un attribut
//   podium --format json        → sortie JSON
//   podium --fixtures data.toml → autres données
//   podium check                → diagnostic d'intégrité référentielle
//   podium fixtures             → affiche les données de base
//
// Les logs vont sur stderr (niveau `warn` par défaut, `RUST_LOG` pour plus).
//
// =============================================================================

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podium::config::{ConfigOverrides, ReportConfig};
use podium::core::report::ReportSet;
use podium::core::validate;
use podium::render::{OutputFormat, Section};

#[derive(Parser)]
#[command(name = "podium", version, about = "Rapports relationnels en mémoire sur des orchestres")]
struct Cli {
    /// Fichier de configuration TOML
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Fichier de fixtures TOML (à défaut : jeu d'exemple intégré)
    #[arg(long, env = "PODIUM_FIXTURES", global = true)]
    fixtures: Option<PathBuf>,

    /// Préfixe de nom pour le rapport B1
    #[arg(long, env = "PODIUM_NAME_PREFIX", global = true)]
    prefix: Option<String>,

    /// Format de sortie
    #[arg(long, value_enum, env = "PODIUM_FORMAT", global = true)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Calcule et affiche les rapports
    Report {
        #[arg(value_enum, default_value_t = Which::All)]
        which: Which,

        /// Re-trie B1 et B3 par un attribut (full_name, salary, orchestra_name)
        #[arg(long)]
        order_by: Option<String>,
    },
    /// Liste les références cassées et les identifiants dupliqués
    Check,
    /// Affiche les collections de base
    Fixtures,
}

#[derive(Clone, Copy, ValueEnum)]
enum Which {
    B1,
    B2,
    B3,
    All,
}

impl Which {
    fn sections(self) -> Vec<Section> {
        match self {
            Which::B1 => vec![Section::B1],
            Which::B2 => vec![Section::B2],
            Which::B3 => vec![Section::B3],
            Which::All => Section::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        name_prefix: cli.prefix,
        fixtures: cli.fixtures,
        format: cli.format.map(OutputFormat::from),
    };
    let config = ReportConfig::resolve(cli.config.as_deref(), overrides)?;
    let fixtures = config.load_fixtures()?;

    let default_command = Command::Report {
        which: Which::All,
        order_by: None,
    };
    match cli.command.unwrap_or(default_command) {
        Command::Report { which, order_by } => {
            let mut reports = ReportSet::compute(&fixtures, &config.name_prefix);
            if let Some(attribute) = order_by {
                reports = reports.order_placements_by(&attribute)?;
            }
            let renderer = config.format.renderer();
            tracing::debug!(format = renderer.name(), "rendering reports");
            print!("{}", renderer.render(&reports, &which.sections())?);
            if config.format == OutputFormat::Json {
                println!();
            }
        }
        Command::Check => match validate::validate_fixtures(&fixtures) {
            Ok(()) => println!("✓ Fixtures cohérentes ({} lignes)", fixtures.total_rows()),
            Err(issues) => {
                for issue in &issues {
                    println!("✗ {}", issue);
                }
                bail!("{} problème(s) d'intégrité", issues.len());
            }
        },
        Command::Fixtures => print!("{}", fixtures.display()),
    }

    Ok(())
}
