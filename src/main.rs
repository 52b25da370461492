use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pvba::application::strategy::{direct_target, is_available};
use pvba::config::ResolverConfig;
use pvba::domain::payment::PaymentDescriptor;
use pvba::infrastructure::qr::DEFAULT_MODULE_SIZE;
use pvba::interfaces::json::launch_writer::ChooserTitle;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Pay via bank app with a SPAYD payment", long_about = None)]
struct Cli {
    /// JSON registry of installed apps and the MIME types they handle
    #[arg(long, env = "PVBA_REGISTRY")]
    registry: PathBuf,

    /// Directory the QR code image is written under (defaults to the temp dir)
    #[arg(long, env = "PVBA_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Bank app accepted as an image receiver; repeat to replace the built-in list
    #[arg(long = "bank-app", value_name = "ID")]
    bank_apps: Vec<String>,

    /// Pixel size of one QR code module
    #[arg(
        long,
        default_value_t = DEFAULT_MODULE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    module_size: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether any installed bank app can receive a payment
    Supported,
    /// Print the resolved descriptor and image receivers as JSON
    Receivers,
    /// Hand a payment over to a bank app or a chooser
    Pay {
        /// Payment in SPAYD format
        spayd: String,

        /// Title shown above the chooser
        #[arg(long, default_value = "")]
        title: String,
    },
}

impl Cli {
    fn config(&self) -> ResolverConfig {
        let mut config = ResolverConfig::new(&self.registry);
        if let Some(cache_dir) = &self.cache_dir {
            config.cache_dir = cache_dir.clone();
        }
        if !self.bank_apps.is_empty() {
            config.allow_list = self.bank_apps.iter().map(String::as_str).collect();
        }
        config.module_size = self.module_size;
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let engine = cli.config().build(io::stdout());

    match cli.command {
        Command::Supported => {
            // Both answers come from a single resolution.
            let receivers = engine.receivers().await?;
            if is_available(&receivers.descriptor, &receivers.image) {
                println!("supported");
                if let Some(app) = direct_target(&receivers.descriptor, &receivers.image) {
                    println!("{app}");
                }
            } else {
                println!("unsupported");
            }
        }
        Command::Receivers => {
            let receivers = engine.receivers().await?;
            println!("{}", serde_json::to_string_pretty(&receivers).into_diagnostic()?);
        }
        Command::Pay { spayd, title } => {
            engine
                .pay_via_bank_app(&PaymentDescriptor::new(spayd), &ChooserTitle(title))
                .await?;
        }
    }

    Ok(())
}
