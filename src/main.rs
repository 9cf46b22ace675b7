use clap::{Parser, Subcommand};
use simple_invite::effects::EffectGate;
use simple_invite::gallery::GalleryResolver;
use simple_invite::sections::SectionLayout;
use simple_invite::{config, output, server, telemetry};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "simple-invite")]
#[command(about = "Serve an event invitation page with an adaptive gallery")]
#[command(long_about = "\
Serve an event invitation page with an adaptive gallery

Gallery images are picked up from the content root on every request:

  public/
  └── images/
      └── gallery/
          ├── image1.webp          # Slot 1 (WebP preferred)
          ├── image2.jpg           # Slot 2 (JPEG when no WebP)
          └── thumbs/
              └── image1.webp      # Optional WebP thumbnail for slot 1

Slots are numbered image1 .. imageN; gaps are fine. When the gallery
directory is missing the configured fallback list is served instead.

Run 'simple-invite gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file (stock defaults when it does not exist)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Log level when INVITE_LOG and RUST_LOG are unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Override server.host
        #[arg(long)]
        host: Option<String>,
        /// Override server.port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Resolve the gallery once and print the slot table
    Gallery,
    /// Validate the config and print the section layout and effects
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    telemetry::init_logging(&cli.log_level)?;

    match cli.command {
        Command::Serve { host, port } => {
            let mut site = config::load_config(&cli.config)?;
            if let Some(host) = host {
                site.server.host = host;
            }
            if let Some(port) = port {
                site.server.port = port;
            }
            server::serve(Arc::new(site)).await?;
        }
        Command::Gallery => {
            let site = config::load_config(&cli.config)?;
            let resolver = GalleryResolver::new(&site);
            let (resolution, ignored) = resolver.inspect();
            output::print_gallery_output(
                &resolution,
                resolver.base_dir(),
                resolver.slot_count(),
                &ignored,
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let site = config::load_config(&cli.config)?;
            let layout = SectionLayout::from_config(&site);
            output::print_check_output(&layout, &EffectGate::from_site(&site));
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
