pub mod autostart;
pub mod health;
pub mod init;
pub mod run;
pub mod stop;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start the tray application")]
    Run(run::RunArgs),
    #[command(about = "Stop a detached tray process")]
    Stop,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage run-at-login registration")]
    Autostart(autostart::AutostartArgs),
    #[command(about = "Record or list daily health metrics")]
    Health(health::HealthArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Run(args) => run::cmd(args).await,
            Commands::Stop => stop::cmd(),
            Commands::Init(args) => init::cmd(args),
            Commands::Autostart(args) => autostart::cmd(args),
            Commands::Health(args) => health::cmd(args),
        }
    }
}
