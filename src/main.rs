use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use subwire::cli::{Cli, Commands, ConfigAction};
use subwire::config::Config;
use subwire::service::StatusResponse;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let session_path = cli.session_path();

    match cli.command {
        Commands::Process {
            video,
            style,
            poll_interval,
            timeout,
            output,
        } => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            subwire::app::run_process_command(
                config,
                video,
                style,
                poll_interval,
                timeout,
                output,
                session_path,
                cli.quiet,
                cli.verbose,
            )
            .await?;
        }
        Commands::Reprocess {
            style,
            poll_interval,
            timeout,
            output,
        } => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            subwire::app::run_reprocess_command(
                config,
                style,
                poll_interval,
                timeout,
                output,
                session_path,
                cli.quiet,
                cli.verbose,
            )
            .await?;
        }
        Commands::Status { task_id } => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            handle_status(&config, &task_id).await?;
        }
        Commands::Export {
            format,
            output,
            per_speaker_styles,
        } => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            subwire::app::run_export_command(
                &config,
                &session_path,
                format,
                output,
                per_speaker_styles,
            )?;
        }
        Commands::Cues { action } => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            subwire::app::run_cues_command(&config, &session_path, action)?;
        }
        Commands::Fonts => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            handle_fonts(&config).await?;
        }
        Commands::Host => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            handle_host(&config).await?;
        }
        Commands::Download { output } => {
            let config = load_config(cli.config.as_deref(), cli.service_url)?;
            subwire::app::run_download_command(&config, &session_path, output, cli.quiet).await?;
        }
        Commands::Config { action } => {
            handle_config_command(action, cli.config.as_deref(), cli.service_url)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "subwire", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/subwire/config.toml)
/// 3. Built-in defaults
///
/// Environment variables override the file, and --service-url
/// overrides everything.
fn load_config(custom_path: Option<&Path>, service_url: Option<String>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        // Load from custom path
        Config::load(path)?
    } else {
        // Try default path, fall back to defaults
        Config::load_or_default(&Config::default_path())?
    };

    let mut config = config.with_env_overrides();
    if let Some(url) = service_url {
        config.service.base_url = url;
    }
    Ok(config)
}

/// Query a task's status once and print it.
async fn handle_status(config: &Config, task_id: &str) -> Result<()> {
    let client = subwire::app::service_client(config, None)?;
    let status = client.status(task_id).await?;
    print_status(&status);
    Ok(())
}

fn print_status(status: &StatusResponse) {
    match status {
        StatusResponse::Complete {
            video_path,
            subtitles,
            ..
        } => {
            println!("Status: {}", "complete".green());
            if let Some(path) = video_path {
                println!("  {}  {}", "Video:".dimmed(), path);
            }
            println!("  {}   {}", "Cues:".dimmed(), subtitles.len());
        }
        StatusResponse::Error { message } => {
            println!("Status: {}", "error".red());
            if let Some(message) = message {
                println!("  {} {}", "Reason:".dimmed(), message);
            }
        }
        other => {
            println!("Status: {}", other.label().yellow());
            if let Some(progress) = other.progress() {
                println!("  {} {}%", "Progress:".dimmed(), progress);
            }
            if let Some(message) = other.message() {
                println!("  {}  {}", "Message:".dimmed(), message);
            }
        }
    }
}

/// List fonts installed on the service.
async fn handle_fonts(config: &Config) -> Result<()> {
    let client = subwire::app::service_client(config, None)?;
    let fonts = client.fonts().await?;

    if fonts.is_empty() {
        println!("No fonts installed on the service");
        return Ok(());
    }

    println!("Available fonts:");
    for font in &fonts {
        println!(
            "  {}",
            subwire::output::format_font(&font.file, font.family.as_deref())
        );
    }

    Ok(())
}

/// Show the address the service advertises for LAN access.
async fn handle_host(config: &Config) -> Result<()> {
    let client = subwire::app::service_client(config, None)?;
    let host = client.host().await?;
    println!("Service reachable at http://{}", host.address());
    Ok(())
}

/// Handle configuration commands.
fn handle_config_command(
    action: ConfigAction,
    custom_path: Option<&Path>,
    service_url: Option<String>,
) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = custom_path
                .map(PathBuf::from)
                .unwrap_or_else(Config::default_path);
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let config = load_config(custom_path, service_url)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
