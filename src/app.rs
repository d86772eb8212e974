use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use std::process;
use vidctl::config::Config;
use vidctl::engine::{self, ControlSession, Selection, codecs};
use vidctl::ui::filters::FilterToggles;

pub fn run(cli: Cli, config: &Config) {
    let result = match cli.command {
        Commands::Codecs => handle_codecs(),
        Commands::Describe { codec } => handle_describe(&codec),
        Commands::Resolve {
            codec,
            quality,
            pass,
            optimize,
            media_type,
            vbr,
            args,
        } => {
            let overrides = Selection {
                media_type: media_type.unwrap_or_default(),
                codec: codec.unwrap_or_default(),
                quality: quality.unwrap_or_default(),
                optimize: optimize.unwrap_or_default(),
                pass: pass.unwrap_or_default(),
                vbr,
            };
            handle_resolve(config, overrides, args)
        }
        Commands::InitConfig => handle_init_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn handle_codecs() -> Result<()> {
    for descriptor in codecs::all() {
        let fragment = engine::codec_fragment(descriptor);
        println!("{:<12} {}", descriptor.id.label(), fragment);
    }
    Ok(())
}

fn handle_describe(codec: &str) -> Result<()> {
    let descriptor = codecs::lookup(codec)?;
    let json = serde_json::to_string_pretty(descriptor)
        .with_context(|| format!("Failed to serialize descriptor for {}", descriptor.id))?;
    println!("{}", json);
    Ok(())
}

/// Config defaults, with any non-blank CLI value taking precedence.
fn merge_selection(config: &Config, overrides: Selection) -> Selection {
    let pick = |cli: String, configured: &str| {
        if cli.trim().is_empty() {
            configured.to_string()
        } else {
            cli
        }
    };
    let defaults = &config.defaults;
    Selection {
        media_type: pick(overrides.media_type, &defaults.media_type),
        codec: pick(overrides.codec, &defaults.codec),
        quality: pick(overrides.quality, &defaults.quality),
        optimize: pick(overrides.optimize, &defaults.optimize),
        pass: pick(overrides.pass, &defaults.pass),
        vbr: overrides.vbr || defaults.vbr,
    }
}

/// Run a session over the merged selection.
fn resolve_session(
    config: &Config,
    overrides: Selection,
) -> Result<ControlSession<FilterToggles>> {
    let selection = merge_selection(config, overrides);
    tracing::debug!(?selection, "resolving selection");

    let mut session = ControlSession::new(FilterToggles::default());
    session
        .select(&selection)
        .with_context(|| format!("Failed to resolve codec '{}'", selection.codec))?;
    Ok(session)
}

fn handle_resolve(config: &Config, overrides: Selection, args_only: bool) -> Result<()> {
    let session = resolve_session(config, overrides)?;

    if args_only {
        println!("{}", session.video_args().unwrap_or_default());
        return Ok(());
    }

    tracing::debug!(filters = ?session.filters().last(), "filter panel");
    let json = session.state().to_json().context("Failed to serialize UI state")?;
    println!("{}", json);
    Ok(())
}

fn handle_init_config() -> Result<()> {
    let path = Config::config_path()?;
    if Config::exists() {
        let cfg = Config::load_from(&path)?;
        println!("Config loaded successfully from {}", path.display());
        println!("{:#?}", cfg);
    } else {
        Config::ensure_default()?;
        println!("Default config saved to {}", path.display());
    }
    Ok(())
}
