use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio::sync::watch;

use mvi_queue::config::Config;
use mvi_queue::data::{
    CachedProductsRepository, FileSettingsRepository, HttpProductsSource, ProductsCache,
    SystemClock,
};
use mvi_queue::fab::{self, FabIntent, FabState};
use mvi_queue::logging::init_tracing;
use mvi_queue::navigation::{LogNavigator, NavTarget};
use mvi_queue::products::{self, ProductsEffects, ProductsIntent, ProductsState};
use mvi_queue::settings::{self, SettingsEffects, SettingsIntent, SettingsState};
use mvi_queue::shutdown::{ShutdownCoordinator, ShutdownHandle};

#[derive(Parser, Debug)]
#[command(
    name = "mvi-queue",
    version,
    about = "Drive the reference controllers headlessly"
)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Load the product catalogue and print each state
    Products {
        /// Refresh once after the first successful load
        #[arg(long)]
        refresh: bool,
        /// Navigate to the product at this index once loaded
        #[arg(long)]
        open: Option<usize>,
    },
    /// Toggle the floating action button
    Fab {
        #[arg(long, default_value_t = 3)]
        toggles: u32,
    },
    /// Load settings and optionally change the debugging flag
    Settings {
        #[arg(long)]
        enable_debugging: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let shutdown = ShutdownCoordinator::new();
    let ctrl_c = shutdown.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.signal();
        }
    });

    match cli.command {
        Command::Products { refresh, open } => {
            run_products(&config, refresh, open, shutdown.handle()).await
        }
        Command::Fab { toggles } => run_fab(toggles, shutdown.handle()).await,
        Command::Settings { enable_debugging } => {
            run_settings(&config, enable_debugging, shutdown.handle()).await
        }
    }
}

async fn run_products(
    config: &Config,
    refresh: bool,
    open: Option<usize>,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()> {
    let source = HttpProductsSource::new(&config.products)?;
    tracing::info!(url = source.url(), "using product catalogue");
    let cache = ProductsCache::new(config.cache_lifetime(), Arc::new(SystemClock));
    let effects = ProductsEffects::new(
        Arc::new(CachedProductsRepository::new(source, cache)),
        Arc::new(FileSettingsRepository::new(config.settings_path())),
        Arc::new(LogNavigator),
    );

    let mut controller = products::launch(effects)?;
    let mut states = controller.subscribe();

    let mut settled = next_matching(&mut states, &shutdown, describe_products, |s| {
        s.is_settled()
    })
    .await;

    if refresh && matches!(settled, Some(ProductsState::Successful { .. })) {
        controller.enqueue(ProductsIntent::RefreshProducts);
        settled = next_matching(&mut states, &shutdown, describe_products, |s| {
            s.is_settled()
        })
        .await;
    }

    if let (Some(index), Some(ProductsState::Successful { products })) = (open, &settled) {
        match products.get(index) {
            Some(product) => {
                println!("opening: {}", product.title);
                controller.enqueue(ProductsIntent::NavigateTo(NavTarget::ProductDetail { index }));
                tokio::select! {
                    _ = shutdown.wait() => {}
                    _ = controller.drain() => {}
                }
            }
            None => println!("no product at index {}", index),
        }
    }

    controller.stop().await;
    match settled {
        Some(ProductsState::Error { message }) => bail!("failed to load products: {}", message),
        _ => Ok(()),
    }
}

async fn run_fab(toggles: u32, shutdown: ShutdownHandle) -> anyhow::Result<()> {
    let mut controller = fab::launch()?;
    let mut states = controller.subscribe();
    println!("{:?}", controller.state());

    for _ in 0..toggles {
        let intent = match controller.state() {
            FabState::Primary => FabIntent::BecomeSecondary,
            FabState::Secondary => FabIntent::BecomePrimary,
        };
        controller.enqueue(intent);
        if next_matching(&mut states, &shutdown, |s| format!("{:?}", s), |_| true)
            .await
            .is_none()
        {
            break;
        }
    }

    controller.stop().await;
    Ok(())
}

async fn run_settings(
    config: &Config,
    enable_debugging: Option<bool>,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()> {
    let repository = Arc::new(FileSettingsRepository::new(config.settings_path()));
    let mut controller = settings::launch(SettingsEffects::new(repository))?;
    let mut states = controller.subscribe();

    let settled_state = |s: &SettingsState| {
        matches!(
            s,
            SettingsState::Successful { .. } | SettingsState::Error { .. }
        )
    };

    let mut settled =
        next_matching(&mut states, &shutdown, |s| format!("{:?}", s), settled_state).await;

    let loaded = settled.as_ref().and_then(SettingsState::settings);
    if let (Some(flag), Some(mut updated)) = (enable_debugging, loaded) {
        updated.enable_debugging = flag;
        controller.enqueue(SettingsIntent::Write(updated));
        settled =
            next_matching(&mut states, &shutdown, |s| format!("{:?}", s), settled_state).await;
    }

    controller.stop().await;
    match settled {
        Some(SettingsState::Error { message }) => bail!("settings failed: {}", message),
        _ => Ok(()),
    }
}

/// Prints each newly published state until `done` matches.
///
/// Returns `None` on shutdown or when the controller goes away.
async fn next_matching<S: Clone>(
    states: &mut watch::Receiver<S>,
    shutdown: &ShutdownHandle,
    describe: impl Fn(&S) -> String,
    done: impl Fn(&S) -> bool,
) -> Option<S> {
    loop {
        tokio::select! {
            _ = shutdown.wait() => return None,
            changed = states.changed() => {
                if changed.is_err() {
                    return None;
                }
            }
        }

        let current = states.borrow_and_update().clone();
        println!("{}", describe(&current));
        if done(&current) {
            return Some(current);
        }
    }
}

fn describe_products(state: &ProductsState) -> String {
    match state {
        ProductsState::Uninitialized => "uninitialized".to_string(),
        ProductsState::Loading => "loading".to_string(),
        ProductsState::Refreshing { products } => {
            format!("refreshing ({} products shown)", products.len())
        }
        ProductsState::Successful { products } => format!("loaded {} products", products.len()),
        ProductsState::Error { message } => format!("error: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_products_with_flags() {
        let cli = Cli::try_parse_from(["mvi-queue", "products", "--refresh", "--open", "2"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Command::Products {
                refresh: true,
                open: Some(2)
            }
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_fab_default_toggles() {
        let cli = Cli::try_parse_from(["mvi-queue", "fab"]).expect("parse");
        assert_eq!(cli.command, Command::Fab { toggles: 3 });
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mvi-queue",
            "settings",
            "--enable-debugging",
            "true",
            "--config",
            "/tmp/c.toml",
        ])
        .expect("parse");
        assert_eq!(
            cli.command,
            Command::Settings {
                enable_debugging: Some(true)
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn describe_products_summarizes() {
        assert_eq!(describe_products(&ProductsState::Loading), "loading");
        assert_eq!(
            describe_products(&ProductsState::Error {
                message: "x".into()
            }),
            "error: x"
        );
    }
}
