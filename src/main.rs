use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use navmarkup::{default_registry, load_menu, MenuRenderer, RenderOptions, RouteTable};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cli() -> Command {
    Command::new("navmarkup")
        .about("Render a JSON navigation menu as Bootstrap navbar markup")
        .arg(
            Arg::new("menu")
                .help("Menu JSON file (container object or item array)")
                .required_unless_present("list-renderers")
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("renderer")
                .short('r')
                .long("renderer")
                .help("Registered renderer name")
                .default_value("bootstrap3"),
        )
        .arg(
            Arg::new("routes")
                .long("routes")
                .help("JSON object mapping route names to URLs")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("expand-all")
                .long("expand-all")
                .help("Render every submenu, not only selected ones")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("levels")
                .long("levels")
                .help("Deepest menu level to render")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("skip-if-empty")
                .long("skip-if-empty")
                .help("Print nothing for an empty menu")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-renderers")
                .long("list-renderers")
                .help("List registered renderer names and exit")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    init_tracing();

    let matches = cli().get_matches();
    let registry = default_registry();

    if matches.get_flag("list-renderers") {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let menu_path = matches
        .get_one::<PathBuf>("menu")
        .context("a menu file is required")?;
    let renderer_name = matches
        .get_one::<String>("renderer")
        .context("a renderer name is required")?;

    let strategy = registry.resolve(renderer_name)?;
    let menu = load_menu(menu_path)?;

    let routes = match matches.get_one::<PathBuf>("routes") {
        Some(path) => RouteTable::load(path)?,
        None => RouteTable::new(),
    };

    let options = RenderOptions {
        expand_all: matches.get_flag("expand-all"),
        max_depth: matches.get_one::<usize>("levels").copied(),
        skip_if_empty: matches.get_flag("skip-if-empty"),
    };

    let output = MenuRenderer::new(strategy)
        .with_links(&routes)
        .render(&menu, &options)
        .with_context(|| format!("failed to render {}", menu_path.display()))?;

    println!("{}", output);

    Ok(())
}
