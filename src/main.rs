use anyhow::Context;
use clap::Parser;
use menukit::utils::{logger, validation::Validate};
use menukit::{CliConfig, MenuFile, MenuTransformer, TomlStore};
use serde::Serialize;

#[derive(Serialize)]
struct FinalTree<'a> {
    menu: &'a menukit::MenuTree,
    submenu: &'a menukit::SubmenuTree,
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting menukit CLI");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let menu_file = MenuFile::from_file(&config.menu_file)
        .with_context(|| format!("loading menu file {}", config.menu_file))?;
    menu_file
        .validate()
        .with_context(|| format!("validating menu file {}", config.menu_file))?;

    let store = TomlStore::new(&config.overrides_file)?;
    let transformer = MenuTransformer::new(menu_file.settings_page());

    let mut tree = menu_file.menu_tree();
    let mut submenu = menu_file.submenu_tree();
    let contributions = menu_file.contributions();

    let report = transformer.transform(&mut tree, &mut submenu, &store, &contributions)?;
    tracing::info!(
        fallback_active = report.fallback_active,
        hidden_menus = report.hidden_menus,
        hidden_submenus = report.hidden_submenus,
        "transformation pass complete"
    );

    if config.json {
        let output = FinalTree {
            menu: &tree,
            submenu: &submenu,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for entry in &tree {
            println!("{} ({})", entry.label, entry.identifier);
            if let Some(children) = submenu.get(&entry.identifier) {
                for child in children {
                    println!("  {} ({})", child.label, child.identifier);
                }
            }
        }
    }

    Ok(())
}
