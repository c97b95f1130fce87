use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "menukit")]
#[command(about = "Apply stored menu customizations and print the resulting tree")]
pub struct CliConfig {
    #[arg(long, default_value = "menu.toml")]
    pub menu_file: String,

    #[arg(long, default_value = "overrides.toml")]
    pub overrides_file: String,

    #[arg(long, help = "Print the final tree as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("menu_file", &self.menu_file)?;
        validate_path("overrides_file", &self.overrides_file)?;
        Ok(())
    }
}
