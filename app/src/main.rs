mod cli;
mod global_settings;
mod result;

use global_settings::GlobalSettings;

fn main() -> miette::Result<()> {
    GlobalSettings::from_env().install()?;
    cli::exec()
}
