use anyhow::Result;

use sha2core_tooling::settings::SETTINGS;

fn main() -> Result<()> {
    println!("{:#?}", *SETTINGS);
    Ok(())
}
