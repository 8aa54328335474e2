use anyhow::Result;

use folio_core::{Preferences, ThemePreference};

pub fn show() -> Result<()> {
    let prefs = Preferences::load_from(&Preferences::default_path())?;
    println!("{}", prefs.theme.as_str());
    Ok(())
}

pub fn set(value: &str) -> Result<()> {
    let theme: ThemePreference = value.parse()?;
    let path = Preferences::default_path();

    let mut prefs = Preferences::load_from(&path)?;
    prefs.theme = theme;
    prefs.save_to(&path)?;

    println!("Theme set to {}", theme.as_str());
    Ok(())
}
