use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_core::{EngineConfig, PageModel};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(EngineConfig::page_path);
    let page = PageModel::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    println!(
        "{}: {} sections, {} cards, {} units tall",
        path.display(),
        page.sections.len(),
        page.cards.len(),
        page.total_height()
    );

    let mut findings = 0;

    for (a, b) in page.overlapping_sections() {
        println!("  overlap: '{a}' and '{b}' share a vertical range (the later one wins while tracking)");
        findings += 1;
    }

    for section in page.sections.iter().filter(|s| s.nav_label.is_none()) {
        println!(
            "  note: section '{}' has no nav label and is skipped by navbar highlighting",
            section.id
        );
        findings += 1;
    }

    for card in page.cards.iter().filter(|c| c.category.trim().is_empty()) {
        println!("  note: card '{}' has an empty category", card.id);
        findings += 1;
    }

    if findings == 0 {
        println!("No layout issues found");
    }
    Ok(())
}
