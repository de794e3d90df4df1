//! Site validation without opening the viewer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use kiosk_core::site::Site;

pub fn run(site_arg: Option<PathBuf>) -> Result<()> {
    let path = crate::cli::site_path(site_arg);
    let site = Site::load_from(&path)
        .with_context(|| format!("load site from {}", path.display()))?;

    println!("OK: {}", path.display());
    println!("  title:    {}", site.header.title);
    println!("  gallery:  {} item(s)", site.gallery.len());
    println!("  services: {} item(s)", site.services.len());
    println!("  contact:  {}", site.contact.action);

    let missing: Vec<_> = site
        .gallery
        .iter()
        .filter(|item| !item.image.exists())
        .collect();
    for item in &missing {
        println!("  warning: missing image {}", item.image.display());
    }

    Ok(())
}
