//! Site content model.
//!
//! A kiosk page is described by a `site.toml` file: hero header, gallery
//! items, services list, and the contact section. The model is immutable
//! after load; a malformed site file is a configuration error surfaced at
//! startup, never a runtime condition the UI recovers from.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use url::Url;

/// Number of gallery items visible per carousel page.
pub const GALLERY_PAGE_SIZE: usize = 6;

/// Hero header content.
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// One gallery entry. `image` is resolved relative to the site file.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    pub image: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
}

/// One services-list entry. The modal is built from `image`, `description`
/// and `alt` (the attributes the entry carries as data).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceItem {
    pub name: String,
    pub image: String,
    pub description: String,
    pub alt: String,
}

/// Contact section: heading plus the form's action URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSection {
    pub action: String,
    #[serde(default)]
    pub heading: Option<String>,
}

/// A complete single-page site.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub header: Header,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
    pub contact: ContactSection,
}

impl Site {
    /// Loads and validates a site file.
    ///
    /// Gallery image paths are resolved relative to the site file's directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site from {}", path.display()))?;
        let mut site: Site = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse site from {}", path.display()))?;

        site.validate()?;

        if let Some(base) = path.parent() {
            for item in &mut site.gallery {
                if item.image.is_relative() {
                    item.image = base.join(&item.image);
                }
            }
        }

        Ok(site)
    }

    /// Structural validation beyond what deserialization enforces.
    fn validate(&self) -> Result<()> {
        ensure!(!self.header.title.is_empty(), "header.title must not be empty");
        Url::parse(&self.contact.action)
            .with_context(|| format!("contact.action is not a valid URL: {}", self.contact.action))?;
        for (i, service) in self.services.iter().enumerate() {
            ensure!(
                !service.name.is_empty(),
                "services[{i}].name must not be empty"
            );
        }
        Ok(())
    }

    /// Display title for gallery item `index` (falls back to the file name).
    pub fn gallery_title(&self, index: usize) -> String {
        let Some(item) = self.gallery.get(index) else {
            return String::new();
        };
        if let Some(title) = &item.title {
            return title.clone();
        }
        item.image
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL_SITE: &str = r#"
[header]
title = "Acme Stoneworks"
tagline = "Granite since 1994"

[[gallery]]
image = "photos/one.jpg"
title = "Kitchen counter"

[[gallery]]
image = "photos/two.jpg"

[[services]]
name = "Countertops"
image = "img/counters.jpg"
description = "Custom granite and quartz countertops."
alt = "A polished granite countertop"

[contact]
action = "https://formspree.io/f/abc123"
heading = "Get in touch"
"#;

    fn write_site(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_minimal_site() {
        let (dir, path) = write_site(MINIMAL_SITE);

        let site = Site::load_from(&path).unwrap();
        assert_eq!(site.header.title, "Acme Stoneworks");
        assert_eq!(site.gallery.len(), 2);
        assert_eq!(site.services.len(), 1);
        assert_eq!(site.contact.heading.as_deref(), Some("Get in touch"));

        // Relative image paths are resolved against the site directory
        assert_eq!(site.gallery[0].image, dir.path().join("photos/one.jpg"));
    }

    #[test]
    fn test_gallery_title_fallback() {
        let (_dir, path) = write_site(MINIMAL_SITE);
        let site = Site::load_from(&path).unwrap();

        assert_eq!(site.gallery_title(0), "Kitchen counter");
        assert_eq!(site.gallery_title(1), "two.jpg");
        assert_eq!(site.gallery_title(99), "");
    }

    #[test]
    fn test_invalid_action_url_rejected() {
        let (_dir, path) = write_site(&MINIMAL_SITE.replace(
            "https://formspree.io/f/abc123",
            "not a url",
        ));
        let err = Site::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("contact.action"));
    }

    #[test]
    fn test_missing_contact_section_rejected() {
        let truncated = MINIMAL_SITE.split("[contact]").next().unwrap();
        let (_dir, path) = write_site(truncated);
        assert!(Site::load_from(&path).is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let (_dir, path) = write_site("[header\ntitle = ");
        assert!(Site::load_from(&path).is_err());
    }
}
