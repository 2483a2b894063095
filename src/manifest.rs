use crate::error::{FaviconError, Result};
use crate::options::Branding;
use serde::Serialize;

pub const MANIFEST_NAME: &str = "site.webmanifest";
pub const MANIFEST_MIME: &str = "application/manifest+json";

#[derive(Serialize, Debug)]
struct Webmanifest<'a> {
    name: &'a str,
    short_name: &'a str,
    display: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_url: Option<&'a str>,
    background_color: &'a str,
    theme_color: &'a str,
    icons: Vec<WebmanifestIcon>,
}

#[derive(Serialize, Debug)]
struct WebmanifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime: &'static str,
}

/// An installable-app icon the manifest points at.
#[derive(Clone, Copy, Debug)]
pub struct AppIcon<'a> {
    pub name: &'a str,
    pub size: u32,
    pub mime: &'static str,
}

/// Serializes the webmanifest. `prefix` must already end with exactly one
/// `/` (see [`crate::publish::normalize_base_path`]).
pub fn generate(branding: &Branding, prefix: &str, icons: &[AppIcon<'_>]) -> Result<Vec<u8>> {
    let manifest = Webmanifest {
        name: &branding.name,
        short_name: &branding.short_name,
        display: &branding.display,
        start_url: branding.start_url.as_deref(),
        background_color: &branding.background_color,
        theme_color: &branding.theme_color,
        icons: icons
            .iter()
            .map(|icon| WebmanifestIcon {
                src: format!("{}{}", prefix, icon.name),
                sizes: format!("{0}x{0}", icon.size),
                mime: icon.mime,
            })
            .collect(),
    };

    serde_json::to_vec(&manifest).map_err(|source| FaviconError::Serialization {
        document: MANIFEST_NAME,
        source,
    })
}
