use crate::browserconfig::{self, BROWSERCONFIG_MIME, BROWSERCONFIG_NAME};
use crate::error::{FaviconError, Result};
use crate::manifest::{self, AppIcon, MANIFEST_MIME, MANIFEST_NAME};
use crate::options::Options;
use crate::publish::normalize_base_path;
use crate::transform::{self, Encoding};
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

pub const PNG_MIME: &str = "image/png";
pub const ICO_MIME: &str = "image/x-icon";

const APPLE_TOUCH_ICON: &str = "apple-touch-icon.png";
const ANDROID_CHROME_192: &str = "android-chrome-192x192.png";
const ANDROID_CHROME_512: &str = "android-chrome-512x512.png";
const MSTILE_150: &str = "mstile-150x150.png";

/// Which source raster a descriptor is rendered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Primary,
    /// The apple-touch-icon source, or the primary when none was given.
    Alternate,
}

#[derive(Clone, Copy, Debug)]
pub struct IconDescriptor {
    pub name: &'static str,
    pub source: Source,
    pub size: u32,
    pub encoding: Encoding,
    pub mime: &'static str,
}

const fn png(name: &'static str, source: Source, size: u32) -> IconDescriptor {
    IconDescriptor {
        name,
        source,
        size,
        encoding: Encoding::Png,
        mime: PNG_MIME,
    }
}

pub const CATALOG: [IconDescriptor; 7] = [
    png(APPLE_TOUCH_ICON, Source::Alternate, 180),
    png("favicon.png", Source::Primary, 48),
    png("favicon-32x32.png", Source::Primary, 32),
    png("favicon-16x16.png", Source::Primary, 16),
    png(ANDROID_CHROME_192, Source::Primary, 192),
    png(ANDROID_CHROME_512, Source::Primary, 512),
    png(MSTILE_150, Source::Primary, 150),
];

/// Only rendered when [`Options::ico`] is set.
pub const FAVICON_ICO: IconDescriptor = IconDescriptor {
    name: "favicon.ico",
    source: Source::Primary,
    size: 48,
    encoding: Encoding::Ico,
    mime: ICO_MIME,
};

/// Manifest icons, in manifest order.
const APP_ICONS: [&str; 2] = [ANDROID_CHROME_192, ANDROID_CHROME_512];

/// One servable blob. `name` is relative to the base path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Every asset derived from one [`Options`], ready to register.
#[derive(Clone, Debug)]
pub struct IconSet {
    base_path: String,
    assets: Vec<Asset>,
}

impl IconSet {
    /// Decodes the source image(s) once each and renders the whole set.
    ///
    /// Fails on the first error. Nothing is produced partially.
    pub fn build(options: &Options, base_path: &str) -> Result<Self> {
        let primary = transform::decode(&options.favicon, "favicon")?;
        let alternate = match &options.apple_touch_icon {
            Some(bytes) => Some(transform::decode(bytes, "apple touch icon")?),
            None => None,
        };
        let alternate = alternate.as_ref().unwrap_or(&primary);

        let ico = options.ico.then_some(&FAVICON_ICO);
        let mut assets = Vec::with_capacity(CATALOG.len() + 3);
        for descriptor in CATALOG.iter().chain(ico) {
            let raster = match descriptor.source {
                Source::Primary => &primary,
                Source::Alternate => alternate,
            };
            assets.push(render(descriptor, raster)?);
        }

        let base_path = normalize_base_path(base_path);
        let branding = options.resolve();

        let app_icons: Vec<AppIcon<'_>> = APP_ICONS
            .iter()
            .filter_map(|name| CATALOG.iter().find(|d| d.name == *name))
            .map(|d| AppIcon {
                name: d.name,
                size: d.size,
                mime: d.mime,
            })
            .collect();
        assets.push(Asset {
            name: MANIFEST_NAME.to_string(),
            bytes: manifest::generate(&branding, &base_path, &app_icons)?,
            content_type: MANIFEST_MIME,
        });

        let tile_src = format!("{}{}", base_path, MSTILE_150);
        assets.push(Asset {
            name: BROWSERCONFIG_NAME.to_string(),
            bytes: browserconfig::generate(&branding.tile_color, &tile_src),
            content_type: BROWSERCONFIG_MIME,
        });

        Ok(Self { base_path, assets })
    }

    /// Normalized base path, always ending in exactly one `/`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }

    pub fn into_assets(self) -> Vec<Asset> {
        self.assets
    }

    /// Writes every asset into `dir`, creating it if needed, and returns the
    /// written paths in catalog order.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| FaviconError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.assets.len());
        for asset in &self.assets {
            let path = dir.join(&asset.name);
            fs::write(&path, &asset.bytes).map_err(|source| FaviconError::Io {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
        Ok(written)
    }
}

fn render(descriptor: &IconDescriptor, raster: &DynamicImage) -> Result<Asset> {
    let encoded = match descriptor.encoding {
        Encoding::Png => transform::encode(&transform::resize(raster, descriptor.size), Encoding::Png),
        Encoding::Ico => transform::encode(raster, Encoding::Ico),
    };
    let bytes = encoded.map_err(|source| FaviconError::Encode {
        name: descriptor.name.to_string(),
        source,
    })?;
    tracing::debug!(
        name = descriptor.name,
        size = descriptor.size,
        len = bytes.len(),
        "rendered icon"
    );
    Ok(Asset {
        name: descriptor.name.to_string(),
        bytes,
        content_type: descriptor.mime,
    })
}
