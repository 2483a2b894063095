pub const DEFAULT_DISPLAY: &str = "standalone";
pub const DEFAULT_THEME_COLOR: &str = "#ffffff";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_TILE_COLOR: &str = "#da532c";

/// Branding plus the source image(s) every icon is derived from.
///
/// Unset branding fields are `None` and get their defaults from
/// [`Options::resolve`]. An explicitly empty string is kept as-is.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// App name used for the webmanifest.
    pub name: String,
    /// Falls back to `name`.
    pub short_name: Option<String>,
    /// Falls back to `standalone`.
    pub display: Option<String>,
    /// Left out of the manifest entirely when unset.
    pub start_url: Option<String>,
    pub theme_color: Option<String>,
    pub background_color: Option<String>,
    /// Tile colour for browserconfig.xml.
    pub tile_color: Option<String>,
    /// Encoded base icon (PNG, JPEG, GIF, BMP or TIFF).
    pub favicon: Vec<u8>,
    /// Alternate icon for apple-touch-icon.png. Uses `favicon` when unset.
    pub apple_touch_icon: Option<Vec<u8>>,
    /// Also serve a multi-size favicon.ico.
    pub ico: bool,
}

/// Branding with every default applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branding {
    pub name: String,
    pub short_name: String,
    pub display: String,
    pub start_url: Option<String>,
    pub theme_color: String,
    pub background_color: String,
    pub tile_color: String,
}

impl Options {
    pub fn new(name: impl Into<String>, favicon: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            favicon: favicon.into(),
            ..Default::default()
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn with_start_url(mut self, start_url: impl Into<String>) -> Self {
        self.start_url = Some(start_url.into());
        self
    }

    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = Some(color.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_tile_color(mut self, color: impl Into<String>) -> Self {
        self.tile_color = Some(color.into());
        self
    }

    pub fn with_apple_touch_icon(mut self, icon: impl Into<Vec<u8>>) -> Self {
        self.apple_touch_icon = Some(icon.into());
        self
    }

    pub fn with_ico(mut self, ico: bool) -> Self {
        self.ico = ico;
        self
    }

    pub fn resolve(&self) -> Branding {
        let or_default = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        Branding {
            name: self.name.clone(),
            short_name: or_default(&self.short_name, self.name.as_str()),
            display: or_default(&self.display, DEFAULT_DISPLAY),
            start_url: self.start_url.clone(),
            theme_color: or_default(&self.theme_color, DEFAULT_THEME_COLOR),
            background_color: or_default(&self.background_color, DEFAULT_BACKGROUND_COLOR),
            tile_color: or_default(&self.tile_color, DEFAULT_TILE_COLOR),
        }
    }
}
