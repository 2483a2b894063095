//! Favicon subsystem for web apps.
//!
//! Derives the usual set of platform icons, a webmanifest and a
//! browserconfig.xml from one base image, then serves them as static
//! responses under a base path.
//!
//! ```no_run
//! # fn main() -> Result<(), favicon_kit::FaviconError> {
//! let png = std::fs::read("icon.png").unwrap();
//! let options = favicon_kit::Options::new("My App", png).with_theme_color("#101010");
//! let app: axum::Router = favicon_kit::router("/", &options)?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```
//!
//! | path | content type | size |
//! |------|--------------|------|
//! | `apple-touch-icon.png` | `image/png` | 180 |
//! | `favicon.png` | `image/png` | 48 |
//! | `favicon-32x32.png` | `image/png` | 32 |
//! | `favicon-16x16.png` | `image/png` | 16 |
//! | `android-chrome-192x192.png` | `image/png` | 192 |
//! | `android-chrome-512x512.png` | `image/png` | 512 |
//! | `mstile-150x150.png` | `image/png` | 150 |
//! | `site.webmanifest` | `application/manifest+json` | |
//! | `browserconfig.xml` | `application/xml` | |
//! | `favicon.ico` (opt-in) | `image/x-icon` | 16, 32, 48 |

pub mod browserconfig;
pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod options;
pub mod publish;
pub mod transform;

pub use catalog::{Asset, IconDescriptor, IconSet, CATALOG};
pub use error::{FaviconError, Result};
pub use options::{Branding, Options};
pub use publish::{router, setup, RouteRegistrar, RouterGroup};
