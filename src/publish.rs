use crate::catalog::{Asset, IconSet};
use crate::error::{FaviconError, Result};
use crate::options::Options;
use axum::body::Bytes;
use axum::http::header;
use axum::routing::get;
use axum::Router;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Normalizes `path` to start with `/` and end with exactly one `/`.
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        format!("{}/", trimmed)
    } else {
        format!("/{}/", trimmed)
    }
}

/// A group of GET routes sharing one base path.
pub trait RouteRegistrar {
    fn base_path(&self) -> &str;

    /// Registers `GET <base path><path>` serving the asset unchanged.
    /// `path` starts with `/`.
    fn register_get(&mut self, path: &str, asset: Asset) -> Result<()>;

    /// Registers one route per asset at `/<asset.name>`.
    ///
    /// Implementations whose `register_get` can fail must override this to
    /// leave no route behind on error.
    fn register_all(&mut self, assets: Vec<Asset>) -> Result<()> {
        for asset in assets {
            let path = asset_path(&asset);
            self.register_get(&path, asset)?;
        }
        Ok(())
    }
}

fn asset_path(asset: &Asset) -> String {
    format!("/{}", asset.name)
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "router rejected the route".to_string()
    }
}

/// [`RouteRegistrar`] backed by an [`axum::Router`].
pub struct RouterGroup<S = ()> {
    base_path: String,
    router: Router<S>,
}

impl<S> RouterGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(base_path: &str) -> Result<Self> {
        Self::with_router(base_path, Router::new())
    }

    /// Adds routes to an existing router. Fails if `base_path` contains
    /// axum route syntax.
    pub fn with_router(base_path: &str, router: Router<S>) -> Result<Self> {
        let base_path = normalize_base_path(base_path);
        if base_path.contains(['{', '}', '*']) {
            return Err(FaviconError::InvalidBasePath { base_path });
        }
        Ok(Self { base_path, router })
    }

    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

impl<S> RouteRegistrar for RouterGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn base_path(&self) -> &str {
        &self.base_path
    }

    fn register_get(&mut self, path: &str, asset: Asset) -> Result<()> {
        let full_path = format!("{}{}", self.base_path.trim_end_matches('/'), path);
        let content_type = asset.content_type;
        let body = Bytes::from(asset.bytes);
        let handler = get(move || async move { ([(header::CONTENT_TYPE, content_type)], body) });

        // axum panics on overlapping or malformed routes
        let candidate = self.router.clone();
        match panic::catch_unwind(AssertUnwindSafe(|| candidate.route(&full_path, handler))) {
            Ok(router) => {
                self.router = router;
                Ok(())
            }
            Err(payload) => Err(FaviconError::Route {
                path: full_path,
                reason: panic_reason(payload),
            }),
        }
    }

    fn register_all(&mut self, assets: Vec<Asset>) -> Result<()> {
        let snapshot = self.router.clone();
        for asset in assets {
            let path = asset_path(&asset);
            if let Err(err) = self.register_get(&path, asset) {
                self.router = snapshot;
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Derives every favicon asset from `options` and registers one GET route
/// per asset on `group`.
///
/// All assets are built before the first registration, so a build error
/// leaves `group` untouched.
pub fn setup<R>(group: &mut R, options: &Options) -> Result<()>
where
    R: RouteRegistrar + ?Sized,
{
    let set = IconSet::build(options, group.base_path())?;
    let base_path = set.base_path().to_string();
    let assets = set.into_assets();
    let count = assets.len();

    group.register_all(assets)?;

    tracing::info!(base_path = %base_path, count, "registered favicon routes");
    Ok(())
}

/// Builds a standalone router serving the favicon set under `base_path`.
pub fn router<S>(base_path: &str, options: &Options) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let mut group = RouterGroup::new(base_path)?;
    setup(&mut group, options)?;
    Ok(group.into_router())
}
