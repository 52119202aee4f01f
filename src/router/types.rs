use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use thiserror::Error;

/// A rendered view, owned by the UI layer.
///
/// The navigator only hands out handles and passes captured path parameters
/// along; rendering itself happens elsewhere.
#[async_trait]
pub trait View: Send + Sync {
    fn name(&self) -> &str;

    /// Called with the captured parameters when navigation lands on this view.
    async fn on_navigate(&self, _params: &RouteParams) {}
}

pub type ViewHandle = Arc<dyn View>;

/// Asynchronous factory producing a view on first navigation to its route.
pub type ViewLoader =
    Box<dyn Fn() -> BoxFuture<'static, anyhow::Result<ViewHandle>> + Send + Sync>;

pub enum ViewBinding {
    /// View available immediately.
    Eager(ViewHandle),
    /// View fetched and instantiated on first navigation, cached afterwards
    /// for the life of the process.
    Lazy(ViewLoader),
}

/// Named parameters captured from a matched path.
pub type RouteParams = HashMap<String, String>;

/// A route definition: path pattern, name, view binding and static props.
///
/// Pattern segments prefixed with `:` capture the corresponding path segment
/// under that name, e.g. `/project-activity/:project_id` captures
/// `project_id`.
pub struct Route {
    pub path: String,
    pub name: String,
    pub binding: ViewBinding,
    pub props: HashMap<String, String>,
}

impl Route {
    /// Route whose view is available immediately.
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: ViewHandle) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            binding: ViewBinding::Eager(view),
            props: HashMap::new(),
        }
    }

    /// Route whose view is produced by `loader` on first navigation.
    pub fn lazy<F, Fut>(path: impl Into<String>, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<ViewHandle>> + Send + 'static,
    {
        Self {
            path: path.into(),
            name: name.into(),
            binding: ViewBinding::Lazy(Box::new(move || loader().boxed())),
            props: HashMap::new(),
        }
    }

    /// Attaches a static parameter handed to the view on every visit.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

/// The route the last successful navigation landed on, as observed by views
/// needing their path parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentRoute {
    pub name: String,
    pub path: String,
    pub params: RouteParams,
}

/// Outcome of a successful resolution, handed to the UI.
#[derive(Clone)]
pub struct ResolvedRoute {
    pub view: ViewHandle,
    pub name: String,
    pub params: RouteParams,
    pub props: HashMap<String, String>,
}

impl std::fmt::Debug for ResolvedRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedRoute")
            .field("view", &self.view.name())
            .field("name", &self.name)
            .field("params", &self.params)
            .field("props", &self.props)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("no registered route matches '{path}'")]
    NoMatchingRoute { path: String },

    #[error("failed to load view for route '{route}': {reason}")]
    ViewLoadFailure { route: String, reason: anyhow::Error },

    #[error("route pattern '{path}' is already registered")]
    DuplicateRoute { path: String },
}
