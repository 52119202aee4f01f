use std::collections::HashSet;

use tokio::sync::{OnceCell, RwLock};

use super::types::{
    CurrentRoute, NavigationError, ResolvedRoute, Route, RouteParams, ViewBinding, ViewHandle,
};

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

fn compile(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Literal(s.to_string()),
        })
        .collect()
}

fn match_segments(pattern: &[Segment], path: &str) -> Option<RouteParams> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() != pattern.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (expected, actual) in pattern.iter().zip(segments) {
        match expected {
            Segment::Literal(literal) if literal == actual => {}
            Segment::Literal(_) => return None,
            Segment::Param(name) => {
                params.insert(name.clone(), actual.to_string());
            }
        }
    }

    Some(params)
}

fn build_path(pattern: &[Segment], params: &RouteParams) -> Option<String> {
    let mut path = String::new();
    for segment in pattern {
        path.push('/');
        match segment {
            Segment::Literal(literal) => path.push_str(literal),
            Segment::Param(name) => path.push_str(params.get(name)?),
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    Some(path)
}

struct RouteEntry {
    route: Route,
    pattern: Vec<Segment>,
    loaded: OnceCell<ViewHandle>,
}

impl RouteEntry {
    async fn view(&self) -> Result<ViewHandle, NavigationError> {
        match &self.route.binding {
            ViewBinding::Eager(view) => Ok(view.clone()),
            // Concurrent first navigations share one in-flight load; only a
            // successful load is cached, so a later navigation may retry.
            ViewBinding::Lazy(loader) => self
                .loaded
                .get_or_try_init(|| loader())
                .await
                .cloned()
                .map_err(|reason| NavigationError::ViewLoadFailure {
                    route: self.route.name.clone(),
                    reason,
                }),
        }
    }
}

/// Resolves navigation requests against an ordered route table.
///
/// Definitions are checked in registration order and the first structural
/// match wins. A successful resolution updates the shared current-route
/// state; a failed one leaves it untouched, so the previous view stays
/// active.
pub struct Navigator {
    routes: Vec<RouteEntry>,
    current: RwLock<Option<CurrentRoute>>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}

impl Navigator {
    /// Builds the resolution table. Path patterns must be unique.
    pub fn new(routes: Vec<Route>) -> Result<Self, NavigationError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(routes.len());

        for route in routes {
            if !seen.insert(route.path.clone()) {
                return Err(NavigationError::DuplicateRoute { path: route.path });
            }
            entries.push(RouteEntry {
                pattern: compile(&route.path),
                loaded: OnceCell::new(),
                route,
            });
        }

        Ok(Self {
            routes: entries,
            current: RwLock::new(None),
        })
    }

    /// Resolves a path to its view, capturing named parameters.
    pub async fn resolve(&self, path: &str) -> Result<ResolvedRoute, NavigationError> {
        let (entry, params) = self
            .routes
            .iter()
            .find_map(|entry| match_segments(&entry.pattern, path).map(|params| (entry, params)))
            .ok_or_else(|| NavigationError::NoMatchingRoute {
                path: path.to_string(),
            })?;

        // A lazy view must finish loading before the transition commits.
        let view = entry.view().await?;

        {
            let mut current = self.current.write().await;
            *current = Some(CurrentRoute {
                name: entry.route.name.clone(),
                path: path.to_string(),
                params: params.clone(),
            });
        }

        view.on_navigate(&params).await;

        Ok(ResolvedRoute {
            view,
            name: entry.route.name.clone(),
            params,
            props: entry.route.props.clone(),
        })
    }

    /// Resolves by route name, substituting `params` into the pattern.
    pub async fn resolve_named(
        &self,
        name: &str,
        params: &RouteParams,
    ) -> Result<ResolvedRoute, NavigationError> {
        let entry = self
            .routes
            .iter()
            .find(|entry| entry.route.name == name)
            .ok_or_else(|| NavigationError::NoMatchingRoute {
                path: name.to_string(),
            })?;

        let path =
            build_path(&entry.pattern, params).ok_or_else(|| NavigationError::NoMatchingRoute {
                path: entry.route.path.clone(),
            })?;

        self.resolve(&path).await
    }

    /// Route the last successful navigation landed on, if any.
    pub async fn current_route(&self) -> Option<CurrentRoute> {
        self.current.read().await.clone()
    }
}
