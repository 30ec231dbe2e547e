//! Route matching module
//!
//! Declarative (method, target) table for the relay. Routes are tried in order
//! and the first match wins. The target is the path plus any query string, so
//! an exact route never matches `/fb/token?x=1`.

use hyper::Method;

/// Path matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatch {
    /// Exact path match
    Exact(&'static str),
    /// Path prefix match (e.g. "/linkedin-userinfo" matches "/linkedin-userinfo/me")
    Prefix(&'static str),
}

impl PathMatch {
    pub fn matches(self, target: &str) -> bool {
        match self {
            Self::Exact(exact) => target == exact,
            Self::Prefix(prefix) => target.starts_with(prefix),
        }
    }
}

/// Handler a route dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Greeting,
    LinkedInLogin,
    LinkedInUserInfo,
    LinkedInPost,
    SaveToken,
    ReadToken,
}

#[derive(Debug)]
pub struct Route {
    pub method: Method,
    pub path: PathMatch,
    pub endpoint: Endpoint,
}

pub static ROUTES: [Route; 6] = [
    Route {
        method: Method::GET,
        path: PathMatch::Exact("/"),
        endpoint: Endpoint::Greeting,
    },
    Route {
        method: Method::POST,
        path: PathMatch::Exact("/linkedin-login"),
        endpoint: Endpoint::LinkedInLogin,
    },
    Route {
        method: Method::GET,
        path: PathMatch::Prefix("/linkedin-userinfo"),
        endpoint: Endpoint::LinkedInUserInfo,
    },
    Route {
        method: Method::POST,
        path: PathMatch::Exact("/linkedin-post"),
        endpoint: Endpoint::LinkedInPost,
    },
    Route {
        method: Method::POST,
        path: PathMatch::Exact("/fb/save-token"),
        endpoint: Endpoint::SaveToken,
    },
    Route {
        method: Method::GET,
        path: PathMatch::Exact("/fb/token"),
        endpoint: Endpoint::ReadToken,
    },
];

/// Find the endpoint for a request target (path and query), if any route matches
pub fn match_route(method: &Method, target: &str) -> Option<Endpoint> {
    ROUTES
        .iter()
        .find(|route| route.method == *method && route.path.matches(target))
        .map(|route| route.endpoint)
}
