//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the matching route for a path
//! - Return the matched route and its parameters, or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - O(n) scan in declaration order; first match wins
//! - Explicit NoMatch rather than silent default
//! - Generic over the handler type so the table does not know about pages

use super::matcher::{normalize, split_segments, MatchMode, Params, SegmentMatcher};
use super::pattern::{PathPattern, PatternError};

/// A compiled route: pattern, mode and the handler it is bound to.
#[derive(Debug, Clone)]
pub struct Route<H> {
    matcher: SegmentMatcher,
    handler: H,
}

impl<H> Route<H> {
    pub fn pattern(&self) -> &PathPattern {
        self.matcher.pattern()
    }

    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    pub fn case_sensitive(&self) -> bool {
        self.matcher.case_sensitive()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// Ordered, frozen collection of routes.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> RouteTable<H> {
    pub fn builder() -> RouteTableBuilder<H> {
        RouteTableBuilder { pending: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route<H>> {
        self.routes.iter()
    }
}

struct PendingRoute<H> {
    pattern: String,
    mode: MatchMode,
    case_sensitive: bool,
    handler: H,
}

/// Collects route declarations; patterns are parsed on [`build`](Self::build).
pub struct RouteTableBuilder<H> {
    pending: Vec<PendingRoute<H>>,
}

impl<H> RouteTableBuilder<H> {
    pub fn route(
        mut self,
        pattern: impl Into<String>,
        mode: MatchMode,
        case_sensitive: bool,
        handler: H,
    ) -> Self {
        self.pending.push(PendingRoute {
            pattern: pattern.into(),
            mode,
            case_sensitive,
            handler,
        });
        self
    }

    /// Case-sensitive exact route.
    pub fn exact(self, pattern: impl Into<String>, handler: H) -> Self {
        self.route(pattern, MatchMode::Exact, true, handler)
    }

    /// Case-sensitive prefix route.
    pub fn prefix(self, pattern: impl Into<String>, handler: H) -> Self {
        self.route(pattern, MatchMode::Prefix, true, handler)
    }

    pub fn build(self) -> Result<RouteTable<H>, PatternError> {
        let routes = self
            .pending
            .into_iter()
            .map(|p| {
                let pattern = PathPattern::parse(&p.pattern)?;
                Ok(Route {
                    matcher: SegmentMatcher::new(pattern, p.mode, p.case_sensitive),
                    handler: p.handler,
                })
            })
            .collect::<Result<Vec<_>, PatternError>>()?;
        Ok(RouteTable { routes })
    }
}

/// A successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub route: &'a Route<H>,
    pub params: Params,
}

impl<'a, H> RouteMatch<'a, H> {
    pub fn handler(&self) -> &'a H {
        self.route.handler()
    }
}

/// Outcome of [`Router::resolve`].
#[derive(Debug)]
pub enum MatchResult<'a, H> {
    Matched(RouteMatch<'a, H>),
    NoMatch,
}

impl<'a, H> MatchResult<'a, H> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn into_match(self) -> Option<RouteMatch<'a, H>> {
        match self {
            MatchResult::Matched(m) => Some(m),
            MatchResult::NoMatch => None,
        }
    }
}

/// Resolves paths against an immutable route table.
#[derive(Debug, Clone)]
pub struct Router<H> {
    table: RouteTable<H>,
}

impl<H> Router<H> {
    pub fn new(table: RouteTable<H>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable<H> {
        &self.table
    }

    /// Find the first route matching `path`. Never fails: no match is a value.
    ///
    /// Only rooted paths can match; `""` counts as `/`.
    pub fn resolve(&self, path: &str) -> MatchResult<'_, H> {
        let normalized = normalize(path);
        if !normalized.starts_with('/') {
            tracing::trace!(path = %path, "Unrooted path, no route can match");
            return MatchResult::NoMatch;
        }
        let segments = split_segments(normalized);

        for route in self.table.iter() {
            if let Some(params) = route.matcher.match_segments(&segments) {
                tracing::trace!(
                    path = %path,
                    pattern = %route.pattern(),
                    params = params.len(),
                    "Route matched"
                );
                return MatchResult::Matched(RouteMatch { route, params });
            }
        }

        tracing::trace!(path = %path, "No route matched");
        MatchResult::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_router() -> Router<&'static str> {
        let table = RouteTable::builder()
            .exact("/", "Main")
            .prefix("/input-meme", "InputMeme")
            .prefix("/select/:name", "Select")
            .prefix("/result", "Result")
            .build()
            .unwrap();
        Router::new(table)
    }

    fn resolve_handler(router: &Router<&'static str>, path: &str) -> Option<(&'static str, Params)> {
        router
            .resolve(path)
            .into_match()
            .map(|m| (*m.handler(), m.params))
    }

    #[test]
    fn test_declared_patterns_resolve_to_their_handler() {
        let router = app_router();
        for (path, handler) in [
            ("/", "Main"),
            ("/input-meme", "InputMeme"),
            ("/result", "Result"),
        ] {
            let (found, params) = resolve_handler(&router, path).unwrap();
            assert_eq!(found, handler);
            assert!(params.is_empty());
        }
    }

    #[test]
    fn test_select_captures_name() {
        let router = app_router();
        let (handler, params) = resolve_handler(&router, "/select/abc").unwrap();
        assert_eq!(handler, "Select");
        assert_eq!(params.get("name"), Some("abc"));

        let (handler, params) = resolve_handler(&router, "/select/abc/extra").unwrap();
        assert_eq!(handler, "Select");
        assert_eq!(params.get("name"), Some("abc"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_unknown_path_is_no_match() {
        let router = app_router();
        assert!(!router.resolve("/unknown").is_match());
        assert!(!router.resolve("/select").is_match());
    }

    #[test]
    fn test_unrooted_path_is_no_match() {
        let router = app_router();
        assert!(!router.resolve("select/abc").is_match());
        assert!(!router.resolve("result").is_match());
        assert!(!router.resolve("input-meme/").is_match());
    }

    #[test]
    fn test_root_and_empty_are_equivalent() {
        let router = app_router();
        assert_eq!(resolve_handler(&router, "").unwrap().0, "Main");
        assert_eq!(resolve_handler(&router, "/").unwrap().0, "Main");
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let router = app_router();
        assert_eq!(resolve_handler(&router, "/result/").unwrap().0, "Result");
        let (_, params) = resolve_handler(&router, "/select/abc/").unwrap();
        assert_eq!(params.get("name"), Some("abc"));
    }

    #[test]
    fn test_root_is_exact() {
        let router = app_router();
        assert!(!router.resolve("/anything-else").is_match());
    }

    #[test]
    fn test_first_declared_route_wins() {
        let table = RouteTable::builder()
            .prefix("/select/:name", "ByName")
            .prefix("/select/featured", "Featured")
            .build()
            .unwrap();
        let router = Router::new(table);
        assert_eq!(resolve_handler(&router, "/select/featured").unwrap().0, "ByName");

        let table = RouteTable::builder()
            .prefix("/select/featured", "Featured")
            .prefix("/select/:name", "ByName")
            .build()
            .unwrap();
        let router = Router::new(table);
        assert_eq!(resolve_handler(&router, "/select/featured").unwrap().0, "Featured");
    }

    #[test]
    fn test_build_rejects_bad_pattern() {
        let result = RouteTable::builder()
            .exact("/", "Main")
            .prefix("/pair/:a/:a", "Pair")
            .build();
        assert!(matches!(result, Err(PatternError::DuplicateParam { .. })));
    }

    #[test]
    fn test_table_preserves_declaration_order() {
        let router = app_router();
        let patterns: Vec<_> = router.table().iter().map(|r| r.pattern().as_str()).collect();
        assert_eq!(patterns, vec!["/", "/input-meme", "/select/:name", "/result"]);
        assert_eq!(router.table().iter().next().unwrap().mode(), MatchMode::Exact);
    }
}
