//! Router lookup tests
//!
//! These tests verify the lookup surface over a built registry:
//! - Exact path matching (case, trailing slashes, query suffixes all miss)
//! - Reverse routing by symbolic name
//! - Path/name round trips
//! - Not-found determinism
//! - Navigation completeness and order

mod common;

use common::{build_router, SiteApp};
use placard::NotFoundError;

#[test]
fn test_resolve_root_path() {
    let router = build_router(&SiteApp);

    let controller = router.resolve_by_path("/").expect("root should resolve");
    assert_eq!(controller.route().name, "index");
}

#[test]
fn test_resolve_exact_path() {
    let router = build_router(&SiteApp);

    let controller = router.resolve_by_path("/test").expect("/test should resolve");
    assert_eq!(controller.route().name, "test");
}

#[test]
fn test_unknown_path() {
    let router = build_router(&SiteApp);

    match router.resolve_by_path("/missing") {
        Err(NotFoundError::PathNotFound { path }) => assert_eq!(path, "/missing"),
        Err(other) => panic!("Expected PathNotFound, got {:?}", other),
        Ok(_) => panic!("Unregistered path should not resolve"),
    }
}

#[test]
fn test_trailing_slash_mismatch() {
    let router = build_router(&SiteApp);

    // "/test" is registered; "/test/" is a different path.
    assert!(matches!(
        router.resolve_by_path("/test/"),
        Err(NotFoundError::PathNotFound { .. })
    ));
}

#[test]
fn test_case_sensitivity() {
    let router = build_router(&SiteApp);

    assert!(matches!(
        router.resolve_by_path("/Test"),
        Err(NotFoundError::PathNotFound { .. })
    ));
}

#[test]
fn test_empty_path() {
    let router = build_router(&SiteApp);

    assert!(matches!(
        router.resolve_by_path(""),
        Err(NotFoundError::PathNotFound { .. })
    ));
}

#[test]
fn test_query_suffix_is_not_stripped() {
    let router = build_router(&SiteApp);

    // Stripping the query string is the snapshot's job, not the router's.
    assert!(matches!(
        router.resolve_by_path("/test?x=1"),
        Err(NotFoundError::PathNotFound { .. })
    ));
}

#[test]
fn test_partial_and_extended_paths() {
    let router = build_router(&SiteApp);

    assert!(matches!(
        router.resolve_by_path("/te"),
        Err(NotFoundError::PathNotFound { .. })
    ));
    assert!(matches!(
        router.resolve_by_path("/test/extra"),
        Err(NotFoundError::PathNotFound { .. })
    ));
}

#[test]
fn test_not_found_determinism() {
    let router = build_router(&SiteApp);

    for path in ["/nope", "//", "/index", "test", "/ test", "/test%20"] {
        match router.resolve_by_path(path) {
            Err(NotFoundError::PathNotFound { path: reported }) => assert_eq!(reported, path),
            Err(other) => panic!("Expected PathNotFound for {}, got {:?}", path, other),
            Ok(_) => panic!("Path {} should not resolve", path),
        }
    }
}

#[test]
fn test_path_and_name_round_trip() {
    let router = build_router(&SiteApp);

    for route in router.all_routes() {
        let by_path = router
            .resolve_by_path(route.path)
            .expect("registered path should resolve");
        let by_name = router
            .resolve_by_name(route.name)
            .expect("registered name should resolve");

        assert_eq!(by_path.route(), *route);
        assert_eq!(by_name.route(), *route);
    }
}

#[test]
fn test_resolve_by_name_matches_resolve_by_path() {
    let router = build_router(&SiteApp);

    let by_name = router.resolve_by_name("index").expect("name should resolve");
    let by_path = router.resolve_by_path("/").expect("path should resolve");
    assert_eq!(by_name.route(), by_path.route());
}

#[test]
fn test_unknown_name() {
    let router = build_router(&SiteApp);

    match router.resolve_by_name("nowhere") {
        Err(NotFoundError::NameNotFound { name }) => assert_eq!(name, "nowhere"),
        Err(other) => panic!("Expected NameNotFound, got {:?}", other),
        Ok(_) => panic!("Unregistered name should not resolve"),
    }
}

#[test]
fn test_route_from_name() {
    let router = build_router(&SiteApp);

    let route = router
        .route_from_name("test")
        .expect("name should reverse-route");
    assert_eq!(route.path, "/test");
    assert_eq!(route.name, "test");
}

#[test]
fn test_all_routes_complete_and_ordered() {
    let router = build_router(&SiteApp);

    let paths: Vec<&str> = router.all_routes().iter().map(|route| route.path).collect();
    assert_eq!(paths, vec!["/", "/test", "/about"]);

    let names: Vec<&str> = router.all_routes().iter().map(|route| route.name).collect();
    assert_eq!(names, vec!["index", "test", "about"]);
}
