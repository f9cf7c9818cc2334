use routeset::{RouteMatch, Router};

fn router(templates: &[&'static str]) -> Router<&'static str> {
    let mut router = Router::new();
    for template in templates {
        router.add(template, *template).unwrap();
    }
    router
}

fn params<'a>(matched: &'a RouteMatch<'a, &'a str>) -> Vec<(&'a str, &'a str)> {
    matched.params.iter().collect()
}

#[test]
fn literal_exact_match_only() {
    let router = router(&["/user/list"]);

    assert_eq!(router.destinations("/user/list").len(), 1);
    assert!(router.destinations("/user").is_empty());
    assert!(router.destinations("/user/lis").is_empty());
    assert!(router.destinations("/user/list/all").is_empty());
    // never a substring match
    assert!(router.destinations("/a/user/list").is_empty());
}

#[test]
fn named_param_extraction() {
    let router = router(&["/user/{id}"]);

    let matched = router.destinations("/user/42");
    assert_eq!(matched.len(), 1);
    assert_eq!(*matched[0].destination, "/user/{id}");
    assert_eq!(params(&matched[0]), vec![("id", "42")]);

    // a named parameter never crosses a slash
    assert!(router.destinations("/user/4/2").is_empty());
    assert!(router.destinations("/user").is_empty());
}

#[test]
fn constraint_enforced() {
    let router = router(&["/user/{id:[0-9]+}"]);

    assert!(router.destinations("/user/abc").is_empty());
    assert!(router.destinations("/user/12c").is_empty());

    let matched = router.destinations("/user/123");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].params.get("id"), Some("123"));
}

#[test]
fn wildcard_spans_segments() {
    let router = router(&["/files/**"]);

    let matched = router.destinations("/files/a/b/c");
    assert_eq!(matched.len(), 1);
    assert!(matched[0].params.is_empty());

    assert_eq!(router.destinations("/files/x").len(), 1);
    // the wildcard does not absorb the separating slash
    assert!(router.destinations("/files").is_empty());
}

#[test]
fn infix_wildcard() {
    let router = router(&["/v1/**/status"]);

    assert_eq!(router.destinations("/v1/a/b/status").len(), 1);
    assert_eq!(router.destinations("/v1/x/status").len(), 1);
    // the surrounding slashes are part of the template, so at least one
    // segment has to sit between them
    assert!(router.destinations("/v1/status").is_empty());
    assert!(router.destinations("/v1/a/b").is_empty());
}

#[test]
fn all_matches_in_registration_order() {
    let router = router(&["/a/{x}", "/a/b", "/a/**"]);

    let matched = router.destinations("/a/b");
    let destinations: Vec<_> = matched.iter().map(|m| *m.destination).collect();
    assert_eq!(destinations, ["/a/{x}", "/a/b", "/a/**"]);

    assert_eq!(params(&matched[0]), vec![("x", "b")]);
    assert!(matched[1].params.is_empty());
}

#[test]
fn trailing_slash_equivalence() {
    let router = router(&["/user/{id}"]);

    for path in ["/user/42", "/user/42/"] {
        let matched = router.destinations(path);
        assert_eq!(matched.len(), 1, "{path}");
        assert_eq!(matched[0].params.get("id"), Some("42"), "{path}");
    }
}

#[test]
fn multi_slash_collapse() {
    let router = router(&["/user/{id}"]);

    let matched = router.destinations("//user///42");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].params.get("id"), Some("42"));
}

#[test]
fn repeated_queries_are_idempotent() {
    let router = router(&["/a/{x}", "/a/b"]);

    let first = router.destinations("/a/b");
    for _ in 0..3 {
        let again = router.destinations("/a/b");
        assert_eq!(first.len(), again.len());
        for (a, b) in first.iter().zip(again.iter()) {
            assert_eq!(a.destination, b.destination);
            assert_eq!(a.params, b.params);
        }
    }
}

#[test]
fn root_path() {
    let router = router(&["/"]);

    assert_eq!(router.destinations("/").len(), 1);
    assert_eq!(router.destinations("//").len(), 1);
    assert!(router.destinations("/x").is_empty());
}

#[test]
fn no_match_is_empty_not_error() {
    let router: Router<&str> = Router::new();
    assert!(router.destinations("/anything").is_empty());
    assert!(router.is_empty());
}

#[test]
fn literal_dot_is_literal() {
    let router = router(&["/static/app.js"]);

    assert_eq!(router.destinations("/static/app.js").len(), 1);
    // '.' in a literal segment is not a regex wildcard
    assert!(router.destinations("/static/appXjs").is_empty());
}

#[test]
fn duplicate_param_name_last_wins() {
    let router = router(&["/{x}/{x}"]);

    let matched = router.destinations("/a/b");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].params.get("x"), Some("b"));
    // both captures stay visible in order
    assert_eq!(params(&matched[0]), vec![("x", "a"), ("x", "b")]);
}

#[test]
fn multiple_params_in_order() {
    let router = router(&["/users/{user}/posts/{post:[0-9]+}"]);

    let matched = router.destinations("/users/alice/posts/7");
    assert_eq!(matched.len(), 1);
    assert_eq!(params(&matched[0]), vec![("user", "alice"), ("post", "7")]);
}

#[test]
fn unnormalized_template_matches_normalized_path() {
    let router = router(&["//user///{id}/"]);

    let matched = router.destinations("/user/42");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].params.get("id"), Some("42"));
}

#[test]
fn destination_is_opaque_payload() {
    // a non-Clone destination is fine; matches hand out references
    struct Dest(#[allow(dead_code)] u32);

    let mut router = Router::new();
    router.add("/d", Dest(7)).unwrap();

    let matched = router.destinations("/d");
    assert!(std::ptr::eq(
        matched[0].destination,
        router.destinations("/d")[0].destination
    ));
}

#[test]
fn router_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Router<String>>();
    assert_send_sync::<RouteMatch<'static, String>>();
}
