use routeguard_auth::{
    Credential, DEFAULT_CREDENTIAL_KEY, InMemoryCredentialStore, lookup_from_store,
};
use routeguard_core::RoutePath;
use routeguard_router::{
    NavigationDecision, NavigationIntent, Navigator, RouteGuard, RouteTable, RouteTableConfig,
    admin_route_table,
};

fn login_path() -> RoutePath {
    RoutePath::parse("/admin/login").unwrap()
}

fn table() -> RouteTable {
    admin_route_table().unwrap()
}

/// Resolve `location` and decide it against a store holding `token`.
fn decide_with_token(location: &str, token: Option<&str>) -> NavigationDecision {
    let table = table();
    let guard = RouteGuard::for_table(&table);

    let store = InMemoryCredentialStore::new();
    if let Some(token) = token {
        store.set(DEFAULT_CREDENTIAL_KEY, token).unwrap();
    }
    let lookup = lookup_from_store(&store, DEFAULT_CREDENTIAL_KEY);

    let target = table.resolve(location);
    guard.decide(&NavigationIntent::new(target, None), &lookup)
}

#[test]
fn login_page_is_public() {
    let table = table();
    assert!(!table.resolve("/admin/login").requires_auth);
    assert_eq!(decide_with_token("/admin/login", None), NavigationDecision::Proceed);
}

#[test]
fn review_page_with_token_proceeds() {
    assert_eq!(
        decide_with_token("/admin/review", Some("abc123")),
        NavigationDecision::Proceed
    );
}

#[test]
fn review_page_without_token_redirects_to_login() {
    assert_eq!(
        decide_with_token("/admin/review", None),
        NavigationDecision::Redirect(login_path())
    );
}

#[test]
fn unknown_path_redirects_to_login_regardless_of_token() {
    assert!(table().resolve("/unknown/xyz").path.is_wildcard());

    for token in [None, Some(""), Some("abc123")] {
        assert_eq!(
            decide_with_token("/unknown/xyz", token),
            NavigationDecision::Redirect(login_path())
        );
    }
}

#[test]
fn review_page_with_empty_token_redirects_to_login() {
    assert_eq!(
        decide_with_token("/admin/review", Some("")),
        NavigationDecision::Redirect(login_path())
    );
}

#[test]
fn deciding_twice_gives_the_same_answer() {
    let table = table();
    let guard = RouteGuard::for_table(&table);
    let lookup = || Credential::from_raw("abc123");
    let intent = NavigationIntent::new(table.resolve("/admin/review"), table.by_name("AdminLogin"));

    assert_eq!(guard.decide(&intent, &lookup), guard.decide(&intent, &lookup));
}

#[test]
fn session_flow_through_the_navigator() {
    routeguard_observability::init();

    let store = InMemoryCredentialStore::new();
    let lookup = lookup_from_store(&store, DEFAULT_CREDENTIAL_KEY);
    let mut navigator = Navigator::new(table());

    // Deep link before login lands on the login page.
    let first = navigator.navigate("/admin/review?id=42", &lookup);
    assert_eq!(first.committed.label(), "AdminLogin");
    assert_eq!(first.redirects, vec![login_path()]);

    // Login flow writes the token outside the core.
    store.set(DEFAULT_CREDENTIAL_KEY, "abc123").unwrap();
    let second = navigator.navigate("/admin/review", &lookup);
    assert_eq!(second.committed.label(), "AdminReview");
    assert!(!second.was_redirected());

    // Typos still go to login, even when signed in.
    let third = navigator.navigate("/admin/reveiw", &lookup);
    assert_eq!(third.committed.label(), "AdminLogin");
}

#[test]
fn table_loaded_from_json_behaves_like_stock_table() {
    let raw = r#"{
        "fallback": "/admin/login",
        "routes": [
            { "path": "/admin/login", "name": "AdminLogin" },
            { "path": "/admin/review", "name": "AdminReview", "requires_auth": true },
            { "path": "*", "redirect": "/admin/login" }
        ]
    }"#;
    let loaded = RouteTableConfig::from_json_str(raw).unwrap().into_table().unwrap();
    let stock = table();

    for location in ["/admin/login", "/admin/review", "/unknown/xyz", ""] {
        assert_eq!(loaded.resolve(location), stock.resolve(location));
    }
}
