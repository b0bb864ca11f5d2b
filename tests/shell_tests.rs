//! Shell orchestration tests: navigation, redirects, session mutation
//! re-evaluation and the feedback channel

use std::sync::Arc;
use std::time::Duration;

use shopfront::feedback::FeedbackNotifier;
use shopfront::layout::LayoutVariant;
use shopfront::routing::Route;
use shopfront::session::{FileStorage, MemoryStorage, SessionStore, UserRecord};
use shopfront::shell::Shell;

fn memory_shell() -> Shell {
    Shell::new(
        SessionStore::new(Arc::new(MemoryStorage::new())),
        FeedbackNotifier::new(),
    )
}

#[test]
fn test_startup_hydrates_then_renders_home() {
    let mut shell = memory_shell();
    let rendered = shell.start();
    assert_eq!(rendered.route, Route::Home);
    assert_eq!(rendered.layout, LayoutVariant::Chromed);
    assert!(!shell.session().is_authenticated());
}

#[test]
fn test_startup_restores_persisted_admin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let store = SessionStore::new(Arc::new(FileStorage::new(&path)));
        store.login(UserRecord::new("admin-1", true)).unwrap();
    }

    let mut shell = Shell::new(
        SessionStore::new(Arc::new(FileStorage::new(&path))),
        FeedbackNotifier::new(),
    );
    shell.start();
    assert!(shell.session().is_admin());
    assert_eq!(shell.navigate("/admin").route, Route::Admin);
}

#[test]
fn test_auth_flow_renders_bare_everything_else_chromed() {
    let mut shell = memory_shell();
    shell.start();

    for (path, expected) in [
        ("/login", LayoutVariant::Bare),
        ("/signup", LayoutVariant::Bare),
        ("/", LayoutVariant::Chromed),
        ("/about", LayoutVariant::Chromed),
        ("/products/hats", LayoutVariant::Chromed),
        ("/profile", LayoutVariant::Chromed),
    ] {
        let rendered = shell.navigate(path);
        assert_eq!(rendered.layout, expected, "layout mismatch for {}", path);
        assert_eq!(rendered.chrome.is_some(), expected == LayoutVariant::Chromed);
    }
}

#[test]
fn test_chrome_tracks_session_across_login_and_logout() {
    let mut shell = memory_shell();
    shell.start();

    let rendered = shell.navigate("/about");
    assert!(!rendered.chrome.unwrap().authenticated);

    let rendered = shell.login(UserRecord::new("shopper-1", false)).unwrap();
    let chrome = rendered.chrome.unwrap();
    assert!(chrome.authenticated);
    assert!(!chrome.admin);

    let rendered = shell.logout().unwrap();
    assert!(!rendered.chrome.unwrap().authenticated);
}

#[test]
fn test_denied_route_redirects_and_records_origin() {
    let mut shell = memory_shell();
    shell.start();

    let rendered = shell.navigate("/billing");
    assert_eq!(rendered.route, Route::Home);
    assert_eq!(rendered.redirected_from.as_deref(), Some("/billing"));
    assert!(rendered.replaced_history);
    assert_eq!(shell.current_path(), "/");
}

#[test]
fn test_logout_on_gated_route_redirects_immediately() {
    let mut shell = memory_shell();
    shell.start();
    shell.login(UserRecord::new("shopper-1", false)).unwrap();
    assert_eq!(shell.navigate("/billing").route, Route::Billing);

    // The rendered view must reflect the new session with no stale window
    let rendered = shell.logout().unwrap();
    assert_eq!(rendered.route, Route::Home);
    assert_eq!(rendered.redirected_from.as_deref(), Some("/billing"));
}

#[test]
fn test_admin_login_on_cart_route_gets_kicked_home() {
    let mut shell = memory_shell();
    shell.start();
    shell.login(UserRecord::new("shopper-1", false)).unwrap();
    shell.navigate("/cart");

    // Switching to an admin account excludes the session from the cart
    let rendered = shell.login(UserRecord::new("admin-1", true)).unwrap();
    assert_eq!(rendered.route, Route::Home);
    assert_eq!(rendered.redirected_from.as_deref(), Some("/cart"));
}

#[test]
fn test_unknown_path_renders_not_found_with_chrome() {
    let mut shell = memory_shell();
    shell.start();

    let rendered = shell.navigate("/wishlist");
    assert_eq!(rendered.route, Route::NotFound);
    assert_eq!(rendered.layout, LayoutVariant::Chromed);
    assert!(rendered.redirected_from.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_feedback_posts_and_expires_without_touching_navigation() {
    let mut shell = memory_shell();
    shell.start();
    let before = shell.navigate("/about");

    shell.post_feedback("Order placed");
    assert_eq!(shell.feedback().as_deref(), Some("Order placed"));

    tokio::time::sleep(Duration::from_millis(3001)).await;
    assert!(shell.feedback().is_none());

    // No other observable state change
    assert_eq!(shell.current_path(), "/about");
    assert_eq!(shell.navigate("/about"), before);
}

#[tokio::test(start_paused = true)]
async fn test_second_feedback_post_gets_its_full_window() {
    let shell = {
        let mut s = memory_shell();
        s.start();
        s
    };

    shell.post_feedback("first");
    tokio::time::sleep(Duration::from_millis(2500)).await;

    shell.post_feedback("second");
    tokio::time::sleep(Duration::from_millis(1000)).await;
    // 3500ms after the first post its timer has lapsed; the second
    // message must still be visible
    assert_eq!(shell.feedback().as_deref(), Some("second"));

    tokio::time::sleep(Duration::from_millis(2001)).await;
    assert!(shell.feedback().is_none());
}
