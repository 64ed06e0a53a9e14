//! Session and view-routing tests: the fixed identities, role gating, and
//! logout semantics.

mod common;

use cloudcert::models::{Role, View};
use cloudcert::seed;
use cloudcert_core::error::AppError;
use common::spawn_app;

#[test]
fn role_switches_always_restore_the_same_fixed_records() {
    let mut app = spawn_app();

    let teacher_first = app.login(Role::Teacher).clone();
    let student = app.login(Role::Student).clone();
    let teacher_again = app.login(Role::Teacher).clone();

    assert_eq!(teacher_first, teacher_again);
    assert_eq!(teacher_first, seed::user_for(Role::Teacher));
    assert_eq!(student, seed::user_for(Role::Student));
}

#[test]
fn logout_clears_the_session_and_router_state() {
    let mut app = spawn_app();
    app.login(Role::Student);
    app.navigate(View::Settings).expect("navigate failed");
    app.set_search_query("receipt");

    app.logout();

    assert!(app.current_user().is_none());
    assert_eq!(app.active_view(), View::Dashboard);
    assert_eq!(app.search_query(), "");
    assert!(matches!(
        app.navigate(View::Dashboard),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn gated_views_reject_the_wrong_role() {
    let mut app = spawn_app();

    app.login(Role::Student);
    assert!(matches!(
        app.navigate(View::ReviewPanel),
        Err(AppError::Forbidden(_))
    ));
    app.navigate(View::CertificateUpload).expect("navigate failed");

    app.login(Role::Teacher);
    assert!(matches!(
        app.navigate(View::CertificateUpload),
        Err(AppError::Forbidden(_))
    ));
    app.navigate(View::ReviewPanel).expect("navigate failed");
    assert_eq!(app.active_view(), View::ReviewPanel);
}

#[test]
fn a_failed_navigation_leaves_the_active_view_unchanged() {
    let mut app = spawn_app();
    app.login(Role::Student);
    app.navigate(View::Settings).expect("navigate failed");

    let _ = app.navigate(View::ReviewPanel);
    assert_eq!(app.active_view(), View::Settings);
}

#[test]
fn login_resets_router_state_from_the_previous_session() {
    let mut app = spawn_app();
    app.login(Role::Student);
    app.set_search_query("cert");
    app.navigate(View::Settings).expect("navigate failed");

    app.login(Role::Teacher);
    assert_eq!(app.active_view(), View::Dashboard);
    assert_eq!(app.search_query(), "");
}
