//! Filter/search projection tests against the seed collection.

mod common;

use cloudcert::models::{CategoryFilter, DocCategory, Role, View};
use common::spawn_app_as;

#[test]
fn search_is_a_case_insensitive_substring_match() {
    let mut app = spawn_app_as(Role::Student);

    app.set_search_query("cert");
    let names: Vec<&str> = app
        .visible_documents()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "AWS Cloud Practitioner Cert.pdf",
            "Robotics Workshop Cert.pdf"
        ]
    );

    app.set_search_query("CERT");
    assert_eq!(app.visible_documents().len(), 2);

    app.set_search_query("");
    assert_eq!(app.visible_documents().len(), 6);
}

#[test]
fn category_filter_narrows_to_one_category() {
    let mut app = spawn_app_as(Role::Student);

    app.filter_by(DocCategory::Certificate).expect("filter failed");
    let visible = app.visible_documents();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|d| d.category == DocCategory::Certificate));

    app.filter_by(DocCategory::HallTicket).expect("filter failed");
    let visible = app.visible_documents();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Spring 2024 Hall Ticket.pdf");
}

#[test]
fn search_and_category_combine() {
    let mut app = spawn_app_as(Role::Student);

    app.filter_by(DocCategory::Certificate).expect("filter failed");
    app.set_search_query("robotics");
    let visible = app.visible_documents();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Robotics Workshop Cert.pdf");

    // Same query against a category it does not belong to.
    app.filter_by(DocCategory::FeeReceipt).expect("filter failed");
    assert!(app.visible_documents().is_empty());
}

#[test]
fn quick_filters_route_into_the_hub_and_navigation_resets_them() {
    let mut app = spawn_app_as(Role::Student);

    // A quick filter jumps to the hub with the category adopted.
    app.filter_by(DocCategory::FeeReceipt).expect("filter failed");
    assert_eq!(app.active_view(), View::DocumentHub);
    assert_eq!(
        app.active_filter(),
        CategoryFilter::Category(DocCategory::FeeReceipt)
    );

    // Re-opening the hub through navigation clears the category.
    app.navigate(View::Dashboard).expect("navigate failed");
    app.navigate(View::DocumentHub).expect("navigate failed");
    assert_eq!(app.active_filter(), CategoryFilter::All);
}
