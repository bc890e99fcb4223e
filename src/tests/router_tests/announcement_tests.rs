use crate::errors::ServerError;
use crate::tests::utils::{location, officer_store, page, post_form, resident_store, send, today};

fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in page"))
}

#[test]
fn feed_is_newest_first() {
    let store = resident_store();

    let body = page(&store, "/announcements");

    let tree = position(&body, "Tree Planting Volunteers Needed");
    let agm = position(&body, "Annual General Meeting 2024");
    let zumba = position(&body, "Zumba Morning Sessions");
    assert!(tree < agm && agm < zumba);
}

#[test]
fn category_filter_limits_feed() {
    let store = resident_store();

    let body = page(&store, "/announcements?category=sports-wellness");

    assert!(body.contains("Zumba Morning Sessions"));
    assert!(!body.contains("Annual General Meeting 2024"));
    assert!(!body.contains("Tree Planting Volunteers Needed"));
    assert!(body.contains("pill active"));
}

#[test]
fn empty_category_shows_empty_state() {
    let store = resident_store();

    let body = page(&store, "/announcements?category=general");

    assert!(body.contains("No announcements found in this category."));
}

#[test]
fn unknown_category_is_bad_request() {
    let store = resident_store();

    let result = send(&store, crate::tests::utils::get("/announcements?category=gardening"));
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn compose_form_is_officer_only() {
    let officer = officer_store();
    let body = page(&officer, "/announcements?compose=1");
    assert!(body.contains("Post New Announcement"));
    assert!(body.contains("Publish Announcement"));

    let resident = resident_store();
    let body = page(&resident, "/announcements?compose=1");
    assert!(!body.contains("Post New Announcement"));
    assert!(!body.contains("New Post"));
}

#[test]
fn officer_publishes_to_top_of_feed() {
    let store = officer_store();

    let resp = send(
        &store,
        post_form(
            "/announcements",
            "title=Pool+Opening&content=The+pool+opens+Saturday.&priority=high&category=community-events",
        ),
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/announcements");

    let body = page(&store, "/announcements");
    assert!(position(&body, "Pool Opening") < position(&body, "Tree Planting Volunteers Needed"));
    assert!(body.contains("High Priority"));
    assert!(body.contains(&today().to_string()));

    store
        .with_state(|state| {
            let first = &state.announcements[0];
            assert_eq!(first.id, "a4");
            assert_eq!(first.author, "Officer");
            Ok(())
        })
        .unwrap();
}

#[test]
fn defaults_apply_when_choices_are_omitted() {
    let store = officer_store();

    send(&store, post_form("/announcements", "title=Notice&content=Body")).unwrap();

    let body = page(&store, "/announcements?category=general");
    assert!(body.contains("Notice"));
    assert!(body.contains("Normal Priority"));
}

#[test]
fn residents_cannot_publish() {
    let store = resident_store();

    let result = send(&store, post_form("/announcements", "title=Hi&content=There"));

    assert!(matches!(result, Err(ServerError::Forbidden(_))));
}

#[test]
fn missing_headline_is_rejected() {
    let store = officer_store();

    let result = send(&store, post_form("/announcements", "title=+++&content=Body"));

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    store
        .with_state(|state| {
            assert_eq!(state.announcements.len(), 3);
            Ok(())
        })
        .unwrap();
}

#[test]
fn oversized_form_body_is_rejected() {
    let store = officer_store();
    let form = format!("title=Huge&content={}", "a".repeat(70 * 1024));

    let result = send(&store, post_form("/announcements", &form));

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    store
        .with_state(|state| {
            assert_eq!(state.announcements.len(), 3);
            Ok(())
        })
        .unwrap();
}
