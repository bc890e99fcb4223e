use crate::tests::utils::{officer_store, page, resident_store};

#[test]
fn board_directory_lists_members() {
    let store = resident_store();

    let body = page(&store, "/board");

    assert!(body.contains("Meet Your Board Members"));
    for name in ["Robert Wilson", "Sarah Jenkins", "Michael Chen", "Emily Davis"] {
        assert!(body.contains(name), "missing {name}");
    }
    assert!(body.contains("href=\"mailto:treasurer@hoaconnect.com\""));
    assert!(body.contains("(555) 456-7890"));
    assert!(!body.contains("Edit Profile"));
}

#[test]
fn officers_get_edit_affordance() {
    let store = officer_store();

    let body = page(&store, "/board");

    assert!(body.contains("Edit Profile"));
}
