use crate::domain::FeeStatus;
use crate::errors::ServerError;
use crate::tests::utils::{get, location, officer_store, page, post_form, resident_store, send};

#[test]
fn resident_only_sees_own_fees() {
    let store = resident_store();

    let body = page(&store, "/fees");

    assert!(body.contains("INV-f1"));
    assert!(!body.contains("INV-f2"));
    assert!(!body.contains("Jane Smith"));
    assert!(body.contains("Your Total Balance"));
    assert!(body.contains("$50.00"));
    assert!(body.contains("href=\"/fees?pay=f1\""));
}

#[test]
fn officer_sees_community_ledger_and_stats() {
    let store = officer_store();

    let body = page(&store, "/fees");

    assert!(body.contains("Community Fee Records"));
    assert!(body.contains("Jane Smith"));
    assert!(body.contains("Collection Rate"));
    assert!(body.contains("23%"));
    assert!(body.contains("Total Outstanding"));
    assert!(body.contains("action=\"/fees/f2/status\""));
    assert!(body.contains("href=\"/fees/export\""));
}

#[test]
fn payment_dialog_opens_for_unpaid_fee() {
    let store = resident_store();

    let body = page(&store, "/fees?pay=f1");

    assert!(body.contains("Complete Payment"));
    assert!(body.contains("Invoice: Monthly Dues"));
    for gateway in ["GCash", "Maya", "Credit Card", "Bank Transfer"] {
        assert!(body.contains(gateway), "missing gateway {gateway}");
    }
}

#[test]
fn payment_dialog_ignores_foreign_fee() {
    let store = resident_store();

    let body = page(&store, "/fees?pay=f2");

    assert!(!body.contains("Complete Payment"));
}

#[test]
fn resident_payment_marks_paid_and_clears_balance() {
    let store = resident_store();

    let resp = send(&store, post_form("/fees/f1/pay", "gateway=Maya")).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/fees");
    store
        .with_state(|state| {
            assert_eq!(state.fees[0].status, FeeStatus::Paid);
            Ok(())
        })
        .unwrap();

    let body = page(&store, "/fees");
    assert!(body.contains("balance-value\">$0.00"));
    assert!(!body.contains("$-0.00"));
    assert!(!body.contains("Pay Now"));
    assert!(body.contains("disabled"));
}

#[test]
fn resident_cannot_pay_other_residents_fee() {
    let store = resident_store();

    let result = send(&store, post_form("/fees/f2/pay", "gateway=GCash"));

    assert!(matches!(result, Err(ServerError::Forbidden(_))));
}

#[test]
fn unknown_gateway_is_rejected() {
    let store = resident_store();

    let result = send(&store, post_form("/fees/f1/pay", "gateway=Bitcoin"));

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn officer_can_set_any_status() {
    let store = officer_store();

    send(&store, post_form("/fees/f2/status", "status=overdue")).unwrap();
    send(&store, post_form("/fees/f1/status", "status=paid")).unwrap();

    store
        .with_state(|state| {
            assert_eq!(state.fees[1].status, FeeStatus::Overdue);
            assert_eq!(state.fees[0].status, FeeStatus::Paid);
            Ok(())
        })
        .unwrap();

    let body = page(&store, "/dashboard");
    assert!(body.contains("$50.00"));
}

#[test]
fn officer_cannot_use_pay_and_resident_cannot_set_status() {
    let officer = officer_store();
    let result = send(&officer, post_form("/fees/f1/pay", "gateway=GCash"));
    assert!(matches!(result, Err(ServerError::Forbidden(_))));

    let resident = resident_store();
    let result = send(&resident, post_form("/fees/f1/status", "status=paid"));
    assert!(matches!(result, Err(ServerError::Forbidden(_))));
}

#[test]
fn officer_export_is_an_xlsx_download() {
    let store = officer_store();

    let resp = send(&store, get("/fees/export")).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let disposition = resp.headers().get("Content-Disposition").unwrap().to_str().unwrap();
    assert_eq!(disposition, "attachment; filename=\"fee_records_2024-06-10.xlsx\"");

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn resident_export_is_forbidden() {
    let store = resident_store();

    let result = send(&store, get("/fees/export"));

    assert!(matches!(result, Err(ServerError::Forbidden(_))));
}

#[test]
fn empty_ledger_shows_unsigned_zero_totals() {
    let store = officer_store();
    store
        .with_state(|state| {
            state.fees.clear();
            Ok(())
        })
        .unwrap();

    let body = page(&store, "/fees");
    assert!(body.contains("stat-value\">$0.00"));
    assert!(!body.contains("$-0.00"));

    let body = page(&store, "/dashboard");
    assert!(body.contains("Total Funds Collected</p><p class=\"stat-value\">$0.00"));
    assert!(!body.contains("$-0.00"));
}

#[test]
fn zero_balance_disables_pay_outstanding() {
    let store = resident_store();
    store
        .with_state(|state| {
            state.fees[0].amount = 0.0;
            Ok(())
        })
        .unwrap();

    let body = page(&store, "/fees");

    assert!(body.contains("balance-value\">$0.00"));
    assert!(!body.contains("class=\"button primary wide\""));
    assert!(body.contains("disabled"));
}

#[test]
fn ids_with_url_characters_round_trip_through_links() {
    let store = resident_store();
    store
        .with_state(|state| {
            state.fees[0].id = "f/1&x?".to_string();
            Ok(())
        })
        .unwrap();

    let body = page(&store, "/fees");
    assert!(body.contains("href=\"/fees?pay=f%2F1%26x%3F\""));

    let body = page(&store, "/fees?pay=f%2F1%26x%3F");
    assert!(body.contains("Complete Payment"));
    assert!(body.contains("action=\"/fees/f%2F1%26x%3F/pay\""));

    let resp = send(&store, post_form("/fees/f%2F1%26x%3F/pay", "gateway=GCash")).unwrap();
    assert_eq!(resp.status(), 302);
    store
        .with_state(|state| {
            assert_eq!(state.fees[0].status, FeeStatus::Paid);
            Ok(())
        })
        .unwrap();
}
