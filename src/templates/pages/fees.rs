use crate::domain::fee::{first_unpaid, outstanding_balance, PAYMENT_GATEWAYS};
use crate::domain::{FeeRecord, FeeStatus, FeeSummary, Tab, User};
use crate::templates::components::{badge, bar_chart, money, stat_card, url_encoded};
use crate::templates::shell_layout;
use maud::{html, Markup};

pub struct FeesVm<'a> {
    pub user: &'a User,
    /// Rows the current role may see.
    pub fees: Vec<&'a FeeRecord>,
    /// Totals across the whole community ledger.
    pub summary: FeeSummary,
    /// Fee selected for the payment dialog.
    pub paying: Option<&'a FeeRecord>,
}

fn status_tone(status: FeeStatus) -> &'static str {
    match status {
        FeeStatus::Paid => "emerald",
        FeeStatus::Unpaid => "blue",
        FeeStatus::Overdue => "red",
    }
}

pub fn fees_page(vm: &FeesVm) -> Markup {
    let officer = vm.user.is_officer();

    shell_layout(
        vm.user,
        Tab::Fees,
        html! {
            @if officer {
                (officer_stats(&vm.summary))
            } @else {
                (resident_balance(&vm.fees))
            }

            div class=(if officer { "grid grid-3" } else { "grid" }) {
                @if officer {
                    div class="card" {
                        h3 { "Payment Status Overview" }
                        (bar_chart(&[
                            ("Paid".to_string(), vm.summary.paid_count as f64, vm.summary.paid_count.to_string()),
                            ("Unpaid".to_string(), vm.summary.unpaid_count as f64, vm.summary.unpaid_count.to_string()),
                            ("Overdue".to_string(), vm.summary.overdue_count as f64, vm.summary.overdue_count.to_string()),
                        ], "status"))
                    }
                }

                div class=(if officer { "card table-card span-2" } else { "card table-card" }) {
                    div class="card-head" {
                        h3 {
                            @if officer { "Community Fee Records" } @else { "My Payment History & Dues" }
                        }
                        @if officer {
                            a href="/fees/export" class="button small" { "Export" }
                        }
                    }
                    (fee_table(vm.fees.as_slice(), officer))
                }
            }

            @if let Some(fee) = vm.paying {
                (payment_dialog(fee))
            }
        },
    )
}

fn officer_stats(summary: &FeeSummary) -> Markup {
    let rate = summary.collection_rate_fraction();

    html! {
        div class="grid grid-3" {
            div class="card stat" {
                p class="stat-label" { "Collection Rate" }
                p class="stat-value" { (summary.collection_rate()) "%" }
                div class="progress" {
                    div class="progress-fill" style=(format!("width: {rate:.0}%")) {}
                }
            }
            (stat_card("Total Collected", &money(summary.collected), "From current billing cycle", "emerald"))
            (stat_card("Total Outstanding", &money(summary.outstanding()), "Requires immediate follow-up", "red"))
        }
    }
}

fn resident_balance(fees: &[&FeeRecord]) -> Markup {
    let balance = outstanding_balance(fees);
    let next = first_unpaid(fees).filter(|_| balance > 0.0);

    html! {
        div class="grid grid-2" {
            div class="card balance" {
                p class="stat-label" { "Your Total Balance" }
                p class="balance-value" { (money(balance)) }
                p class="balance-note" { "ℹ Includes monthly dues and late fees" }
            }
            div class="card" {
                h3 { "Quick Actions" }
                p class="muted" { "Settling your dues helps us maintain the community." }
                @match next {
                    Some(fee) => a href=(format!("/fees?pay={}", url_encoded(&fee.id))) class="button primary wide" { "💳 Pay Outstanding" },
                    None => button type="button" class="button wide" disabled { "💳 Pay Outstanding" },
                }
            }
        }
    }
}

fn fee_table(fees: &[&FeeRecord], officer: bool) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Due Date" }
                    @if officer { th { "Resident" } }
                    th { "Description" }
                    th class="right" { "Amount" }
                    th class="right" { "Status" }
                    th class="right" { "Action" }
                }
            }
            tbody {
                @for f in fees {
                    tr {
                        td class="muted" { (f.due_date) }
                        @if officer { td { (f.user_name) } }
                        td {
                            div class="summary" { (f.fee_type) }
                            div class="muted small" { "Invoice #" (f.invoice_number()) }
                        }
                        td class="right strong" { (money(f.amount)) }
                        td class="right" { (badge(f.status.as_str(), status_tone(f.status))) }
                        td class="right" {
                            @if officer {
                                form method="post" action=(format!("/fees/{}/status", url_encoded(&f.id))) class="inline-form" {
                                    select name="status" onchange="this.form.submit()" {
                                        @for status in FeeStatus::ALL {
                                            option value=(status.slug()) selected[*status == f.status] { (status.option_label()) }
                                        }
                                    }
                                    noscript { button type="submit" class="button small" { "Update" } }
                                }
                            } @else if !f.is_paid() {
                                a href=(format!("/fees?pay={}", url_encoded(&f.id))) class="button primary small" { "Pay Now" }
                            } @else {
                                span class="muted" title="Receipt" { "🧾" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Checkout dialog. Every gateway button settles the fee immediately.
fn payment_dialog(fee: &FeeRecord) -> Markup {
    html! {
        div class="modal-backdrop" {
            div class="modal" role="dialog" aria-modal="true" {
                div class="modal-head" {
                    div {
                        h4 { "Complete Payment" }
                        p class="muted" { "Invoice: " (fee.fee_type) }
                    }
                    a href="/fees" class="icon-button" title="Close" { "✕" }
                }
                div class="modal-body" {
                    div class="total-row" {
                        span { "Total to Pay" }
                        strong { (money(fee.amount)) }
                    }
                    p class="stat-label" { "Select Payment Method" }
                    div class="gateways" {
                        @for gateway in PAYMENT_GATEWAYS {
                            form method="post" action=(format!("/fees/{}/pay", url_encoded(&fee.id))) {
                                input type="hidden" name="gateway" value=(gateway);
                                button type="submit" class="gateway" { (gateway) }
                            }
                        }
                    }
                    p class="muted small center" { "Secure encrypted transaction powered by HOA Connect Pay" }
                }
            }
        }
    }
}
