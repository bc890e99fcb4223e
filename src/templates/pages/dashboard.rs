use crate::domain::dashboard::{collection_breakdown, request_distribution, OfficerKpis};
use crate::domain::{Announcement, Complaint, FeeRecord, Tab, User};
use crate::templates::components::{bar_chart, card, money, stat_card};
use crate::templates::shell_layout;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub user: &'a User,
    pub fees: &'a [FeeRecord],
    pub complaints: &'a [Complaint],
    pub announcements: &'a [Announcement],
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let kpis = OfficerKpis::compute(vm.fees, vm.complaints, vm.announcements);

    let breakdown: Vec<(String, f64, String)> = collection_breakdown(vm.fees)
        .into_iter()
        .map(|(label, amount)| (label.to_string(), amount, money(amount)))
        .collect();

    let distribution: Vec<(String, f64, String)> = request_distribution(vm.complaints)
        .into_iter()
        .map(|(kind, n)| (kind.as_str().to_string(), n as f64, n.to_string()))
        .collect();

    shell_layout(
        vm.user,
        Tab::Dashboard,
        html! {
            div class="grid grid-4" {
                (stat_card("Total Funds Collected", &money(kpis.total_collected), "Paid fees to date", "emerald"))
                (stat_card("Active Requests", &kpis.active_requests.to_string(), "Requires board attention", "blue"))
                (stat_card("Overdue Payments", &kpis.overdue_payments.to_string(), "Action Required", "red"))
                (stat_card("Total Notices", &kpis.total_notices.to_string(), "Published to community", "slate"))
            }

            div class="grid grid-2" {
                (card("Collection Breakdown", bar_chart(&breakdown, "money")))
                (card("Service Request Distribution", html! {
                    @if distribution.is_empty() {
                        p class="muted" { "No service requests yet." }
                    } @else {
                        (bar_chart(&distribution, "requests"))
                    }
                }))
            }
        },
    )
}
