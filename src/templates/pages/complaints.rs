use crate::domain::{Complaint, ComplaintStatus, RequestType, Tab, User};
use crate::templates::components::{badge, empty_state, url_encoded};
use crate::templates::shell_layout;
use maud::{html, Markup};

pub struct ComplaintsVm<'a> {
    pub user: &'a User,
    pub complaints: &'a [Complaint],
    pub compose: bool,
}

fn status_tone(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Pending => "yellow",
        ComplaintStatus::InProgress => "blue",
        ComplaintStatus::Resolved => "emerald",
        ComplaintStatus::Closed => "slate",
    }
}

fn type_icon(kind: RequestType) -> &'static str {
    match kind {
        RequestType::Maintenance => "🔧",
        RequestType::Security => "🛡",
        RequestType::Landscaping => "🌿",
        RequestType::Complaint => "❗",
        RequestType::Admin => "👔",
    }
}

pub fn complaints_page(vm: &ComplaintsVm) -> Markup {
    let officer = vm.user.is_officer();
    let columns = if officer { 5 } else { 4 };

    shell_layout(
        vm.user,
        Tab::Complaints,
        html! {
            @if !officer {
                div class="card help-center" {
                    div {
                        h3 { "Help Center" }
                        p class="muted" { "Need a repair or have a concern? Submit a request below." }
                    }
                    @if vm.compose {
                        a href="/complaints" class="button primary" { "✕ Close Form" }
                    } @else {
                        a href="/complaints?compose=1" class="button primary" { "+ New Service Request" }
                    }
                }

                @if vm.compose {
                    (request_form())
                }
            }

            div class="card table-card" {
                h3 { "Recent Logs" }
                table {
                    thead {
                        tr {
                            th { "Category" }
                            th { "Summary" }
                            @if officer { th { "Resident" } }
                            th { "Status" }
                            th class="right" { "Action" }
                        }
                    }
                    tbody {
                        @if vm.complaints.is_empty() {
                            tr {
                                td colspan=(columns) {
                                    (empty_state("📋", "No active requests found."))
                                }
                            }
                        }
                        @for c in vm.complaints {
                            tr {
                                td { span class="type-icon" { (type_icon(c.request_type)) } " " strong { (c.request_type) } }
                                td {
                                    div class="summary" { (c.title) }
                                    div class="muted small" { "🗓 " (c.created_at) }
                                }
                                @if officer { td { (c.user_name) } }
                                td { (badge(c.status.as_str(), status_tone(c.status))) }
                                td class="right" {
                                    @if officer {
                                        (status_form(c))
                                    } @else {
                                        span class="muted" { "›" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn status_form(c: &Complaint) -> Markup {
    html! {
        form method="post" action=(format!("/complaints/{}/status", url_encoded(&c.id))) class="inline-form" {
            select name="status" onchange="this.form.submit()" {
                @for status in ComplaintStatus::ALL {
                    option value=(status.slug()) selected[*status == c.status] { (status.option_label()) }
                }
            }
            noscript { button type="submit" class="button small" { "Update" } }
        }
    }
}

fn request_form() -> Markup {
    html! {
        form method="post" action="/complaints" class="card form-card" {
            div class="form-head" {
                h3 { "Submit Service Request" }
                p class="muted" { "Please provide accurate details to help our team respond quickly." }
            }

            div class="form-grid" {
                fieldset class="choice-grid" {
                    legend { "Request Type" }
                    @for kind in RequestType::SUBMITTABLE {
                        label {
                            input type="radio" name="request_type" value=(kind.slug())
                                checked[kind == RequestType::Maintenance];
                            " " (type_icon(kind)) " " (kind.as_str())
                        }
                    }
                }
                div {
                    label for="title" { "Brief Summary" }
                    input id="title" name="title" required placeholder="E.g., Front gate sensor not working";
                }
            }

            label for="description" { "Detailed Description" }
            textarea id="description" name="description" rows="4" required
                placeholder="Describe the issue in detail, including the exact location..." {}

            div class="form-actions" {
                a href="/complaints" class="button ghost" { "Discard" }
                button type="submit" class="button dark" { "Submit to Board" }
            }
        }
    }
}
