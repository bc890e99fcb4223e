use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Rounded pill label. `tone` picks the colour class.
pub fn badge(label: &str, tone: &str) -> Markup {
    html! {
        span class=(format!("badge badge-{tone}")) { (label) }
    }
}

pub fn stat_card(label: &str, value: &str, note: &str, tone: &str) -> Markup {
    html! {
        div class=(format!("card stat stat-{tone}")) {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
            p class="stat-note" { (note) }
        }
    }
}

pub fn empty_state(icon: &str, message: &str) -> Markup {
    html! {
        div class="empty-state" {
            div class="empty-icon" { (icon) }
            p { (message) }
        }
    }
}

/// Horizontal bars scaled against the largest value.
pub fn bar_chart(rows: &[(String, f64, String)], tone: &str) -> Markup {
    let max = rows.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);

    html! {
        div class=(format!("bar-chart bars-{tone}")) {
            @for (label, value, shown) in rows {
                @let width = if max > 0.0 { value / max * 100.0 } else { 0.0 };
                div class="bar-row" {
                    span class="bar-label" { (label) }
                    div class="bar-track" {
                        div class="bar-fill" style=(format!("width: {width:.0}%")) {}
                    }
                    span class="bar-value" { (shown) }
                }
            }
        }
    }
}

/// Record id made safe for a path segment or query value.
pub fn url_encoded(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

pub fn money(amount: f64) -> String {
    // `-0.0 + 0.0` is `+0.0`, so a zero never prints as `$-0.00`.
    let amount = amount + 0.0;
    format!("${amount:.2}")
}
