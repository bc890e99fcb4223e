use crate::domain::tab::visible_tabs;
use crate::domain::{Tab, User};
use maud::{html, Markup, DOCTYPE};

/// Sidebar + header frame around every tab.
pub fn shell_layout(user: &User, active: Tab, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (active.heading()) " · HOA Connect" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                div class="shell" {
                    aside class="sidebar" {
                        div class="brand" {
                            h1 { span class="brand-mark" { "⌂" } " HOA Connect" }
                            p class="brand-sub" { "Management Pro" }
                        }

                        nav class="tabs" {
                            @for tab in visible_tabs(user.role) {
                                a href=(tab.path())
                                    class=(if tab == active { "tab active" } else { "tab" })
                                {
                                    span class="tab-icon" { (tab.icon()) }
                                    span class="tab-label" { (tab.as_str()) }
                                }
                            }
                        }

                        div class="session" {
                            div class="avatar" { (user.initial()) }
                            div class="session-who" {
                                p class="session-name" { (user.name) }
                                p class="session-role" { (user.role) }
                            }
                            form method="post" action="/role/switch" {
                                button type="submit" class="icon-button" title="Switch Role (Demo)" { "⇄" }
                            }
                        }
                    }

                    main class="content" {
                        header class="page-header" {
                            div {
                                h2 { (active.heading()) }
                                p class="muted" { "Welcome back to your community dashboard." }
                            }
                            span class="address-pill" { "📍 " (user.address) }
                        }

                        div class="page" {
                            (content)
                        }
                    }
                }
            }
        }
    }
}
