use crate::domain::{BoardMember, Tab, User};
use crate::templates::shell_layout;
use maud::{html, Markup};

pub fn board_page(user: &User, members: &[BoardMember]) -> Markup {
    shell_layout(
        user,
        Tab::Board,
        html! {
            div class="banner" {
                div class="banner-icon" { "👥" }
                div {
                    h3 { "Meet Your Board Members" }
                    p class="muted" { "Our dedicated team working to keep our community safe, clean, and vibrant." }
                }
            }

            div class="grid grid-4" {
                @for member in members {
                    div class="card member" {
                        div class="member-avatar" {
                            @if let Some(src) = &member.avatar {
                                img src=(src) alt=(member.name);
                            } @else {
                                (member.initial())
                            }
                        }
                        h4 { (member.name) }
                        p class="member-position" { (member.position) }
                        div class="member-contact" {
                            a href=(format!("mailto:{}", member.email)) { "✉ " (member.email) }
                            p { "☎ " (member.phone) }
                        }
                        @if user.is_officer() {
                            button type="button" class="button ghost wide" disabled { "Edit Profile" }
                        }
                    }
                }
            }
        },
    )
}
