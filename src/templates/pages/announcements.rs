use crate::domain::{Announcement, AnnouncementCategory, CategoryFilter, Priority, Tab, User};
use crate::templates::components::{badge, empty_state};
use crate::templates::shell_layout;
use maud::{html, Markup};

pub struct AnnouncementsVm<'a> {
    pub user: &'a User,
    /// Already sorted and filtered.
    pub announcements: Vec<&'a Announcement>,
    pub filter: CategoryFilter,
    pub compose: bool,
}

fn category_tone(category: AnnouncementCategory) -> &'static str {
    match category {
        AnnouncementCategory::General => "slate",
        AnnouncementCategory::CommunityEvents => "blue",
        AnnouncementCategory::SportsWellness => "emerald",
        AnnouncementCategory::VolunteerParticipation => "purple",
    }
}

fn category_icon(category: AnnouncementCategory) -> &'static str {
    match category {
        AnnouncementCategory::General => "ℹ",
        AnnouncementCategory::CommunityEvents => "📅",
        AnnouncementCategory::SportsWellness => "❤",
        AnnouncementCategory::VolunteerParticipation => "🤝",
    }
}

fn filter_href(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "/announcements".to_string(),
        other => format!("/announcements?category={}", other.slug()),
    }
}

pub fn announcements_page(vm: &AnnouncementsVm) -> Markup {
    let filters = std::iter::once(CategoryFilter::All)
        .chain(AnnouncementCategory::FILTER_ORDER.into_iter().map(CategoryFilter::Only));

    shell_layout(
        vm.user,
        Tab::Announcements,
        html! {
            div class="toolbar" {
                div class="pills" {
                    @for filter in filters {
                        a href=(filter_href(filter))
                            class=(if filter == vm.filter { "pill active" } else { "pill" })
                        { (filter.label()) }
                    }
                }

                @if vm.user.is_officer() {
                    @if vm.compose {
                        a href=(filter_href(vm.filter)) class="button primary" { "✕ Cancel" }
                    } @else {
                        a href="/announcements?compose=1" class="button primary" { "+ New Post" }
                    }
                }
            }

            @if vm.compose && vm.user.is_officer() {
                (compose_form())
            }

            div class="feed" {
                @if vm.announcements.is_empty() {
                    (empty_state("📂", "No announcements found in this category."))
                } @else {
                    @for a in &vm.announcements {
                        (announcement_card(a))
                    }
                }
            }
        },
    )
}

fn compose_form() -> Markup {
    html! {
        form method="post" action="/announcements" class="card form-card" {
            div class="form-head" {
                h3 { "Post New Announcement" }
                p class="muted" { "Classification helps residents find information faster." }
            }

            div class="form-grid" {
                div {
                    label for="category" { "Category" }
                    select id="category" name="category" {
                        @for category in AnnouncementCategory::ALL {
                            option value=(category.slug()) selected[*category == AnnouncementCategory::General] {
                                (category.form_label())
                            }
                        }
                    }
                }
                fieldset class="segmented" {
                    legend { "Priority Level" }
                    @for priority in [Priority::Low, Priority::Normal, Priority::High] {
                        label {
                            input type="radio" name="priority" value=(priority.slug())
                                checked[priority == Priority::Normal];
                            " " (priority.as_str())
                        }
                    }
                }
            }

            label for="title" { "Headline" }
            input id="title" name="title" required placeholder="E.g. Summer Sports Fest 2024";

            label for="content" { "Details" }
            textarea id="content" name="content" rows="4" required
                placeholder="Describe the activity, dates, and how to participate..." {}

            div class="form-actions" {
                a href="/announcements" class="button ghost" { "Discard" }
                button type="submit" class="button primary" { "Publish Announcement" }
            }
        }
    }
}

fn announcement_card(a: &Announcement) -> Markup {
    let category = a.display_category();
    let priority_tone = if a.priority == Priority::High { "red" } else { "slate" };

    html! {
        article class=(format!("card announcement accent-{}", category_tone(category))) {
            div class="announcement-meta" {
                div class="badges" {
                    (badge(&format!("{} {}", category_icon(category), category), category_tone(category)))
                    (badge(&format!("{} Priority", a.priority), priority_tone))
                }
                div class="byline" {
                    span { "🗓 " (a.date) }
                    span { "👤 " (a.author) }
                }
            }
            h3 class="announcement-title" { (a.title) }
            p class="announcement-body" { (a.content) }
        }
    }
}
