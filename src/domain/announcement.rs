// src/domain/announcement.rs

use chrono::NaiveDate;
use serde::Deserialize;

labelled_enum! {
    pub enum Priority {
        High => ("High", "high"),
        Normal => ("Normal", "normal"),
        Low => ("Low", "low"),
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

labelled_enum! {
    pub enum AnnouncementCategory {
        General => ("General", "general"),
        CommunityEvents => ("Community Events", "community-events"),
        SportsWellness => ("Sports & Wellness", "sports-wellness"),
        VolunteerParticipation => ("Volunteer & Participation", "volunteer-participation"),
    }
}

impl Default for AnnouncementCategory {
    fn default() -> Self {
        AnnouncementCategory::General
    }
}

impl AnnouncementCategory {
    /// Order of the filter pills on the announcements tab.
    pub const FILTER_ORDER: [AnnouncementCategory; 4] = [
        AnnouncementCategory::CommunityEvents,
        AnnouncementCategory::SportsWellness,
        AnnouncementCategory::VolunteerParticipation,
        AnnouncementCategory::General,
    ];

    /// Longer wording used in the compose form.
    pub fn form_label(self) -> &'static str {
        match self {
            AnnouncementCategory::General => "General Notice",
            AnnouncementCategory::CommunityEvents => "Community Events / Meetings",
            AnnouncementCategory::SportsWellness => "Sports & Wellness Programs",
            AnnouncementCategory::VolunteerParticipation => "Volunteer Opportunities",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Option<AnnouncementCategory>,
}

impl Announcement {
    /// Uncategorized posts are shown as General.
    pub fn display_category(&self) -> AnnouncementCategory {
        self.category.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AnnouncementCategory),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        AnnouncementCategory::parse(raw).map(CategoryFilter::Only)
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.slug(),
        }
    }

    /// An announcement without a category only passes `All`.
    pub fn matches(self, announcement: &Announcement) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => announcement.category == Some(c),
        }
    }
}

/// Newest first, then apply the category filter.
/// `sort_by` is stable, so announcements on the same date keep their
/// collection order.
pub fn sorted_and_filtered(announcements: &[Announcement], filter: CategoryFilter) -> Vec<&Announcement> {
    let mut sorted: Vec<&Announcement> = announcements.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.retain(|a| filter.matches(a));
    sorted
}
