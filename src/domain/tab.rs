use super::user::UserRole;

labelled_enum! {
    pub enum Tab {
        Dashboard => ("Dashboard", "dashboard"),
        Announcements => ("Announcements", "announcements"),
        Complaints => ("Complaints", "complaints"),
        Fees => ("Fees & Billing", "fees"),
        Board => ("Board Members", "board"),
    }
}

impl Tab {
    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    /// Page header text.
    pub fn heading(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Announcements => "Announcements",
            Tab::Complaints => "Complaints",
            Tab::Fees => "Fees",
            Tab::Board => "HOA Board",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "◔",
            Tab::Announcements => "📣",
            Tab::Complaints => "💬",
            Tab::Fees => "🧾",
            Tab::Board => "👥",
        }
    }

    pub fn home_for(role: UserRole) -> Tab {
        match role {
            UserRole::Officer => Tab::Dashboard,
            UserRole::Resident => Tab::Announcements,
        }
    }

    pub fn visible_to(self, role: UserRole) -> bool {
        self != Tab::Dashboard || role == UserRole::Officer
    }
}

/// Sidebar entries for a role, dashboard first when present.
pub fn visible_tabs(role: UserRole) -> Vec<Tab> {
    Tab::ALL.iter().copied().filter(|t| t.visible_to(role)).collect()
}

/// Where a role switch lands. Only the dashboard/announcements pair swaps;
/// any other tab is kept.
pub fn tab_after_role_switch(current: Tab, new_role: UserRole) -> Tab {
    match (new_role, current) {
        (UserRole::Resident, Tab::Dashboard) => Tab::Announcements,
        (UserRole::Officer, Tab::Announcements) => Tab::Dashboard,
        (_, tab) => tab,
    }
}
