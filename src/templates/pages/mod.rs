pub mod announcements;
pub mod board;
pub mod complaints;
pub mod dashboard;
pub mod fees;

pub use announcements::{announcements_page, AnnouncementsVm};
pub use board::board_page;
pub use complaints::{complaints_page, ComplaintsVm};
pub use dashboard::{dashboard_page, DashboardVm};
pub use fees::{fees_page, FeesVm};
