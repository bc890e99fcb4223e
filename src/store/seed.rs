// src/store/seed.rs
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{
    Announcement, AnnouncementCategory, BoardMember, Complaint, ComplaintStatus, FeeRecord,
    FeeStatus, Priority, RequestType, User, UserRole,
};
use crate::errors::ServerError;

/// Initial contents of the dashboard. Stands in for a backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub user: User,
    #[serde(default)]
    pub board_members: Vec<BoardMember>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub complaints: Vec<Complaint>,
    #[serde(default)]
    pub fees: Vec<FeeRecord>,
}

/// Load a seed file. `.json` files are parsed as JSON, anything else as TOML.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Seed, ServerError> {
    let path = path.as_ref();
    log::debug!("loading seed data from {}", path.display());

    let contents = fs::read_to_string(path)
        .map_err(|e| ServerError::Config(format!("failed to read seed file {}: {e}", path.display())))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let seed = if is_json {
        parse_json_seed(&contents)?
    } else {
        parse_toml_seed(&contents)?
    };

    log::info!(
        "loaded seed from {}: {} announcements, {} complaints, {} fees",
        path.display(),
        seed.announcements.len(),
        seed.complaints.len(),
        seed.fees.len()
    );
    Ok(seed)
}

pub fn parse_toml_seed(raw: &str) -> Result<Seed, ServerError> {
    toml::from_str(raw).map_err(|e| ServerError::Config(format!("invalid TOML seed: {e}")))
}

pub fn parse_json_seed(raw: &str) -> Result<Seed, ServerError> {
    serde_json::from_str(raw).map_err(|e| ServerError::Config(format!("invalid JSON seed: {e}")))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn s(v: &str) -> String {
    v.to_string()
}

impl Default for Seed {
    fn default() -> Self {
        Seed {
            user: User {
                id: s("u1"),
                name: s("John Doe"),
                role: UserRole::Officer,
                address: s("123 Oak Street"),
            },
            board_members: vec![
                board_member("bm1", "Robert Wilson", "President", "president@hoaconnect.com", "(555) 123-4567"),
                board_member("bm2", "Sarah Jenkins", "Vice President", "vpresident@hoaconnect.com", "(555) 234-5678"),
                board_member("bm3", "Michael Chen", "Treasurer", "treasurer@hoaconnect.com", "(555) 345-6789"),
                board_member("bm4", "Emily Davis", "Secretary", "secretary@hoaconnect.com", "(555) 456-7890"),
            ],
            announcements: vec![
                Announcement {
                    id: s("a1"),
                    title: s("Annual General Meeting 2024"),
                    content: s("Please join us for the annual meeting to discuss the budget and community improvements on June 15th."),
                    date: date(2024, 5, 20),
                    author: s("HOA Board"),
                    priority: Priority::High,
                    category: Some(AnnouncementCategory::CommunityEvents),
                },
                Announcement {
                    id: s("a2"),
                    title: s("Zumba Morning Sessions"),
                    content: s("Get active! Join us every Saturday at the clubhouse for free Zumba classes starting at 7 AM."),
                    date: date(2024, 5, 18),
                    author: s("Wellness Comm."),
                    priority: Priority::Normal,
                    category: Some(AnnouncementCategory::SportsWellness),
                },
                Announcement {
                    id: s("a3"),
                    title: s("Tree Planting Volunteers Needed"),
                    content: s("We are looking for 20 volunteers to help beautify our perimeter fence this coming Sunday."),
                    date: date(2024, 5, 22),
                    author: s("Admin"),
                    priority: Priority::Normal,
                    category: Some(AnnouncementCategory::VolunteerParticipation),
                },
            ],
            complaints: vec![Complaint {
                id: s("c1"),
                user_id: s("u1"),
                user_name: s("John Doe"),
                title: s("Broken Streetlight"),
                description: s("The streetlight in front of House 123 has been flickering for three days."),
                request_type: RequestType::Maintenance,
                status: ComplaintStatus::InProgress,
                created_at: date(2024, 5, 21),
                updated_at: date(2024, 5, 22),
            }],
            fees: vec![
                FeeRecord {
                    id: s("f1"),
                    user_id: s("u1"),
                    user_name: s("John Doe"),
                    fee_type: s("Monthly Dues"),
                    amount: 50.00,
                    due_date: date(2024, 6, 1),
                    status: FeeStatus::Unpaid,
                },
                FeeRecord {
                    id: s("f2"),
                    user_id: s("u2"),
                    user_name: s("Jane Smith"),
                    fee_type: s("Security Fee"),
                    amount: 15.00,
                    due_date: date(2024, 5, 15),
                    status: FeeStatus::Paid,
                },
            ],
        }
    }
}

fn board_member(id: &str, name: &str, position: &str, email: &str, phone: &str) -> BoardMember {
    BoardMember {
        id: s(id),
        name: s(name),
        position: s(position),
        email: s(email),
        phone: s(phone),
        avatar: None,
    }
}
