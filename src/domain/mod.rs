// src/domain/mod.rs

/// Declares a closed enumeration whose variants carry a display label and a
/// URL-safe slug. `parse` accepts either form, and seed files deserialize
/// from the label.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($label:literal, $slug:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn slug(self) -> &'static str {
                match self {
                    $($name::$variant => $slug),+
                }
            }

            pub fn parse(raw: &str) -> Option<Self> {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.slug() == raw || v.as_str().eq_ignore_ascii_case(raw))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw: String = serde::Deserialize::deserialize(deserializer)?;
                $name::parse(&raw).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} `{}`",
                        stringify!($name),
                        raw
                    ))
                })
            }
        }
    };
}

pub mod announcement;
pub mod board;
pub mod complaint;
pub mod dashboard;
pub mod fee;
pub mod tab;
pub mod user;

pub use announcement::{Announcement, AnnouncementCategory, CategoryFilter, Priority};
pub use board::BoardMember;
pub use complaint::{Complaint, ComplaintStatus, RequestType};
pub use fee::{FeeRecord, FeeStatus, FeeSummary};
pub use tab::Tab;
pub use user::{User, UserRole};
