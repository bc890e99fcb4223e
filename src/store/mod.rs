pub mod announcements;
pub mod complaints;
pub mod connection;
pub mod fees;
pub mod seed;
pub mod session;
pub mod state;

pub use connection::Store;
pub use state::AppState;
