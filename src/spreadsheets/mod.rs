pub mod fees_xlsx;

pub use fees_xlsx::export_fees_xlsx;
