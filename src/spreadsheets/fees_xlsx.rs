use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::FeeRecord;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};

const HEADERS: [&str; 6] = ["Invoice", "Resident", "Description", "Due Date", "Amount", "Status"];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Renders the fee ledger into an in-memory workbook.
pub fn fees_workbook(fees: &[&FeeRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let money = Format::new().set_num_format("$#,##0.00");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err(header))?;
    }

    for (i, fee) in fees.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, fee.invoice_number())
            .map_err(xlsx_err("invoice"))?;
        worksheet
            .write_string(r, 1, &fee.user_name)
            .map_err(xlsx_err("resident"))?;
        worksheet
            .write_string(r, 2, &fee.fee_type)
            .map_err(xlsx_err("description"))?;
        worksheet
            .write_string(r, 3, fee.due_date.to_string())
            .map_err(xlsx_err("due date"))?;
        worksheet
            .write_number_with_format(r, 4, fee.amount, &money)
            .map_err(xlsx_err("amount"))?;
        worksheet
            .write_string(r, 5, fee.status.as_str())
            .map_err(xlsx_err("status"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_fees_xlsx(fees: &[&FeeRecord], today: NaiveDate) -> ResultResp {
    let buffer = fees_workbook(fees)?;
    log::info!("exported {} fee records ({} bytes)", fees.len(), buffer.len());

    xlsx_response(buffer, &format!("fee_records_{today}.xlsx"))
}
