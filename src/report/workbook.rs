use rust_xlsxwriter::{Workbook, Worksheet};

use super::sheet::{Cell, SheetRow};
use crate::errors::ConvertResult;

/// Adds a sheet holding a header row followed by one row per record.
pub(crate) fn write_sheet<R: SheetRow>(
    workbook: &mut Workbook,
    name: &str,
    rows: &[R],
) -> ConvertResult<()> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    for (col, header) in R::COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, record) in rows.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, cell) in record.cells().into_iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell)?;
        }
    }

    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: Cell<'_>) -> ConvertResult<()> {
    match cell {
        Cell::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
        Cell::Number(number) => {
            worksheet.write_number(row, col, number)?;
        }
        Cell::Blank => {}
    }
    Ok(())
}
