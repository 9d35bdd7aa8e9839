//! Where each program's schedule lives.
//!
//! These are the published layouts; a change on the publisher's side means
//! updating the constants here.

use crate::domain::Program;

/// Fixed location of one program's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetDescriptor {
    pub program: Program,
    pub spreadsheet_id: &'static str,
    pub sheet_name: &'static str,
    /// A1 range holding the water name column and the weekly stock cells.
    pub schedule_range: &'static str,
    /// A1 range holding the month row and the day row.
    pub date_range: &'static str,
    /// Index (within the stock cells) of a deleted column that still shows
    /// up as an empty cell in the raw data.
    pub skip_column: Option<usize>,
}

const CFP: SheetDescriptor = SheetDescriptor {
    program: Program::Cfp,
    spreadsheet_id: "1xJYPRrX2Gb7ACr6HxPB7mlsCw9K8NvClLfBIw7qjTcA",
    sheet_name: "CFP Stocking Calendar Schedule",
    schedule_range: "A11:Z",
    date_range: "B8:9",
    skip_column: None,
};

const WINTER: SheetDescriptor = SheetDescriptor {
    program: Program::Winter,
    spreadsheet_id: "1PZuTV-zi5vMdxaMSnGx6c-QxeQQm-6DRQJJPKAZDjZM",
    sheet_name: "2024-25 Winter",
    schedule_range: "A9:AD",
    date_range: "B4:5",
    skip_column: Some(5),
};

const SPRING_SUMMER: SheetDescriptor = SheetDescriptor {
    program: Program::SpringSummer,
    spreadsheet_id: "1S5wsDfGzEInV64UKjUPzexAe2KOO1KocfB4dJH7oVrs",
    sheet_name: "2025 Spring/Summer",
    schedule_range: "A9:AD",
    date_range: "B4:5",
    skip_column: Some(5),
};

impl Program {
    pub fn sheet(self) -> &'static SheetDescriptor {
        match self {
            Program::Cfp => &CFP,
            Program::Winter => &WINTER,
            Program::SpringSummer => &SPRING_SUMMER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_program_has_its_own_sheet() {
        for program in Program::ALL {
            assert_eq!(program.sheet().program, program);
        }
        assert_eq!(Program::Cfp.sheet().skip_column, None);
        assert_eq!(Program::Winter.sheet().skip_column, Some(5));
        assert_eq!(Program::SpringSummer.sheet().date_range, "B4:5");
    }
}
