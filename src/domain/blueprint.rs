//! Per-page blueprint metadata

use crate::error::Result;
use crate::operator::Operator;

/// Title and sheet number of one scanned page
///
/// Both fields are already normalized for use in file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintDescriptor {
    drawing_title: String,
    sheet_number: String,
}

impl BlueprintDescriptor {
    pub fn new(drawing_title: &str, sheet_number: &str) -> Self {
        Self {
            drawing_title: hyphenate(drawing_title),
            sheet_number: hyphenate(&sheet_number.replace('/', "-of-")),
        }
    }

    /// Ask the operator for the drawing title and sheet number printed on the page
    pub fn capture(operator: &mut dyn Operator) -> Result<Self> {
        let title = operator.text("Enter the drawing name as listed on the blueprint")?;
        let sheet = operator.text("Enter the sheet number as listed on the blueprint")?;
        Ok(Self::new(&title, &sheet))
    }

    pub fn drawing_title(&self) -> &str {
        &self.drawing_title
    }

    pub fn sheet_number(&self) -> &str {
        &self.sheet_number
    }

    /// File stem without any disambiguating suffix
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.sheet_number(), self.drawing_title())
    }
}

/// Replace every whitespace character with a hyphen
pub fn hyphenate(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
