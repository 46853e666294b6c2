/// Columns of the data sources table, in display order. Header cells and
/// row cells are both rendered from this list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSourceColumn {
    Logo,
    Detail,
}

pub const COLUMNS: [DataSourceColumn; 2] = [DataSourceColumn::Logo, DataSourceColumn::Detail];

impl DataSourceColumn {
    pub fn label(&self) -> &'static str {
        match self {
            DataSourceColumn::Logo => "",
            DataSourceColumn::Detail => "Data Source",
        }
    }

    /// Fixed width for the logo column, the detail column takes the rest.
    pub fn header_style(&self, logo_px: u32) -> String {
        match self {
            DataSourceColumn::Logo => format!("width: {}px;", logo_px + 24),
            DataSourceColumn::Detail => String::new(),
        }
    }
}
