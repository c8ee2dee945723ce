//! Styled catalog table: the fixed three-product catalog rendered as an HTML
//! table with conditional discount/rating cell styling.

use crate::error::Result;
use crate::models::{sample_catalog, Product};
use crate::style;
use crate::workspace::Workspace;
use crate::config;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CatalogStyling
// ---------------------------------------------------------------------------

/// Builds and writes the styled product catalog table.
pub struct CatalogStyling<'a> {
    ws: &'a Workspace,
}

impl<'a> CatalogStyling<'a> {
    /// Create a new `CatalogStyling` bound to the given workspace.
    pub fn new(ws: &'a Workspace) -> Self {
        Self { ws }
    }

    /// The fixed catalog rows backing the table.
    pub fn products(&self) -> Vec<Product> {
        sample_catalog()
    }

    /// Render the catalog as an HTML table string.
    pub fn table_html(&self) -> String {
        style::render_table(&self.products())
    }

    /// Write the HTML table into the workspace and return its path.
    pub fn write(&self) -> Result<PathBuf> {
        self.ws.write_text(config::CATALOG_TABLE, &self.table_html())
    }
}
