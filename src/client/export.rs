/// The host's native print flow. The reveal.js print stylesheet paginates
/// the slides, so nothing here lays out pages.
#[cfg_attr(test, mockall::automock)]
pub trait PrintTarget: Send + Sync {
    fn print(&self);
}

/// reveal.js switches to its paginated layout when loaded with this query.
pub const PRINT_PDF_QUERY: &str = "?print-pdf";

/// Print target for documents written to disk: points at the print view.
pub struct DocumentPrint {
    location: String,
}

impl DocumentPrint {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn print_url(&self) -> String {
        format!("{}{}", self.location, PRINT_PDF_QUERY)
    }
}

impl PrintTarget for DocumentPrint {
    fn print(&self) {
        log::info!(
            "🖨️  Open {} in a browser and print to PDF",
            self.print_url()
        );
    }
}
