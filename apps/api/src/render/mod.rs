// Plain-text rendering of the document, following the same display conventions
// as the browser preview pane (bullet stripping, "Present" end dates, hidden empties).

pub mod preview;

pub use preview::render_text;
