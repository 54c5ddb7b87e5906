// Renderers: all three output formats (preview HTML / PDF-bound HTML, Word,
// CSV) consume the identical `Vec<Page>` from the paginator, which is what
// guarantees visual parity across formats.

pub mod csv;
pub mod handlers;
pub mod html;
pub mod locale;
pub mod word;
