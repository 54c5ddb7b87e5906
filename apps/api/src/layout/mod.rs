// Pagination engine: one pure function shared by every renderer, so the
// screen preview, the PDF path, and the Word path can never disagree about
// which item lands on which page.

pub mod paginator;
pub mod policy;

pub use paginator::{paginate, Page};
pub use policy::PagingPolicy;
