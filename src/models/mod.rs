pub mod draft;
pub mod entry;
pub mod summary;

pub use draft::Draft;
pub use entry::Entry;
pub use summary::Summary;
