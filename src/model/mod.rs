//! Editor model - the content store and the session that owns it

pub mod document;
pub mod session;

pub use document::{Document, FILENAME_KEY};
pub use session::{EditorSession, DEFAULT_SUCCESS_MARKER};
