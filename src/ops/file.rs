//! `open` and `save`

use std::path::{PathBuf, MAIN_SEPARATOR_STR};

use crate::commands::Ack;
use crate::error::EditError;
use crate::model::{Document, EditorSession};

/// Rejoin path segments given one per pending line
fn join_path(args: &[String]) -> PathBuf {
    PathBuf::from(args.join(MAIN_SEPARATOR_STR))
}

/// `open`: replace the document with the named file
///
/// The cursor is left where it was.
pub fn open(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let path = join_path(args);
    if path.as_os_str().is_empty() {
        return Err(EditError::MissingPath);
    }
    session.document = Document::open(&path)?;
    Ok(Ack::Done)
}

/// `save`: write to the given path, or to the remembered filename
pub fn save(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let path = join_path(args);
    session.document.normalize();
    session.document.save(Some(&path))?;
    Ok(Ack::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_uses_separator() {
        let args = vec!["tmp".to_string(), "notes.txt".to_string()];
        assert_eq!(
            join_path(&args),
            PathBuf::from(format!("tmp{}notes.txt", MAIN_SEPARATOR_STR))
        );
        assert_eq!(join_path(&[]), PathBuf::new());
    }
}
