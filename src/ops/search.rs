//! `search`: substring search with an interactive pause between matches

use crate::commands::Ack;
use crate::error::EditError;
use crate::model::EditorSession;

use super::parse_count;

/// Where a search starts and how many matches it may show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchScope {
    pub start: usize,
    /// `None` means every match
    pub limit: Option<usize>,
}

impl SearchScope {
    /// A non-negative count scans from the cursor; a negative one scans from
    /// the top with its absolute value as the limit. Zero is unbounded.
    pub fn new(cursor: usize, count: i64) -> Self {
        let start = if count < 0 { 0 } else { cursor };
        let limit = match count.unsigned_abs() {
            0 => None,
            n => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        };
        Self { start, limit }
    }
}

/// `search keyword [count]`
pub fn search(session: &mut EditorSession, args: &[String]) -> Result<Ack, EditError> {
    let keyword = args.first().ok_or(EditError::KeywordMissing)?;
    let count = args.get(1).map(|c| parse_count(c)).unwrap_or(0);
    let scope = SearchScope::new(session.cursor, count);

    session.document.normalize();
    let shown = show_matches(session, keyword, scope)?;
    tracing::debug!("search {:?}: {} matches shown", keyword, shown);
    Ok(Ack::Done)
}

/// Print matches as `index: line`, asking to continue after each one.
/// Returns how many were shown.
fn show_matches(
    session: &mut EditorSession,
    keyword: &str,
    scope: SearchScope,
) -> Result<usize, EditError> {
    let mut shown = 0;
    let mut index = scope.start;

    while let Some(line) = session.document.line(index) {
        if scope.limit.is_some_and(|limit| shown >= limit) {
            break;
        }
        if line.contains(keyword) {
            let entry = format!("{}: {}", index, line);
            session.print(&entry)?;
            session.cursor = index;
            shown += 1;
            if !session.console.confirm_continue()? {
                break;
            }
        }
        index += 1;
    }
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_cursor() {
        assert_eq!(
            SearchScope::new(4, 0),
            SearchScope {
                start: 4,
                limit: None
            }
        );
        assert_eq!(
            SearchScope::new(4, 2),
            SearchScope {
                start: 4,
                limit: Some(2)
            }
        );
    }

    #[test]
    fn test_negative_count_scans_from_top() {
        assert_eq!(
            SearchScope::new(4, -3),
            SearchScope {
                start: 0,
                limit: Some(3)
            }
        );
    }
}
