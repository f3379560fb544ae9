//! Main menu text and the mapping from typed input to menu entries. Kept
//! apart from the loop so the numbering lives in one place.

/// Text printed before every choice prompt.
pub(crate) const MENU: &str = "\nBook Manager
1. Add book
2. Find books
3. Remove book
4. List books
5. Save and exit";

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Add,
    Find,
    Remove,
    List,
    SaveAndExit,
}

impl MenuChoice {
    /// Map the raw input to a menu entry. Surrounding whitespace is ignored.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Find),
            "3" => Some(Self::Remove),
            "4" => Some(Self::List),
            "5" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}
