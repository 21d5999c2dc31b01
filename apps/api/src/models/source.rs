/// A configured upstream feed: display name plus the board token used to
/// build the feed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub board_token: String,
}

impl Source {
    pub fn new(name: impl Into<String>, board_token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_token: board_token.into(),
        }
    }
}
