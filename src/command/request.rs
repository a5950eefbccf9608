//! Command parsing.

/// A parsed command from the external surface.
///
/// Paths match with or without the leading `/`. A `set` command carries
/// `None` when the `position` parameter is missing or fails to parse; the
/// router acknowledges those without invoking a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Report the live position estimate.
    Position,
    /// Move to the given position.
    Set(Option<f64>),
    /// Report the drive state.
    State,
}

impl Command {
    /// Parse a request path, including any query string.
    ///
    /// Returns `None` for unknown routes.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let (route, query) = match path.split_once('?') {
            Some((route, query)) => (route, Some(query)),
            None => (path, None),
        };

        match route {
            "position" => Some(Command::Position),
            "state" => Some(Command::State),
            "set" => Some(Command::Set(query.and_then(position_param))),
            _ => None,
        }
    }
}

/// Extract and parse the `position` query parameter.
fn position_param(query: &str) -> Option<f64> {
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some(split) => split,
            None => continue,
        };
        if key == "position" {
            return value.parse().ok();
        }
    }
    None
}
