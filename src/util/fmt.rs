use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, so pre-rendered fragments can be
/// nested inside `debug_struct` output without quotes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
