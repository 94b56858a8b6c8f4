use std::fmt::{self, Debug, Formatter};

/// Prints the contained string without the quotes and escaping that [`Debug`] adds for [`str`].
/// Used to show type and verb names as bare identifiers inside `debug_*` builders.
pub struct DebugRaw<'a>(pub &'a str);

impl Debug for DebugRaw<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
