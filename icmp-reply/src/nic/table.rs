use super::{Interface, Interfaces};

/// An interface table in preallocated memory, keyed by interface name.
///
/// Lookup is a linear scan. Routers tend to have a handful of interfaces.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    entries: &'a [(&'a str, Interface)],
}

impl<'a> Table<'a> {
    /// Create a table from named entries.
    ///
    /// Should a name appear more than once, the first entry wins.
    pub fn new(entries: &'a [(&'a str, Interface)]) -> Self {
        Table { entries }
    }

    /// The number of configured interfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no interface is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Interfaces for Table<'_> {
    type Id = str;

    fn lookup(&self, id: &str) -> Option<Interface> {
        self.entries
            .iter()
            .find(|(name, _)| *name == id)
            .map(|&(_, iface)| iface)
    }
}
