use crate::atoms::FourCC;
use std::collections::HashSet;

/// The classic QuickTime container tags: atoms whose payload is a
/// concatenation of child atoms.
pub const QUICKTIME_CONTAINERS: [&[u8; 4]; 14] = [
    b"moov", b"trak", b"udta", b"tref", b"imap", b"mdia", b"minf", b"stbl",
    b"edts", b"mdra", b"rmra", b"imag", b"vnrp", b"dinf",
];

/// The closed set of tags the builder is willing to decompose.
///
/// Anything outside the set is an opaque leaf regardless of what its payload
/// bytes look like. The set is a value, not a global: callers inject it via
/// [`TreeBuilder::with_table`](crate::parser::TreeBuilder::with_table).
#[derive(Debug, Clone)]
pub struct ContainerTable {
    tags: HashSet<FourCC>,
}

impl ContainerTable {
    pub fn empty() -> Self {
        Self { tags: HashSet::new() }
    }

    /// The original QuickTime table, verbatim.
    pub fn quicktime() -> Self {
        let mut table = Self::empty();
        for tag in QUICKTIME_CONTAINERS {
            table.insert(FourCC(*tag));
        }
        table
    }

    /// Add `meta` and `ilst` so the iTunes metadata paths in
    /// [`paths`](crate::paths) become reachable. `meta` is a full atom; the
    /// builder skips its version/flags field before scanning children.
    pub fn with_itunes_metadata(mut self) -> Self {
        self.insert(FourCC(*b"meta"));
        self.insert(FourCC(*b"ilst"));
        self
    }

    pub fn insert(&mut self, tag: FourCC) {
        self.tags.insert(tag);
    }

    pub fn contains(&self, tag: FourCC) -> bool {
        self.tags.contains(&tag)
    }
}

impl Default for ContainerTable {
    fn default() -> Self {
        Self::quicktime()
    }
}
