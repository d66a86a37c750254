use crate::atoms::{Atom, AtomId, FourCC, HEADER_LEN};
use crate::containers::ContainerTable;
use crate::tree::AtomTree;
use byteorder::{BigEndian, ByteOrder};

const UDTA: FourCC = FourCC(*b"udta");
const META: FourCC = FourCC(*b"meta");

#[derive(thiserror::Error, Debug)]
pub enum StructuralError {
    #[error("truncated atom header at offset {offset}: {available} bytes left, need 8")]
    TruncatedHeader { offset: u64, available: u64 },
    #[error("atom '{typ}' at offset {offset} declares size {size}, below the 8-byte header minimum")]
    SizeBelowHeader { typ: FourCC, offset: u64, size: u32 },
    #[error("atom '{typ}' at offset {offset} declares size {size} but only {available} bytes remain")]
    SizeOverrun { typ: FourCC, offset: u64, size: u32, available: u64 },
    #[error("atom '{typ}' at offset {offset} uses the extended size marker {size}, which is not supported")]
    ExtendedSize { typ: FourCC, offset: u64, size: u32 },
    #[error("no top-level container atom in {len}-byte buffer")]
    RootNotFound { len: usize },
    #[error("container nesting deeper than {limit} levels at offset {offset}")]
    DepthLimit { offset: u64, limit: usize },
    #[error("payload of {len} bytes overflows the 32-bit atom size")]
    OversizedPayload { len: usize },
}

pub type Result<T> = std::result::Result<T, StructuralError>;

#[derive(Debug, Clone, Copy)]
pub struct AtomHeader {
    pub size: u32,   // total size including the header
    pub typ: FourCC,
    pub offset: u64, // buffer offset of the header start
}

/// Read and validate one atom header at `offset`.
///
/// Size values 0 ("extends to end of file") and 1 ("64-bit length follows")
/// are reserved markers this crate does not handle; they fail loudly instead
/// of being mis-parsed as tiny atoms.
pub fn read_atom_header(movie: &[u8], offset: u64) -> Result<AtomHeader> {
    let available = (movie.len() as u64).saturating_sub(offset);
    if available < HEADER_LEN as u64 {
        return Err(StructuralError::TruncatedHeader { offset, available });
    }
    let at = offset as usize;
    let size = BigEndian::read_u32(&movie[at..at + 4]);
    let typ = FourCC([movie[at + 4], movie[at + 5], movie[at + 6], movie[at + 7]]);

    if size == 0 || size == 1 {
        return Err(StructuralError::ExtendedSize { typ, offset, size });
    }
    if size < HEADER_LEN {
        return Err(StructuralError::SizeBelowHeader { typ, offset, size });
    }
    if size as u64 > available {
        return Err(StructuralError::SizeOverrun { typ, offset, size, available });
    }
    Ok(AtomHeader { size, typ, offset })
}

/// Parsing policy plus the construction entry point.
///
/// Everything that shapes a parse is explicit configuration: the container
/// table, how the root atom is picked, and the recursion cap.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    table: ContainerTable,
    root_tag: Option<FourCC>,
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            table: ContainerTable::default(),
            root_tag: None,
            max_depth: 16,
        }
    }

    pub fn with_table(mut self, table: ContainerTable) -> Self {
        self.table = table;
        self
    }

    /// Pin the root to a specific tag instead of taking the first top-level
    /// atom whose tag is in the container table.
    pub fn with_root_tag(mut self, tag: FourCC) -> Self {
        self.root_tag = Some(tag);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse `movie` into a fully materialized atom tree.
    ///
    /// Construction is eager and total. Any malformed header aborts the whole
    /// build: once one atom's size is wrong the cursor is desynchronized and
    /// every later sibling parse would be garbage.
    pub fn build(&self, movie: Vec<u8>) -> Result<AtomTree> {
        let root_hdr = self.locate_root(&movie)?;
        let mut nodes = vec![Atom::from_buffer(&movie, root_hdr, None)];
        self.expand(&movie, &mut nodes, AtomId(0), 0)?;
        Ok(AtomTree::from_parts(movie, nodes, AtomId(0)))
    }

    /// Walk top-level atoms until one matches the root policy.
    fn locate_root(&self, movie: &[u8]) -> Result<AtomHeader> {
        let len = movie.len() as u64;
        let mut cursor = 0u64;
        while cursor < len {
            let hdr = read_atom_header(movie, cursor)?;
            let hit = match self.root_tag {
                Some(tag) => hdr.typ == tag,
                None => self.table.contains(hdr.typ),
            };
            if hit {
                return Ok(hdr);
            }
            cursor += hdr.size as u64;
        }
        Err(StructuralError::RootNotFound { len: movie.len() })
    }

    fn expand(&self, movie: &[u8], nodes: &mut Vec<Atom>, id: AtomId, depth: usize) -> Result<()> {
        let (typ, offset, size) = {
            let atom = &nodes[id.0];
            (atom.typ, atom.offset, atom.size)
        };
        // Not a container by policy, or not buffer-backed: a leaf, not an error.
        let Some(offset) = offset else { return Ok(()) };
        if !self.table.contains(typ) {
            return Ok(());
        }
        if depth >= self.max_depth {
            return Err(StructuralError::DepthLimit { offset, limit: self.max_depth });
        }

        let end = offset + size as u64;
        let mut cursor = offset + HEADER_LEN as u64;
        if typ == META {
            // meta is a full atom: version and flags precede its first child
            cursor += 4;
        }
        while cursor < end {
            if typ == UDTA && end - cursor <= 4 {
                // optional 32-bit zero terminator, not a child atom
                break;
            }
            let hdr = read_atom_header(movie, cursor)?;
            let child = AtomId(nodes.len());
            nodes.push(Atom::from_buffer(movie, hdr, Some(id)));
            nodes[id.0].children.push(child);
            cursor += hdr.size as u64;
        }

        let children = nodes[id.0].children.clone();
        for child in children {
            self.expand(movie, nodes, child, depth + 1)?;
        }
        Ok(())
    }
}
