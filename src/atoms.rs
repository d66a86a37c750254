use crate::parser::{AtomHeader, StructuralError};
use std::fmt;

pub const HEADER_LEN: u32 = 8;

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub fn from_str(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        match b.len() {
            4 => Some(FourCC([b[0], b[1], b[2], b[3]])),
            // iTunes tags spell the 0xa9 prefix byte as '©', two bytes in UTF-8
            5 if b[0] == 0xc2 && b[1] == 0xa9 => Some(FourCC([0xa9, b[2], b[3], b[4]])),
            _ => None,
        }
    }
    pub fn as_str_lossy(&self) -> String {
        self.0.iter().map(|&c| if (32..=126).contains(&c) { c as char } else { '.' })
            .collect()
    }
}
impl fmt::Debug for FourCC { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str_lossy()) } }
impl fmt::Display for FourCC { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str_lossy()) } }

/// Handle to a node in an [`AtomTree`](crate::tree::AtomTree) arena.
///
/// Ids are minted by the tree that owns the node; parent and child links are
/// ids rather than references, so the arena stays the only owner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AtomId(pub(crate) usize);

/// One atom: 4-byte big-endian size, 4-byte tag, then `size - 8` payload bytes.
///
/// For a parsed container, `data` still holds the entire inner byte range —
/// children are a decoded view over it, not a second authoritative copy.
#[derive(Clone)]
pub struct Atom {
    pub(crate) size: u32,       // total length including the 8-byte header
    pub(crate) typ: FourCC,
    pub(crate) data: Vec<u8>,
    pub(crate) offset: Option<u64>, // header offset in the parse buffer; None for synthetic atoms
    pub(crate) parent: Option<AtomId>,
    pub(crate) children: Vec<AtomId>,
}

impl Atom {
    /// Build an atom from an explicit tag and payload. No offset is
    /// established, so the builder will never scan it for children.
    pub fn synthetic(typ: FourCC, data: Vec<u8>) -> Result<Self, StructuralError> {
        let size = total_size(data.len())?;
        Ok(Atom { size, typ, data, offset: None, parent: None, children: Vec::new() })
    }

    pub(crate) fn from_buffer(movie: &[u8], hdr: AtomHeader, parent: Option<AtomId>) -> Self {
        let start = hdr.offset as usize + HEADER_LEN as usize;
        let end = hdr.offset as usize + hdr.size as usize;
        Atom {
            size: hdr.size,
            typ: hdr.typ,
            data: movie[start..end].to_vec(),
            offset: Some(hdr.offset),
            parent,
            children: Vec::new(),
        }
    }

    pub fn size(&self) -> u32 { self.size }
    pub fn typ(&self) -> FourCC { self.typ }
    pub fn data(&self) -> &[u8] { &self.data }
    pub fn offset(&self) -> Option<u64> { self.offset }
    pub fn parent(&self) -> Option<AtomId> { self.parent }
    pub fn children(&self) -> &[AtomId] { &self.children }

    /// Replace the payload and recompute `size`.
    ///
    /// This is the raw mutation path: ancestors keep their stored bytes, so
    /// serializing them afterwards reproduces the pre-edit payload. Use
    /// [`AtomTree::set_payload`](crate::tree::AtomTree::set_payload) when the
    /// edit should survive serialization.
    pub fn set_data(&mut self, data: Vec<u8>) -> Result<(), StructuralError> {
        self.size = total_size(data.len())?;
        self.data = data;
        Ok(())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} bytes", self.typ, self.size)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atom")
            .field("size", &self.size)
            .field("typ", &self.typ)
            .field("data_len", &self.data.len())
            .field("offset", &self.offset)
            .field("children", &self.children.len())
            .finish()
    }
}

fn total_size(payload_len: usize) -> Result<u32, StructuralError> {
    u32::try_from(payload_len)
        .ok()
        .and_then(|len| len.checked_add(HEADER_LEN))
        .ok_or(StructuralError::OversizedPayload { len: payload_len })
}
