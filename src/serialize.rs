use crate::atoms::Atom;
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

/// Serialize one atom from its stored fields: big-endian 32-bit size, the
/// 4-byte tag, then the payload verbatim.
///
/// Children are never re-serialized. For a freshly parsed tree the parent's
/// payload already holds the children's bytes, so serializing the root is a
/// byte-exact round trip; after a raw child edit the parent's stored payload
/// is still the pre-edit bytes, and that is what comes back out. Use
/// [`AtomTree::set_payload`](crate::tree::AtomTree::set_payload) to make an
/// edit stick through serialization.
pub fn serialize(atom: &Atom) -> Vec<u8> {
    let mut out = Vec::with_capacity(atom.size() as usize);
    out.extend_from_slice(&atom.size().to_be_bytes());
    out.extend_from_slice(&atom.typ().0);
    out.extend_from_slice(atom.data());
    out
}

/// Streaming form of [`serialize`] for writers.
pub fn write_atom<W: Write>(w: &mut W, atom: &Atom) -> std::io::Result<()> {
    w.write_u32::<BigEndian>(atom.size())?;
    w.write_all(&atom.typ().0)?;
    w.write_all(atom.data())
}
