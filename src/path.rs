use crate::atoms::{AtomId, FourCC};
use crate::tree::AtomTree;

/// Walk a dot-separated path such as `moov.udta.meta.ilst.covr` down the
/// tree and return the atom it names.
///
/// The first segment names the root by convention and is discarded. At each
/// level the FIRST child whose tag equals the segment wins; repeated tags
/// (legal for `free`-style atoms) resolve to the earliest in byte order.
/// Segments that are not exactly four tag bytes can never match, so they
/// fall out as `None` rather than an error, and resolution stops at the
/// first segment with no match.
pub fn resolve(tree: &AtomTree, path: &str) -> Option<AtomId> {
    let mut cur = tree.root();
    for step in path.split('.').skip(1) {
        let want = FourCC::from_str(step);
        cur = tree
            .atom(cur)
            .children()
            .iter()
            .copied()
            .find(|&child| Some(tree.atom(child).typ()) == want)?;
    }
    Some(cur)
}
