use crate::atoms::{Atom, AtomId, HEADER_LEN};
use crate::parser::{Result, TreeBuilder};
use crate::path;
use crate::serialize;

/// A fully parsed atom tree plus the buffer it was parsed from.
///
/// The tree is the sole owner of its nodes; [`AtomId`] handles index into the
/// internal arena, and parent links are handles too, so the parent/child
/// cycle never turns into an ownership cycle. A built tree is an immutable
/// snapshot unless the caller goes through the mutation APIs below.
#[derive(Debug)]
pub struct AtomTree {
    movie: Vec<u8>,
    nodes: Vec<Atom>,
    root: AtomId,
}

impl AtomTree {
    /// Parse `movie` with the default [`TreeBuilder`] policy.
    pub fn build(movie: Vec<u8>) -> Result<Self> {
        TreeBuilder::new().build(movie)
    }

    pub(crate) fn from_parts(movie: Vec<u8>, nodes: Vec<Atom>, root: AtomId) -> Self {
        Self { movie, nodes, root }
    }

    pub fn root(&self) -> AtomId {
        self.root
    }

    /// The buffer the tree was parsed from. Node offsets point into this
    /// buffer and into nothing else; they are not updated by mutation.
    pub fn movie(&self) -> &[u8] {
        &self.movie
    }

    /// Look up a node. Panics if `id` came from a different tree.
    pub fn atom(&self, id: AtomId) -> &Atom {
        &self.nodes[id.0]
    }

    pub fn atom_mut(&mut self, id: AtomId) -> &mut Atom {
        &mut self.nodes[id.0]
    }

    /// Resolve a dot-separated path such as `moov.udta.meta` against the
    /// tree. `None` means not found; a found atom with an empty payload is
    /// `Some`, so the two can never be confused.
    pub fn resolve(&self, path: &str) -> Option<AtomId> {
        path::resolve(self, path)
    }

    /// Serialize the root atom from its stored fields. See
    /// [`serialize`](crate::serialize::serialize) for the exact semantics.
    pub fn serialize(&self) -> Vec<u8> {
        serialize::serialize(self.atom(self.root))
    }

    /// Replace one atom's payload and recompute every ancestor's stored
    /// payload up to the root, so a later [`serialize`](Self::serialize)
    /// reflects the edit.
    ///
    /// Non-child spans inside ancestors survive the rebuild: the version and
    /// flags of a `meta` atom stay in front of its children, and the zero
    /// terminator of a `udta` atom stays behind them.
    pub fn set_payload(&mut self, id: AtomId, data: Vec<u8>) -> Result<()> {
        let chain = self.ancestor_slacks(id);
        self.nodes[id.0].set_data(data)?;
        self.refresh(chain)
    }

    /// Append `atom` as the last child of `parent`, splicing its bytes into
    /// the parent's payload ahead of any trailing terminator span, and
    /// refresh the ancestor chain the same way [`set_payload`](Self::set_payload)
    /// does. Returns the handle of the inserted atom.
    pub fn push_child(&mut self, parent: AtomId, mut atom: Atom) -> Result<AtomId> {
        let parent_slack = self.slack(parent);
        let chain = self.ancestor_slacks(parent);

        atom.parent = Some(parent);
        let id = AtomId(self.nodes.len());
        self.nodes.push(atom);
        self.nodes[parent.0].children.push(id);

        let rebuilt = self.rebuild_data(parent, parent_slack);
        self.nodes[parent.0].set_data(rebuilt)?;
        self.refresh(chain)?;
        Ok(id)
    }

    fn refresh(&mut self, chain: Vec<(AtomId, Slack)>) -> Result<()> {
        for (id, slack) in chain {
            let rebuilt = self.rebuild_data(id, slack);
            self.nodes[id.0].set_data(rebuilt)?;
        }
        Ok(())
    }

    /// Per-ancestor non-child spans, captured bottom-up before any size
    /// changes invalidate the arithmetic.
    fn ancestor_slacks(&self, id: AtomId) -> Vec<(AtomId, Slack)> {
        let mut chain = Vec::new();
        let mut cur = self.nodes[id.0].parent;
        while let Some(parent) = cur {
            chain.push((parent, self.slack(parent)));
            cur = self.nodes[parent.0].parent;
        }
        chain
    }

    /// Byte spans of `id`'s payload not covered by its children: a leading
    /// prefix (the `meta` version/flags field) and a trailing remainder (the
    /// `udta` zero terminator, or the whole payload of a childless atom).
    fn slack(&self, id: AtomId) -> Slack {
        let atom = &self.nodes[id.0];
        let leading = match (atom.offset, atom.children.first()) {
            (Some(offset), Some(&first)) => match self.nodes[first.0].offset {
                Some(child_offset) => (child_offset - offset - HEADER_LEN as u64) as usize,
                None => 0,
            },
            _ => 0,
        };
        let covered: usize = atom
            .children
            .iter()
            .map(|c| self.nodes[c.0].size as usize)
            .sum();
        let trailing = atom.data.len().saturating_sub(leading + covered);
        Slack { leading, trailing }
    }

    fn rebuild_data(&self, id: AtomId, slack: Slack) -> Vec<u8> {
        let atom = &self.nodes[id.0];
        let mut out = Vec::with_capacity(atom.data.len());
        out.extend_from_slice(&atom.data[..slack.leading]);
        for &child in &atom.children {
            out.extend_from_slice(&serialize::serialize(&self.nodes[child.0]));
        }
        out.extend_from_slice(&atom.data[atom.data.len() - slack.trailing..]);
        out
    }
}

#[derive(Clone, Copy)]
struct Slack {
    leading: usize,
    trailing: usize,
}
