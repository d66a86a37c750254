pub mod atoms;
pub mod containers;
pub mod parser;
pub mod path;
pub mod paths;
pub mod serialize;
pub mod tree;
pub mod util;

pub use atoms::{Atom, AtomId, FourCC};
pub use containers::ContainerTable;
pub use parser::{AtomHeader, StructuralError, TreeBuilder, read_atom_header};
pub use path::resolve;
pub use serialize::{serialize, write_atom};
pub use tree::AtomTree;
