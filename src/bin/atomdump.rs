use anyhow::Context;
use atomtree::{
    containers::ContainerTable,
    parser::TreeBuilder,
    serialize::write_atom,
    tree::AtomTree,
    util::{escape_bytes, hex_dump},
    AtomId,
};
use clap::{ArgAction, Parser};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "QuickTime/MP4 atom tree explorer")]
struct Args {
    /// Movie file path (mp4, m4v, mov)
    path: PathBuf,

    /// Only show the subtree at a dotted atom path (e.g. moov.udta.meta)
    #[arg(long)]
    atom: Option<String>,

    /// Hex dump the payload of the selected atom
    #[arg(long, action = ArgAction::SetTrue)]
    raw: bool,

    /// Write the selected atom (header plus payload) to this file
    #[arg(long)]
    extract: Option<PathBuf>,

    /// Show escaped payload bytes for leaf atoms in the tree listing
    #[arg(long, action = ArgAction::SetTrue)]
    data: bool,

    /// Emit JSON instead of the indented tree
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Parse with the classic QuickTime container set only (no meta/ilst descent)
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Payload preview length for --data and JSON output
    #[arg(long, default_value_t = 64)]
    preview: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let movie = fs::read(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;

    let table = if args.strict {
        ContainerTable::quicktime()
    } else {
        ContainerTable::quicktime().with_itunes_metadata()
    };
    let tree = TreeBuilder::new().with_table(table).build(movie)?;

    let start = match &args.atom {
        Some(p) => tree
            .resolve(p)
            .with_context(|| format!("no atom at path {p}"))?,
        None => tree.root(),
    };

    if let Some(out) = &args.extract {
        let mut f = fs::File::create(out)
            .with_context(|| format!("creating {}", out.display()))?;
        write_atom(&mut f, tree.atom(start))?;
        return Ok(());
    }

    if args.raw {
        let atom = tree.atom(start);
        let payload_offset = atom.offset().map(|o| o + 8).unwrap_or(0);
        print!("{}", hex_dump(atom.data(), payload_offset));
        return Ok(());
    }

    if args.json {
        let doc = json_atom(&tree, start, args.preview);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print_tree(&tree, start, 0, &args);
    Ok(())
}

// ---------- Human-readable tree ----------

fn print_tree(tree: &AtomTree, id: AtomId, depth: usize, args: &Args) {
    let atom = tree.atom(id);
    let indent = "  ".repeat(depth);
    println!("{indent}{atom}");
    if args.data && atom.children().is_empty() && !atom.data().is_empty() {
        let cut = atom.data().len().min(args.preview);
        println!("{indent}  [{}]", escape_bytes(&atom.data()[..cut]));
    }
    for &child in atom.children() {
        print_tree(tree, child, depth + 1, args);
    }
}

// ---------- JSON view ----------

#[derive(Serialize)]
struct JsonAtom {
    offset: Option<u64>,
    size: u32,
    typ: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonAtom>,
}

fn json_atom(tree: &AtomTree, id: AtomId, preview: usize) -> JsonAtom {
    let atom = tree.atom(id);
    let data = if atom.children().is_empty() && !atom.data().is_empty() {
        let cut = atom.data().len().min(preview);
        Some(hex::encode(&atom.data()[..cut]))
    } else {
        None
    };
    JsonAtom {
        offset: atom.offset(),
        size: atom.size(),
        typ: atom.typ().to_string(),
        data,
        children: atom
            .children()
            .iter()
            .map(|&c| json_atom(tree, c, preview))
            .collect(),
    }
}
