use std::env;

// Parse a movie file and print its atom tree with one indented line per atom.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args[0]);
        std::process::exit(1);
    }

    let movie = std::fs::read(&args[1])?;
    let tree = atomtree::AtomTree::build(movie)?;

    let mut stack = vec![(tree.root(), 0usize)];
    while let Some((id, depth)) = stack.pop() {
        let atom = tree.atom(id);
        println!("{}{}", "  ".repeat(depth), atom);
        for &child in atom.children().iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    Ok(())
}
