use atomtree::{paths, AtomTree, ContainerTable, FourCC, TreeBuilder};

fn atom(typ: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(&((8 + payload.len()) as u32).to_be_bytes());
    v.extend_from_slice(typ);
    v.extend_from_slice(payload);
    v
}

#[test]
fn resolves_two_siblings_and_misses_a_third() {
    // moov containing exactly [mvhd][free] back to back
    let mut moov_payload = atom(b"mvhd", &[0u8; 12]);
    moov_payload.extend_from_slice(&atom(b"free", b"data"));
    let tree = AtomTree::build(atom(b"moov", &moov_payload)).expect("build failed");

    let children = tree.atom(tree.root()).children().to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(tree.resolve("moov.mvhd"), Some(children[0]));
    assert_eq!(tree.resolve("moov.free"), Some(children[1]));
    assert_eq!(tree.resolve("moov.skip"), None);
}

#[test]
fn resolution_is_deterministic() {
    let movie = atom(b"moov", &atom(b"udta", &atom(b"free", b"x")));
    let tree = AtomTree::build(movie).expect("build failed");

    let first = tree.resolve("moov.udta.free");
    let second = tree.resolve("moov.udta.free");
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn missing_intermediate_segment_stops_resolution() {
    let movie = atom(b"moov", &atom(b"mvhd", &[0u8; 4]));
    let tree = AtomTree::build(movie).expect("build failed");

    // udta is absent; later segments must not be matched against anything
    assert_eq!(tree.resolve("moov.udta.meta"), None);
    assert_eq!(tree.resolve("moov.nope.mvhd"), None);
}

#[test]
fn wrong_length_segments_never_match() {
    let movie = atom(b"moov", &atom(b"mvhd", &[0u8; 4]));
    let tree = AtomTree::build(movie).expect("build failed");

    assert_eq!(tree.resolve("moov.mvh"), None);
    assert_eq!(tree.resolve("moov.mvhdx"), None);
    assert_eq!(tree.resolve("moov."), None);
}

#[test]
fn duplicate_tags_resolve_to_the_first_in_byte_order() {
    let mut moov_payload = atom(b"free", b"first");
    moov_payload.extend_from_slice(&atom(b"free", b"second"));
    let tree = AtomTree::build(atom(b"moov", &moov_payload)).expect("build failed");

    let hit = tree.resolve("moov.free").expect("free missing");
    assert_eq!(tree.atom(hit).data(), b"first");
    assert_eq!(hit, tree.atom(tree.root()).children()[0]);
}

#[test]
fn found_atom_with_empty_payload_is_not_notfound() {
    // udta of size 8: present, zero payload bytes
    let tree = AtomTree::build(atom(b"moov", &atom(b"udta", b""))).expect("build failed");

    let udta = tree.resolve("moov.udta");
    assert!(udta.is_some());
    assert!(tree.atom(udta.unwrap()).data().is_empty());
}

#[test]
fn single_segment_path_names_the_root() {
    let tree = AtomTree::build(atom(b"moov", &atom(b"mvhd", &[0u8; 4]))).expect("build failed");
    assert_eq!(tree.resolve("moov"), Some(tree.root()));
}

#[test]
fn copyright_prefixed_tags_resolve_through_string_paths() {
    // moov.udta.meta.ilst.©nam with the raw 0xa9 prefix byte in the tag
    let name = atom(&[0xa9, b'n', b'a', b'm'], b"Some Title");
    let ilst = atom(b"ilst", &name);
    let mut meta_payload = vec![0u8; 4];
    meta_payload.extend_from_slice(&ilst);
    let movie = atom(b"moov", &atom(b"udta", &atom(b"meta", &meta_payload)));

    let tree = TreeBuilder::new()
        .with_table(ContainerTable::quicktime().with_itunes_metadata())
        .build(movie)
        .expect("build failed");

    let hit = tree.resolve(paths::AUDIO_NAME).expect("©nam missing");
    assert_eq!(tree.atom(hit).typ(), FourCC([0xa9, b'n', b'a', b'm']));
    assert_eq!(tree.atom(hit).data(), b"Some Title");

    assert!(tree.resolve(paths::METADATA).is_some());
    assert!(tree.resolve(paths::ITEM_LIST).is_some());
    assert_eq!(tree.resolve(paths::COVER_ART), None);
}

#[test]
fn fourcc_parses_exact_and_copyright_segments() {
    assert_eq!(FourCC::from_str("moov"), Some(FourCC(*b"moov")));
    assert_eq!(FourCC::from_str("©ART"), Some(FourCC([0xa9, b'A', b'R', b'T'])));
    assert_eq!(FourCC::from_str("moo"), None);
    assert_eq!(FourCC::from_str("moovx"), None);
}
