use dsa_exercises::linked_list::{reverse, zipper, Node};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// dhat allows a single profiler per process, so every check lives in this one test.
#[test]
fn list_rewiring_does_not_allocate() {
    let long = Node::from_values(0..1024).unwrap();
    let short = Node::from_values(5000..5010).unwrap();
    let single = Node::from_values([42]).unwrap();

    // Register logging callsites before measuring.
    drop(zipper(reverse(Box::new(Node::new(0))), Box::new(Node::new(1))));

    let _profiler = dhat::Profiler::builder().testing().build();

    let long = reverse(long);
    let single = reverse(single);
    let zipped = zipper(long, short);
    let zipped = zipper(single, zipped);

    let stats = dhat::HeapStats::get();
    dhat::assert_eq!(stats.total_blocks, 0);

    drop(_profiler);

    let values = zipped.values();
    assert_eq!(1 + 1024 + 10, values.len());
    assert_eq!(&[42, 1023, 5000, 1022], &values[..4]);
}
