//! Field tables are shared between threads decoding the same record type.

use std::thread;

use mapcast::{FieldTable, Mapping, from_mapping, record, value};

#[derive(Debug, Default)]
struct Event {
    kind: String,
    seq: u64,
    tags: Vec<String>,
}

record! {
    Event { kind = "Kind", seq = "Seq", tags = "Tags" }
}

#[test]
fn parallel_decodes_share_one_table() {
    mapcast_testhelpers::setup();
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            thread::spawn(move || {
                let source = value!({ "kind": "tick", "SEQ": i, "tags": [i, "x"] });
                let source = source.as_mapping().unwrap();
                let mut event = Event::default();
                from_mapping(source, &mut event).unwrap();
                assert_eq!(event.seq, i);
                assert_eq!(event.tags, [i.to_string(), "x".to_string()]);
                FieldTable::of::<Event>() as *const FieldTable as usize
            })
        })
        .collect();

    let tables: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(tables.windows(2).all(|w| w[0] == w[1]));

    let table = FieldTable::of::<Event>();
    let names: Vec<_> = table.entries().iter().map(|e| e.name).collect();
    assert_eq!(names, ["Kind", "Seq", "Tags"]);

    let mut event = Event::default();
    from_mapping(&Mapping::new(), &mut event).unwrap();
    assert_eq!(event.kind, "");
}
