use std::io::{self, Write};

use snaplit::{AliasTable, Snap};

#[derive(Snap)]
pub struct Sample {
    pub id: u32,
}

#[test]
fn to_writer_matches_to_string() {
    let aliases = AliasTable::new().strip("writer");
    let input = Sample { id: 9 };

    let mut sink = Vec::new();
    snaplit::to_writer(&mut sink, &input, &aliases).unwrap();

    assert_eq!(
        String::from_utf8(sink).unwrap(),
        snaplit::to_string(&input, &aliases)
    );
}

/// A sink that fails every write.
struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is broken"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_propagate() {
    let err = snaplit::to_writer(BrokenSink, &Sample { id: 1 }, &AliasTable::new())
        .expect_err("render should fail fast on a broken sink");
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
