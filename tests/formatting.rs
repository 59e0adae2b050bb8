use std::io;
use std::sync::{Arc, Mutex};

use pacman_display::formatter::{frame_count, set_frame_count, CustomFormatter};
use speculoos::prelude::*;
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("buffer lock")).into_owned()
    }
}

#[test]
fn test_log_lines_carry_frame_level_and_fields() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = FmtSubscriber::builder()
        .with_ansi(false)
        .event_format(CustomFormatter)
        .with_writer(move || writer.clone())
        .finish();

    set_frame_count(0x1A2B);
    assert_that(&frame_count()).is_equal_to(0x1A2B);

    tracing::subscriber::with_default(subscriber, || {
        let span = tracing::info_span!("frame", level = 3);
        let _guard = span.enter();
        tracing::warn!(delay = 40, "Stepping game");
    });

    let output = buffer.contents();
    let line = output.lines().next().expect("one log line");
    assert_that(&line).contains(" 0x1A2B ");
    assert_that(&line).contains(" WARN ");
    assert_that(&line).contains("frame{level=3}:");
    assert_that(&line).contains("formatting: Stepping game delay=40");

    // Only the low 16 bits are shown
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = FmtSubscriber::builder()
        .with_ansi(false)
        .event_format(CustomFormatter)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        set_frame_count(0x1_0005);
        tracing::info!("wrapped");
    });

    assert_that(&buffer.contents()).contains(" 0x0005 ");
}
