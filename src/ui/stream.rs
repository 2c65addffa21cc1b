//! JSON-lines event stream for external renderers

use std::io::{self, Write};

use crate::sim::GameEvent;

/// Writes each event as one JSON object per line
pub struct EventStream<W: Write> {
    out: W,
    tick: u64,
}

impl<W: Write> EventStream<W> {
    pub fn new(out: W) -> Self {
        Self { out, tick: 0 }
    }

    /// Tick number stamped on subsequent lines
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    pub fn write_events(&mut self, events: &[GameEvent]) -> io::Result<()> {
        for event in events {
            let line = serde_json::json!({ "tick": self.tick, "payload": event });
            serde_json::to_writer(&mut self.out, &line)?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ButtonId;

    #[test]
    fn test_one_line_per_event() {
        let mut stream = EventStream::new(Vec::new());
        stream.set_tick(12);
        stream
            .write_events(&[
                GameEvent::ButtonPressed {
                    button: ButtonId::Bake,
                },
                GameEvent::PlatesCleared,
            ])
            .unwrap();
        let text = String::from_utf8(stream.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["tick"], 12);
        assert_eq!(first["payload"]["event"], "button_pressed");
        assert_eq!(first["payload"]["button"], "Bake");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["payload"]["event"], "plates_cleared");
    }
}
