use crate::foundation::core::ElementId;
use crate::foundation::error::RevealResult;
use crate::style::batch::{PassInfo, StyleBatch, StyleValue, StyleWrite};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// Consumer of style batches.
///
/// Ordering contract: `apply` is called once per pass, in increasing `PassInfo::index` order, and
/// every write of a batch must become visible together.
pub trait StyleSink {
    /// Apply one pass worth of writes.
    fn apply(&mut self, pass: &PassInfo, batch: &StyleBatch) -> RevealResult<()>;
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn apply(&mut self, pass: &PassInfo, batch: &StyleBatch) -> RevealResult<()> {
        (**self).apply(pass, batch)
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    passes: Vec<(PassInfo, StyleBatch)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured passes in application order.
    pub fn passes(&self) -> &[(PassInfo, StyleBatch)] {
        &self.passes
    }

    /// The most recent pass, if any.
    pub fn last(&self) -> Option<&(PassInfo, StyleBatch)> {
        self.passes.last()
    }
}

impl StyleSink for InMemorySink {
    fn apply(&mut self, pass: &PassInfo, batch: &StyleBatch) -> RevealResult<()> {
        self.passes.push((*pass, batch.clone()));
        Ok(())
    }
}

/// Folds writes into the latest value per element and property: the page's current style.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct ComputedStyles {
    properties: BTreeMap<ElementId, BTreeMap<String, StyleValue>>,
    classes: BTreeMap<ElementId, BTreeSet<String>>,
}

impl ComputedStyles {
    /// Empty style table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch in order; later writes win.
    pub fn fold(&mut self, batch: &StyleBatch) {
        for write in batch.writes() {
            match write {
                StyleWrite::Property {
                    target,
                    name,
                    value,
                } => {
                    self.properties
                        .entry(target.clone())
                        .or_default()
                        .insert(name.to_string(), value.clone());
                }
                StyleWrite::Class {
                    target,
                    class,
                    enabled,
                } => {
                    let set = self.classes.entry(target.clone()).or_default();
                    if *enabled {
                        set.insert(class.clone());
                    } else {
                        set.remove(class);
                    }
                }
            }
        }
    }

    /// Current value of `name` on `id`.
    pub fn get(&self, id: &ElementId, name: &str) -> Option<&StyleValue> {
        self.properties.get(id).and_then(|m| m.get(name))
    }

    /// Current numeric value of `name` on `id`.
    pub fn number(&self, id: &ElementId, name: &str) -> Option<f64> {
        self.get(id, name).and_then(StyleValue::as_number)
    }

    /// Current textual value of `name` on `id`.
    pub fn text(&self, id: &ElementId, name: &str) -> Option<&str> {
        self.get(id, name).and_then(StyleValue::as_text)
    }

    /// Whether `id` currently carries `class`.
    pub fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.classes.get(id).is_some_and(|s| s.contains(class))
    }
}

impl StyleSink for ComputedStyles {
    fn apply(&mut self, _pass: &PassInfo, batch: &StyleBatch) -> RevealResult<()> {
        self.fold(batch);
        Ok(())
    }
}

/// Streams one JSON object per pass (`{"pass": .., "writes": [..]}`) to a writer.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    written: u64,
}

#[derive(serde::Serialize)]
struct Line<'a> {
    pass: &'a PassInfo,
    writes: &'a [StyleWrite],
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.written
    }

    /// Flush and return the writer.
    pub fn finish(mut self) -> RevealResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> StyleSink for JsonLinesSink<W> {
    fn apply(&mut self, pass: &PassInfo, batch: &StyleBatch) -> RevealResult<()> {
        let line = Line {
            pass,
            writes: batch.writes(),
        };
        serde_json::to_writer(&mut self.out, &line)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/sink.rs"]
mod tests;
