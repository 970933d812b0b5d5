use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::{BindError, BindResult};
use crate::record::{FieldLocator, Record, RecordType};
use crate::resolve::{FuncResolver, MapResolver, NameResolver, ResolutionCache, Resolver, TagResolver};
use crate::row::{ColumnSpec, RowSource, Value};

use super::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Exhausted,
    Closed,
}

/// Scans the rows of a `RowSource` into caller-owned records.
///
/// A binding owns its source from construction until `close`. Each call to
/// [`scan`](Binding::scan) consumes one row: every column is resolved to a
/// field of the target record (or skipped) and its value is assigned.
/// Assignment and source faults do not interrupt the loop; the first one is
/// kept and returned by [`close`](Binding::close).
///
/// ```ignore
/// let mut binding = Binding::by_tag(rows, "cql");
/// let mut tweet = TaggedTweet::default();
/// while binding.scan(&mut tweet) {
///     println!("{}", tweet.text);
/// }
/// binding.close()?;
/// ```
pub struct Binding<'a> {
    source: Box<dyn RowSource + 'a>,
    resolver: Box<dyn Resolver + 'a>,
    config: Config,
    cache: ResolutionCache,
    // locator per column of the current row, reused across rows
    plan: Vec<Option<FieldLocator>>,
    state: State,
    error: Option<BindError>,
    suppressed: usize,
    rows: u64,
}

impl<'a> Binding<'a> {
    pub fn new(source: impl RowSource + 'a, resolver: impl Resolver + 'a) -> Self {
        debug!("binding opened");
        Binding {
            source: Box::new(source),
            resolver: Box::new(resolver),
            config: Config::default(),
            cache: ResolutionCache::new(),
            plan: Vec::new(),
            state: State::Open,
            error: None,
            suppressed: 0,
            rows: 0,
        }
    }

    /// Binds columns to fields of the same name in Rust field case.
    pub fn by_name(source: impl RowSource + 'a) -> Self {
        Self::new(source, NameResolver::new())
    }

    /// Binds columns through `func`, which returns the locator of the target
    /// field (see [`Record::locate`]) or `None` to skip the column.
    pub fn by_func<F>(source: impl RowSource + 'a, func: F) -> Self
    where
        F: Fn(&str) -> Option<FieldLocator> + 'a,
    {
        Self::new(source, FuncResolver::new(func))
    }

    /// Binds columns through an explicit column name to field name map.
    pub fn by_map<I, K, V>(source: impl RowSource + 'a, mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(source, MapResolver::new(mapping))
    }

    /// Binds columns to the fields labelled with the column name under `key`.
    pub fn by_tag(source: impl RowSource + 'a, key: impl Into<String>) -> Self {
        Self::new(source, TagResolver::new(key))
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Columns of the current row as reported by the source.
    pub fn columns(&self) -> &[ColumnSpec] {
        self.source.columns()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// Number of rows consumed so far.
    pub fn rows_scanned(&self) -> u64 {
        self.rows
    }

    /// Number of errors recorded so far, including those that `close` will
    /// not report because an earlier one was kept.
    pub fn error_count(&self) -> usize {
        self.error.iter().count() + self.suppressed
    }

    /// Scans the next row into `target` and returns whether a row was
    /// produced. Once the source is exhausted every call returns `false`
    /// without touching `target`.
    ///
    /// # Panics
    ///
    /// Panics if the binding has been closed. Use [`try_scan`](Binding::try_scan)
    /// to get an error instead.
    pub fn scan<R: Record>(&mut self, target: &mut R) -> bool {
        match self.try_scan(target) {
            Ok(produced) => produced,
            Err(_) => panic!("Binding::scan called on a closed binding"),
        }
    }

    /// Like [`scan`](Binding::scan), but returns `BindError::Closed` when
    /// called after `close`. No other error is returned from here.
    pub fn try_scan<R: Record>(&mut self, target: &mut R) -> BindResult<bool> {
        match self.state {
            State::Closed => return Err(BindError::Closed),
            State::Exhausted => return Ok(false),
            State::Open => {}
        }

        match self.source.next() {
            Ok(true) => {}
            Ok(false) => {
                debug!(rows = self.rows, "row source exhausted");
                self.state = State::Exhausted;
                return Ok(false);
            }
            Err(err) => {
                self.defer(err);
                self.state = State::Exhausted;
                return Ok(false);
            }
        }

        let record_type = R::record_type();
        self.plan_row(record_type);

        for index in 0..self.plan.len() {
            // unresolved columns are still taken so the row is consumed in full
            let value = match self.source.value(index) {
                Ok(value) => value,
                Err(err) => {
                    self.defer(err);
                    continue;
                }
            };
            let Some(locator) = self.plan[index] else {
                trace!(column = %self.column_label(index), "column skipped");
                continue;
            };
            if let Err(err) = self.assign(target, record_type, index, locator, value) {
                self.defer(err);
            }
        }

        self.rows += 1;
        Ok(true)
    }

    /// Closes the row source and returns the first error recorded while
    /// scanning, if any. Later calls return the same result.
    pub fn close(&mut self) -> BindResult<()> {
        if self.state != State::Closed {
            if let Err(err) = self.source.close() {
                self.defer(err);
            }
            self.state = State::Closed;
            debug!(rows = self.rows, errors = self.error_count(), "binding closed");
        }

        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn plan_row(&mut self, record_type: &RecordType) {
        let Binding {
            source,
            resolver,
            config,
            cache,
            plan,
            ..
        } = self;

        plan.clear();
        for column in source.columns() {
            let locator = if config.cache_resolutions {
                cache.resolve(&**resolver, record_type, column.name())
            } else {
                resolver.resolve(record_type, column.name())
            };
            plan.push(locator);
        }
    }

    fn assign<R: Record>(
        &self,
        target: &mut R,
        record_type: &RecordType,
        index: usize,
        locator: FieldLocator,
        value: Value,
    ) -> BindResult<()> {
        let foreign = || BindError::ForeignField {
            column: self.column_label(index),
            record: record_type.name(),
        };
        let desc = record_type.desc(locator).ok_or_else(foreign)?;
        let slot = target.field_mut(locator.index()).ok_or_else(foreign)?;

        let null_value = || BindError::NullValue {
            column: self.column_label(index),
            field: desc.name().to_string(),
        };

        if value.is_null() && !desc.is_nullable() {
            if self.config.strict_nulls {
                return Err(null_value());
            }
            slot.reset();
            return Ok(());
        }

        slot.assign(value).map_err(|rejected| match rejected.kind() {
            Some(found) => BindError::TypeMismatch {
                column: self.column_label(index),
                field: desc.name().to_string(),
                expected: desc.kind(),
                found,
            },
            None => null_value(),
        })
    }

    fn defer(&mut self, err: BindError) {
        warn!(error = %err, "binding error recorded");
        if self.error.is_none() {
            self.error = Some(err);
        } else {
            self.suppressed += 1;
        }
    }

    fn column_label(&self, index: usize) -> String {
        match self.source.columns().get(index) {
            Some(column) => column.name().to_string(),
            None => format!("#{}", index),
        }
    }
}

impl Drop for Binding<'_> {
    fn drop(&mut self) {
        if self.state == State::Closed {
            return;
        }
        if let Err(err) = self.source.close() {
            self.defer(err);
        }
        if let Some(err) = &self.error {
            warn!(error = %err, "binding dropped without close, error discarded");
        }
    }
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("rows", &self.rows)
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::OnceLock;

    use uuid::Uuid;

    use crate::memory::MemoryRows;
    use crate::record::{Assign, FieldDesc, Record};
    use crate::row::{ColumnSpec, Kind, Value};
    use crate::utils::testing_utils::{TaggedTweet, Tweet, tweet_db, tweet_rows};

    use super::*;

    crate::record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Reading {
            sensor: String,
            value: f64,
            note: Option<String>,
            count: i32,
        }
    }

    fn reading_rows(rows: Vec<Vec<Value>>) -> MemoryRows {
        MemoryRows::new(
            vec![
                ColumnSpec::new("sensor", Kind::Text),
                ColumnSpec::new("value", Kind::Double),
                ColumnSpec::new("note", Kind::Text),
                ColumnSpec::new("count", Kind::Int),
            ],
            rows,
        )
    }

    /// Wraps a source and records how it is driven.
    struct Probe<S> {
        inner: S,
        nexts: Rc<Cell<usize>>,
        closes: Rc<Cell<usize>>,
    }

    impl<S: RowSource> RowSource for Probe<S> {
        fn columns(&self) -> &[ColumnSpec] {
            self.inner.columns()
        }

        fn next(&mut self) -> BindResult<bool> {
            self.nexts.set(self.nexts.get() + 1);
            self.inner.next()
        }

        fn value(&mut self, index: usize) -> BindResult<Value> {
            self.inner.value(index)
        }

        fn close(&mut self) -> BindResult<()> {
            self.closes.set(self.closes.get() + 1);
            self.inner.close()
        }
    }

    fn probe<S>(inner: S) -> (Probe<S>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let nexts = Rc::new(Cell::new(0));
        let closes = Rc::new(Cell::new(0));
        (
            Probe {
                inner,
                nexts: Rc::clone(&nexts),
                closes: Rc::clone(&closes),
            },
            nexts,
            closes,
        )
    }

    #[test]
    fn test_scan_by_name() -> BindResult<()> {
        let mut binding = Binding::by_name(tweet_rows(3));
        let mut tweet = Tweet::default();

        let mut texts = Vec::new();
        while binding.scan(&mut tweet) {
            assert_eq!(tweet.timeline, "me");
            assert!(!tweet.id.is_nil());
            texts.push(tweet.text.clone());
        }

        assert_eq!(texts, vec!["hello world 0", "hello world 1", "hello world 2"]);
        assert_eq!(binding.rows_scanned(), 3);
        binding.close()
    }

    #[test]
    fn test_scan_query_rows() -> BindResult<()> {
        let db = tweet_db(5)?;
        let rows = db.query(
            "SELECT text, id, timeline FROM tweet WHERE timeline = ?",
            &[Value::text("me")],
        )?;
        let mut binding = Binding::by_map(rows, [("timeline", "timeline"), ("text", "text")]);
        let mut tweet = Tweet::default();

        let mut count = 0;
        while binding.scan(&mut tweet) {
            count += 1;
            assert_eq!(tweet.timeline, "me");
            assert!(tweet.id.is_nil());
        }

        assert_eq!(count, 5);
        assert_eq!(tweet.text, "hello world 4");
        binding.close()
    }

    #[test]
    fn test_exhausted_binding_stays_exhausted() -> BindResult<()> {
        let (source, nexts, _) = probe(tweet_rows(2));
        let mut binding = Binding::by_tag(source, "cql");
        let mut tweet = TaggedTweet::default();

        assert!(binding.scan(&mut tweet));
        assert!(binding.scan(&mut tweet));
        let last = tweet.clone();

        assert!(!binding.scan(&mut tweet));
        assert!(binding.is_exhausted());
        assert!(!binding.scan(&mut tweet));
        assert!(!binding.scan(&mut tweet));

        assert_eq!(nexts.get(), 3);
        assert_eq!(tweet, last);
        binding.close()
    }

    #[test]
    fn test_unresolved_column_is_skipped() -> BindResult<()> {
        let rows = MemoryRows::new(
            vec![
                ColumnSpec::new("sensor", Kind::Text),
                ColumnSpec::new("location", Kind::Text),
                ColumnSpec::new("value", Kind::Double),
            ],
            vec![vec![Value::text("t1"), Value::text("roof"), Value::Double(21.5)]],
        );
        let mut binding = Binding::by_name(rows);
        let mut reading = Reading::default();

        assert!(binding.scan(&mut reading));
        assert_eq!(reading.sensor, "t1");
        assert_eq!(reading.value, 21.5);
        assert!(!binding.scan(&mut reading));
        assert_eq!(binding.error_count(), 0);
        binding.close()
    }

    #[test]
    fn test_type_mismatch_is_deferred() {
        let rows = reading_rows(vec![
            vec![Value::text("t1"), Value::text("hot"), Value::Null, Value::Int(2)],
            vec![Value::text("t2"), Value::Double(3.0), Value::text("ok"), Value::BigInt(9)],
        ]);
        let mut binding = Binding::by_name(rows);
        let mut reading = Reading::default();

        assert!(binding.scan(&mut reading));
        // the bad column is left alone, the rest of the row is assigned
        assert_eq!(reading.sensor, "t1");
        assert_eq!(reading.value, 0.0);
        assert_eq!(reading.count, 2);

        assert!(binding.scan(&mut reading));
        assert_eq!(reading.sensor, "t2");
        assert_eq!(reading.note.as_deref(), Some("ok"));
        assert_eq!(reading.count, 2);

        assert!(!binding.scan(&mut reading));
        assert_eq!(binding.error_count(), 2);

        let expected = BindError::TypeMismatch {
            column: "value".to_string(),
            field: "value".to_string(),
            expected: Kind::Double,
            found: Kind::Text,
        };
        assert_eq!(binding.close(), Err(expected.clone()));
        assert_eq!(binding.close(), Err(expected));
    }

    #[test]
    fn test_source_fault_ends_scan() {
        let (source, _, closes) = probe(tweet_rows(5).fail_after(2, "connection reset"));
        let mut binding = Binding::by_name(source);
        let mut tweet = Tweet::default();

        let mut count = 0;
        while binding.scan(&mut tweet) {
            count += 1;
        }

        assert_eq!(count, 2);
        assert_eq!(binding.close(), Err(BindError::Source("connection reset".to_string())));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_null_handling() -> BindResult<()> {
        let rows = || {
            reading_rows(vec![vec![Value::text("t1"), Value::Null, Value::Null, Value::Null]])
        };

        let mut reading = Reading {
            sensor: String::new(),
            value: 1.5,
            note: Some("stale".to_string()),
            count: 7,
        };
        let mut binding = Binding::by_name(rows());
        assert!(binding.scan(&mut reading));
        assert_eq!(reading.value, 0.0);
        assert_eq!(reading.note, None);
        assert_eq!(reading.count, 0);
        binding.close()?;

        let mut reading = Reading {
            count: 7,
            ..Reading::default()
        };
        let mut binding = Binding::by_name(rows()).with_config(Config::new().strict_nulls(true));
        assert!(binding.scan(&mut reading));
        assert_eq!(reading.count, 7);
        assert_eq!(binding.error_count(), 2);
        assert_eq!(
            binding.close(),
            Err(BindError::NullValue {
                column: "value".to_string(),
                field: "value".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn test_func_resolver_rejects_foreign_locator() {
        let rows = reading_rows(vec![vec![
            Value::text("t1"),
            Value::Double(1.0),
            Value::Null,
            Value::Int(1),
        ]]);
        let mut binding = Binding::by_func(rows, |column| match column {
            "sensor" => Reading::locate("sensor"),
            "value" => Tweet::locate("text"),
            _ => None,
        });
        let mut reading = Reading::default();

        assert!(binding.scan(&mut reading));
        assert_eq!(reading.sensor, "t1");
        assert_eq!(reading.value, 0.0);
        assert_eq!(
            binding.close(),
            Err(BindError::ForeignField {
                column: "value".to_string(),
                record: "Reading",
            })
        );
    }

    #[test]
    fn test_func_resolver_across_record_types() -> BindResult<()> {
        let rows = tweet_rows(4);
        let mut binding = Binding::by_func(rows, |column| match column {
            "timeline" => Tweet::locate("timeline"),
            "text" => TaggedTweet::locate("text"),
            _ => None,
        });

        let mut plain = Tweet::default();
        let mut tagged = TaggedTweet::default();

        // each type only gets the columns whose locator belongs to it
        assert!(binding.scan(&mut plain));
        assert!(binding.scan(&mut tagged));
        assert!(binding.scan(&mut plain));

        assert_eq!(plain.timeline, "me");
        assert_eq!(plain.text, "");
        assert_eq!(tagged.text, "hello world 1");
        assert_eq!(tagged.timeline, "");
        assert_eq!(binding.error_count(), 3);
        assert!(binding.close().is_err());
        Ok(())
    }

    #[test]
    fn test_cache_is_transparent() -> BindResult<()> {
        let scan_all = |config: Config| -> BindResult<Vec<TaggedTweet>> {
            let mut binding = Binding::by_tag(tweet_rows(6), "cql").with_config(config);
            let mut tweet = TaggedTweet::default();
            let mut out = Vec::new();
            while binding.scan(&mut tweet) {
                out.push(tweet.clone());
            }
            binding.close()?;
            Ok(out)
        };

        let cached = scan_all(Config::new())?;
        let uncached = scan_all(Config::new().cache_resolutions(false))?;
        assert_eq!(cached.len(), 6);
        assert_eq!(cached.len(), uncached.len());
        for (a, b) in cached.iter().zip(&uncached) {
            assert_eq!(a.text, b.text);
            assert_eq!(a.timeline, b.timeline);
        }
        Ok(())
    }

    #[test]
    fn test_cache_populated_once_per_column() -> BindResult<()> {
        let mut binding = Binding::by_name(tweet_rows(10));
        let mut tweet = Tweet::default();
        while binding.scan(&mut tweet) {}

        assert_eq!(binding.cache.misses(), 3);
        assert_eq!(binding.cache.hits(), 27);
        binding.close()
    }

    #[test]
    fn test_close_mid_iteration() -> BindResult<()> {
        let (source, nexts, closes) = probe(tweet_rows(5));
        let mut binding = Binding::by_name(source);
        let mut tweet = Tweet::default();

        assert!(binding.scan(&mut tweet));
        binding.close()?;
        binding.close()?;

        assert!(binding.is_closed());
        assert_eq!(closes.get(), 1);
        assert_eq!(binding.try_scan(&mut tweet), Err(BindError::Closed));
        assert_eq!(nexts.get(), 1);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "closed binding")]
    fn test_scan_after_close_panics() {
        let mut binding = Binding::by_name(tweet_rows(1));
        let _ = binding.close();
        let mut tweet = Tweet::default();
        binding.scan(&mut tweet);
    }

    #[test]
    fn test_drop_closes_source() {
        let (source, _, closes) = probe(tweet_rows(3));
        {
            let mut binding = Binding::by_name(source);
            let mut tweet = Tweet::default();
            assert!(binding.scan(&mut tweet));
        }
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_value_fault_does_not_abort_row() {
        struct Flaky {
            columns: Vec<ColumnSpec>,
            produced: bool,
        }

        impl RowSource for Flaky {
            fn columns(&self) -> &[ColumnSpec] {
                &self.columns
            }

            fn next(&mut self) -> BindResult<bool> {
                let more = !self.produced;
                self.produced = true;
                Ok(more)
            }

            fn value(&mut self, index: usize) -> BindResult<Value> {
                match index {
                    0 => Err(BindError::Source("cannot decode timeline".to_string())),
                    1 => Ok(Value::Uuid(Uuid::nil())),
                    _ => Ok(Value::text("still here")),
                }
            }

            fn close(&mut self) -> BindResult<()> {
                Ok(())
            }
        }

        let source = Flaky {
            columns: vec![
                ColumnSpec::new("timeline", Kind::Text),
                ColumnSpec::new("id", Kind::Uuid),
                ColumnSpec::new("text", Kind::Text),
            ],
            produced: false,
        };
        let mut binding = Binding::by_name(source);
        let mut tweet = Tweet::default();

        assert!(binding.scan(&mut tweet));
        assert_eq!(tweet.text, "still here");
        assert!(!binding.scan(&mut tweet));
        assert_eq!(
            binding.close(),
            Err(BindError::Source("cannot decode timeline".to_string()))
        );
    }

    /// Source whose column list changes from row to row.
    struct Shifting {
        rows: std::vec::IntoIter<(Vec<ColumnSpec>, Vec<Value>)>,
        columns: Vec<ColumnSpec>,
        values: Vec<Value>,
    }

    impl Shifting {
        fn new(rows: Vec<(Vec<ColumnSpec>, Vec<Value>)>) -> Self {
            Shifting {
                rows: rows.into_iter(),
                columns: Vec::new(),
                values: Vec::new(),
            }
        }
    }

    impl RowSource for Shifting {
        fn columns(&self) -> &[ColumnSpec] {
            &self.columns
        }

        fn next(&mut self) -> BindResult<bool> {
            match self.rows.next() {
                Some((columns, values)) => {
                    self.columns = columns;
                    self.values = values;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        fn value(&mut self, index: usize) -> BindResult<Value> {
            self.values
                .get(index)
                .cloned()
                .ok_or_else(|| BindError::Source(format!("no value at {}", index)))
        }

        fn close(&mut self) -> BindResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_columns_change_between_rows() -> BindResult<()> {
        let sensor = || ColumnSpec::new("sensor", Kind::Text);
        let count = || ColumnSpec::new("count", Kind::Int);
        let source = Shifting::new(vec![
            (vec![sensor()], vec![Value::text("t1")]),
            (vec![count(), sensor()], vec![Value::Int(4), Value::text("t2")]),
            (vec![sensor(), count()], vec![Value::text("t3"), Value::Int(5)]),
            (vec![ColumnSpec::new("value", Kind::Double)], vec![Value::Double(2.5)]),
        ]);
        let mut binding = Binding::by_name(source);
        let mut reading = Reading::default();

        assert!(binding.scan(&mut reading));
        assert_eq!(reading.sensor, "t1");
        assert_eq!(reading.count, 0);

        assert!(binding.scan(&mut reading));
        assert_eq!(binding.columns().len(), 2);
        assert_eq!(reading.sensor, "t2");
        assert_eq!(reading.count, 4);

        // same columns, swapped positions
        assert!(binding.scan(&mut reading));
        assert_eq!(reading.sensor, "t3");
        assert_eq!(reading.count, 5);

        assert!(binding.scan(&mut reading));
        assert_eq!(reading.value, 2.5);
        assert_eq!(reading.sensor, "t3");
        assert!(!binding.scan(&mut reading));

        assert_eq!(binding.cache.misses(), 3);
        assert_eq!(binding.cache.hits(), 3);
        assert_eq!(binding.error_count(), 0);
        binding.close()
    }

    #[derive(Debug, Default)]
    struct Gauge {
        label: String,
        level: i32,
    }

    impl Record for Gauge {
        fn record_type() -> &'static RecordType {
            static RECORD_TYPE: OnceLock<RecordType> = OnceLock::new();
            RECORD_TYPE.get_or_init(|| {
                RecordType::of::<Gauge>("Gauge")
                    .with_field(FieldDesc::of::<String>("label"))
                    .with_field(FieldDesc::of::<i32>("level"))
                    // described, but field_mut has no slot for it
                    .with_field(FieldDesc::new("spare", Kind::Int).nullable(true))
            })
        }

        fn field_mut(&mut self, index: usize) -> Option<&mut dyn Assign> {
            match index {
                0 => Some(&mut self.label),
                1 => Some(&mut self.level),
                _ => None,
            }
        }
    }

    #[test]
    fn test_hand_written_record() {
        assert_eq!(Gauge::record_type().id(), TypeId::of::<Gauge>());
        assert_eq!(Gauge::locate("level").map(|l| l.index()), Some(1));

        let rows = MemoryRows::new(
            vec![
                ColumnSpec::new("label", Kind::Text),
                ColumnSpec::new("level", Kind::Int),
                ColumnSpec::new("spare", Kind::Int),
            ],
            vec![
                vec![Value::text("boiler"), Value::Int(3), Value::Int(9)],
                vec![Value::text("tank"), Value::Int(7), Value::Null],
            ],
        );
        let mut binding = Binding::by_name(rows);
        let mut gauge = Gauge::default();

        assert!(binding.scan(&mut gauge));
        assert_eq!(gauge.label, "boiler");
        assert_eq!(gauge.level, 3);
        assert!(binding.scan(&mut gauge));
        assert_eq!(gauge.label, "tank");
        assert_eq!(gauge.level, 7);
        assert!(!binding.scan(&mut gauge));

        assert_eq!(binding.error_count(), 2);
        assert_eq!(
            binding.close(),
            Err(BindError::ForeignField {
                column: "spare".to_string(),
                record: "Gauge",
            })
        );
    }
}
