//! In-memory client with scripted fault injection
//!
//! Backs the probe's tests and benches. The table is a `BTreeMap` behind a
//! mutex; transactions buffer their writes and apply them atomically on
//! commit, so the all-or-nothing contract matches a real engine. A
//! `FaultPlan` fails chosen calls by ordinal (the Nth begin, the Nth
//! in-transaction statement, ...) to exercise every failure path the
//! driver has.
//!
//! Only the probe's own statements are understood; anything else is
//! rejected, which keeps this from growing into an accidental SQL engine.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;

use volley_core::{sql, Error, Result, Row, Rows, SqlClient, SqlTransaction, SqlValue, TxnMode};

/// Scripted failures, keyed by 1-indexed call ordinal.
#[derive(Debug, Clone, Default)]
pub struct FaultPlan {
    fail_begin: HashSet<u64>,
    fail_execute: HashSet<u64>,
    fail_txn_statement: HashSet<u64>,
    fail_commit: HashSet<u64>,
    fail_rollback: HashSet<u64>,
}

impl FaultPlan {
    /// A plan with no failures.
    pub fn none() -> Self {
        FaultPlan::default()
    }

    /// Fail the nth `begin` call.
    pub fn fail_nth_begin(mut self, ordinal: u64) -> Self {
        self.fail_begin.insert(ordinal);
        self
    }

    /// Fail the nth autocommit statement.
    pub fn fail_nth_execute(mut self, ordinal: u64) -> Self {
        self.fail_execute.insert(ordinal);
        self
    }

    /// Fail the nth in-transaction statement.
    pub fn fail_nth_txn_statement(mut self, ordinal: u64) -> Self {
        self.fail_txn_statement.insert(ordinal);
        self
    }

    /// Fail the nth commit.
    pub fn fail_nth_commit(mut self, ordinal: u64) -> Self {
        self.fail_commit.insert(ordinal);
        self
    }

    /// Fail the nth rollback.
    pub fn fail_nth_rollback(mut self, ordinal: u64) -> Self {
        self.fail_rollback.insert(ordinal);
        self
    }
}

#[derive(Debug, Default)]
struct Counters {
    begins: u64,
    executes: u64,
    txn_statements: u64,
    commits: u64,
    rollbacks: u64,
    closes: u64,
}

#[derive(Debug)]
struct Shared {
    table: Option<BTreeMap<String, i64>>,
    plan: FaultPlan,
    counters: Counters,
    closed: bool,
}

impl Shared {
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::AlreadyClosed);
        }
        Ok(())
    }

    fn table_ref(&self) -> Result<&BTreeMap<String, i64>> {
        self.table.as_ref().ok_or_else(no_such_table)
    }

    fn table_mut(&mut self) -> Result<&mut BTreeMap<String, i64>> {
        self.table.as_mut().ok_or_else(no_such_table)
    }

    /// Execute one of the probe's statements. `overlay` is the pending
    /// write buffer of an open transaction; reads see it first and writes
    /// land in it instead of the table.
    fn dispatch(
        &mut self,
        sql_text: &str,
        params: &[SqlValue],
        overlay: Option<&mut BTreeMap<String, i64>>,
    ) -> Result<Rows> {
        if sql_text == sql::CREATE_TABLE {
            if self.table.is_none() {
                self.table = Some(BTreeMap::new());
            }
            Ok(Rows::empty())
        } else if sql_text == sql::CLEAR {
            self.table_mut()?.clear();
            Ok(Rows::empty())
        } else if sql_text == sql::INSERT {
            let id = text_param(params, 0)?;
            let value = integer_param(params, 1)?;
            let table = self.table_mut()?;
            if table.contains_key(&id) {
                return Err(Error::Statement(format!(
                    "UNIQUE constraint failed: items_minimal.id ({id})"
                )));
            }
            table.insert(id, value);
            Ok(Rows::empty())
        } else if sql_text == sql::SELECT_VALUE {
            let id = text_param(params, 0)?;
            let buffered = overlay.as_deref().and_then(|o| o.get(&id)).copied();
            let found = match buffered {
                Some(value) => Some(value),
                None => self.table_ref()?.get(&id).copied(),
            };
            Ok(match found {
                Some(value) => Rows::new(vec![Row::new(vec![SqlValue::Integer(value)])]),
                None => Rows::empty(),
            })
        } else if sql_text == sql::UPDATE_VALUE {
            let value = integer_param(params, 0)?;
            let id = text_param(params, 1)?;
            let in_overlay = overlay.as_ref().is_some_and(|o| o.contains_key(&id));
            let exists = in_overlay || self.table_ref()?.contains_key(&id);
            if exists {
                match overlay {
                    Some(buffer) => {
                        buffer.insert(id, value);
                    }
                    None => {
                        self.table_mut()?.insert(id, value);
                    }
                }
            }
            Ok(Rows::empty())
        } else {
            Err(Error::Statement(format!("unsupported statement: {sql_text}")))
        }
    }
}

fn no_such_table() -> Error {
    Error::Statement("no such table: items_minimal".to_string())
}

fn text_param(params: &[SqlValue], index: usize) -> Result<String> {
    params
        .get(index)
        .and_then(SqlValue::as_text)
        .map(str::to_owned)
        .ok_or_else(|| Error::Statement(format!("expected text parameter at index {index}")))
}

fn integer_param(params: &[SqlValue], index: usize) -> Result<i64> {
    params
        .get(index)
        .and_then(SqlValue::as_integer)
        .ok_or_else(|| Error::Statement(format!("expected integer parameter at index {index}")))
}

/// In-memory collaborator for tests and benches.
pub struct MemoryClient {
    shared: Arc<Mutex<Shared>>,
}

impl MemoryClient {
    /// Client with no scripted failures.
    pub fn new() -> Self {
        MemoryClient::with_faults(FaultPlan::none())
    }

    /// Client that fails calls per `plan`.
    pub fn with_faults(plan: FaultPlan) -> Self {
        MemoryClient {
            shared: Arc::new(Mutex::new(Shared {
                table: None,
                plan,
                counters: Counters::default(),
                closed: false,
            })),
        }
    }

    /// Inspection handle that stays valid after the client is closed.
    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for MemoryClient {
    fn default() -> Self {
        MemoryClient::new()
    }
}

impl SqlClient for MemoryClient {
    type Txn<'c> = MemoryTransaction<'c>;

    fn execute(&self, sql_text: &str, params: &[SqlValue]) -> Result<Rows> {
        let mut shared = self.shared.lock();
        shared.ensure_open()?;
        shared.counters.executes += 1;
        if shared.plan.fail_execute.contains(&shared.counters.executes) {
            return Err(Error::Statement("injected statement fault".to_string()));
        }
        shared.dispatch(sql_text, params, None)
    }

    fn begin(&mut self, _mode: TxnMode) -> Result<MemoryTransaction<'_>> {
        let mut shared = self.shared.lock();
        shared.ensure_open()?;
        shared.counters.begins += 1;
        if shared.plan.fail_begin.contains(&shared.counters.begins) {
            return Err(Error::Begin("injected begin fault".to_string()));
        }
        drop(shared);
        Ok(MemoryTransaction {
            shared: &self.shared,
            pending: BTreeMap::new(),
        })
    }

    fn close(self) -> Result<()> {
        let mut shared = self.shared.lock();
        if shared.closed {
            return Err(Error::AlreadyClosed);
        }
        shared.closed = true;
        shared.counters.closes += 1;
        Ok(())
    }
}

/// A buffered transaction over the in-memory table.
pub struct MemoryTransaction<'c> {
    shared: &'c Arc<Mutex<Shared>>,
    pending: BTreeMap<String, i64>,
}

impl SqlTransaction for MemoryTransaction<'_> {
    fn execute(&mut self, sql_text: &str, params: &[SqlValue]) -> Result<Rows> {
        let mut shared = self.shared.lock();
        shared.counters.txn_statements += 1;
        if shared
            .plan
            .fail_txn_statement
            .contains(&shared.counters.txn_statements)
        {
            return Err(Error::Statement(
                "injected transaction statement fault".to_string(),
            ));
        }
        shared.dispatch(sql_text, params, Some(&mut self.pending))
    }

    fn commit(self) -> Result<()> {
        let mut shared = self.shared.lock();
        shared.counters.commits += 1;
        if shared.plan.fail_commit.contains(&shared.counters.commits) {
            return Err(Error::Commit("injected commit fault".to_string()));
        }
        if !self.pending.is_empty() {
            let table = shared.table_mut()?;
            for (id, value) in &self.pending {
                table.insert(id.clone(), *value);
            }
        }
        Ok(())
    }

    fn rollback(self) -> Result<()> {
        let mut shared = self.shared.lock();
        shared.counters.rollbacks += 1;
        if shared.plan.fail_rollback.contains(&shared.counters.rollbacks) {
            return Err(Error::Rollback("injected rollback fault".to_string()));
        }
        Ok(())
    }
}

/// Read-only view of the table and call counters, usable after close.
pub struct MemoryHandle {
    shared: Arc<Mutex<Shared>>,
}

impl MemoryHandle {
    /// Counter value for `id`, or None if the row does not exist.
    pub fn value(&self, id: &str) -> Option<i64> {
        self.shared
            .lock()
            .table
            .as_ref()
            .and_then(|t| t.get(id))
            .copied()
    }

    /// Number of rows in the table (0 when the table was never created).
    pub fn row_count(&self) -> usize {
        self.shared.lock().table.as_ref().map_or(0, BTreeMap::len)
    }

    /// True once `CREATE TABLE` has run.
    pub fn has_table(&self) -> bool {
        self.shared.lock().table.is_some()
    }

    /// Number of `begin` calls observed.
    pub fn begins(&self) -> u64 {
        self.shared.lock().counters.begins
    }

    /// Number of commit attempts observed.
    pub fn commits(&self) -> u64 {
        self.shared.lock().counters.commits
    }

    /// Number of rollback attempts observed.
    pub fn rollbacks(&self) -> u64 {
        self.shared.lock().counters.rollbacks
    }

    /// Number of successful closes observed.
    pub fn closes(&self) -> u64 {
        self.shared.lock().counters.closes
    }
}
