//! Per-record lookup tables from external names to field index paths.
//!
//! A table is built once per record type from its declared fields, then
//! cached for the life of the process in a map keyed by `TypeId`. Cached
//! tables are never mutated, so lookups from concurrent decodes only take the
//! read side of the lock.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::debug;

use crate::{FieldDecl, Record};

/// One reachable field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// External name, matched exactly first
    pub name: &'static str,
    /// Lower-cased name, matched when no exact match exists
    pub fold: String,
    /// Declaration indices leading from the record to the field, one per
    /// level of embedding
    pub path: Vec<usize>,
}

impl FieldEntry {
    fn new(name: &'static str, path: Vec<usize>) -> Self {
        Self {
            name,
            fold: fold(name),
            path,
        }
    }

    /// Whether `key` equals this field's name ignoring case.
    pub fn fold_matches(&self, key: &str) -> bool {
        key.chars().flat_map(char::to_lowercase).eq(self.fold.chars())
    }
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// The ordered list of fields a mapping key can resolve to.
#[derive(Debug, Clone, Default)]
pub struct FieldTable {
    entries: Vec<FieldEntry>,
}

impl FieldTable {
    /// Build a table from a record's declared fields.
    ///
    /// Embedded records are expanded breadth-first. A name found at a
    /// shallower depth hides the same name deeper down; two fields sharing a
    /// name at the same depth hide each other. Entries end up ordered by
    /// index path, i.e. in declaration order.
    pub fn build(declared: Vec<FieldDecl>) -> Self {
        let mut entries = Vec::new();
        let mut claimed: HashSet<&'static str> = HashSet::new();
        let mut level: Vec<(Vec<usize>, Vec<FieldDecl>)> = vec![(Vec::new(), declared)];

        while !level.is_empty() {
            let mut next = Vec::new();
            let mut found: IndexMap<&'static str, Vec<Vec<usize>>> = IndexMap::new();

            for (prefix, decls) in level {
                for decl in decls {
                    let mut path = prefix.clone();
                    path.push(decl.index);
                    match decl.embedded {
                        Some(fields) => next.push((path, fields())),
                        None => found.entry(decl.name).or_default().push(path),
                    }
                }
            }

            for (name, mut paths) in found {
                if !claimed.insert(name) {
                    continue;
                }
                match (paths.pop(), paths.is_empty()) {
                    (Some(path), true) => entries.push(FieldEntry::new(name, path)),
                    _ => debug!(name, "ambiguous field name at the same depth, dropped"),
                }
            }

            level = next;
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self { entries }
    }

    /// The cached table for `R`, built on first use.
    pub fn of<R: Record>() -> &'static FieldTable {
        let id = TypeId::of::<R>();
        if let Some(table) = tables().read().get(&id) {
            return *table;
        }

        let built = FieldTable::build(R::declared_fields());
        debug!(
            record = core::any::type_name::<R>(),
            fields = built.len(),
            "built field table"
        );
        let mut tables = tables().write();
        // Another thread may have won the race while we were building.
        *tables
            .entry(id)
            .or_insert_with(|| &*Box::leak(Box::new(built)))
    }

    /// Resolve a mapping key: the first field whose name equals `key` wins;
    /// failing that, the first field whose name equals it ignoring case.
    pub fn lookup(&self, key: &str) -> Option<&FieldEntry> {
        let mut folded = None;
        for entry in &self.entries {
            if entry.name == key {
                return Some(entry);
            }
            if folded.is_none() && entry.fold_matches(key) {
                folded = Some(entry);
            }
        }
        folded
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Number of reachable fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field is reachable.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static TABLES: OnceLock<RwLock<HashMap<TypeId, &'static FieldTable>>> = OnceLock::new();

fn tables() -> &'static RwLock<HashMap<TypeId, &'static FieldTable>> {
    TABLES.get_or_init(|| RwLock::new(HashMap::new()))
}
