//! Folding flattened one-to-many join rows back into parent aggregates.
//!
//! A query such as "golfers LEFT JOIN participation" yields one row per
//! (parent, child) pair, and a single row with null child columns for a parent
//! without children. [`stitch`] walks those rows in order and rebuilds each
//! parent once, appending every non-null child to it.

use std::collections::HashMap;
use std::hash::Hash;

use crate::database::manager::DatabaseError;

/// A row of a flattened parent/child join
pub trait JoinedRow {
    type Key: Eq + Hash + Copy + std::fmt::Debug;
    type Parent;
    type Child;

    /// Primary id of the parent this row belongs to
    fn key(&self) -> Self::Key;

    /// Build the parent (with an empty child collection) from this row
    fn parent(&self) -> Self::Parent;

    /// The child carried by this row, `None` when the child columns are null
    fn child(self) -> Option<Self::Child>;

    fn attach(parent: &mut Self::Parent, child: Self::Child);
}

/// Fold rows into aggregates, in first-seen order of the parent key
pub fn stitch<R, I>(rows: I) -> Vec<R::Parent>
where
    R: JoinedRow,
    I: IntoIterator<Item = R>,
{
    let mut index: HashMap<R::Key, usize> = HashMap::new();
    let mut parents: Vec<R::Parent> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.key()).or_insert_with(|| {
            parents.push(row.parent());
            parents.len() - 1
        });
        if let Some(child) = row.child() {
            R::attach(&mut parents[slot], child);
        }
    }

    parents
}

/// Like [`stitch`] for a query filtered to one parent id
pub fn stitch_one<R, I>(rows: I) -> Result<Option<R::Parent>, DatabaseError>
where
    R: JoinedRow,
    I: IntoIterator<Item = R>,
{
    let mut parents = stitch(rows);
    if parents.len() > 1 {
        return Err(DatabaseError::QueryError(format!(
            "expected at most one aggregate, query returned {}",
            parents.len()
        )));
    }
    Ok(parents.pop())
}
