//! The prefix table.

use crate::error::{Error, Result};
use crate::path;
use crate::prefix::PrefixId;

/// Registry mapping each [`PrefixId`] to an absolute virtual-path root.
///
/// Every stored entry is fully expanded and ends with a colon; [`set`]
/// expands its argument against the table before storing it, so entries
/// may be defined in terms of one another.
///
/// [`set`]: PrefixTable::set
///
/// # Examples
///
/// ```
/// use vpath::{PrefixId, PrefixTable};
///
/// let mut table = PrefixTable::new();
/// table.set(PrefixId::CURRENT, ":Work:Projects").unwrap();
/// table.set(PrefixId::new(10).unwrap(), "8:vpath").unwrap();
///
/// assert_eq!(table.get(PrefixId::new(10).unwrap()), Some(":Work:Projects:vpath:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    slots: [Option<String>; PrefixId::COUNT],
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl PrefixTable {
    /// Creates a table with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `id`, if set.
    #[must_use]
    pub fn get(&self, id: PrefixId) -> Option<&str> {
        self.slots[id.index()].as_deref()
    }

    /// Returns the entry for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedPrefix`] when the slot is empty.
    pub fn require(&self, id: PrefixId) -> Result<&str> {
        self.get(id).ok_or_else(|| Error::UnresolvedPrefix {
            prefix: id.token(),
        })
    }

    /// Expands `value` against the current table and stores it in `id`.
    ///
    /// An empty `value` clears the slot.
    ///
    /// # Errors
    ///
    /// Returns whatever expansion of `value` returns; the slot is left
    /// untouched on failure.
    pub fn set(&mut self, id: PrefixId, value: &str) -> Result<()> {
        if value.is_empty() {
            self.clear(id);
            return Ok(());
        }
        let expanded = path::expand(value, self)?;
        log::debug!("prefix {id} set to {expanded:?}");
        self.slots[id.index()] = Some(expanded);
        Ok(())
    }

    /// Empties the slot for `id`.
    pub fn clear(&mut self, id: PrefixId) {
        self.slots[id.index()] = None;
    }

    /// Removes the last directory from the entry for `id`.
    ///
    /// Popping an entry that is already a volume root leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedPrefix`] when the slot is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{PrefixId, PrefixTable};
    ///
    /// let mut table = PrefixTable::new();
    /// table.set(PrefixId::CURRENT, ":boot:a:b:").unwrap();
    /// table.pop(PrefixId::CURRENT).unwrap();
    /// assert_eq!(table.get(PrefixId::CURRENT), Some(":boot:a:"));
    /// ```
    pub fn pop(&mut self, id: PrefixId) -> Result<()> {
        let parent = path::dirname(self.require(id)?).to_string();
        self.slots[id.index()] = Some(parent);
        Ok(())
    }

    /// Iterates over the populated slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (PrefixId, &str)> {
        PrefixId::all().filter_map(move |id| self.get(id).map(|value| (id, value)))
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no slot is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn id(n: u8) -> PrefixId {
        PrefixId::new(n).unwrap()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = PrefixTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(PrefixId::CURRENT), None);
        assert_eq!(
            table.require(PrefixId::PREFS).unwrap_err().kind(),
            ErrorKind::UnresolvedPrefix
        );
    }

    #[test]
    fn test_set_adds_trailing_colon() {
        let mut table = PrefixTable::new();
        table.set(id(10), ":Work:Temp").unwrap();
        assert_eq!(table.get(id(10)), Some(":Work:Temp:"));
    }

    #[test]
    fn test_set_expands_through_own_slot() {
        let mut table = PrefixTable::new();
        table.set(id(10), ":Work:Temp:").unwrap();
        table.set(id(10), "10:foo").unwrap();
        assert_eq!(table.get(id(10)), Some(":Work:Temp:foo:"));
    }

    #[test]
    fn test_set_relative_uses_current() {
        let mut table = PrefixTable::new();
        table.set(PrefixId::CURRENT, ":boot:home:").unwrap();
        table.set(PrefixId::PREFS, "prefs").unwrap();
        assert_eq!(table.get(PrefixId::PREFS), Some(":boot:home:prefs:"));
    }

    #[test]
    fn test_set_failure_leaves_slot() {
        let mut table = PrefixTable::new();
        table.set(id(3), ":keep:").unwrap();
        let err = table.set(id(3), "12:missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnresolvedPrefix);
        assert_eq!(table.get(id(3)), Some(":keep:"));
    }

    #[test]
    fn test_empty_value_clears() {
        let mut table = PrefixTable::new();
        table.set(id(5), ":vol:").unwrap();
        table.set(id(5), "").unwrap();
        assert_eq!(table.get(id(5)), None);
    }

    #[test]
    fn test_pop_clamps_at_volume() {
        let mut table = PrefixTable::new();
        table.set(id(1), ":vol:a:").unwrap();
        table.pop(id(1)).unwrap();
        assert_eq!(table.get(id(1)), Some(":vol:"));
        table.pop(id(1)).unwrap();
        assert_eq!(table.get(id(1)), Some(":vol:"));
        assert!(table.pop(id(2)).is_err());
    }

    #[test]
    fn test_iter_in_slot_order() {
        let mut table = PrefixTable::new();
        table.set(PrefixId::PREFS, ":v:prefs:").unwrap();
        table.set(id(0), ":v:zero:").unwrap();
        table.set(PrefixId::CURRENT, ":v:cwd:").unwrap();

        let ids: Vec<_> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![id(0), PrefixId::CURRENT, PrefixId::PREFS]);
        assert_eq!(table.len(), 3);
    }
}
