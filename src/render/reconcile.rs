use std::hash::Hash;

use indexmap::IndexMap;

/// One step needed to move a mark layer from its old data set to a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkDiff<K, M> {
    Enter { key: K, mark: M },
    Update { key: K, old: M, new: M },
    Exit { key: K, old: M },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileSummary {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

impl ReconcileSummary {
    #[must_use]
    pub fn from_diffs<K, M>(diffs: &[MarkDiff<K, M>]) -> Self {
        let mut summary = Self::default();
        for diff in diffs {
            match diff {
                MarkDiff::Enter { .. } => summary.entered += 1,
                MarkDiff::Update { .. } => summary.updated += 1,
                MarkDiff::Exit { .. } => summary.exited += 1,
            }
        }
        summary
    }

    #[must_use]
    pub fn is_noop(self) -> bool {
        self.entered == 0 && self.updated == 0 && self.exited == 0
    }
}

/// Persistent keyed mark set.
///
/// [`MarkLayer::reconcile`] retires marks whose key vanished, creates marks
/// for new keys and updates changed marks in place, so re-applying the same
/// data set is a no-op. Iteration follows the order of the latest data set.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkLayer<K: Eq + Hash, M> {
    marks: IndexMap<K, M>,
}

impl<K: Eq + Hash, M> Default for MarkLayer<K, M> {
    fn default() -> Self {
        Self {
            marks: IndexMap::new(),
        }
    }
}

impl<K, M> MarkLayer<K, M>
where
    K: Clone + Eq + Hash,
    M: Clone + PartialEq,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the layer contents with `next`; a repeated key keeps its last mark.
    pub fn reconcile<I>(&mut self, next: I) -> Vec<MarkDiff<K, M>>
    where
        I: IntoIterator<Item = (K, M)>,
    {
        let next: IndexMap<K, M> = next.into_iter().collect();
        let mut diffs = Vec::new();

        for (key, old) in &self.marks {
            if !next.contains_key(key) {
                diffs.push(MarkDiff::Exit {
                    key: key.clone(),
                    old: old.clone(),
                });
            }
        }

        for (key, mark) in &next {
            match self.marks.get(key) {
                None => diffs.push(MarkDiff::Enter {
                    key: key.clone(),
                    mark: mark.clone(),
                }),
                Some(old) if old != mark => diffs.push(MarkDiff::Update {
                    key: key.clone(),
                    old: old.clone(),
                    new: mark.clone(),
                }),
                Some(_) => {}
            }
        }

        self.marks = next;
        diffs
    }

    /// Retires every mark.
    pub fn clear(&mut self) -> Vec<MarkDiff<K, M>> {
        self.reconcile(std::iter::empty())
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&M> {
        self.marks.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &M)> {
        self.marks.iter()
    }

    pub fn marks(&self) -> impl Iterator<Item = &M> {
        self.marks.values()
    }
}
