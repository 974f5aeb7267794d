use std::collections::VecDeque;

use optima_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub objective: f64,
}

/// Records the objective of every iteration.
///
/// Pass `&mut history` as the observer so the records stay readable after
/// the solver returns.
///
/// ```
/// use optima_core::Config;
/// use optima_observers::History;
/// use optima_solvers::nelder_mead::{self, Params};
///
/// let bowl = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
/// let mut history = History::new();
///
/// nelder_mead::minimize(&bowl, &[1.0, 1.0], &Params::default(), &Config::default(), &mut history)
///     .unwrap();
///
/// assert!(history.is_monotone());
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: VecDeque<Record>,
    limit: Option<usize>,
}

impl History {
    /// Creates an empty, unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps only the most recent `limit` records.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &VecDeque<Record> {
        &self.records
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.back()
    }

    /// Returns the objectives in iteration order.
    pub fn objectives(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.objective)
    }

    /// Returns true if no recorded objective is higher than the one before it.
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        self.records
            .iter()
            .zip(self.records.iter().skip(1))
            .all(|(prev, next)| next.objective <= prev.objective)
    }

    /// Discards every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn push(&mut self, record: Record) {
        if self.limit == Some(0) {
            return;
        }
        if self.limit.is_some_and(|limit| self.records.len() >= limit) {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.push(Record {
            iter: event.iteration(),
            objective: event.objective(),
        });
        None
    }
}
