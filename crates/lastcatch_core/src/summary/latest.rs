use chrono::NaiveDate;

/// Running best of a scan keyed by acquisition date.
///
/// An entry replaces the current best only when its date is strictly later,
/// so among equal dates the first one offered is kept.
#[derive(Debug, Clone)]
pub struct LatestAcquisition<T> {
    best: Option<(NaiveDate, T)>,
}

impl<T> Default for LatestAcquisition<T> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<T> LatestAcquisition<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `item` became the new best.
    pub fn offer(&mut self, date: NaiveDate, item: T) -> bool {
        match &self.best {
            Some((best_date, _)) if date <= *best_date => false,
            _ => {
                self.best = Some((date, item));
                true
            }
        }
    }

    pub fn best(&self) -> Option<(NaiveDate, &T)> {
        self.best.as_ref().map(|(date, item)| (*date, item))
    }

    pub fn into_best(self) -> Option<(NaiveDate, T)> {
        self.best
    }
}
