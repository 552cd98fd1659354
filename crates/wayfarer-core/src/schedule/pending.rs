use crate::error::{Result, WayfarerError};

use super::model::DayPlan;

/// Tracks the one uncommitted day created when an add-trip form opens.
///
/// Opening the form for a brand-new day first appends that day to the plan
/// so the form has a date to target. If the user saves a trip the day is
/// kept (`commit`); if the form is dismissed the day must disappear again
/// (`rollback`). At most one day is ever pending.
///
/// Rollback recomputes from the pending day number rather than restoring a
/// snapshot: everything from that day onward is discarded, so days added
/// independently during the pending window are discarded too. The UI warns
/// about exactly this ("cancelling will remove Day N").
#[derive(Debug, Default)]
pub struct PendingDayGuard {
    pending: Option<u32>,
}

impl PendingDayGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently pending day number, if any.
    pub fn pending_day(&self) -> Option<u32> {
        self.pending
    }

    /// Marks a freshly added day as pending.
    ///
    /// The caller has just called [`DayPlan::add_day`] and is about to show
    /// the creation form for that day.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if another day is already pending.
    pub fn begin(&mut self, day_number: u32) -> Result<()> {
        if let Some(existing) = self.pending {
            return Err(WayfarerError::invalid_operation(format!(
                "day {} is already pending",
                existing
            )));
        }
        self.pending = Some(day_number);
        Ok(())
    }

    /// Clears the guard without touching the plan.
    ///
    /// Called when the form's save succeeds. Returns the day that was
    /// pending, if any.
    pub fn commit(&mut self) -> Option<u32> {
        self.pending.take()
    }

    /// Undoes the pending day, truncating the plan to at most `pending - 1`
    /// days.
    ///
    /// A no-op returning `Ok(None)` when nothing is pending (the form was
    /// opened for an existing day). The guard is cleared even if the
    /// truncation fails.
    ///
    /// # Returns
    ///
    /// The rolled-back day number, or `None` if nothing was pending.
    pub fn rollback(&mut self, plan: &mut DayPlan) -> Result<Option<u32>> {
        match self.pending.take() {
            Some(day_number) => {
                plan.discard_from(day_number)?;
                Ok(Some(day_number))
            }
            None => Ok(None),
        }
    }
}
