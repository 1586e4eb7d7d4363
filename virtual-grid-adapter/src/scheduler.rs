/// Monotonic id of a recomputation request. Later requests always compare greater.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

/// Why a recomputation was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    Mount,
    Scroll,
    Resize,
    /// Options were replaced.
    Options,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    pub generation: Generation,
    pub trigger: Trigger,
}

/// A cancellable, coalescing queue of depth 1.
///
/// Scheduling replaces whatever is pending, so a burst of events collapses into a single
/// recomputation for the newest one. Every request (queued or run immediately) advances the
/// latest generation; work carrying an older generation is stale and must not be committed.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    latest: Generation,
    pending: Option<Job>,
    coalesced: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a deferred recomputation, superseding any pending one.
    pub fn schedule(&mut self, trigger: Trigger) -> Generation {
        let job = self.next_job(trigger);
        if self.pending.replace(job).is_some() {
            self.coalesced = self.coalesced.saturating_add(1);
            adapter_trace!(
                next = job.generation.0,
                "Scheduler: coalesced pending recomputation"
            );
        }
        job.generation
    }

    /// Issues a job to run right away. Pending work becomes stale and is dropped.
    pub fn issue(&mut self, trigger: Trigger) -> Job {
        self.pending = None;
        self.next_job(trigger)
    }

    /// Removes the pending job so it can run.
    pub fn take(&mut self) -> Option<Job> {
        self.pending.take()
    }

    /// Drops pending work and invalidates anything already taken.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.latest = Generation(self.latest.0.saturating_add(1));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Job> {
        self.pending
    }

    /// Whether work for `generation` may still be committed.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }

    pub fn latest(&self) -> Generation {
        self.latest
    }

    /// How many queued requests were replaced before they ran.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    fn next_job(&mut self, trigger: Trigger) -> Job {
        self.latest = Generation(self.latest.0.saturating_add(1));
        Job {
            generation: self.latest,
            trigger,
        }
    }
}
