use alloc::sync::Arc;
use alloc::vec::Vec;

use virtual_grid::{
    Cell, ConfigError, Geometry, GridOptions, HeightConstraint, OptionsChange, Overflow, Point,
    Size, StackOptions, SyncMode, ViewportState, VirtualGrid, VisibleWindow, WindowDiff,
};

use crate::{
    Diagnostic, DiagnosticLatch, ElementId, Generation, GeometryProber, Job, Measurement,
    Scheduler, Trigger, ViewportEvent, ViewportHost,
};

/// Receives measurement diagnostics.
pub type DiagnosticFn = Arc<dyn Fn(&Diagnostic) + Send + Sync>;

/// The committed result of one recomputation.
///
/// A frame is replaced as a whole on commit; hosts never observe a half-updated window.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T> {
    pub generation: Generation,
    pub viewport: ViewportState,
    pub geometry: Geometry,
    pub window: VisibleWindow,
    pub overflow: Overflow,
    pub content_size: Size,
    /// Apply this to the scroll element when printed row counts are configured.
    pub height_constraint: HeightConstraint,
    /// Mounted cells in ascending index order.
    pub cells: Vec<Cell<T>>,
    /// How `cells` differs from the previous frame.
    pub diff: WindowDiff,
}

impl<T> Default for Frame<T> {
    fn default() -> Self {
        Self {
            generation: Generation::default(),
            viewport: ViewportState::default(),
            geometry: Geometry::default(),
            window: VisibleWindow::EMPTY,
            overflow: Overflow::default(),
            content_size: Size::ZERO,
            height_constraint: HeightConstraint::default(),
            cells: Vec::new(),
            diff: WindowDiff::default(),
        }
    }
}

/// Measurements taken for a job, waiting to be committed.
///
/// Produced by [`Controller::prepare`]. Committing it after a newer request was made yields
/// [`CommitOutcome::Superseded`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreparedFrame {
    job: Job,
    measurement: Measurement,
    scroll: Point,
}

impl PreparedFrame {
    pub fn job(&self) -> Job {
        self.job
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(WindowDiff),
    /// A newer request was made after this one was prepared; nothing changed.
    Superseded,
    /// No host is mounted; nothing changed.
    Detached,
}

/// Keeps a [`VirtualGrid`] in sync with a scrollable host element.
///
/// The controller does not hold any UI objects of its own. Adapters drive it by:
/// - calling `mount` with a [`ViewportHost`] once the element exists
/// - forwarding scroll/resize notifications to `handle_event`
/// - in [`SyncMode::Deferred`], calling `tick` from an idle or frame callback (or splitting the
///   work with `prepare`/`commit`)
/// - mounting the cells of [`Controller::frame`]
///
/// In [`SyncMode::Immediate`] every event recomputes synchronously.
pub struct Controller<H, T> {
    grid: VirtualGrid<T>,
    host: Option<H>,
    scheduler: Scheduler,
    frame: Frame<T>,
    latch: DiagnosticLatch,
    on_diagnostic: Option<DiagnosticFn>,
}

impl<H: ViewportHost, T> Controller<H, T> {
    pub fn new(options: GridOptions<T>) -> Result<Self, ConfigError> {
        Ok(Self::from_grid(VirtualGrid::new(options)?))
    }

    pub fn new_stack(options: StackOptions<T>) -> Result<Self, ConfigError> {
        Self::new(options.into_grid_options())
    }

    pub fn from_grid(grid: VirtualGrid<T>) -> Self {
        Self {
            grid,
            host: None,
            scheduler: Scheduler::new(),
            frame: Frame::default(),
            latch: DiagnosticLatch::default(),
            on_diagnostic: None,
        }
    }

    /// Registers a callback for measurement diagnostics (in addition to the `tracing` warning).
    pub fn with_on_diagnostic(mut self, f: impl Fn(&Diagnostic) + Send + Sync + 'static) -> Self {
        self.on_diagnostic = Some(Arc::new(f));
        self
    }

    pub fn grid(&self) -> &VirtualGrid<T> {
        &self.grid
    }

    pub fn options(&self) -> &GridOptions<T> {
        self.grid.options()
    }

    pub fn frame(&self) -> &Frame<T> {
        &self.frame
    }

    pub fn cells(&self) -> &[Cell<T>] {
        &self.frame.cells
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Whether the zero-sized viewport diagnostic already fired since the last mount.
    pub fn diagnostic_reported(&self) -> bool {
        self.latch.has_fired()
    }

    /// Attaches to `host` and recomputes right away, whatever the mode.
    ///
    /// If another host was mounted it is detached first and returned.
    pub fn mount(&mut self, mut host: H) -> Option<H> {
        let previous = self.detach();
        host.attach_listeners();
        adapter_debug!(element = host.element_id().0, "Controller::mount");
        self.host = Some(host);
        let job = self.scheduler.issue(Trigger::Mount);
        self.run(job);
        previous
    }

    /// Moves to a new scroll element, keeping the current frame until the new one is measured.
    ///
    /// Returns the detached host.
    pub fn replace_host(&mut self, host: H) -> Option<H> {
        self.mount(host)
    }

    /// Detaches listeners, drops pending work and clears the frame.
    pub fn unmount(&mut self) -> Option<H> {
        let host = self.detach();
        self.frame = Frame::default();
        self.latch.reset();
        host
    }

    /// Dispatches a host notification.
    ///
    /// Returns `false` when the event was ignored: nothing is mounted, or `element` is not the
    /// mounted element (a late event from a detached one).
    pub fn handle_event(&mut self, element: ElementId, event: ViewportEvent) -> bool {
        let Some(host) = self.host.as_ref() else {
            adapter_trace!(element = element.0, ?event, "Controller: event after unmount");
            return false;
        };
        if host.element_id() != element {
            adapter_trace!(element = element.0, ?event, "Controller: event from stale element");
            return false;
        }
        match event {
            ViewportEvent::Scroll => self.request(Trigger::Scroll),
            ViewportEvent::Resize => self.request(Trigger::Resize),
        }
        true
    }

    /// Replaces the options.
    ///
    /// A new collection (size, column count or render function) resets the host scroll offset,
    /// cancels pending work and recomputes immediately. Any other change re-measures following
    /// the mode. On error nothing changes.
    pub fn set_options(&mut self, options: GridOptions<T>) -> Result<OptionsChange, ConfigError> {
        let change = self.grid.set_options(options)?;
        match change {
            OptionsChange::Collection => {
                self.scheduler.cancel();
                self.frame.cells.clear();
                if let Some(host) = self.host.as_mut() {
                    host.set_scroll_offset(Point::ZERO);
                    let job = self.scheduler.issue(Trigger::Options);
                    self.run(job);
                }
            }
            OptionsChange::Layout => self.request(Trigger::Options),
        }
        Ok(change)
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut GridOptions<T>),
    ) -> Result<OptionsChange, ConfigError> {
        let mut next = self.grid.options().clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Runs the pending deferred recomputation, if any.
    pub fn tick(&mut self) -> Option<CommitOutcome> {
        let job = self.scheduler.take()?;
        let prepared = self.prepare_job(job)?;
        Some(self.commit(prepared))
    }

    /// Takes the pending job and measures the host for it, without committing.
    ///
    /// Hosts that read layout and write the DOM in separate phases call this in the read phase
    /// and [`Controller::commit`] in the write phase.
    pub fn prepare(&mut self) -> Option<PreparedFrame> {
        let job = self.scheduler.take()?;
        self.prepare_job(job)
    }

    /// Computes the window for `prepared` and swaps in the new frame.
    pub fn commit(&mut self, prepared: PreparedFrame) -> CommitOutcome {
        if self.host.is_none() {
            return CommitOutcome::Detached;
        }
        if !self.scheduler.is_current(prepared.job.generation) {
            adapter_trace!(
                generation = prepared.job.generation.0,
                latest = self.scheduler.latest().0,
                "Controller: dropped superseded frame"
            );
            return CommitOutcome::Superseded;
        }

        let measurement = prepared.measurement;
        self.report(&measurement);
        self.grid.set_geometry(measurement.geometry);
        self.grid
            .set_viewport(ViewportState::new(prepared.scroll, measurement.viewport));

        let window = self.grid.window();
        let previous = core::mem::take(&mut self.frame.cells);
        let (cells, diff) = self.grid.materializer().reconcile(previous, &window);

        adapter_trace!(
            generation = prepared.job.generation.0,
            trigger = ?prepared.job.trigger,
            rows = ?window.rows,
            columns = ?window.columns,
            added = diff.added,
            removed = diff.removed,
            "Controller::commit"
        );

        self.frame = Frame {
            generation: prepared.job.generation,
            viewport: self.grid.viewport(),
            geometry: self.grid.geometry(),
            window,
            overflow: self.grid.overflow(),
            content_size: self.grid.content_size(),
            height_constraint: self.grid.height_constraint(),
            cells,
            diff,
        };
        CommitOutcome::Committed(diff)
    }

    fn request(&mut self, trigger: Trigger) {
        if self.host.is_none() {
            return;
        }
        match self.grid.options().mode {
            SyncMode::Immediate => {
                let job = self.scheduler.issue(trigger);
                self.run(job);
            }
            SyncMode::Deferred => {
                self.scheduler.schedule(trigger);
            }
        }
    }

    fn run(&mut self, job: Job) {
        if let Some(prepared) = self.prepare_job(job) {
            self.commit(prepared);
        }
    }

    fn prepare_job(&self, job: Job) -> Option<PreparedFrame> {
        let host = self.host.as_ref()?;
        let measurement = GeometryProber::new(self.grid.options()).probe(host);
        Some(PreparedFrame {
            job,
            measurement,
            scroll: host.scroll_offset(),
        })
    }

    fn report(&mut self, measurement: &Measurement) {
        if !measurement.is_degenerate() || self.grid.options().suppress_diagnostics {
            return;
        }
        if !self.latch.fire() {
            return;
        }
        let diagnostic = Diagnostic::ZeroSizedViewport {
            width: measurement.viewport.width,
            height: measurement.viewport.height,
        };
        adapter_warn!(%diagnostic, "Controller: degenerate viewport");
        if let Some(f) = &self.on_diagnostic {
            f(&diagnostic);
        }
    }

    fn detach(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        self.scheduler.cancel();
        host.detach_listeners();
        adapter_debug!(element = host.element_id().0, "Controller: detached");
        Some(host)
    }
}

impl<H: core::fmt::Debug, T> core::fmt::Debug for Controller<H, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("host", &self.host)
            .field("scheduler", &self.scheduler)
            .field("viewport", &self.frame.viewport)
            .field("window", &self.frame.window)
            .field("cells", &self.frame.cells.len())
            .field("latch", &self.latch)
            .finish_non_exhaustive()
    }
}
