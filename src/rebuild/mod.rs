use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use anyhow::Context;
use parking_lot::{Condvar, Mutex};

use crate::{params::WeaveParameters, strand::Strand, weave::generate_weave};

/// Result of one background build, tagged with the generation of its request
#[derive(Debug)]
pub struct BuildOutput {
    pub generation: u64,
    pub result: anyhow::Result<Vec<Strand>>,
}

type BuildFn = dyn Fn(&WeaveParameters) -> anyhow::Result<Vec<Strand>> + Send + Sync;

#[derive(Default)]
struct State {
    pending: Option<(u64, WeaveParameters)>,
    latest: u64,
    output: Option<BuildOutput>,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    state: Mutex<State>,
    request_ready: Condvar,
    output_ready: Condvar,
}

/// Rebuilds weaves on a background thread, newest request first.
///
/// There is a single pending slot: submitting replaces any request that has not
/// started yet. A build that finishes after a newer request was submitted is discarded,
/// so callers only ever observe the output of their latest parameters.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use loomwork::prelude::*;
///
/// let worker = RebuildWorker::spawn().unwrap();
/// let generation = worker.submit(
///     WeaveParameters::default().with_thread_counts(2, 2).with_resolution(8),
/// );
/// let output = worker.wait_for(generation, Duration::from_secs(30)).unwrap();
/// assert_eq!(output.generation, generation);
/// assert_eq!(output.result.unwrap().len(), 4);
/// ```
pub struct RebuildWorker {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl RebuildWorker {
    /// Spawn a worker running [`generate_weave`]
    pub fn spawn() -> anyhow::Result<Self> {
        Self::with_builder(generate_weave)
    }

    /// Spawn a worker running a custom build function
    /// # Failures
    /// - if the thread cannot be spawned
    pub fn with_builder<F>(build: F) -> anyhow::Result<Self>
    where
        F: Fn(&WeaveParameters) -> anyhow::Result<Vec<Strand>> + Send + Sync + 'static,
    {
        let shared = Arc::new(Shared::default());
        let build: Box<BuildFn> = Box::new(build);
        let handle = thread::Builder::new()
            .name("weave-rebuild".into())
            .spawn({
                let shared = Arc::clone(&shared);
                move || run(&shared, build.as_ref())
            })
            .context("Failed to spawn rebuild thread")?;

        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    /// Queue a rebuild, replacing any request that has not started, and return its generation
    pub fn submit(&self, params: WeaveParameters) -> u64 {
        let mut state = self.shared.state.lock();
        state.latest += 1;
        let generation = state.latest;
        if let Some((replaced, _)) = state.pending.replace((generation, params)) {
            log::trace!("rebuild request {} superseded by {}", replaced, generation);
        }
        self.shared.request_ready.notify_one();
        generation
    }

    /// Generation of the newest submitted request, 0 before the first submission
    pub fn latest_generation(&self) -> u64 {
        self.shared.state.lock().latest
    }

    /// Take the finished output if there is one
    pub fn try_take(&self) -> Option<BuildOutput> {
        self.shared.state.lock().output.take()
    }

    /// Wait until a build of `generation` or newer has finished and take it.
    /// Returns `None` on timeout.
    pub fn wait_for(&self, generation: u64, timeout: Duration) -> Option<BuildOutput> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        loop {
            if state
                .output
                .as_ref()
                .is_some_and(|output| output.generation >= generation)
            {
                return state.output.take();
            }
            if self
                .shared
                .output_ready
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                let ready = state
                    .output
                    .as_ref()
                    .is_some_and(|output| output.generation >= generation);
                return if ready { state.output.take() } else { None };
            }
        }
    }
}

impl Drop for RebuildWorker {
    fn drop(&mut self) {
        self.shared.state.lock().shutdown = true;
        self.shared.request_ready.notify_all();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("rebuild thread panicked");
            }
        }
    }
}

fn run(shared: &Shared, build: &BuildFn) {
    log::debug!("rebuild worker started");
    loop {
        let (generation, params) = {
            let mut state = shared.state.lock();
            loop {
                if state.shutdown {
                    log::debug!("rebuild worker shutting down");
                    return;
                }
                if let Some(request) = state.pending.take() {
                    break request;
                }
                shared.request_ready.wait(&mut state);
            }
        };

        let result = build(&params);

        let mut state = shared.state.lock();
        if generation < state.latest {
            log::debug!(
                "discarding stale build {} (latest {})",
                generation,
                state.latest
            );
            continue;
        }
        state.output = Some(BuildOutput { generation, result });
        shared.output_ready.notify_all();
    }
}
