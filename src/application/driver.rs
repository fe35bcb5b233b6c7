//! The rebuild loop
//!
//! `DISCOVER -> WAIT_FOR_CHANGE -> BUILD -> PUBLISH -> DISCOVER ...`
//!
//! There is no terminal state and no error state. Every stage reports its
//! failures as events and hands over to the next one; the process runs until
//! it is killed.

use crate::config::Config;
use crate::domain::entities::DependencySet;
use crate::domain::ports::{FileSystem, ProcessRunner};
use crate::error::TexwatchResult;

use super::build::{BuildExecutor, BuildSettings};
use super::layout::ArtifactLayout;
use super::manifest::DependencyDiscoverer;
use super::publish::{ArtifactPublisher, PublishOutcome};
use super::watch::event::display_path;
use super::watch::{Backoff, ChangeDetector, FingerprintStore, LoopEvent, PollReport};

/// Summary of one pass through the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iteration {
    pub watched: DependencySet,
    pub trigger: PollReport,
    pub publish: Option<PublishOutcome>,
}

/// Owns the fingerprint store and the four stages
#[derive(Debug)]
pub struct LoopDriver<F, R> {
    layout: ArtifactLayout,
    store: FingerprintStore,
    discoverer: DependencyDiscoverer<F>,
    detector: ChangeDetector<F>,
    executor: BuildExecutor<F, R>,
    publisher: ArtifactPublisher<F>,
}

impl<F: FileSystem + Clone, R: ProcessRunner> LoopDriver<F, R> {
    pub fn new(
        fs: F,
        runner: R,
        layout: ArtifactLayout,
        settings: &BuildSettings,
        backoff: Backoff,
    ) -> TexwatchResult<Self> {
        Ok(Self {
            store: FingerprintStore::new(),
            discoverer: DependencyDiscoverer::new(fs.clone(), layout.manifest()),
            detector: ChangeDetector::new(fs.clone(), backoff),
            executor: BuildExecutor::new(fs.clone(), runner, &layout, settings)?,
            publisher: ArtifactPublisher::new(fs, &layout),
            layout,
        })
    }

    pub fn from_config(
        fs: F,
        runner: R,
        layout: ArtifactLayout,
        config: &Config,
    ) -> TexwatchResult<Self> {
        let backoff = Backoff::new(config.initial_interval(), config.backoff_step());
        Self::new(fs, runner, layout, &BuildSettings::from_config(config), backoff)
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    pub fn store(&self) -> &FingerprintStore {
        &self.store
    }

    /// Run forever.
    pub fn run(mut self, on_event: impl Fn(LoopEvent)) -> ! {
        on_event(LoopEvent::WatchStarted {
            source: display_path(self.layout.source()),
            output_dir: display_path(self.layout.output_dir()),
        });
        loop {
            self.run_iteration(&on_event);
        }
    }

    /// One full cycle. Blocks until something needs rebuilding.
    pub fn run_iteration(&mut self, on_event: &impl Fn(LoopEvent)) -> Iteration {
        let watched = self.discover(on_event);
        let trigger = self.detector.wait_for_change(
            &mut self.store,
            &watched,
            &self.layout.artifact(),
            on_event,
        );
        self.executor.build(on_event);
        let publish = self.publisher.publish_reporting(on_event);

        Iteration {
            watched,
            trigger,
            publish,
        }
    }

    fn discover(&self, on_event: &impl Fn(LoopEvent)) -> DependencySet {
        let watched = self
            .discoverer
            .discover(on_event)
            .or_primary(self.layout.source());
        on_event(LoopEvent::DependenciesResolved {
            count: watched.len(),
        });
        watched
    }
}
