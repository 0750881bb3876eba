//! Build Use Case
//!
//! Orchestrates a compose build:
//! 1. Lock the output directory
//! 2. Enumerate the selected packages (name order)
//! 3. Detect each package's layout and report the decision
//! 4. Merge all content roots into the output (staged or in place)
//! 5. Fingerprint the resulting tree
//!
//! Any failure aborts the whole build; there is no partial success.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{Package, PackageSelections};
use crate::domain::ports::{BuildEvent, BuildEventSink, NoopEventSink};
use crate::domain::services::{
    merge, resolve_content_root, MergeError, MergeReport, MergeSource, PackageEnumerator,
    ResolveError,
};
use crate::infrastructure::fs::{digest_tree, BuildLock, StagedDir};

use super::options::{BuildOptions, StalePolicy};
use super::result::{BuildResult, PackageDecision};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("failed to lock {path}")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stage output for {path}")]
    Stage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to fingerprint output {path}")]
    Digest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct BuildUseCase {
    options: BuildOptions,
    enumerator: PackageEnumerator,
    events: Arc<dyn BuildEventSink>,
}

impl BuildUseCase {
    pub fn new(options: BuildOptions) -> Self {
        let enumerator = PackageEnumerator::new(options.packages_root.clone());
        Self {
            options,
            enumerator,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn BuildEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Enumerate and detect layouts without writing anything
    pub fn inspect(&self, selections: &PackageSelections) -> Result<Vec<PackageDecision>, BuildError> {
        let packages = self.enumerator.enumerate(selections)?;
        Ok(packages.iter().map(decide).collect())
    }

    /// Run a full build
    pub fn build(&self, selections: &PackageSelections) -> Result<BuildResult, BuildError> {
        let output_dir = self.options.output_dir.clone();

        let _lock = BuildLock::acquire(&output_dir).map_err(|source| BuildError::Lock {
            path: BuildLock::path_for(&output_dir),
            source,
        })?;

        let packages = self.enumerator.enumerate(selections)?;

        self.events.on_event(BuildEvent::Started {
            packages_root: self.options.packages_root.clone(),
            output: output_dir.clone(),
            package_count: packages.len(),
        });

        let decisions: Vec<PackageDecision> = packages.iter().map(decide).collect();
        for decision in &decisions {
            self.events.on_event(BuildEvent::PackageResolved {
                name: decision.name.clone(),
                target: decision.target.clone(),
                layout: decision.layout,
                content_root: decision.content_root.clone(),
            });
        }

        let sources: Vec<MergeSource> = decisions
            .iter()
            .map(|d| MergeSource::new(d.name.clone(), d.content_root.clone()))
            .collect();

        let report = match self.options.stale_policy {
            StalePolicy::Clean => self.merge_staged(&sources)?,
            StalePolicy::MergeOnly => merge(&sources, &output_dir)?,
        };

        self.report_merge(&report);

        let digest = digest_tree(&output_dir).map_err(|source| BuildError::Digest {
            path: output_dir.clone(),
            source,
        })?;

        self.events.on_event(BuildEvent::Completed {
            layer_count: report.layers.len(),
            file_count: report.file_count(),
            override_count: report.overrides.len(),
            digest: digest.to_string(),
        });

        Ok(BuildResult {
            output_dir,
            packages: decisions,
            report,
            digest,
        })
    }

    fn merge_staged(&self, sources: &[MergeSource]) -> Result<MergeReport, BuildError> {
        let output_dir = &self.options.output_dir;
        let stage_error = |source: io::Error| BuildError::Stage {
            path: output_dir.clone(),
            source,
        };

        let stage = StagedDir::new(output_dir).map_err(stage_error)?;
        // On error the stage is dropped and the previous output stays.
        let report = merge(sources, stage.path())?;
        stage.commit().map_err(stage_error)?;
        Ok(report)
    }

    fn report_merge(&self, report: &MergeReport) {
        if !self.events.wants_detailed_events() {
            return;
        }

        for contribution in &report.contributions {
            self.events.on_event(BuildEvent::LayerMerged {
                package: contribution.package.clone(),
                layer: contribution.layer,
                file_count: contribution.file_count,
            });
        }

        for item in &report.overrides {
            self.events.on_event(BuildEvent::FileOverridden {
                path: item.path.clone(),
                from_package: item.from_package.clone(),
                by_package: item.by_package.clone(),
            });
        }
    }
}

fn decide(package: &Package) -> PackageDecision {
    let content_root = resolve_content_root(package.root());
    PackageDecision {
        name: package.name().to_string(),
        target: package.target().to_string(),
        layout: content_root.layout(),
        content_root: content_root.into_path(),
    }
}
