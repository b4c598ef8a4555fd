//! Batch pipeline: manifest → READMEs on disk → summaries.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::{Id, JoinSet};
use tracing::{debug, info, instrument, warn};

use skillmeta_shared::{ExtractionConfig, Result, SkillManifest, SkillMetaError, SkillSummary, SkillTarget};

use crate::summary::Summarizer;

/// Configuration for [`summarize_manifest`].
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Path to `skills.toml` (or `.json`).
    pub manifest_path: PathBuf,
    /// Maximum READMEs processed at once.
    pub concurrency: usize,
    /// Extraction tuning passed to the summarizer.
    pub extraction: ExtractionConfig,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Summaries keyed by skill name.
    pub summaries: BTreeMap<String, SkillSummary>,
    /// Entries skipped because they carry neither a URL nor an author.
    pub skipped: Vec<String>,
    /// `(skill name, error)` for every README that could not be summarized.
    pub failures: Vec<(String, String)>,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting batch status.
pub trait ProgressReporter: Send + Sync {
    /// Called once the manifest is loaded.
    fn started(&self, total: usize);
    /// Called when a skill has been summarized.
    fn skill_done(&self, name: &str, current: usize, total: usize);
    /// Called when a skill failed and was skipped.
    fn skill_failed(&self, name: &str, error: &str);
    /// Called when the batch completes.
    fn done(&self, result: &BatchResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn started(&self, _total: usize) {}
    fn skill_done(&self, _name: &str, _current: usize, _total: usize) {}
    fn skill_failed(&self, _name: &str, _error: &str) {}
    fn done(&self, _result: &BatchResult) {}
}

/// Load a skill manifest. `.json` files are parsed as JSON, everything else as TOML.
pub async fn load_manifest(path: &Path) -> Result<SkillManifest> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SkillMetaError::io(path, e))?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let manifest: SkillManifest = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| SkillMetaError::manifest(format!("{}: {e}", path.display())))?
    } else {
        toml::from_str(&content)
            .map_err(|e| SkillMetaError::manifest(format!("{}: {e}", path.display())))?
    };

    debug!(path = %path.display(), skills = manifest.skills.len(), "manifest loaded");
    Ok(manifest)
}

/// Summarize every README listed in the manifest.
///
/// Each README is handled independently: one that cannot be read or
/// summarized is logged, recorded in [`BatchResult::failures`] and skipped.
/// Only an unreadable manifest fails the whole run.
#[instrument(skip_all, fields(manifest = %config.manifest_path.display()))]
pub async fn summarize_manifest(
    config: &BatchConfig,
    progress: &dyn ProgressReporter,
) -> Result<BatchResult> {
    let start = Instant::now();
    let manifest = load_manifest(&config.manifest_path).await?;
    let base_dir = config
        .manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let summarizer = Arc::new(Summarizer::new(config.extraction.clone()));
    let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let mut result = BatchResult::default();
    let mut tasks = JoinSet::new();
    let mut task_names = HashMap::new();

    for entry in &manifest.skills {
        let target = match entry.target() {
            Ok(Some(target)) => target,
            Ok(None) => {
                warn!(skill = %entry.name, "no url or author, skipping");
                result.skipped.push(entry.name.clone());
                continue;
            }
            Err(e) => {
                warn!(skill = %entry.name, error = %e, "invalid manifest entry");
                progress.skill_failed(&entry.name, &e.to_string());
                result.failures.push((entry.name.clone(), e.to_string()));
                continue;
            }
        };

        let readme = base_dir.join(entry.readme_path());
        let summarizer = summarizer.clone();
        let sem = semaphore.clone();

        let handle = tasks.spawn(async move {
            let _permit = sem.acquire_owned().await.expect("semaphore closed");
            summarize_file(&summarizer, &readme, &target).await
        });
        task_names.insert(handle.id(), entry.name.clone());
    }

    let total = tasks.len();
    progress.started(total);
    info!(total, skipped = result.skipped.len(), "summarizing skills");

    let mut completed = 0;
    while let Some((name, outcome)) = join_next_named(&mut tasks, &mut task_names).await {
        completed += 1;
        match outcome {
            Ok(summary) => {
                progress.skill_done(&name, completed, total);
                result.summaries.insert(name, summary);
            }
            Err(error) => {
                warn!(skill = %name, %error, "failed to generate summary");
                progress.skill_failed(&name, &error);
                result.failures.push((name, error));
            }
        }
    }

    result.elapsed = start.elapsed();
    info!(
        summarized = result.summaries.len(),
        failed = result.failures.len(),
        skipped = result.skipped.len(),
        elapsed_ms = result.elapsed.as_millis() as u64,
        "batch complete"
    );
    progress.done(&result);

    Ok(result)
}

/// Wait for the next task and pair its outcome with the skill name it was
/// spawned for. A panicked task becomes an error under its own name.
async fn join_next_named<T: 'static>(
    tasks: &mut JoinSet<Result<T>>,
    names: &mut HashMap<Id, String>,
) -> Option<(String, std::result::Result<T, String>)> {
    let (id, outcome) = match tasks.join_next_with_id().await? {
        Ok((id, outcome)) => (id, outcome.map_err(|e| e.to_string())),
        Err(e) => (e.id(), Err(format!("summary task failed: {e}"))),
    };
    let name = names.remove(&id).unwrap_or_default();
    Some((name, outcome))
}

/// Read one README from disk and summarize it.
pub async fn summarize_file(
    summarizer: &Summarizer,
    readme: &Path,
    target: &SkillTarget,
) -> Result<SkillSummary> {
    let document = tokio::fs::read_to_string(readme)
        .await
        .map_err(|e| SkillMetaError::io(readme, e))?;
    summarizer.summarize(&document, target)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
