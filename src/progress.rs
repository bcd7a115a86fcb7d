//! Progress-callback trait for per-page pipeline events.
//!
//! Inject an [`Arc<dyn PageProgress>`] via
//! [`crate::config::RenderOptionsBuilder::progress`] or
//! [`crate::config::AssembleOptions::with_progress`] to receive an event as
//! each page is rendered or each image is appended. The CLI uses this to
//! drive a terminal progress bar; callers that don't care simply leave the
//! hook unset.

use std::sync::Arc;

/// Called by a pipeline as it processes each page or input image.
///
/// All methods have default no-op implementations so implementors only
/// override what they care about. The pipelines are synchronous and call the
/// hook strictly in order, but the trait is `Send + Sync` so one hook can be
/// shared between both pipelines of a single process.
pub trait PageProgress: Send + Sync {
    /// Called once before any item is processed, with the total item count.
    fn on_start(&self, total: usize) {
        let _ = total;
    }

    /// Called after item `index` (0-based) completes successfully.
    fn on_item_done(&self, index: usize, total: usize) {
        let _ = (index, total);
    }

    /// Called once after the pipeline finishes, with the number of items
    /// that completed. On an aborted run this is never reached.
    fn on_finish(&self, completed: usize) {
        let _ = completed;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgress;

impl PageProgress for NoopProgress {}

/// Convenience alias matching the type stored in the options structs.
pub type ProgressHook = Arc<dyn PageProgress>;
