//! # leadsync-sync
//!
//! The paginated sync agent: walk the remote listing endpoint page by page,
//! accumulate a lookup index or a transformed record set, then reconcile into
//! the remote store in replace mode ([`run_replace`]) or patch mode
//! ([`run_patch`]). Progress surfaces as [`SyncEvent`]s through an
//! [`EventSink`] rather than prints.

pub mod event;
pub mod index;
pub mod pager;
pub mod patch;
pub mod replace;
pub mod report;

pub use event::{EventSink, NullSink, SyncEvent};
pub use index::LookupIndex;
pub use pager::{PageOutcome, Pager, PagerSettings};
pub use patch::{run_patch, PatchSettings};
pub use replace::{run_replace, ReplaceSettings};
pub use report::{PatchReport, ReplaceReport};
