//! Weft Scope - the environment a renderer threads through a tag tree.
//!
//! # Architecture
//!
//! ```text
//! Scope ──────────► FileScope ──┬──► LocalScope<CssAllocator>   (one per render)
//!  bindings (copied)  path      ├──► LocalScope<GlobalScope>    (one per render)
//!                               └──► Rc<Options>                (read-only)
//! ```
//!
//! - [`Scope::child`] copies the bindings and keeps the same file.
//! - [`Scope::file_child`] copies the bindings and starts a new file whose
//!   CSS allocator and include cache are the *same instances* as the
//!   parent's, so class names stay unique and each include is parsed once
//!   across the whole render.
//!
//! # Thread Safety
//!
//! Shared state lives in [`LocalScope`] (`Rc<RefCell<_>>`), so none of these
//! types are `Send`. A server rendering requests in parallel must build a
//! fresh root [`Scope`] per request.

mod css;
mod file_scope;
mod global;
mod local_scope;
mod options;
mod scope;

pub use css::CssAllocator;
pub use file_scope::{normalize, FileScope};
pub use global::{FsLoader, GlobalScope, IncludeError, ParsedInclude, SourceLoader};
pub use local_scope::LocalScope;
pub use options::Options;
pub use scope::Scope;
