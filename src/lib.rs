//! Keyword and phrase highlight-rule compilation for editor render pipelines.
//!
//! Given a set of literal words, an optional literal phrase, and two
//! background colors, this crate compiles an ordered set of regex rules
//! that an editor's line-rendering pass applies to tint matching spans:
//!
//! ```text
//! words + phrase + colors
//!     ↓ primitives::pattern            (escaped, ordered alternation patterns)
//!     ↓ primitives::rules              (ordered RuleSet of pattern + color)
//!     ↓ editor::HighlightController    (synchronous rebuild, atomic publish)
//!     ↓ view::paint_line               (highlight spans per rendered line)
//! ```
//!
//! Rule sets are immutable snapshots: every input change rebuilds the whole
//! set from scratch and republishes it behind an `Arc`, so a render pass
//! holding a clone keeps reading a consistent set while the owning side
//! moves on.

pub mod config;
pub mod editor;
pub mod primitives;
pub mod view;

pub use config::HighlightConfig;
pub use editor::HighlightController;
pub use primitives::highlight_types::{ColorDirective, HighlightSpan};
pub use primitives::rules::{CompiledRule, HighlightRequest, RuleError, RuleSet};
pub use view::paint_line;
