//! Pattern construction and rule compilation primitives
//!
//! These modules are pure: no I/O, no shared state. `pattern` builds
//! alternation patterns from literal strings, `rules` compiles them into
//! ordered rule sets, and `highlight_types` holds the span and color
//! directive types shared with the render side.

pub mod highlight_types;
pub mod pattern;
pub mod rules;
