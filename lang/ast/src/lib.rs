//! The abstract syntax tree of Opal programs.
//!
//! Trees are produced by the parser and consumed read-only by every later
//! phase. Ordered collections (class lists, identifier lists, statement lists)
//! are plain vectors: declaration order is significant for name analysis.

pub mod decls;
pub mod exp;
pub mod ident;
pub mod stmt;
pub mod traits;

pub use decls::*;
pub use exp::*;
pub use ident::*;
pub use stmt::*;
pub use traits::*;

pub type HashMap<K, V> = std::collections::HashMap<K, V, fxhash::FxBuildHasher>;
