//! CSS selector subset used for document queries.
//!
//! Supports type (`a`), universal (`*`), id (`#home`), class (`.nav-link`) and
//! attribute (`[href="#about"]`) selectors, combined with descendant (space)
//! and child (`>`) combinators. Enough for `querySelector`-style lookups made
//! by the view controller, including resolving a nav link's `href`.

pub mod matcher;
pub mod model;
pub mod parser;
pub mod tokenizer;

pub use model::{Combinator, CompoundSelector, Selector, SelectorPart, SimpleSelector};
pub use parser::{parse_selector, SelectorError};
