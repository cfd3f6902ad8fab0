//! chaining two parsers
//!
//!```rust
//! use rechain::prelude::*;
//!
//! let greeting = Parser::new("hello")?.and(&Parser::new("[a-z]+")?);
//! assert_eq!(greeting.parse("hello world")?.tokens(), ["hello", "world"]);
//! # Ok::<(), rechain::Error>(())
//!```
//!
