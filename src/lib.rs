#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

/*!
`rechain` builds parsers from anchored regular expressions and chains them
left to right with [`Parser::and`].

- an *atomic* parser skips leading spaces (only `' '`), then its pattern must
  match exactly at the cursor. A match further along the text is a failure.
- an *optional* parser turns failure into a zero-width success yielding `""`
- a *discard* parser moves the cursor but keeps no token
- a *sequence* threads the cursor through its operands and concatenates
  their tokens. The first mandatory failure aborts the whole parse.

```
use rechain::prelude::*;

let key = Parser::new("[a-z]+")?.named("key");
let colon = Parser::with_flags(":", false, true)?;
let value = Parser::new("[0-9]+")?.named("value");
let entry = &(&key & &colon) & &value;

assert_eq!(entry.parse("width: 80")?.into_parts(), (9, vec!["width".to_string(), "80".to_string()]));

let err = entry.parse("width 80").unwrap_err();
assert_eq!(err.position(), 5);
# Ok::<(), rechain::Error>(())
```

Matching is traced with the `log` crate under the target `rc`:
```sh
RUST_LOG=rc=trace cargo test -- --nocapture
```
*/

mod error;
mod logging;
mod matcher;
mod parser;
mod token;
mod util;

pub mod contrib;
pub mod prelude;

#[cfg(feature = "cookbook")]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "rc"; // env!("CARGO_PKG_NAME");

pub use crate::error::{Error, ParseError, PatternError};
pub use crate::parser::Parser;
pub use crate::token::TokenResult;
