/*!
# Cookbook

Short worked chapters, each with tests you can run and trace:

```sh
RUST_LOG=rc=trace cargo test --features cookbook cookbook -- --nocapture
```

# Parser
A parser is built once from a regex pattern and two policy flags, then reused.
It never changes: chaining with `and` builds a *new* parser that shares its
operands.

- `Parser::new(pattern)` must match, keeps its token
- `Parser::with_flags(pattern, optional, discard)`

# Cursor
Parsing threads a byte offset through the chain. Each atomic step skips
leading spaces, then must match *exactly* where the cursor is.

`let total = 42`<br>
`   ^`

With the cursor after `let`, the pattern `[a-z]+` matches `total`. The
pattern `[0-9]+` fails: `42` occurs later in the text but not at the cursor.

# Errors
The first mandatory failure aborts the parse with a `ParseError` carrying the
cursor it was asked to start at. There is no backtracking and no partial
result. Report it at the top of the grammar, `ParseError::line_col` turns the
position into something readable.

*/

pub mod ch_1_getting_started;
pub mod ch_2_policies;
pub mod ch_3_enum_strum;
pub mod ch_4_composition;
