/// The environment module manages scope frames.
///
/// Frames live in an arena and point to their enclosing frame by handle.
/// Reading a variable walks the chain outward; writing a variable either
/// updates the frame that already owns it or declares it in the current one.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions against the current
/// frame, calls user-defined functions, and reports runtime errors such as
/// division by zero or undefined names. It is the core execution engine of
/// the interpreter.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens with
/// their byte spans: integer literals, identifiers, keywords, operators and
/// delimiters. Whitespace and `//` comments are dropped here.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with backtracking: every choice point tries its
/// alternatives in a fixed order from the same saved position. Errors carry
/// the line and column of the furthest point any alternative reached.
pub mod parser;
/// Stack growth for the recursive evaluator.
pub mod stack;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, booleans, arrays, dictionaries and the unit value, together
/// with their textual form.
pub mod value;
