//! The expression-evaluation core of a calculator: converts user-typed
//! infix arithmetic expressions into double-precision results by way of
//! postfix (Reverse Polish) notation.

pub mod calculator;
