//! SQL text: table DDL and parameterized statements.

pub mod queries;
pub mod schema;
