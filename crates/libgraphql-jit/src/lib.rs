pub mod ast;
pub mod compile;
pub mod expansion;
pub mod file_reader;
pub mod inspect;
pub mod loc;
pub mod operation;
pub mod resolve_info;
pub mod schema;
pub mod types;
mod value;

pub use value::ObjectValue;
pub use value::Value;
pub use value::VariableValues;

#[cfg(test)]
mod test;
