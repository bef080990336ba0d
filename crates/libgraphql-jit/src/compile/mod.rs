mod compile_error;
mod compiled_query;
mod field_collector;

pub use compile_error::CompileError;
pub use compiled_query::CompiledQuery;

#[cfg(test)]
mod tests;
