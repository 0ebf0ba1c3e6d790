pub(crate) mod codegen;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod writer;
