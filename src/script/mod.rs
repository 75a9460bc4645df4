pub(crate) mod instruction;
pub(crate) mod tokenizer;
