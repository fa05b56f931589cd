pub(crate) mod cursor;
pub mod index_type;
