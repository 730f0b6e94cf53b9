pub mod catalog;
pub mod convert;
pub mod normalize;
pub mod parse;
pub mod table;
pub mod validate;
pub mod workbook;
