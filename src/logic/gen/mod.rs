//---------------------------------------------------
//  Generated content, modify:
//  src/codegen/emit.rs
//  if necessary - enjoy the day 🙂
//---------------------------------------------------

pub mod entry_assertions;
pub mod iter_assertions;
pub mod map_assertions;
