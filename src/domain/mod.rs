//! Domain Layer - 领域层
//!
//! 两类内存记录:
//! - Item: 按创建顺序追加的物品记录，id 由服务端分配
//! - Student: 由调用方指定整数 id 的学生记录

mod item;
mod student;

pub use item::{Item, ItemId, NewItem};
pub use student::{Student, StudentId, StudentPatch};
