#[expect(clippy::module_inception)]
mod cursor;
mod cursor_mut;

pub use cursor::Cursor;
pub use cursor_mut::CursorMut;
