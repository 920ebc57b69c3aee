mod utils;

mod cursor_utf8;
