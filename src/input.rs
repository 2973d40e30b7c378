// ⌨️ Input Sources - where the collector's answers come from
//
// The collector never touches stdin directly. Anything that yields lines can
// drive a session: the terminal, a file handle, or a scripted Cursor in tests.

use std::io::{self, BufRead};

pub trait InputSource {
    /// Next line with its terminator removed; `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Line-by-line adapter over any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // Strip "\n" or "\r\n"; other whitespace is the field's business
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
