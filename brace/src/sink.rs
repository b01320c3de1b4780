use crate::{BPath, BResult};
use fs_err::{File, create_dir_all};
use log::debug;
use std::io::{self, Write};

/// Append-only in-memory sink. Generated text accumulates here and is
/// flushed to disk in one go once the file is complete.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    content: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The buffered text. Invalid UTF-8 (only possible through raw byte
    /// writes) renders as replacement characters.
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    pub fn write_to_file(&self, path: &BPath) -> BResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_str().is_empty()
        {
            create_dir_all(parent)?;
        }

        let mut file = File::create(path.as_std_path())?;
        file.write_all(&self.content)?;
        debug!("wrote {} bytes to {path}", self.content.len());

        Ok(())
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.content.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
