//! The scene writer owns the output stream. The exporter core only
//! ever appends complete fragments; ordering, file lifecycle, and
//! everything else about the scene file stay with the traversal that
//! drives the export.

// std
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct SceneWriter<W: Write> {
    out: W,
}

impl SceneWriter<BufWriter<File>> {
    /// Create the scene file and wrap it in a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<SceneWriter<BufWriter<File>>> {
        let file: File = File::create(path)?;
        Ok(SceneWriter {
            out: BufWriter::new(file),
        })
    }
}

impl<W: Write> SceneWriter<W> {
    pub fn new(out: W) -> SceneWriter<W> {
        SceneWriter { out }
    }
    /// Append one complete light fragment. The stream is flushed
    /// after every fragment.
    pub fn append_fragment(&mut self, fragment: &str) -> io::Result<()> {
        self.out.write_all(fragment.as_bytes())?;
        self.out.flush()
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod test {
    use crate::core::writer::SceneWriter;

    #[test]
    fn fragments_are_appended_verbatim() {
        let mut writer: SceneWriter<Vec<u8>> = SceneWriter::new(Vec::new());
        writer.append_fragment("AttributeBegin\nAttributeEnd\n\n").unwrap();
        writer.append_fragment("# second\n\n").unwrap();
        let out: Vec<u8> = writer.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "AttributeBegin\nAttributeEnd\n\n# second\n\n"
        );
    }
}
