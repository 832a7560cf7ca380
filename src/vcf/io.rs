// io.rs - Plain/gzip VCF streams

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{create_dir_all, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Wrap `reader` in a gzip decoder when the stream starts with the gzip magic.
/// BGZF files are multi-member gzip streams and decode the same way.
pub fn decode_input<R: Read + 'static>(reader: R) -> Result<(Box<dyn BufRead>, bool), String> {
    let mut buffered = BufReader::new(reader);
    let head = buffered
        .fill_buf()
        .map_err(|e| format!("Failed to read input: {}", e))?;

    if head.starts_with(&GZIP_MAGIC) {
        Ok((Box::new(BufReader::new(MultiGzDecoder::new(buffered))), true))
    } else {
        Ok((Box::new(buffered), false))
    }
}

/// Open a VCF for reading, `None` meaning stdin. Returns the reader and whether it is compressed.
pub fn open_input(path: Option<&Path>) -> Result<(Box<dyn BufRead>, bool), String> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to open input file '{}': {}", path.display(), e))?;
            decode_input(file)
        }
        None => decode_input(io::stdin()),
    }
}

/// Output stream that must be finished explicitly so gzip trailers are written
pub enum VcfWriter {
    Plain(BufWriter<Box<dyn Write>>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl VcfWriter {
    /// Open a VCF for writing, `None` meaning stdout; a `.gz` suffix selects gzip
    pub fn create(path: Option<&Path>) -> Result<Self, String> {
        let Some(path) = path else {
            return Ok(VcfWriter::Plain(BufWriter::new(Box::new(io::stdout()))));
        };

        ensure_parent_dir(path)?;
        let file = File::create(path)
            .map_err(|e| format!("Failed to create output file '{}': {}", path.display(), e))?;

        let compressed = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz") || ext.eq_ignore_ascii_case("bgz"))
            .unwrap_or(false);

        if compressed {
            Ok(VcfWriter::Gzip(GzEncoder::new(BufWriter::new(file), Compression::default())))
        } else {
            Ok(VcfWriter::Plain(BufWriter::new(Box::new(file))))
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, VcfWriter::Gzip(_))
    }

    /// Flush buffers and write the gzip trailer
    pub fn finish(self) -> Result<(), String> {
        match self {
            VcfWriter::Plain(mut writer) => writer.flush(),
            VcfWriter::Gzip(encoder) => encoder.finish().and_then(|mut inner| inner.flush()),
        }
        .map_err(|e| format!("Flush error: {}", e))
    }
}

impl Write for VcfWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            VcfWriter::Plain(writer) => writer.write(buf),
            VcfWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            VcfWriter::Plain(writer) => writer.flush(),
            VcfWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

/// Outcome of streaming the record section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyStats {
    pub records: usize,
    pub bytes: u64,
    /// The compressed input ended early; everything decoded before that was kept
    pub truncated: bool,
}

/// Copy the remaining records verbatim. A truncated compressed stream stops the
/// copy instead of failing it.
pub fn copy_records<R: BufRead + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    compressed: bool,
) -> Result<CopyStats, String> {
    let mut stats = CopyStats::default();
    let mut ends_with_newline = true;

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e)
                if compressed
                    && matches!(
                        e.kind(),
                        io::ErrorKind::UnexpectedEof
                            | io::ErrorKind::InvalidInput
                            | io::ErrorKind::InvalidData
                    ) =>
            {
                stats.truncated = true;
                break;
            }
            Err(e) => return Err(format!("Failed to read records: {}", e)),
        };
        if chunk.is_empty() {
            break;
        }

        writer
            .write_all(chunk)
            .map_err(|e| format!("Write error: {}", e))?;
        stats.records += chunk.iter().filter(|&&b| b == b'\n').count();
        stats.bytes += chunk.len() as u64;
        ends_with_newline = chunk.last() == Some(&b'\n');

        let consumed = chunk.len();
        reader.consume(consumed);
    }

    // Last record without a trailing newline
    if !ends_with_newline {
        stats.records += 1;
    }
    Ok(stats)
}
