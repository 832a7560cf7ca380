// header.rs - VCF header parsing and meta line editing

use regex::Regex;
use std::io::{BufRead, Write};
use std::sync::OnceLock;

/// Mandatory columns of the `#CHROM` line, in order
pub const FIXED_COLUMNS: [&str; 8] = ["#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"];
const FORMAT_COLUMN: &str = "FORMAT";

fn meta_key_regex() -> &'static Regex {
    static META_KEY: OnceLock<Regex> = OnceLock::new();
    META_KEY.get_or_init(|| Regex::new(r"^##([^=]+)=").expect("valid meta key pattern"))
}

/// Header of a VCF file: `##` meta lines followed by the `#CHROM` column line
#[derive(Debug, Clone, PartialEq)]
pub struct VcfHeader {
    meta: Vec<String>,
    columns: Vec<String>,
}

impl VcfHeader {
    /// Build a header from already split lines
    pub fn new(meta: Vec<String>, columns: Vec<String>) -> Result<Self, String> {
        match meta.first() {
            Some(first) if first.starts_with("##fileformat=VCF") => {}
            Some(first) => {
                return Err(format!("Expected '##fileformat=VCF...' as first line, found '{}'", first))
            }
            None => return Err("Missing '##fileformat' line".to_string()),
        }

        if columns.len() < FIXED_COLUMNS.len()
            || columns.iter().zip(FIXED_COLUMNS.iter()).any(|(c, f)| c != f)
        {
            return Err(format!(
                "Malformed column line, expected it to start with '{}'",
                FIXED_COLUMNS.join("\t")
            ));
        }
        if columns.len() > FIXED_COLUMNS.len() && columns[FIXED_COLUMNS.len()] != FORMAT_COLUMN {
            return Err(format!(
                "Sample columns require a FORMAT column, found '{}'",
                columns[FIXED_COLUMNS.len()]
            ));
        }

        Ok(Self { meta, columns })
    }

    /// Read header lines from `reader`, stopping right after the `#CHROM` line
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, String> {
        let mut meta = Vec::new();
        let mut line = String::new();
        let mut line_num = 0;

        loop {
            line.clear();
            line_num += 1;
            let read = reader
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read header line {}: {}", line_num, e))?;
            if read == 0 {
                return Err(if line_num == 1 {
                    "Empty VCF input".to_string()
                } else {
                    "VCF header has no '#CHROM' line".to_string()
                });
            }

            let trimmed = line.trim_end_matches(['\n', '\r']);
            if trimmed.starts_with("##") {
                meta.push(trimmed.to_string());
            } else if trimmed.starts_with("#CHROM") {
                let columns = trimmed.split('\t').map(str::to_string).collect();
                return Self::new(meta, columns);
            } else {
                return Err(format!(
                    "Unexpected line {} before the '#CHROM' header line",
                    line_num
                ));
            }
        }
    }

    /// Sample names, in column order
    pub fn samples(&self) -> &[String] {
        self.columns.get(FIXED_COLUMNS.len() + 1..).unwrap_or(&[])
    }

    pub fn meta_lines(&self) -> &[String] {
        &self.meta
    }

    /// Key of a `##key=value` line
    pub fn meta_key(line: &str) -> Option<&str> {
        meta_key_regex()
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Value of the first unstructured `##key=value` line with this key
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|line| Self::meta_key(line) == Some(key))
            .map(|line| &line[key.len() + 3..])
    }

    /// Add `##key=value` after the existing meta lines, replacing a line with the same key
    pub fn add_meta(&mut self, key: &str, value: &str) {
        let line = format!("##{}={}", key, value);
        match self
            .meta
            .iter()
            .position(|existing| Self::meta_key(existing) == Some(key))
        {
            Some(index) => self.meta[index] = line,
            None => self.meta.push(line),
        }
    }

    /// Write meta lines and the column line, `\n` terminated
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), String> {
        for line in &self.meta {
            writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
        }
        writeln!(writer, "{}", self.columns.join("\t")).map_err(|e| format!("Write error: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "##fileformat=VCFv4.1\n##source=SURVIVOR\n##INFO=<ID=SUPP,Number=1,Type=String,Description=\"Supporting\">\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tdelly\tlumpy\tmanta\n1\t100\tsv1\tN\t<DEL>\t.\tPASS\tSUPP=3\tGT\t0/1\t0/1\t0/1\n";

    #[test]
    fn test_reads_header_and_stops_at_columns() {
        let mut cursor = Cursor::new(HEADER);
        let header = VcfHeader::read_from(&mut cursor).unwrap();

        assert_eq!(header.samples(), ["delly", "lumpy", "manta"]);
        assert_eq!(header.meta_lines().len(), 3);

        let mut rest = String::new();
        std::io::Read::read_to_string(&mut cursor, &mut rest).unwrap();
        assert!(rest.starts_with("1\t100\tsv1"));
    }

    #[test]
    fn test_add_meta_appends_then_replaces() {
        let mut header = VcfHeader::read_from(&mut Cursor::new(HEADER)).unwrap();
        header.add_meta("delly_source", "Delly_v0.8.1");
        assert_eq!(header.meta_lines().last().unwrap(), "##delly_source=Delly_v0.8.1");

        header.add_meta("delly_source", "Delly_v1.1.6");
        assert_eq!(header.meta_lines().len(), 4);
        assert_eq!(header.meta_value("delly_source"), Some("Delly_v1.1.6"));
        assert_eq!(header.meta_value("source"), Some("SURVIVOR"));
    }

    #[test]
    fn test_meta_key() {
        assert_eq!(VcfHeader::meta_key("##fileDate=20240101"), Some("fileDate"));
        assert_eq!(VcfHeader::meta_key("##INFO=<ID=X>"), Some("INFO"));
        assert_eq!(VcfHeader::meta_key("##delly run_source=a"), Some("delly run_source"));
        assert_eq!(VcfHeader::meta_key("#CHROM\tPOS"), None);
    }

    #[test]
    fn test_sites_only_header_has_no_samples() {
        let text = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";
        let header = VcfHeader::read_from(&mut Cursor::new(text)).unwrap();
        assert!(header.samples().is_empty());
    }

    #[test]
    fn test_crlf_lines_are_accepted() {
        let text = "##fileformat=VCFv4.2\r\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\ts1\r\n";
        let header = VcfHeader::read_from(&mut Cursor::new(text)).unwrap();
        assert_eq!(header.samples(), ["s1"]);
    }

    #[test]
    fn test_malformed_headers() {
        let cases = [
            ("", "Empty VCF input"),
            ("##fileformat=VCFv4.2\n", "VCF header has no '#CHROM' line"),
            ("##source=x\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n", "Expected"),
            ("##fileformat=VCFv4.2\n#CHROM\tPOS\tID\n", "Malformed column line"),
            (
                "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\ts1\n",
                "FORMAT",
            ),
            ("##fileformat=VCFv4.2\n1\t100\n", "Unexpected line 2"),
        ];
        for (text, expected) in cases {
            let err = VcfHeader::read_from(&mut Cursor::new(text)).unwrap_err();
            assert!(err.contains(expected), "{:?} -> {}", text, err);
        }
    }

    #[test]
    fn test_write_round_trip() {
        let header = VcfHeader::read_from(&mut Cursor::new(HEADER)).unwrap();
        let mut out = Vec::new();
        header.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(HEADER.starts_with(&text));
    }
}
