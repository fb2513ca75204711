//! Document format detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unknown,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            _ => DocumentFormat::Unknown,
        }
    }

    /// Detect from a declared filename, e.g. "resume.pdf".
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => DocumentFormat::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(DocumentFormat::from_extension("pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("PDF"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("docx"), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_extension("txt"), DocumentFormat::Unknown);
        assert_eq!(DocumentFormat::from_extension("doc"), DocumentFormat::Unknown);
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.docx"),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_file_name("my.resume.PDF"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("no_extension"),
            DocumentFormat::Unknown
        );
    }
}
