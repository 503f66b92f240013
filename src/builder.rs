use std::fs;
use std::path::Path;

use crate::{errors::ConvertError, report::Report};

const OUTPUT_SUFFIX: &str = "_output.xlsx";

/// Converts a response document into workbook bytes.
pub fn convert(content: &[u8]) -> Result<Vec<u8>, ConvertError> {
    Report::from_xml(content)?.to_workbook()
}

#[derive(Default)]
pub struct ConverterBuilder {
    content: Option<Vec<u8>>,
    filepath: Option<String>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &[u8]) -> Self {
        self.content = Some(content.to_vec());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    /// `{base-name}_output.xlsx` for the configured filename, directories and
    /// the last extension dropped.
    pub fn output_filename(&self) -> Option<String> {
        let stem = Path::new(self.filepath.as_deref()?).file_stem()?;
        Some(format!("{}{}", stem.to_string_lossy(), OUTPUT_SUFFIX))
    }

    pub fn report(self) -> Result<Report, ConvertError> {
        let content = self.content
            .map(Ok)
            .unwrap_or_else(|| {
                self.filepath
                    .ok_or(ConvertError::MissingContentAndFilepath)
                    .and_then(|path| fs::read(path).map_err(Into::into))
            })?;

        Report::from_xml(&content)
    }

    pub fn convert(self) -> Result<Vec<u8>, ConvertError> {
        self.report()?.to_workbook()
    }
}
