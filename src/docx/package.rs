use std::io::{Read, Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::docx::DocxError;

#[derive(Debug, Clone)]
struct Part {
    name: String,
    data: Vec<u8>,
    is_dir: bool,
}

/// The zip container of an office document, kept in memory in the original entry order.
#[derive(Debug, Clone, Default)]
pub struct Package {
    parts: Vec<Part>,
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

impl Package {
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, DocxError> {
        let mut archive = ZipArchive::new(reader)?;
        let mut parts = Vec::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            let name = file.name().to_string();
            let is_dir = file.is_dir();

            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;

            parts.push(Part { name, data, is_dir });
        }

        Ok(Self { parts })
    }

    /// Gets a part by name, ignoring the case and the kind of path separator.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.find(name).map(|index| self.parts[index].data.as_slice())
    }

    /// Replaces the content of the part `name` or adds it at the end.
    pub fn set_part(&mut self, name: &str, data: Vec<u8>) {
        if let Some(index) = self.find(name) {
            self.parts[index].data = data;
        } else {
            self.parts.push(Part {
                name: name.replace('\\', "/"),
                data,
                is_dir: false,
            });
        }
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts.iter().map(|part| part.name.as_str())
    }

    fn find(&self, name: &str) -> Option<usize> {
        let pattern = name.replace('\\', "/");
        self.parts
            .iter()
            .position(|part| pattern.eq_ignore_ascii_case(&part.name))
    }

    /// Writes the package as a zip archive, using the `overrides` instead of the stored
    /// content for the parts they name.
    pub fn write_to<W: Write + Seek>(
        &self,
        writer: W,
        overrides: &[(&str, &[u8])],
    ) -> Result<W, DocxError> {
        let mut zip = ZipWriter::new(writer);

        for part in &self.parts {
            if part.is_dir {
                zip.add_directory(part.name.as_str(), file_options())?;
                continue;
            }

            let data = overrides
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&part.name))
                .map_or(part.data.as_slice(), |(_, data)| *data);

            zip.start_file(part.name.as_str(), file_options())?;
            zip.write_all(data)?;
        }

        Ok(zip.finish()?)
    }
}
