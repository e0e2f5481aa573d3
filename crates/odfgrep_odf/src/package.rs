//! ODF package (ZIP container) access.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::PackageError;

/// Member stream holding the main document content.
pub const CONTENT_MEMBER: &str = "content.xml";

/// Member stream holding the document metadata.
pub const META_MEMBER: &str = "meta.xml";

/// An opened ODF document container.
///
/// The handle owns the archive for the duration of one document's search
/// and is dropped before the next document is opened.
#[derive(Debug)]
pub struct OdfPackage {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
}

impl OdfPackage {
    /// Opens a document container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PackageError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| PackageError::Io {
            path: path.clone(),
            source,
        })?;
        let archive =
            ZipArchive::new(BufReader::new(file)).map_err(|source| PackageError::Archive {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, archive })
    }

    /// Bulk-reads a named member stream to completion.
    pub fn read_member(&mut self, name: &str) -> Result<Vec<u8>, PackageError> {
        let mut member = match self.archive.by_name(name) {
            Ok(member) => member,
            Err(ZipError::FileNotFound) => {
                return Err(PackageError::MemberNotFound {
                    path: self.path.clone(),
                    name: name.to_string(),
                });
            }
            Err(source) => {
                return Err(PackageError::Archive {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let mut bytes = Vec::with_capacity(member.size() as usize);
        member
            .read_to_end(&mut bytes)
            .map_err(|source| PackageError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(bytes)
    }
}
