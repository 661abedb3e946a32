use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes every (file name, contents) pair into `dir`.
///
/// All contents are staged in temporary files inside `dir` first. The final
/// files are only put in place once every temporary file was written, and any
/// file already put in place is removed if a later one fails.
pub fn write_all_or_none<P: AsRef<Path>>(
    dir: P,
    files: &[(String, String)],
) -> Result<Vec<PathBuf>, Fault> {
    let dir = dir.as_ref();

    let mut staged = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let dest = dir.join(name);
        let mut temp = NamedTempFile::new_in(dir)
            .map_err(|e| Error::OutputNotWritten(dest.clone(), LastError(e.to_string())))?;
        temp.write_all(contents.as_bytes())
            .map_err(|e| Error::OutputNotWritten(dest.clone(), LastError(e.to_string())))?;
        staged.push((temp, dest));
    }

    let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (temp, dest) in staged {
        if let Err(e) = temp.persist(&dest) {
            written.iter().for_each(|p| {
                let _ = std::fs::remove_file(p);
            });
            return Err(Error::OutputNotWritten(dest, LastError(e.error.to_string())))?;
        }
        written.push(dest);
    }
    Ok(written)
}
