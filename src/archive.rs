
/// Module `archive` - Bundles the generated audio files into a zip archive.
///
/// Every regular file in the output directory is written into the archive
/// under its bare file name, the same flat layout the audio set has always
/// shipped with. Deflate compression throughout.
use log::{debug, info};
use std::fs::File;
use std::io::copy;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::ApiError;

/// Bundle the files of `dir` into `zip_path` and return the entry count.
pub fn bundle_zip(dir: &Path, zip_path: &Path) -> Result<usize, ApiError> {
    let file = File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        // Never let the archive swallow itself when it lives in `dir`.
        if !entry.file_type()?.is_file() || entry.path() == zip_path {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort();

    let mut count = 0;
    for path in &paths {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        debug!("Archiving {}", name);
        zip.start_file(name, options)?;
        let mut reader = File::open(path)?;
        copy(&mut reader, &mut zip)?;
        count += 1;
    }
    zip.finish()?;

    info!("Wrote {} entries to {}", count, zip_path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn zips_flat_file_names() {
        let dir = tempfile::tempdir().unwrap();
        for n in [1, 2, 10] {
            std::fs::write(dir.path().join(format!("{}.mp3", n)), b"mp3").unwrap();
        }
        // Subdirectories are not part of the flat layout.
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let zip_path = dir.path().join("bundle.zip");
        let count = bundle_zip(dir.path(), &zip_path).unwrap();
        assert_eq!(count, 3);

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["1.mp3", "10.mp3", "2.mp3"]);

        let mut body = String::new();
        archive
            .by_name("1.mp3")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "mp3");
    }

    #[test]
    fn archive_inside_the_directory_excludes_itself() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1.mp3"), b"mp3").unwrap();

        let zip_path = dir.path().join("bundle.zip");
        let count = bundle_zip(dir.path(), &zip_path).unwrap();
        assert_eq!(count, 1);

        let archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn empty_directory_yields_an_empty_archive() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("bundle.zip");
        assert_eq!(bundle_zip(dir.path(), &zip_path).unwrap(), 0);
        assert!(zip_path.exists());
    }
}
