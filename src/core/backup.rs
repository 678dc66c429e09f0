use crate::db::ActivityLog;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::storage::{HISTORY_FILE, STUDENTS_FILE};
use crate::ui::messages::success;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy both JSON documents out of `data_dir`.
    ///
    /// Without `compress`, `dest` is a directory that receives the two files.
    /// With `compress`, both files go into a single zip archive at `dest`
    /// (its extension is forced to `.zip`). Returns the path written.
    pub fn backup(
        data_dir: &Path,
        dest: &Path,
        compress: bool,
        force: bool,
        activity: &ActivityLog,
    ) -> AppResult<PathBuf> {
        // 1️⃣ Check the documents exist
        let sources: Vec<PathBuf> = [STUDENTS_FILE, HISTORY_FILE]
            .iter()
            .map(|name| data_dir.join(name))
            .collect();

        if let Some(missing) = sources.iter().find(|p| !p.exists()) {
            return Err(AppError::Storage(format!(
                "nothing to back up, {} not found",
                missing.display()
            )));
        }

        // 2️⃣ Copy or compress
        let final_path = if compress {
            compress_backup(&sources, dest, force)?
        } else {
            copy_backup(&sources, dest, force)?
        };

        success(format!("Backup created: {}", final_path.display()));

        // 3️⃣ Log
        activity.record(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

fn copy_backup(sources: &[PathBuf], dest: &Path, force: bool) -> AppResult<PathBuf> {
    fs::create_dir_all(dest)?;

    for src in sources {
        let Some(name) = src.file_name() else {
            continue;
        };
        let target = dest.join(name);
        ensure_writable(&target, force)?;
        fs::copy(src, &target)?;
    }

    Ok(dest.to_path_buf())
}

/// Store every source file in one `.zip`.
fn compress_backup(sources: &[PathBuf], dest: &Path, force: bool) -> AppResult<PathBuf> {
    let zip_path = dest.with_extension("zip");

    if let Some(parent) = zip_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    ensure_writable(&zip_path, force)?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        zip.start_file(name, options).map_err(io::Error::other)?;
        let mut f = fs::File::open(src)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}
