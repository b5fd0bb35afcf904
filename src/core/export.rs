//! core/export.rs
//! Bundle the recommended tracks into one zip archive.
//!
//! All track bytes are read before anything is written, so a failed read
//! never leaves a partial archive behind.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::error::ExportError;
use super::types::Track;

pub const ARCHIVE_NAME: &str = "MoodBeats_Playlist.zip";
pub const ARCHIVE_FOLDER: &str = "MoodBeats Playlist";
pub const TRACK_EXTENSION: &str = "mp3";

/// Read every track, build the archive, write it to `export_dir`.
///
/// Returns the path of the written archive.
pub fn export_playlist(
    tracks: &[Track],
    songs_root: &Path,
    export_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let entries = fetch_all(tracks, songs_root)?;
    let archive = build_archive(&entries)?;

    std::fs::create_dir_all(export_dir).map_err(|source| ExportError::Write {
        path: export_dir.to_path_buf(),
        source,
    })?;

    let out = export_dir.join(ARCHIVE_NAME);
    std::fs::write(&out, archive).map_err(|source| ExportError::Write {
        path: out.clone(),
        source,
    })?;

    log::info!("export_playlist: wrote {} tracks to {:?}", entries.len(), out);
    Ok(out)
}

/// (entry name, bytes) for every track, or the first read failure.
fn fetch_all(tracks: &[Track], songs_root: &Path) -> Result<Vec<(String, Vec<u8>)>, ExportError> {
    tracks
        .iter()
        .map(|t| -> Result<(String, Vec<u8>), ExportError> {
            let path = songs_root.join(t.file_ref);
            let bytes = std::fs::read(&path).map_err(|source| {
                log::warn!("export: failed to read {path:?}: {source}");
                ExportError::Fetch { path, source }
            })?;
            Ok((entry_name(t), bytes))
        })
        .collect()
}

fn entry_name(track: &Track) -> String {
    format!("{ARCHIVE_FOLDER}/{}.{TRACK_EXTENSION}", track.name)
}

/// Zip the entries in memory.
pub fn build_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, ExportError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    zip.add_directory(format!("{ARCHIVE_FOLDER}/"), options)?;
    for (name, bytes) in entries {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(bytes).map_err(ZipError::from)?;
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    const A: Track = Track {
        name: "Uyirey",
        file_ref: "songs/Uyirey.mp3",
    };
    const B: Track = Track {
        name: "Coolie Disco",
        file_ref: "songs/Coolie Disco.mp3",
    };

    fn songs_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("songs")).unwrap();
        std::fs::write(dir.path().join(A.file_ref), b"uyirey-bytes").unwrap();
        std::fs::write(dir.path().join(B.file_ref), b"coolie-bytes").unwrap();
        dir
    }

    #[test]
    fn two_tracks_make_two_audio_entries() {
        let songs = songs_dir();
        let out_dir = tempfile::tempdir().unwrap();

        let path = export_playlist(&[A, B], songs.path(), out_dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), ARCHIVE_NAME);

        let mut archive = ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        let mut audio: Vec<String> = archive
            .file_names()
            .filter(|n| n.ends_with(".mp3"))
            .map(str::to_string)
            .collect();
        audio.sort();
        assert_eq!(
            audio,
            vec![
                "MoodBeats Playlist/Coolie Disco.mp3".to_string(),
                "MoodBeats Playlist/Uyirey.mp3".to_string(),
            ]
        );

        let mut body = String::new();
        archive
            .by_name("MoodBeats Playlist/Uyirey.mp3")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "uyirey-bytes");
    }

    #[test]
    fn missing_track_aborts_without_archive() {
        let songs = songs_dir();
        std::fs::remove_file(songs.path().join(B.file_ref)).unwrap();
        let out_dir = tempfile::tempdir().unwrap();

        let err = export_playlist(&[A, B], songs.path(), out_dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::Fetch { .. }));
        assert!(!out_dir.path().join(ARCHIVE_NAME).exists());
    }

    #[test]
    fn empty_playlist_builds_folder_only_archive() {
        let bytes = build_archive(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);
    }
}
