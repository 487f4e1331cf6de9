// File: src/persistence.rs
use crate::core::types::ScoredEntry;
use crate::error::{LexiconError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `word\tscore` rows to `path`, replacing whatever was there.
///
/// Rows go to a temp file next to the target which is then renamed over it,
/// so readers only ever see the old table or the complete new one.
pub fn write_lexicon(entries: &[ScoredEntry], path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(|e| LexiconError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| LexiconError::io(parent_dir, e))?;
    {
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Never)
            .has_headers(false)
            .from_writer(BufWriter::new(temp_file.as_file()));

        for entry in entries {
            writer.write_record([entry.word.as_str(), entry.formatted_score().as_str()])?;
        }
        writer.flush().map_err(|e| LexiconError::io(temp_file.path(), e))?;
    }

    // Temp files are created owner-only; the table must stay readable like a plain write.
    if let Some(permissions) = target_permissions(path) {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| LexiconError::io(temp_file.path(), e))?;
    }

    temp_file.persist(path)?;
    Ok(())
}

/// Mode the written table should end up with: the existing file's, or 0644 for a new one.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WordEntry;

    fn scored(word: &str, score: f64) -> ScoredEntry {
        ScoredEntry {
            word: WordEntry(word.to_string()),
            score,
        }
    }

    #[test]
    fn writes_tab_separated_rows_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf.tsv");
        write_lexicon(&[scored("cat", 4.91), scored("dog", 5.0)], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\t4.910\ndog\t5.000\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("wordswords").join("zipf.tsv");
        write_lexicon(&[scored("emu", 2.5)], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn replaces_existing_file_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf.tsv");
        fs::write(&path, "stale\t9.999\nmore\t1.000\nrows\t0.000\n").unwrap();
        write_lexicon(&[scored("cat", 1.0)], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\t1.000\n");
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        for mode in [0o644, 0o640] {
            let path = dir.path().join(format!("zipf-{mode:o}.tsv"));
            fs::write(&path, "old\t1.000\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();

            write_lexicon(&[scored("cat", 4.91)], &path).unwrap();

            assert_eq!(mode_of(&path), mode);
            assert_eq!(fs::read_to_string(&path).unwrap(), "cat\t4.910\n");
        }
    }

    #[cfg(unix)]
    #[test]
    fn new_table_is_world_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("zipf.tsv");
        write_lexicon(&[scored("cat", 4.91)], &path).unwrap();
        assert_eq!(mode_of(&path), 0o644);
    }

    #[test]
    fn no_entries_means_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf.tsv");
        write_lexicon(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
