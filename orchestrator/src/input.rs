use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// One `id<TAB>text` record from the posts file.
#[derive(Debug, Clone)]
pub struct RawPost {
    pub id: u64,
    pub text: String,
}

/// Parsed posts file plus the count of lines that could not be parsed.
#[derive(Debug, Default)]
pub struct PostFile {
    pub posts: Vec<RawPost>,
    pub malformed: usize,
}

/// Reads the tab-separated posts file. Blank lines are skipped silently; a
/// malformed record (missing tab, non-numeric id) is skipped with a
/// warning and counted, so one bad line never aborts the batch. A missing
/// file is fatal.
pub fn read_posts(path: &Path) -> Result<PostFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read posts file {}", path.display()))?;

    let mut file = PostFile::default();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(post) => file.posts.push(post),
            None => {
                warn!("Skipping malformed post record at line {}: {:?}", idx + 1, line);
                file.malformed += 1;
            }
        }
    }

    Ok(file)
}

fn parse_line(line: &str) -> Option<RawPost> {
    let (id, text) = line.split_once('\t')?;
    let id: u64 = id.trim().parse().ok()?;
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(RawPost {
        id,
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_valid_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.tsv");
        std::fs::write(&path, "1\tMerkel war gut\n\n2\tLangweilige Sendung\n").unwrap();

        let file = read_posts(&path).unwrap();
        assert_eq!(file.posts.len(), 2);
        assert_eq!(file.malformed, 0);
        assert_eq!(file.posts[0].id, 1);
        assert_eq!(file.posts[1].text, "Langweilige Sendung");
    }

    #[test]
    fn test_malformed_lines_are_counted_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.tsv");
        std::fs::write(&path, "1\tgut\nkeine-id\ttext\nabc\n2\tschlecht\n3\t\n").unwrap();

        let file = read_posts(&path).unwrap();
        assert_eq!(file.posts.len(), 2);
        assert_eq!(file.malformed, 3);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(read_posts(Path::new("does/not/exist.tsv")).is_err());
    }
}
