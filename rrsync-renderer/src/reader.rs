//! Title projection of an on-disk playlist, used for diffing runs.
//!
//! Every element whose local name is `title` contributes its text, in
//! document order. That includes the playlist-level title, so a rendered
//! document always yields `"Playlist"` first.

use std::io::ErrorKind;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ReadError;

const TITLE_TAG: &[u8] = b"title";

/// Result of reading titles from a path.
#[derive(Debug)]
pub enum TitleRead {
    /// No file at the path.
    Absent,
    /// The file exists but is not a readable playlist.
    Malformed(ReadError),
    /// Titles in document order.
    Titles(Vec<String>),
}

impl TitleRead {
    /// Collapse to a title list; absent and malformed files read as empty.
    pub fn into_titles(self) -> Vec<String> {
        match self {
            TitleRead::Titles(titles) => titles,
            TitleRead::Absent | TitleRead::Malformed(_) => Vec::new(),
        }
    }
}

/// Read `path` and classify the outcome.
pub fn read_title_file(path: &Path) -> TitleRead {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return TitleRead::Absent,
        Err(source) => {
            return TitleRead::Malformed(ReadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    match parse_titles(&content) {
        Ok(titles) => TitleRead::Titles(titles),
        Err(err) => TitleRead::Malformed(err),
    }
}

/// Ordered titles of the playlist at `path`.
///
/// A missing file yields an empty list. An unparsable file also yields an
/// empty list, with a warning logged.
pub fn read_titles(path: &Path) -> Vec<String> {
    match read_title_file(path) {
        TitleRead::Malformed(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read playlist titles");
            Vec::new()
        }
        other => other.into_titles(),
    }
}

/// Extract title texts from XSPF content.
pub fn parse_titles(content: &str) -> Result<Vec<String>, ReadError> {
    let mut reader = Reader::from_str(content);

    let mut titles = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    // Raw (still escaped) text of the title currently open, if any.
    let mut current: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                saw_root = true;
                if e.local_name().as_ref() == TITLE_TAG {
                    current = Some(String::new());
                }
            }
            Event::Empty(_) => saw_root = true,
            Event::End(e) => {
                depth = depth.checked_sub(1).ok_or(ReadError::Incomplete)?;
                if e.local_name().as_ref() == TITLE_TAG {
                    if let Some(raw) = current.take() {
                        let text = quick_xml::escape::unescape(&raw)?;
                        if !text.is_empty() {
                            titles.push(text.into_owned());
                        }
                    }
                }
            }
            Event::Text(e) => {
                if let Some(raw) = current.as_mut() {
                    raw.push_str(&e.decode()?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(raw) = current.as_mut() {
                    raw.push('&');
                    raw.push_str(&e.decode()?);
                    raw.push(';');
                }
            }
            Event::CData(e) => {
                if let Some(raw) = current.as_mut() {
                    let text = e.decode()?;
                    raw.push_str(&quick_xml::escape::partial_escape(&*text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root || depth != 0 {
        return Err(ReadError::Incomplete);
    }
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "<?xml version='1.0' encoding='utf-8'?>
<playlist xmlns=\"http://xspf.org/ns/0/\" version=\"1\">
\t<title>Playlist</title>
\t<trackList>
\t\t<track>
\t\t\t<location>http://a</location>
\t\t\t<title>Rock</title>
\t\t</track>
\t\t<track>
\t\t\t<location>http://b</location>
\t\t</track>
\t\t<track>
\t\t\t<location>http://c</location>
\t\t\t<title>Jazz</title>
\t\t</track>
\t</trackList>
</playlist>";

    #[test]
    fn titles_in_document_order() {
        assert_eq!(parse_titles(SAMPLE).unwrap(), vec!["Playlist", "Rock", "Jazz"]);
    }

    #[test]
    fn entity_references_are_resolved() {
        let xml = "<playlist><title>Drum &amp; Bass &#x41;</title></playlist>";
        assert_eq!(parse_titles(xml).unwrap(), vec!["Drum & Bass A"]);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let xml = "<playlist><title>Deep  House &amp; Chill</title></playlist>";
        assert_eq!(parse_titles(xml).unwrap(), vec!["Deep  House & Chill"]);
    }

    #[test]
    fn prefixed_title_elements_match() {
        let xml = "<x:playlist xmlns:x=\"http://xspf.org/ns/0/\"><x:title>P</x:title></x:playlist>";
        assert_eq!(parse_titles(xml).unwrap(), vec!["P"]);
    }

    #[test]
    fn missing_file_is_absent() {
        let tmp = TempDir::new().unwrap();
        let read = read_title_file(&tmp.path().join("nope.xspf"));
        assert!(matches!(read, TitleRead::Absent));
        assert!(read_titles(&tmp.path().join("nope.xspf")).is_empty());
    }

    #[test]
    fn mismatched_tags_are_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.xspf");
        fs::write(&path, "<playlist><title>x</trackList></playlist>").unwrap();
        assert!(matches!(read_title_file(&path), TitleRead::Malformed(_)));
        assert!(read_titles(&path).is_empty());
    }

    #[test]
    fn truncated_document_is_malformed() {
        let truncated = &SAMPLE[..SAMPLE.find("<title>Jazz").unwrap()];
        assert!(parse_titles(truncated).is_err());
    }

    #[test]
    fn plain_text_is_malformed() {
        assert!(matches!(
            parse_titles("this is not a playlist"),
            Err(ReadError::Incomplete)
        ));
    }
}
