use anyhow::{ensure, Context, Result};

use sha2core::DIGEST_LEN;

use crate::error::Error;

/// One line of a check list: the expected digest of the file `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub digest: [u8; DIGEST_LEN],
    pub name: String,
}

pub fn to_hex(digest: &[u8; DIGEST_LEN], uppercase: bool) -> String {
    if uppercase {
        hex::encode_upper(digest)
    } else {
        hex::encode(digest)
    }
}

/// Renders a digest line in the `sha256sum` layout: `<hex>  <name>`.
pub fn format_line(digest: &[u8; DIGEST_LEN], name: &str, uppercase: bool) -> String {
    format!("{}  {}", to_hex(digest, uppercase), name)
}

/// Parses a `<hex>  <name>` or `<hex> *<name>` line; the digest may use either case.
pub fn parse_line(line: &str) -> Result<CheckEntry> {
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    let malformed = || Error::MalformedCheckLine(line.to_string());

    let (digest_hex, rest) = line.split_at(line.find(' ').ok_or_else(malformed)?);
    ensure!(digest_hex.len() == 2 * DIGEST_LEN, malformed());

    let mut digest = [0u8; DIGEST_LEN];
    hex::decode_to_slice(digest_hex, &mut digest)
        .map_err(|_| Error::InvalidDigest(digest_hex.to_string()))?;

    // `rest` starts with the separating space, followed by the text or binary mode marker. Both
    // modes hash the same bytes, so the marker is only validated.
    ensure!(
        matches!(rest.as_bytes().get(1), Some(b' ') | Some(b'*')),
        malformed()
    );
    let name = &rest[2..];
    ensure!(!name.is_empty(), malformed());

    Ok(CheckEntry {
        digest,
        name: name.to_string(),
    })
}

/// Parses every non-blank line of a check list.
pub fn parse_check_list(text: &str) -> Result<Vec<CheckEntry>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line).with_context(|| format!("line {}", i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_format_line() {
        let digest = sha2core::hash(b"abc");
        assert_eq!(format_line(&digest, "abc.txt", false), format!("{}  abc.txt", ABC_HEX));
        assert_eq!(
            format_line(&digest, "-", true),
            format!("{}  -", ABC_HEX.to_uppercase())
        );
    }

    #[test]
    fn test_parse_text_and_binary() {
        let entry = parse_line(&format!("{}  some file.txt\n", ABC_HEX)).unwrap();
        assert_eq!(entry.digest, sha2core::hash(b"abc"));
        assert_eq!(entry.name, "some file.txt");

        let entry = parse_line(&format!("{} *data.bin", ABC_HEX.to_uppercase())).unwrap();
        assert_eq!(entry.digest, sha2core::hash(b"abc"));
        assert_eq!(entry.name, "data.bin");
    }

    #[test]
    fn test_parse_round_trips_format() {
        let digest = sha2core::hash(b"");
        let entry = parse_line(&format_line(&digest, "empty", false)).unwrap();
        assert_eq!(entry.digest, digest);
        assert_eq!(entry.name, "empty");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let lines = vec![
            String::new(),
            "nospace".to_string(),
            "abcd  short.txt".to_string(),
            ABC_HEX.to_string(),
            format!("{} ", ABC_HEX),
            format!("{}  ", ABC_HEX),
            format!("{} -name", ABC_HEX),
        ];
        for line in &lines {
            let err = parse_line(line).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<Error>(), Some(Error::MalformedCheckLine(_))),
                "line {:?} gave {:?}",
                line,
                err
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        let line = format!("{}  file", "zz".repeat(DIGEST_LEN));
        let err = parse_line(&line).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidDigest(_))
        ));
    }

    #[test]
    fn test_parse_check_list_skips_blank_lines() {
        let text = format!("{}  a\n\n{} *b\n", ABC_HEX, ABC_HEX);
        let entries = parse_check_list(&text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "b");

        let err = parse_check_list("\nbroken\n").unwrap_err();
        assert_eq!(format!("{}", err), "line 2");
    }
}
