//! Reads plain-text edge lists into an in-memory network.
//!
//! One record per line. A single name registers a lone member, two names
//! (separated by whitespace or a comma) register a friendship. Blank lines
//! and anything after `#` are ignored.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::graph::SocialNetwork;
use crate::types::{SocialError, SocialResult, COMMENT_PREFIX};

/// Reader for edge-list files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a network.
    pub fn read_from_file(path: &Path) -> SocialResult<SocialNetwork<String>> {
        let file = std::fs::File::open(path)?;
        Self::read_from(file)
    }

    /// Read from any reader into a network.
    pub fn read_from(reader: impl Read) -> SocialResult<SocialNetwork<String>> {
        let mut network = SocialNetwork::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let record = match line.split_once(COMMENT_PREFIX) {
                Some((before, _)) => before,
                None => line.as_str(),
            };

            let names: Vec<&str> = record
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect();

            match names.as_slice() {
                [] => {}
                [member] => network.add_member((*member).to_string()),
                [first, second] => {
                    network.add_friendship((*first).to_string(), (*second).to_string())
                }
                _ => {
                    return Err(SocialError::Parse {
                        line: index + 1,
                        reason: format!("expected 1 or 2 names, found {}", names.len()),
                    })
                }
            }
        }

        log::debug!(
            "Loaded {} members and {} friendships",
            network.member_count(),
            network.friendship_count()
        );
        Ok(network)
    }
}
