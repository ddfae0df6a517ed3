use std::{fmt, str::FromStr};

/// The peer part of a slashlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Peer {
    /// A petname chain, written dot-separated (`@alice.bob`).
    Name(Vec<String>),
    /// A DID, kept whole (`@did:key:z6Mk...`).
    Did(String),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not parse {0:?} as a slashlink")]
pub struct SlashlinkError(pub String);

/// A structured reference to content: an optional peer and an optional slug.
///
/// Forms: `/slug`, `@peer` and `@peer/slug`. At least one part is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slashlink {
    pub peer: Peer,
    pub slug: Option<String>,
}

impl Slashlink {
    pub const PEER_SIGIL: char = '@';
    pub const SLUG_SIGIL: char = '/';
    pub const DID_PREFIX: &'static str = "did:";
}

impl FromStr for Slashlink {
    type Err = SlashlinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SlashlinkError(s.to_string());

        let (raw_peer, raw_slug) = if let Some(rest) = s.strip_prefix(Self::PEER_SIGIL) {
            match rest.split_once(Self::SLUG_SIGIL) {
                Some((peer, slug)) => (peer, Some(slug)),
                None => (rest, None),
            }
        } else if let Some(slug) = s.strip_prefix(Self::SLUG_SIGIL) {
            ("", Some(slug))
        } else {
            return Err(err());
        };

        let peer = if raw_peer.is_empty() {
            Peer::None
        } else if raw_peer.starts_with(Self::DID_PREFIX) {
            Peer::Did(raw_peer.to_string())
        } else {
            Peer::Name(raw_peer.split('.').map(str::to_string).collect())
        };
        let slug = raw_slug.filter(|s| !s.is_empty()).map(str::to_string);

        if peer == Peer::None && slug.is_none() {
            return Err(err());
        }
        Ok(Self { peer, slug })
    }
}

impl fmt::Display for Slashlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.peer {
            Peer::Name(names) => write!(f, "{}{}", Self::PEER_SIGIL, names.join("."))?,
            Peer::Did(did) => write!(f, "{}{did}", Self::PEER_SIGIL)?,
            Peer::None => {}
        }
        if let Some(slug) = &self.slug {
            write!(f, "{}{slug}", Self::SLUG_SIGIL)?;
        }
        Ok(())
    }
}
