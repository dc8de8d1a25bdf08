//! Identifiers and composite-identifier decomposition.
//!
//! # Design
//! Every detail and asset operation accepts either a `u32` or its digit
//! string. Composite identifiers pack two sub-fields into one number; the
//! numeric form is split arithmetically and the string form positionally.
//! Both forms are validated so they agree on every id they accept, and the
//! derived path segments are zero-padded to the string form's width.

use std::fmt;

use crate::error::IdError;
use crate::schema::{BriefRelicSet, RelicSet};

/// An entity id given either as a number or as its canonical digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Numeric(u32),
    Text(String),
}

impl ResourceId {
    /// The id as a path segment. Text ids must be non-empty ASCII digits.
    pub fn to_segment(&self) -> Result<String, IdError> {
        match self {
            ResourceId::Numeric(id) => Ok(id.to_string()),
            ResourceId::Text(s) => {
                ascii_digits(s)?;
                Ok(s.clone())
            }
        }
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        ResourceId::Numeric(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Text(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Text(id)
    }
}

impl From<&String> for ResourceId {
    fn from(id: &String) -> Self {
        ResourceId::Text(id.clone())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Numeric(id) => write!(f, "{id}"),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

fn ascii_digits(s: &str) -> Result<&str, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdError::NonDigit(s.to_string()));
    }
    Ok(s)
}

fn fixed_digits(s: &str, expected: usize) -> Result<&[u8], IdError> {
    let s = ascii_digits(s)?;
    if s.len() != expected {
        return Err(IdError::Length {
            id: s.to_string(),
            expected,
        });
    }
    Ok(s.as_bytes())
}

fn digits_value(digits: &[u8]) -> u32 {
    digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0'))
}

/// Eidolon image id: avatar id followed by a two-digit rank, `121204` is
/// avatar `1212`, rank `4`.
///
/// The rank occupies the last two digits but is read from the last one
/// alone in the string form, so ids whose rank tens digit is non-zero are
/// rejected in both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankImageId {
    pub avatar_id: u32,
    pub rank: u32,
}

impl RankImageId {
    const DIGITS: usize = 6;
    const MAX: u32 = 999_999;

    pub fn from_numeric(id: u32) -> Result<Self, IdError> {
        if id > Self::MAX || id % 100 > 9 {
            return Err(IdError::Malformed {
                id: id.to_string(),
                kind: "rank image",
            });
        }
        Ok(Self {
            avatar_id: id / 100,
            rank: id % 100,
        })
    }

    pub fn from_text(id: &str) -> Result<Self, IdError> {
        let digits = fixed_digits(id, Self::DIGITS)?;
        if digits[4] != b'0' {
            return Err(IdError::Malformed {
                id: id.to_string(),
                kind: "rank image",
            });
        }
        Ok(Self {
            avatar_id: digits_value(&digits[..4]),
            rank: digits_value(&digits[5..6]),
        })
    }

    pub fn path(&self) -> String {
        format!(
            "/hsr/UI/rank/_dependencies/textures/{aid:04}/{aid:04}_Rank_{rank}.webp",
            aid = self.avatar_id,
            rank = self.rank
        )
    }
}

impl TryFrom<&ResourceId> for RankImageId {
    type Error = IdError;

    fn try_from(id: &ResourceId) -> Result<Self, Self::Error> {
        match id {
            ResourceId::Numeric(id) => Self::from_numeric(*id),
            ResourceId::Text(s) => Self::from_text(s),
        }
    }
}

/// Relic piece id: a leading type digit, a three-digit set id and a slot
/// digit, `31011` is set `101`, piece `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelicPieceId {
    pub set_id: u32,
    pub piece: u32,
}

impl RelicPieceId {
    const DIGITS: usize = 5;
    const MAX: u32 = 99_999;

    pub fn from_numeric(id: u32) -> Result<Self, IdError> {
        if id > Self::MAX {
            return Err(IdError::Malformed {
                id: id.to_string(),
                kind: "relic piece",
            });
        }
        Ok(Self {
            set_id: (id / 10) % 1000,
            piece: id % 10,
        })
    }

    pub fn from_text(id: &str) -> Result<Self, IdError> {
        let digits = fixed_digits(id, Self::DIGITS)?;
        Ok(Self {
            set_id: digits_value(&digits[1..4]),
            piece: digits_value(&digits[4..5]),
        })
    }

    pub fn path(&self) -> String {
        format!(
            "/hsr/UI/relicfigures/IconRelic_{:03}_{}.webp",
            self.set_id, self.piece
        )
    }
}

impl TryFrom<&ResourceId> for RelicPieceId {
    type Error = IdError;

    fn try_from(id: &ResourceId) -> Result<Self, Self::Error> {
        match id {
            ResourceId::Numeric(id) => Self::from_numeric(*id),
            ResourceId::Text(s) => Self::from_text(s),
        }
    }
}

/// Byte range of the item figure id inside a relic set icon path such as
/// `SpriteOutput/ItemIcon/71000.png`.
const ICON_FIGURE_RANGE: std::ops::Range<usize> = 22..27;

/// Extract the item figure id from a relic set icon path.
pub fn icon_figure_id(icon: &str) -> Result<&str, IdError> {
    match icon.get(ICON_FIGURE_RANGE) {
        Some(sub) if sub.bytes().all(|b| b.is_ascii_digit()) => Ok(sub),
        _ => Err(IdError::IconPath(icon.to_string())),
    }
}

/// What `relicset_icon` needs to find a set's icon: an id to fetch, or a
/// record already in hand.
#[derive(Debug, Clone)]
pub enum RelicSetRef<'a> {
    Id(ResourceId),
    Brief(&'a BriefRelicSet),
    Full(&'a RelicSet),
}

impl From<ResourceId> for RelicSetRef<'_> {
    fn from(id: ResourceId) -> Self {
        RelicSetRef::Id(id)
    }
}

impl From<u32> for RelicSetRef<'_> {
    fn from(id: u32) -> Self {
        RelicSetRef::Id(id.into())
    }
}

impl From<&str> for RelicSetRef<'_> {
    fn from(id: &str) -> Self {
        RelicSetRef::Id(id.into())
    }
}

impl<'a> From<&'a BriefRelicSet> for RelicSetRef<'a> {
    fn from(set: &'a BriefRelicSet) -> Self {
        RelicSetRef::Brief(set)
    }
}

impl<'a> From<&'a RelicSet> for RelicSetRef<'a> {
    fn from(set: &'a RelicSet) -> Self {
        RelicSetRef::Full(set)
    }
}

/// Validate an asset name such as `rogue`, `quantum` or `MaxHP`.
pub fn asset_name(name: &str) -> Result<&str, IdError> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(IdError::Name(name.to_string()));
    }
    Ok(name)
}
