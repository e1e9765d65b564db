use std::sync::OnceLock;

use regex::bytes::Regex;

use crate::parsing::blocks::types::BlockType;

/// The kind of list a marker token opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `+` or `*`
    Bullet,
    /// `1.`, `42.` ...
    Ordered,
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'+', b'*'];

    /// Classifies a whole first token as a list marker.
    pub fn parse(token: &[u8]) -> Option<Self> {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        let ordered =
            ORDERED.get_or_init(|| Regex::new(r"^\d+\.$").expect("Invalid ordered marker regex"));

        if token.len() == 1 && Self::BULLETS.contains(&token[0]) {
            Some(Self::Bullet)
        } else if ordered.is_match(token) {
            Some(Self::Ordered)
        } else {
            None
        }
    }

    pub fn list_type(self, depth: usize) -> BlockType {
        match self {
            Self::Bullet => BlockType::UnorderedList { depth },
            Self::Ordered => BlockType::OrderedList { depth },
        }
    }

    pub fn item_type(self, depth: usize) -> BlockType {
        match self {
            Self::Bullet => BlockType::UnorderedListItem { depth },
            Self::Ordered => BlockType::OrderedListItem { depth },
        }
    }

    /// Whether a list container of type `list` takes items of this marker kind.
    pub fn continues(self, list: BlockType) -> bool {
        matches!(
            (self, list),
            (Self::Bullet, BlockType::UnorderedList { .. })
                | (Self::Ordered, BlockType::OrderedList { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"-", Some(ListMarker::Bullet))]
    #[case(b"+", Some(ListMarker::Bullet))]
    #[case(b"*", Some(ListMarker::Bullet))]
    #[case(b"1.", Some(ListMarker::Ordered))]
    #[case(b"42.", Some(ListMarker::Ordered))]
    #[case(b"--", None)]
    #[case(b"-item", None)]
    #[case(b"1", None)]
    #[case(b"1.5", None)]
    #[case(b"a.", None)]
    #[case(b".", None)]
    fn markers(#[case] token: &[u8], #[case] expected: Option<ListMarker>) {
        assert_eq!(ListMarker::parse(token), expected);
    }

    #[test]
    fn marker_kinds_match_their_lists() {
        assert!(ListMarker::Bullet.continues(BlockType::UnorderedList { depth: 1 }));
        assert!(!ListMarker::Bullet.continues(BlockType::OrderedList { depth: 1 }));
        assert!(ListMarker::Ordered.continues(BlockType::OrderedList { depth: 2 }));
        assert!(!ListMarker::Ordered.continues(BlockType::UnorderedListItem { depth: 1 }));
    }
}
