//! Transaction id grammar (`shard.realm.num-seconds-nanos`).

use super::entity_id::EntityId;

/// A transaction id: the paying entity plus the valid-start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId {
    pub entity: EntityId,
    pub seconds: u64,
    pub nanos: u32,
}

impl TransactionId {
    /// Parse either the request form `shard.realm.num-seconds[-nanos]` or
    /// the display form `shard.realm.num@seconds[.nanos]`. Nanos default
    /// to zero when absent.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let (entity_part, instant_part, separator) = match text.split_once('@') {
            Some((entity, instant)) => (entity, instant, '.'),
            None => {
                let (entity, instant) = text.split_once('-')?;
                (entity, instant, '-')
            }
        };

        let entity = EntityId::parse(entity_part)?;
        let (seconds_text, nanos_text) = match instant_part.split_once(separator) {
            Some((seconds, nanos)) => (seconds, Some(nanos)),
            None => (instant_part, None),
        };

        let seconds = parse_digits(seconds_text)?;
        let nanos = match nanos_text {
            Some(nanos) => u32::try_from(parse_digits(nanos)?).ok().filter(|&n| n < 1_000_000_000)?,
            None => 0,
        };

        Some(Self {
            entity,
            seconds,
            nanos,
        })
    }
}

impl std::fmt::Display for TransactionId {
    /// Canonical request form, `-` separated.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.entity, self.seconds, self.nanos)
    }
}

fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::request_form("0.0.88-1640088000-456456456", Some((88, 1640088000, 456456456)))]
    #[case::no_nanos("0.0.88-1640088000", Some((88, 1640088000, 0)))]
    #[case::display_form("0.0.88@1640088000.456456456", Some((88, 1640088000, 456456456)))]
    #[case::display_no_nanos("0.0.88@1640088000", Some((88, 1640088000, 0)))]
    #[case::checksum_suffix("0.0.4-vfmkw", None)]
    #[case::bad_entity("a.b.c-1640088000", None)]
    #[case::nanos_overflow("0.0.88-1640088000-1000000000", None)]
    #[case::bare_triple("0.0.88", None)]
    fn test_parse(#[case] input: &str, #[case] expected: Option<(u64, u64, u32)>) {
        let expected = expected.map(|(num, seconds, nanos)| TransactionId {
            entity: EntityId {
                shard: 0,
                realm: 0,
                num,
            },
            seconds,
            nanos,
        });
        assert_eq!(TransactionId::parse(input), expected);
    }

    #[test]
    fn test_display_is_request_form() {
        let tid = TransactionId::parse("0.0.88@1640088000.456456456").unwrap();
        assert_eq!(tid.to_string(), "0.0.88-1640088000-456456456");
    }
}
