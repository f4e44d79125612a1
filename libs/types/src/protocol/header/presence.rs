//! Presence bitmask for generic header fields
//!
//! Scalar values cannot represent their own absence (a zero `Content-Length`
//! is a real value), so presence is tracked in a separate mask with one bit
//! per `GenericHeaderId`.

use super::field_id::GenericHeaderId;

/// One bit per generic header field, indexed by declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FieldPresence {
    bits: u16,
}

// Every identifier needs a bit
const _: () = assert!(GenericHeaderId::COUNT <= u16::BITS as usize);

impl FieldPresence {
    /// Mask with no field present
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    fn bit(id: GenericHeaderId) -> u16 {
        1u16 << id.index()
    }

    pub fn contains(&self, id: GenericHeaderId) -> bool {
        self.bits & Self::bit(id) != 0
    }

    pub fn insert(&mut self, id: GenericHeaderId) {
        self.bits |= Self::bit(id);
    }

    pub fn remove(&mut self, id: GenericHeaderId) {
        self.bits &= !Self::bit(id);
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Raw mask, bit `n` set when field `n` is present
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// Present identifiers in declaration order
    pub fn iter(&self) -> impl Iterator<Item = GenericHeaderId> + '_ {
        GenericHeaderId::ALL
            .iter()
            .copied()
            .filter(move |id| self.contains(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut presence = FieldPresence::empty();
        assert!(presence.is_empty());

        presence.insert(GenericHeaderId::SetCookie2);
        presence.insert(GenericHeaderId::ActiveRequestIdList);
        assert!(presence.contains(GenericHeaderId::SetCookie2));
        assert!(!presence.contains(GenericHeaderId::ContentLength));
        assert_eq!(presence.len(), 2);
        assert_eq!(presence.bits(), 0b1000_0000_0000_0001);

        presence.remove(GenericHeaderId::SetCookie2);
        assert_eq!(presence.len(), 1);
    }

    #[test]
    fn test_iteration_in_declaration_order() {
        let mut presence = FieldPresence::empty();
        presence.insert(GenericHeaderId::ContentLength);
        presence.insert(GenericHeaderId::ContentType);
        presence.insert(GenericHeaderId::ActiveRequestIdList);

        let ids: Vec<_> = presence.iter().collect();
        assert_eq!(
            ids,
            vec![
                GenericHeaderId::ActiveRequestIdList,
                GenericHeaderId::ContentType,
                GenericHeaderId::ContentLength,
            ]
        );
    }
}
