//! Change descriptors emitted by every `ColorState` mutation.

use bitflags::bitflags;

bitflags! {
    /// Which logical parts of the color model a mutation touched.
    ///
    /// The empty set means nothing changed and widgets must leave their
    /// caches alone.
    ///
    /// ```
    /// use lazyhue::models::StateChange;
    ///
    /// let change = StateChange::HUE | StateChange::SELECTION;
    /// assert!(change.includes(StateChange::HUE | StateChange::VALUE));
    /// assert!(!change.includes(StateChange::SATURATION));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StateChange: u8 {
        /// Hue of the current color changed
        const HUE = 1 << 0;
        /// Saturation of the current color changed
        const SATURATION = 1 << 1;
        /// Value (brightness) of the current color changed
        const VALUE = 1 << 2;
        /// Palette selection index moved
        const SELECTION = 1 << 3;
    }
}

impl StateChange {
    /// No field changed.
    pub const NONE: Self = Self::empty();

    /// True when this change shares at least one flag with `any`.
    #[must_use]
    pub const fn includes(self, any: Self) -> bool {
        self.intersects(any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_includes_nothing() {
        assert!(!StateChange::NONE.includes(StateChange::all()));
        assert!(StateChange::NONE.is_empty());
        assert_eq!(StateChange::default(), StateChange::NONE);
    }

    #[test]
    fn test_includes_any_of() {
        let change = StateChange::SATURATION;
        assert!(change.includes(StateChange::SATURATION));
        assert!(!change.includes(StateChange::HUE | StateChange::VALUE));
        assert!(StateChange::all().includes(StateChange::VALUE));
    }
}
