//! Ranking values for distributing excess or missing space among siblings.

use crate::Axis;

/// Flexibility along one axis. `None` is inflexible and ranks below every
/// present value; larger values are more eager to absorb space.
pub type Flex = Option<i32>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Flexibility {
    pub horizontal: Flex,
    pub vertical: Flex,
}

impl Flexibility {
    pub const INFLEXIBLE_FLEX: Flex = None;
    pub const DEFAULT_FLEX: Flex = Some(0);
    pub const HIGH_FLEX: Flex = Some(i32::MAX / 2);
    pub const LOW_FLEX: Flex = Some(i32::MIN / 2);
    pub const MIN_FLEX: Flex = Some(i32::MIN);
    pub const MAX_FLEX: Flex = Some(i32::MAX);

    pub const INFLEXIBLE: Self = Self::uniform(Self::INFLEXIBLE_FLEX);
    pub const FLEXIBLE: Self = Self::uniform(Self::DEFAULT_FLEX);
    pub const HIGH: Self = Self::uniform(Self::HIGH_FLEX);
    pub const LOW: Self = Self::uniform(Self::LOW_FLEX);
    pub const MIN: Self = Self::uniform(Self::MIN_FLEX);
    pub const MAX: Self = Self::uniform(Self::MAX_FLEX);

    pub const fn new(horizontal: Flex, vertical: Flex) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const fn uniform(flex: Flex) -> Self {
        Self::new(flex, flex)
    }

    pub fn flex(&self, axis: Axis) -> Flex {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// The more flexible of the two; an absent side yields the other.
    pub fn max_flex(a: Flex, b: Flex) -> Flex {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }

    /// The less flexible of the two; an absent side wins.
    pub fn min_flex(a: Flex, b: Flex) -> Flex {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            _ => None,
        }
    }
}

impl Default for Flexibility {
    fn default() -> Self {
        Self::INFLEXIBLE
    }
}
