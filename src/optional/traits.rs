use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::OptionalValue;

impl<T> Default for OptionalValue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OptionalValue<T> {
    fn clone(&self) -> Self {
        match self.as_ref() {
            Some(value) => Self::some(value.clone()),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T> From<T> for OptionalValue<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    #[inline]
    fn from(optional: OptionalValue<T>) -> Self {
        optional.into_option()
    }
}

impl<T> From<&OptionalValue<T>> for bool {
    #[inline]
    fn from(optional: &OptionalValue<T>) -> Self {
        optional.has_value()
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("OptionalValue").field(value).finish(),
            None => f.write_str("OptionalValue(<empty>)"),
        }
    }
}

// Empty compares equal to empty and less than any value.

impl<T: PartialEq> PartialEq for OptionalValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl<T: Eq> Eq for OptionalValue<T> {}

impl<T: PartialEq> PartialEq<T> for OptionalValue<T> {
    fn eq(&self, other: &T) -> bool {
        self.as_ref() == Some(other)
    }
}

impl<T: PartialOrd> PartialOrd for OptionalValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_ref().partial_cmp(&other.as_ref())
    }
}

impl<T: Ord> Ord for OptionalValue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(&other.as_ref())
    }
}

impl<T: Hash> Hash for OptionalValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn ordering_puts_empty_first() {
        let empty = OptionalValue::<i32>::new();
        let one = OptionalValue::some(1);
        let two = OptionalValue::some(2);
        assert!(empty < one);
        assert!(one < two);
        assert_eq!(empty.cmp(&OptionalValue::new()), Ordering::Equal);
    }

    #[test]
    fn hash_matches_std_option() {
        assert_eq!(hash_of(&OptionalValue::some(9u64)), hash_of(&Some(&9u64)));
        assert_eq!(hash_of(&OptionalValue::<u64>::new()), hash_of(&None::<&u64>));
    }

    #[test]
    fn compares_against_bare_value() {
        assert!(OptionalValue::some(5) == 5);
        assert!(OptionalValue::some(5) != 6);
        assert!(OptionalValue::<i32>::new() != 5);
        assert_eq!(OptionalValue::some(String::from("a")), String::from("a"));
    }

    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", OptionalValue::some("x")), "OptionalValue(\"x\")");
        assert_eq!(format!("{:?}", OptionalValue::<u8>::new()), "OptionalValue(<empty>)");
    }

    #[test]
    fn bool_conversion_reports_presence() {
        assert!(bool::from(&OptionalValue::some(())));
        assert!(!bool::from(&OptionalValue::<()>::from_none(crate::NO_VALUE)));
    }
}
