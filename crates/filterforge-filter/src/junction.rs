//! Ordered child list shared by `And` and `Or`.

use std::fmt;

use crate::filter::Filter;

/// Children of a junction filter, kept in insertion order.
///
/// Order is part of a junction's identity: two junctions are equal only if
/// their children are pairwise equal in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Junction {
    children: Vec<Filter>,
}

impl Junction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[Filter] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Filter> {
        &mut self.children
    }

    pub fn into_children(self) -> Vec<Filter> {
        self.children
    }

    pub fn push(&mut self, filter: Filter) {
        self.children.push(filter);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Removes every direct child structurally equal to `filter`.
    ///
    /// Returns the number of children removed.
    pub fn remove(&mut self, filter: &Filter) -> usize {
        let before = self.children.len();
        self.children.retain(|child| child != filter);
        before - self.children.len()
    }

    /// Substitutes `new` for direct children structurally equal to `old`,
    /// keeping their positions.
    ///
    /// With `first_only`, stops after the first substitution. Returns the
    /// number of children replaced.
    pub fn replace_in_place(&mut self, old: &Filter, new: Filter, first_only: bool) -> usize {
        let mut replaced = 0;
        for child in self.children.iter_mut() {
            if *child == *old {
                *child = new.clone();
                replaced += 1;
                if first_only {
                    break;
                }
            }
        }
        replaced
    }

    pub(crate) fn fmt_joined(
        &self,
        f: &mut fmt::Formatter<'_>,
        keyword: &str,
        empty: &str,
    ) -> fmt::Result {
        if self.children.is_empty() {
            return f.write_str(empty);
        }
        write!(f, "(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", keyword)?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}

impl FromIterator<Filter> for Junction {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Filter>> for Junction {
    fn from(children: Vec<Filter>) -> Self {
        Self { children }
    }
}

impl<'a> IntoIterator for &'a Junction {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age(value: i64) -> Filter {
        Filter::equal("age", value)
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut junction = Junction::new();
        junction.push(age(1));
        junction.push(age(2));
        junction.push(age(3));
        assert_eq!(junction.children(), &[age(1), age(2), age(3)]);
    }

    #[test]
    fn test_remove_all_equal_children() {
        let mut junction: Junction = vec![age(1), age(2), age(1)].into();
        assert_eq!(junction.remove(&age(1)), 2);
        assert_eq!(junction.children(), &[age(2)]);
        assert_eq!(junction.remove(&age(7)), 0);
    }

    #[test]
    fn test_replace_in_place_keeps_position() {
        let mut junction: Junction = vec![age(1), age(2), age(1)].into();
        let replaced = junction.replace_in_place(&age(1), Filter::is_null("age"), false);
        assert_eq!(replaced, 2);
        assert_eq!(
            junction.children(),
            &[Filter::is_null("age"), age(2), Filter::is_null("age")]
        );
    }

    #[test]
    fn test_replace_in_place_first_only() {
        let mut junction: Junction = vec![age(1), age(2), age(1)].into();
        let replaced = junction.replace_in_place(&age(1), Filter::is_null("age"), true);
        assert_eq!(replaced, 1);
        assert_eq!(
            junction.children(),
            &[Filter::is_null("age"), age(2), age(1)]
        );
    }

    #[test]
    fn test_nested_children_are_not_touched() {
        let mut junction: Junction = vec![Filter::or([age(1)]), age(2)].into();
        assert_eq!(junction.remove(&age(1)), 0);
        assert_eq!(junction.len(), 2);
    }
}
