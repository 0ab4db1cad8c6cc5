//! Cyclic tab sets shared by the tabbed pages

/// A closed set of tabs that cycles in declaration order
pub trait TabSet: Copy + PartialEq + Sized + 'static {
    /// Every tab, left to right
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Tab to the right, wrapping to the first
    fn next(&self) -> Self {
        let i = (self.index() + 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Tab to the left, wrapping to the last
    fn prev(&self) -> Self {
        let len = Self::ALL.len();
        let i = (self.index() + len - 1) % len;
        Self::ALL[i]
    }
}

/// Declare a tab enum with its labels and a `TabSet` impl
///
/// The first variant is the default.
macro_rules! tab_set {
    ($(#[$meta:meta])* $name:ident { $first:ident => $first_label:literal $(, $variant:ident => $label:literal)* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $first,
            $($variant,)*
        }

        impl $crate::tabs::TabSet for $name {
            const ALL: &'static [Self] = &[$name::$first $(, $name::$variant)*];

            fn label(&self) -> &'static str {
                match self {
                    $name::$first => $first_label,
                    $($name::$variant => $label,)*
                }
            }
        }
    };
}

pub(crate) use tab_set;

#[cfg(test)]
mod tests {
    use super::*;

    tab_set!(Sample { One => "One", Two => "Two", Three => "Three" });

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Sample::One.next(), Sample::Two);
        assert_eq!(Sample::Three.next(), Sample::One);
    }

    #[test]
    fn test_prev_wraps_around() {
        assert_eq!(Sample::One.prev(), Sample::Three);
        assert_eq!(Sample::Two.prev(), Sample::One);
    }

    #[test]
    fn test_default_is_first_variant() {
        assert_eq!(Sample::default(), Sample::One);
        assert_eq!(Sample::default().label(), "One");
    }
}
