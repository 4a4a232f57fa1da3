use std::fmt::{self, Display, Formatter};

/// Writes the provided items in order as a bracketed, comma-separated list, using the
/// [`Display`] form of each item. (`[1, 2, 3]`)
pub(crate) fn write_list<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
