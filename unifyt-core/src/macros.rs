//! Macros for declaring unit tables.

/// Declares a `&'static [UnitEntry]` for units sharing one dimension.
///
/// Each row lists every name the unit answers to (canonical name first) and its scale to the base unit of the
/// dimension. The expansion is a constant expression, so tables can be `const` items.
///
/// ```rust
/// use unifyt_core::{unit_table, Dimension, UnitEntry, UnitTable};
///
/// const LENGTH: &[UnitEntry] = unit_table!(Dimension::LENGTH;
///     ["meter", "m", "meters"] => 1.0,
///     ["inch", "in", "inches"] => 0.0254,
/// );
///
/// assert_eq!(LENGTH.lookup("in").unwrap().scale, 0.0254);
/// ```
#[macro_export]
macro_rules! unit_table {
    ($dimension:expr; $( [$($name:literal),+ $(,)?] => $scale:expr ),* $(,)?) => {
        &[
            $(
                $crate::UnitEntry {
                    names: &[$($name),+],
                    dimension: $dimension,
                    scale: $scale,
                }
            ),*
        ]
    };
}
