//! Macros to reduce boilerplate in the codebase

/// Generate `Display` for a fieldless enum from a variant → string table.
///
/// # Usage
///
/// ```rust,ignore
/// enum_display!(
///     MyEnum,
///     {
///         Variant1 => "variant1",
///         Variant2 => "variant2",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display {
    (
        $enum_name:ident,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => f.write_str($str),)+
                }
            }
        }
    };
}
