//! Macros for declaring state enums.

/// Declare a fieldless enum with its `State` and `Display` implementations
/// and a `VARIANTS` list of variant names.
///
/// # Example
///
/// ```
/// use slide_confirm::core::State;
/// use slide_confirm::state_enum;
///
/// state_enum! {
///     pub enum Lamp {
///         Dark,
///         Lit,
///         Broken,
///     }
///     final: [Broken]
///     error: [Broken]
/// }
///
/// assert_eq!(Lamp::Lit.name(), "Lit");
/// assert_eq!(Lamp::Dark.to_string(), "Dark");
/// assert_eq!(Lamp::VARIANTS, &["Dark", "Lit", "Broken"]);
/// assert!(Lamp::Broken.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Names of every variant, in declaration order.
            pub const VARIANTS: &'static [&'static str] = &[$(stringify!($variant)),*];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Drag {
            Idle,
            Dragging,
            Released,
            Abandoned,
        }
        final: [Released, Abandoned]
        error: [Abandoned]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Drag::Dragging.name(), "Dragging");
        assert!(!Drag::Idle.is_final());
        assert!(Drag::Released.is_final());
        assert!(!Drag::Released.is_error());
        assert!(Drag::Abandoned.is_error());
    }

    #[test]
    fn state_enum_lists_variants_and_displays_names() {
        assert_eq!(Drag::VARIANTS, &["Idle", "Dragging", "Released", "Abandoned"]);
        assert_eq!(Drag::Released.to_string(), "Released");
    }

    #[test]
    fn state_enum_accepts_extra_derives() {
        state_enum! {
            #[derive(Copy, Eq, Hash)]
            pub enum Side {
                Start,
                End,
            }
        }

        let side = Side::End;
        let copied = side;
        assert_eq!(side, copied);
        assert!(!side.is_final());
    }
}
