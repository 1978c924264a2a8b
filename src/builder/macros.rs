//! Macros for ergonomic state definitions.

/// Generate a `State` trait implementation for simple enums.
///
/// Extra attributes (including additional derives) are forwarded to the enum.
///
/// # Example
///
/// ```
/// use innkeeper::state_enum;
/// use innkeeper::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq, Hash)]
///     pub enum HousekeepingState {
///         Dirty,
///         Cleaning,
///         Ready,
///         OutOfOrder,
///     }
///     final: [Ready, OutOfOrder]
/// }
///
/// assert!(HousekeepingState::Ready.is_final());
/// assert_eq!(HousekeepingState::Cleaning.name(), "Cleaning");
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
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
        }
    };
}
