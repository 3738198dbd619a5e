//! Macros for ergonomic state id definitions.

/// Generate a state identifier enum with its `StateId` implementation.
///
/// # Example
///
/// ```
/// use instinct::state_ids;
///
/// state_ids! {
///     pub enum GuardState {
///         Idle,
///         Patrolling,
///         Spawning,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    state_ids! {
        enum TestId {
            Idle,
            Spawning,
        }
    }

    #[test]
    fn state_ids_macro_generates_trait() {
        assert_eq!(TestId::Idle.name(), "Idle");
        assert_eq!(TestId::Spawning.name(), "Spawning");
        assert_ne!(TestId::Idle, TestId::Spawning);
    }

    #[test]
    fn state_ids_supports_visibility() {
        state_ids! {
            pub enum PublicId {
                A,
                B,
            }
        }

        let _id = PublicId::A;
    }
}
