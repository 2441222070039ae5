//! Macros for declaring state and trigger enums.

/// Generate a [`State`](crate::core::State) implementation for a fieldless enum.
///
/// Derives everything the state contract requires and uses the variant
/// names as diagnostic names.
///
/// # Example
///
/// ```
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum MediaState {
///         Paused,
///         Playing,
///         Stopped,
///     }
/// }
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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
        }
    };
}

/// Generate a [`Trigger`](crate::core::Trigger) implementation for a
/// fieldless enum.
///
/// # Example
///
/// ```
/// use switchyard::trigger_enum;
///
/// trigger_enum! {
///     pub enum MediaTrigger {
///         Play,
///         Stop,
///     }
/// }
/// ```
#[macro_export]
macro_rules! trigger_enum {
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Trigger};

    state_enum! {
        enum TestState {
            Paused,
            Playing,
        }
    }

    trigger_enum! {
        enum TestTrigger {
            Play,
            Stop,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Paused.name(), "Paused");
        assert_eq!(TestState::Playing.name(), "Playing");
    }

    #[test]
    fn trigger_enum_macro_generates_trait() {
        assert_eq!(TestTrigger::Play.name(), "Play");
        assert_eq!(TestTrigger::Stop.name(), "Stop");
    }

    #[test]
    fn generated_enums_key_hash_maps() {
        use std::collections::HashMap;

        let mut table = HashMap::new();
        table.insert((TestState::Paused, TestTrigger::Play), TestState::Playing);

        assert_eq!(
            table[&(TestState::Paused, TestTrigger::Play)],
            TestState::Playing
        );
    }

    #[test]
    fn macros_support_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        trigger_enum! {
            pub enum PublicTrigger {
                Go,
            }
        }

        assert_eq!(PublicState::A.name(), "A");
        assert_eq!(PublicTrigger::Go.name(), "Go");
    }
}
