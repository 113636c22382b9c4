//! `define_port_error!`, the shape shared by the entity store and metrics
//! port errors.
//!
//! Every variant carries the adapter's detail in a `message` field and
//! renders as `"<prefix>: <message>"`. Each variant also gets a snake_case
//! constructor taking `impl Into<String>`, so adapters write
//! `EntityStoreError::not_found("book 42")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{}: {}", $prefix, .message)]
                $variant { message: String },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;
