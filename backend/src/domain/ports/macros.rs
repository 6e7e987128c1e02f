//! Helper macro for repository error enums.
//!
//! Every variant carries a `message: String`. The macro derives
//! `thiserror::Error`, a snake_case constructor per variant taking
//! `impl Into<String>`, and a shared `message()` accessor.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    /// Build this variant from an adapter message.
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                }
            )*

            /// Adapter-supplied detail without the variant prefix.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } => message.as_str(), )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum LedgerError {
            Connection => "ledger offline: {message}",
            Query => "ledger query failed: {message}",
            ReadOnly => "ledger is read-only: {message}",
        }
    }

    #[rstest]
    #[case(LedgerError::connection("refused"), "ledger offline: refused")]
    #[case(LedgerError::query(String::from("syntax")), "ledger query failed: syntax")]
    #[case(LedgerError::read_only("replica"), "ledger is read-only: replica")]
    fn constructors_format_messages(#[case] err: LedgerError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn message_strips_variant_prefix() {
        assert_eq!(LedgerError::query("timeout").message(), "timeout");
    }
}
