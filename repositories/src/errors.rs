use std::error::Error;
use std::fmt::Display;

pub trait UnknownError {
    fn unknown<E, C>(e: E, context: Option<C>) -> Self
    where
        E: Error + Sync + Send + 'static,
        C: Display + Send + Sync + 'static;
}

#[macro_export]
macro_rules! impl_unknown_error_trait {
    ($struct: ident) => {
        impl $crate::errors::UnknownError for $struct {
            fn unknown<E, C>(e: E, context: Option<C>) -> Self
            where
                E: std::error::Error + Sync + Send + 'static,
                C: std::fmt::Display + Send + Sync + 'static,
            {
                if let Some(ctx) = context {
                    Self::Unknown(anyhow::anyhow!(e).context(ctx))
                } else {
                    Self::Unknown(anyhow::anyhow!(e))
                }
            }
        }
    };
}
