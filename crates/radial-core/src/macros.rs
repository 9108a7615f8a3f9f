/// Declares a `String` newtype with the usual derives and a `new`
/// constructor taking anything string-like.
macro_rules! string_newtype {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::derive_more::Display,
            ::derive_more::Deref,
            ::derive_more::From,
            ::derive_more::Into,
            ::derive_more::AsRef,
        )]
        $vis struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use string_newtype;
