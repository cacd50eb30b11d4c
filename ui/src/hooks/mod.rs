pub mod use_fetch;
pub mod use_properties;
pub mod use_property;
pub mod use_title;

pub use use_fetch::{FetchHookReturn, use_fetch_with_cache};
pub use use_properties::use_properties;
pub use use_property::use_property;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
