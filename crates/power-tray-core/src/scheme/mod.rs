mod repository;
#[allow(clippy::module_inception)]
mod scheme;
mod scheme_id;

pub use {
    repository::{SchemeRepository, SessionProbe},
    scheme::Scheme,
    scheme_id::SchemeId,
};
