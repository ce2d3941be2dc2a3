pub(crate) mod context;
pub(crate) mod helpers;

pub use context::TestContext;
