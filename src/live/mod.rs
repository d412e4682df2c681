pub(crate) mod board;
pub(crate) mod clock;
pub(crate) mod driver;
pub(crate) mod scene;
pub(crate) mod ticker;
