pub(crate) mod keyframes;
pub(crate) mod lerp;
pub(crate) mod scenario;
