pub(crate) mod file;
pub(crate) mod memory;
pub(crate) mod presets;
pub(crate) mod tactic;
