// config.rs — Compile-time configuration constants.
// Migrated from compress.h (DATA_SIZE, RUN_SIZE, LONG_RUN_SIZE are defined
// alongside the codec itself in block::types, since they are wire-format
// constants rather than deployment knobs). What lives here is the one
// runtime-tunable knob the reference CLI exposed as a flag.

// Default value for `PackOptions::fast` when the CLI binary does not pass
// `--fast` explicitly. Corresponds to the reference CLI's default of full
// (non-fast) compression.
pub const FAST_DEFAULT: bool = false;
