//! Animation bytecode constants.
//!
//! This module contains the opcode nibbles, operand masks, word lengths and
//! loop caps shared by the codec, the disassembler, the assembler, the
//! interpreter and the timing analyzer.

/// Opcode nibble for `Wait` (`0VVV`)
pub const OP_WAIT: u16 = 0x0;

/// Opcode nibble for `SetRaster` (`1VVV`)
pub const OP_SET_RASTER: u16 = 0x1;

/// Opcode nibble for `Goto` (`2VVV`)
pub const OP_GOTO: u16 = 0x2;

/// Opcode nibble for `SetPosition` (`3VVV XXXX YYYY ZZZZ`)
pub const OP_SET_POSITION: u16 = 0x3;

/// Opcode nibble for `SetRotation` (`4XXX YYYY ZZZZ`)
pub const OP_SET_ROTATION: u16 = 0x4;

/// Opcode nibble for `SetScale` (`5VVV UUUU`)
pub const OP_SET_SCALE: u16 = 0x5;

/// Opcode nibble for `SetPalette` (`6VVV`)
pub const OP_SET_PALETTE: u16 = 0x6;

/// Opcode nibble for `Loop` (`7VVV UUUU`)
pub const OP_LOOP: u16 = 0x7;

/// Opcode nibble shared by `SetUnknown` (`80XX`), `SetParent` (`81XX`) and `SetNotify` (`82XX`)
pub const OP_EXTENDED: u16 = 0x8;

/// Sub-opcode of [`OP_EXTENDED`] selecting `SetUnknown`
pub const SUB_SET_UNKNOWN: u16 = 0x0;

/// Sub-opcode of [`OP_EXTENDED`] selecting `SetParent`
pub const SUB_SET_PARENT: u16 = 0x1;

/// Sub-opcode of [`OP_EXTENDED`] selecting `SetNotify`
pub const SUB_SET_NOTIFY: u16 = 0x2;

/// Mask of the 12-bit operand carried by the first word of every instruction
pub const OPERAND_MASK: u16 = 0x0FFF;

/// Mask of the 8-bit sub-operand of the `0x8` family
pub const SUB_OPERAND_MASK: u16 = 0x00FF;

/// Largest absolute word position a `Goto`/`Loop` can address
pub const MAX_TARGET: u16 = 0x0FFF;

/// Effective duration of a `Wait` whose operand is zero
pub const MAX_WAIT: u16 = 4095;

/// Smallest value representable by a sign-extended 12-bit operand
pub const I12_MIN: i16 = -0x800;

/// Largest value representable by a sign-extended 12-bit operand
pub const I12_MAX: i16 = 0x7FF;

/// Raster/palette operand meaning "none" (`0xFFF` sign-extended)
pub const NO_ASSET: i16 = -1;

/// Default scale percentage on every axis
pub const DEFAULT_SCALE: i32 = 100;

/// Default cap on commands executed in a single tick, and on timing walk iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 1024;

/// Default amount the pending delay shrinks by on each tick
pub const DEFAULT_TICKS_PER_STEP: i32 = 2;

/// Name given to a synthesized label at word position zero
pub const START_LABEL: &str = "Start";

/// Prefix of synthesized label names (`Pos_<hex>`)
pub const POSITION_LABEL_PREFIX: &str = "Pos_";

/// Prefix of escaped label names (`#<hex>`), whose target is taken literally by the assembler
pub const ESCAPE_LABEL_PREFIX: char = '#';
