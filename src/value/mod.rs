mod array_input;
mod bigdecimal;
mod cell;
mod number;

pub use array_input::{widen, ArrayInput, WidenedArray};
pub use bigdecimal::BigDecimalValue;
pub use cell::Cell;
pub use number::Number;
