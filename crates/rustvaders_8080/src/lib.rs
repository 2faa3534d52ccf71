pub mod cpu;

pub use cpu::flags::Flags;
pub use cpu::regs::Registers;
pub use cpu::table::{Cond, Op, OpDesc, Pair, Reg, OPCODE_TABLE};
pub use cpu::{Bus, Cpu};
