use super::table::Op;
use super::{Bus, Cpu};
use crate::cpu::flags::Flags;

impl Cpu {
    /// Run one decoded operation. Immediate operands are fetched here, so PC
    /// ends up past the whole instruction on the fall-through path; control
    /// transfers assign PC directly.
    pub(crate) fn exec<B: Bus>(&mut self, bus: &mut B, op: Op, opcode: u8, addr: u16) {
        match op {
            Op::Nop => {}

            // 16-bit loads and stores.
            Op::Lxi(pair) => {
                let value = self.fetch_word(bus);
                self.set_pair(pair, value);
            }
            Op::Stax(pair) => {
                let dest = self.pair(pair);
                bus.mem_write(dest, self.regs.a);
            }
            Op::Ldax(pair) => {
                let src = self.pair(pair);
                self.regs.a = bus.mem_read(src);
            }
            Op::Shld => {
                let dest = self.fetch_word(bus);
                bus.mem_write(dest, self.regs.l);
                bus.mem_write(dest.wrapping_add(1), self.regs.h);
            }
            Op::Lhld => {
                let src = self.fetch_word(bus);
                self.regs.l = bus.mem_read(src);
                self.regs.h = bus.mem_read(src.wrapping_add(1));
            }
            Op::Sta => {
                let dest = self.fetch_word(bus);
                bus.mem_write(dest, self.regs.a);
            }
            Op::Lda => {
                let src = self.fetch_word(bus);
                self.regs.a = bus.mem_read(src);
            }

            // 16-bit arithmetic. INX/DCX leave the flags alone.
            Op::Inx(pair) => {
                let value = self.pair(pair).wrapping_add(1);
                self.set_pair(pair, value);
            }
            Op::Dcx(pair) => {
                let value = self.pair(pair).wrapping_sub(1);
                self.set_pair(pair, value);
            }
            Op::Dad(pair) => {
                let value = self.pair(pair);
                self.dad(value);
            }

            // 8-bit moves and increments.
            Op::Inr(reg) => {
                let value = self.read_reg(bus, reg);
                let result = self.inr(value);
                self.write_reg(bus, reg, result);
            }
            Op::Dcr(reg) => {
                let value = self.read_reg(bus, reg);
                let result = self.dcr(value);
                self.write_reg(bus, reg, result);
            }
            Op::Mvi(reg) => {
                let value = self.fetch_byte(bus);
                self.write_reg(bus, reg, value);
            }
            Op::Mov(dst, src) => {
                let value = self.read_reg(bus, src);
                self.write_reg(bus, dst, value);
            }

            // Accumulator rotates and flag twiddles.
            Op::Rlc => self.rlc(),
            Op::Rrc => self.rrc(),
            Op::Ral => self.ral(),
            Op::Rar => self.rar(),
            Op::Daa => self.daa(),
            Op::Cma => self.regs.a = !self.regs.a,
            Op::Stc => self.flags.cy = true,
            Op::Cmc => self.flags.cy = !self.flags.cy,

            Op::Hlt => self.halted = true,

            // 8-bit ALU, register/memory operand.
            Op::Add(reg) => {
                let value = self.read_reg(bus, reg);
                self.add(value, false);
            }
            Op::Adc(reg) => {
                let value = self.read_reg(bus, reg);
                let carry = self.flags.cy;
                self.add(value, carry);
            }
            Op::Sub(reg) => {
                let value = self.read_reg(bus, reg);
                self.subtract(value, false);
            }
            Op::Sbb(reg) => {
                let value = self.read_reg(bus, reg);
                let carry = self.flags.cy;
                self.subtract(value, carry);
            }
            Op::Ana(reg) => {
                let value = self.read_reg(bus, reg);
                self.and(value);
            }
            Op::Xra(reg) => {
                let value = self.read_reg(bus, reg);
                self.xor(value);
            }
            Op::Ora(reg) => {
                let value = self.read_reg(bus, reg);
                self.or(value);
            }
            Op::Cmp(reg) => {
                let value = self.read_reg(bus, reg);
                self.compare(value);
            }

            // 8-bit ALU, immediate operand.
            Op::Adi => {
                let value = self.fetch_byte(bus);
                self.add(value, false);
            }
            Op::Aci => {
                let value = self.fetch_byte(bus);
                let carry = self.flags.cy;
                self.add(value, carry);
            }
            Op::Sui => {
                let value = self.fetch_byte(bus);
                self.subtract(value, false);
            }
            Op::Sbi => {
                let value = self.fetch_byte(bus);
                let carry = self.flags.cy;
                self.subtract(value, carry);
            }
            Op::Ani => {
                let value = self.fetch_byte(bus);
                self.and(value);
            }
            Op::Xri => {
                let value = self.fetch_byte(bus);
                self.xor(value);
            }
            Op::Ori => {
                let value = self.fetch_byte(bus);
                self.or(value);
            }
            Op::Cpi => {
                let value = self.fetch_byte(bus);
                self.compare(value);
            }

            // Control transfer. Conditional forms fetch their operand word
            // first, so a failed condition leaves PC past the instruction.
            Op::Jmp => {
                self.regs.pc = self.fetch_word(bus);
            }
            Op::JmpIf(cond) => {
                let target = self.fetch_word(bus);
                if self.cond_met(cond) {
                    self.regs.pc = target;
                }
            }
            Op::Call => {
                let target = self.fetch_word(bus);
                self.call(bus, target);
            }
            Op::CallIf(cond) => {
                let target = self.fetch_word(bus);
                if self.cond_met(cond) {
                    self.call(bus, target);
                }
            }
            Op::Ret => self.ret(bus),
            Op::RetIf(cond) => {
                if self.cond_met(cond) {
                    self.ret(bus);
                }
            }
            Op::Rst(n) => {
                let vector = u16::from(n) * 8;
                self.call(bus, vector);
            }
            Op::Pchl => self.regs.pc = self.regs.hl(),

            // Stack operations.
            Op::Push(pair) => {
                let value = self.pair(pair);
                self.push(bus, value);
            }
            Op::Pop(pair) => {
                let value = self.pop(bus);
                self.set_pair(pair, value);
            }
            Op::PushPsw => {
                let word = (u16::from(self.regs.a) << 8) | u16::from(self.flags.to_byte());
                self.push(bus, word);
            }
            Op::PopPsw => {
                let word = self.pop(bus);
                self.regs.a = (word >> 8) as u8;
                self.flags = Flags::from_byte(word as u8);
            }
            Op::Sphl => self.regs.sp = self.regs.hl(),
            Op::Xthl => {
                let sp = self.regs.sp;
                let lo = bus.mem_read(sp);
                let hi = bus.mem_read(sp.wrapping_add(1));
                bus.mem_write(sp, self.regs.l);
                bus.mem_write(sp.wrapping_add(1), self.regs.h);
                self.regs.l = lo;
                self.regs.h = hi;
            }
            Op::Xchg => {
                core::mem::swap(&mut self.regs.d, &mut self.regs.h);
                core::mem::swap(&mut self.regs.e, &mut self.regs.l);
            }

            // Interrupt enable and the injected port boundary.
            Op::Ei => self.interrupts_enabled = true,
            Op::Di => self.interrupts_enabled = false,
            Op::In => {
                let port = self.fetch_byte(bus);
                self.regs.a = bus.io_read(port);
            }
            Op::Out => {
                let port = self.fetch_byte(bus);
                bus.io_write(port, self.regs.a);
            }

            // Non-fatal by policy: report and keep going with PC already
            // past the fetched byte, so probing ROMs don't take the
            // emulator down.
            Op::Unimplemented => {
                log::warn!("unimplemented instruction {opcode:#04x} at {addr:#06x}");
            }
        }
    }
}
