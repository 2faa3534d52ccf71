//! Opcode descriptor table for the Intel 8080.
//!
//! Every one of the 256 opcode values maps to exactly one entry: mnemonic,
//! instruction length in bytes, clock cycles, and the tagged operation the
//! executor runs. The historical duplicate encodings (marked `*` in the
//! mnemonic, e.g. `*NOP`, `*JMP`) alias their canonical operation.

/// 8-bit operand selector. `M` is the memory byte addressed by HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

/// 16-bit register pair selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pair {
    Bc,
    De,
    Hl,
    Sp,
}

/// Branch condition: one of the five flags or its negation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
    Po,
    Pe,
    P,
    M,
}

/// Semantic action of an opcode.
///
/// Immediate operands are not part of the tag; handlers fetch them from the
/// instruction stream according to the descriptor length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Lxi(Pair),
    Stax(Pair),
    Ldax(Pair),
    Shld,
    Lhld,
    Sta,
    Lda,
    Inx(Pair),
    Dcx(Pair),
    Dad(Pair),
    Inr(Reg),
    Dcr(Reg),
    Mvi(Reg),
    Mov(Reg, Reg),
    Rlc,
    Rrc,
    Ral,
    Rar,
    Daa,
    Cma,
    Stc,
    Cmc,
    Hlt,
    Add(Reg),
    Adc(Reg),
    Sub(Reg),
    Sbb(Reg),
    Ana(Reg),
    Xra(Reg),
    Ora(Reg),
    Cmp(Reg),
    Adi,
    Aci,
    Sui,
    Sbi,
    Ani,
    Xri,
    Ori,
    Cpi,
    Jmp,
    JmpIf(Cond),
    Call,
    CallIf(Cond),
    Ret,
    RetIf(Cond),
    Rst(u8),
    Push(Pair),
    Pop(Pair),
    PushPsw,
    PopPsw,
    Pchl,
    Sphl,
    Xthl,
    Xchg,
    Ei,
    Di,
    In,
    Out,
    /// Fallback for opcodes without an assigned operation. Every 8080 value
    /// currently has one; the executor reports this case and carries on.
    Unimplemented,
}

/// One opcode's entry in the dispatch table.
#[derive(Clone, Copy, Debug)]
pub struct OpDesc {
    pub mnemonic: &'static str,
    /// Total instruction length in bytes, opcode included (1–3).
    pub len: u8,
    /// Clock cycles charged per execution. Conditional branches are charged
    /// this value whether taken or not.
    pub cycles: u8,
    pub op: Op,
}

const fn desc(mnemonic: &'static str, len: u8, cycles: u8, op: Op) -> OpDesc {
    OpDesc {
        mnemonic,
        len,
        cycles,
        op,
    }
}

/// Complete dispatch table, indexed by opcode byte.
pub const OPCODE_TABLE: [OpDesc; 256] = [
    // 0x00
    desc("NOP", 1, 4, Op::Nop),
    desc("LXI B", 3, 10, Op::Lxi(Pair::Bc)),
    desc("STAX B", 1, 7, Op::Stax(Pair::Bc)),
    desc("INX B", 1, 5, Op::Inx(Pair::Bc)),
    desc("INR B", 1, 5, Op::Inr(Reg::B)),
    desc("DCR B", 1, 5, Op::Dcr(Reg::B)),
    desc("MVI B", 2, 7, Op::Mvi(Reg::B)),
    desc("RLC", 1, 4, Op::Rlc),
    desc("*NOP", 1, 4, Op::Nop),
    desc("DAD B", 1, 10, Op::Dad(Pair::Bc)),
    desc("LDAX B", 1, 7, Op::Ldax(Pair::Bc)),
    desc("DCX B", 1, 5, Op::Dcx(Pair::Bc)),
    desc("INR C", 1, 5, Op::Inr(Reg::C)),
    desc("DCR C", 1, 5, Op::Dcr(Reg::C)),
    desc("MVI C", 2, 7, Op::Mvi(Reg::C)),
    desc("RRC", 1, 4, Op::Rrc),
    // 0x10
    desc("*NOP", 1, 4, Op::Nop),
    desc("LXI D", 3, 10, Op::Lxi(Pair::De)),
    desc("STAX D", 1, 7, Op::Stax(Pair::De)),
    desc("INX D", 1, 5, Op::Inx(Pair::De)),
    desc("INR D", 1, 5, Op::Inr(Reg::D)),
    desc("DCR D", 1, 5, Op::Dcr(Reg::D)),
    desc("MVI D", 2, 7, Op::Mvi(Reg::D)),
    desc("RAL", 1, 4, Op::Ral),
    desc("*NOP", 1, 4, Op::Nop),
    desc("DAD D", 1, 10, Op::Dad(Pair::De)),
    desc("LDAX D", 1, 7, Op::Ldax(Pair::De)),
    desc("DCX D", 1, 5, Op::Dcx(Pair::De)),
    desc("INR E", 1, 5, Op::Inr(Reg::E)),
    desc("DCR E", 1, 5, Op::Dcr(Reg::E)),
    desc("MVI E", 2, 7, Op::Mvi(Reg::E)),
    desc("RAR", 1, 4, Op::Rar),
    // 0x20
    desc("*NOP", 1, 4, Op::Nop),
    desc("LXI H", 3, 10, Op::Lxi(Pair::Hl)),
    desc("SHLD", 3, 16, Op::Shld),
    desc("INX H", 1, 5, Op::Inx(Pair::Hl)),
    desc("INR H", 1, 5, Op::Inr(Reg::H)),
    desc("DCR H", 1, 5, Op::Dcr(Reg::H)),
    desc("MVI H", 2, 7, Op::Mvi(Reg::H)),
    desc("DAA", 1, 4, Op::Daa),
    desc("*NOP", 1, 4, Op::Nop),
    desc("DAD H", 1, 10, Op::Dad(Pair::Hl)),
    desc("LHLD", 3, 16, Op::Lhld),
    desc("DCX H", 1, 5, Op::Dcx(Pair::Hl)),
    desc("INR L", 1, 5, Op::Inr(Reg::L)),
    desc("DCR L", 1, 5, Op::Dcr(Reg::L)),
    desc("MVI L", 2, 7, Op::Mvi(Reg::L)),
    desc("CMA", 1, 4, Op::Cma),
    // 0x30
    desc("*NOP", 1, 4, Op::Nop),
    desc("LXI SP", 3, 10, Op::Lxi(Pair::Sp)),
    desc("STA", 3, 13, Op::Sta),
    desc("INX SP", 1, 5, Op::Inx(Pair::Sp)),
    desc("INR M", 1, 10, Op::Inr(Reg::M)),
    desc("DCR M", 1, 10, Op::Dcr(Reg::M)),
    desc("MVI M", 2, 10, Op::Mvi(Reg::M)),
    desc("STC", 1, 4, Op::Stc),
    desc("*NOP", 1, 4, Op::Nop),
    desc("DAD SP", 1, 10, Op::Dad(Pair::Sp)),
    desc("LDA", 3, 13, Op::Lda),
    desc("DCX SP", 1, 5, Op::Dcx(Pair::Sp)),
    desc("INR A", 1, 5, Op::Inr(Reg::A)),
    desc("DCR A", 1, 5, Op::Dcr(Reg::A)),
    desc("MVI A", 2, 7, Op::Mvi(Reg::A)),
    desc("CMC", 1, 4, Op::Cmc),
    // 0x40
    desc("MOV B,B", 1, 5, Op::Mov(Reg::B, Reg::B)),
    desc("MOV B,C", 1, 5, Op::Mov(Reg::B, Reg::C)),
    desc("MOV B,D", 1, 5, Op::Mov(Reg::B, Reg::D)),
    desc("MOV B,E", 1, 5, Op::Mov(Reg::B, Reg::E)),
    desc("MOV B,H", 1, 5, Op::Mov(Reg::B, Reg::H)),
    desc("MOV B,L", 1, 5, Op::Mov(Reg::B, Reg::L)),
    desc("MOV B,M", 1, 7, Op::Mov(Reg::B, Reg::M)),
    desc("MOV B,A", 1, 5, Op::Mov(Reg::B, Reg::A)),
    desc("MOV C,B", 1, 5, Op::Mov(Reg::C, Reg::B)),
    desc("MOV C,C", 1, 5, Op::Mov(Reg::C, Reg::C)),
    desc("MOV C,D", 1, 5, Op::Mov(Reg::C, Reg::D)),
    desc("MOV C,E", 1, 5, Op::Mov(Reg::C, Reg::E)),
    desc("MOV C,H", 1, 5, Op::Mov(Reg::C, Reg::H)),
    desc("MOV C,L", 1, 5, Op::Mov(Reg::C, Reg::L)),
    desc("MOV C,M", 1, 7, Op::Mov(Reg::C, Reg::M)),
    desc("MOV C,A", 1, 5, Op::Mov(Reg::C, Reg::A)),
    // 0x50
    desc("MOV D,B", 1, 5, Op::Mov(Reg::D, Reg::B)),
    desc("MOV D,C", 1, 5, Op::Mov(Reg::D, Reg::C)),
    desc("MOV D,D", 1, 5, Op::Mov(Reg::D, Reg::D)),
    desc("MOV D,E", 1, 5, Op::Mov(Reg::D, Reg::E)),
    desc("MOV D,H", 1, 5, Op::Mov(Reg::D, Reg::H)),
    desc("MOV D,L", 1, 5, Op::Mov(Reg::D, Reg::L)),
    desc("MOV D,M", 1, 7, Op::Mov(Reg::D, Reg::M)),
    desc("MOV D,A", 1, 5, Op::Mov(Reg::D, Reg::A)),
    desc("MOV E,B", 1, 5, Op::Mov(Reg::E, Reg::B)),
    desc("MOV E,C", 1, 5, Op::Mov(Reg::E, Reg::C)),
    desc("MOV E,D", 1, 5, Op::Mov(Reg::E, Reg::D)),
    desc("MOV E,E", 1, 5, Op::Mov(Reg::E, Reg::E)),
    desc("MOV E,H", 1, 5, Op::Mov(Reg::E, Reg::H)),
    desc("MOV E,L", 1, 5, Op::Mov(Reg::E, Reg::L)),
    desc("MOV E,M", 1, 7, Op::Mov(Reg::E, Reg::M)),
    desc("MOV E,A", 1, 5, Op::Mov(Reg::E, Reg::A)),
    // 0x60
    desc("MOV H,B", 1, 5, Op::Mov(Reg::H, Reg::B)),
    desc("MOV H,C", 1, 5, Op::Mov(Reg::H, Reg::C)),
    desc("MOV H,D", 1, 5, Op::Mov(Reg::H, Reg::D)),
    desc("MOV H,E", 1, 5, Op::Mov(Reg::H, Reg::E)),
    desc("MOV H,H", 1, 5, Op::Mov(Reg::H, Reg::H)),
    desc("MOV H,L", 1, 5, Op::Mov(Reg::H, Reg::L)),
    desc("MOV H,M", 1, 7, Op::Mov(Reg::H, Reg::M)),
    desc("MOV H,A", 1, 5, Op::Mov(Reg::H, Reg::A)),
    desc("MOV L,B", 1, 5, Op::Mov(Reg::L, Reg::B)),
    desc("MOV L,C", 1, 5, Op::Mov(Reg::L, Reg::C)),
    desc("MOV L,D", 1, 5, Op::Mov(Reg::L, Reg::D)),
    desc("MOV L,E", 1, 5, Op::Mov(Reg::L, Reg::E)),
    desc("MOV L,H", 1, 5, Op::Mov(Reg::L, Reg::H)),
    desc("MOV L,L", 1, 5, Op::Mov(Reg::L, Reg::L)),
    desc("MOV L,M", 1, 7, Op::Mov(Reg::L, Reg::M)),
    desc("MOV L,A", 1, 5, Op::Mov(Reg::L, Reg::A)),
    // 0x70
    desc("MOV M,B", 1, 7, Op::Mov(Reg::M, Reg::B)),
    desc("MOV M,C", 1, 7, Op::Mov(Reg::M, Reg::C)),
    desc("MOV M,D", 1, 7, Op::Mov(Reg::M, Reg::D)),
    desc("MOV M,E", 1, 7, Op::Mov(Reg::M, Reg::E)),
    desc("MOV M,H", 1, 7, Op::Mov(Reg::M, Reg::H)),
    desc("MOV M,L", 1, 7, Op::Mov(Reg::M, Reg::L)),
    desc("HLT", 1, 7, Op::Hlt),
    desc("MOV M,A", 1, 7, Op::Mov(Reg::M, Reg::A)),
    desc("MOV A,B", 1, 5, Op::Mov(Reg::A, Reg::B)),
    desc("MOV A,C", 1, 5, Op::Mov(Reg::A, Reg::C)),
    desc("MOV A,D", 1, 5, Op::Mov(Reg::A, Reg::D)),
    desc("MOV A,E", 1, 5, Op::Mov(Reg::A, Reg::E)),
    desc("MOV A,H", 1, 5, Op::Mov(Reg::A, Reg::H)),
    desc("MOV A,L", 1, 5, Op::Mov(Reg::A, Reg::L)),
    desc("MOV A,M", 1, 7, Op::Mov(Reg::A, Reg::M)),
    desc("MOV A,A", 1, 5, Op::Mov(Reg::A, Reg::A)),
    // 0x80
    desc("ADD B", 1, 4, Op::Add(Reg::B)),
    desc("ADD C", 1, 4, Op::Add(Reg::C)),
    desc("ADD D", 1, 4, Op::Add(Reg::D)),
    desc("ADD E", 1, 4, Op::Add(Reg::E)),
    desc("ADD H", 1, 4, Op::Add(Reg::H)),
    desc("ADD L", 1, 4, Op::Add(Reg::L)),
    desc("ADD M", 1, 7, Op::Add(Reg::M)),
    desc("ADD A", 1, 4, Op::Add(Reg::A)),
    desc("ADC B", 1, 4, Op::Adc(Reg::B)),
    desc("ADC C", 1, 4, Op::Adc(Reg::C)),
    desc("ADC D", 1, 4, Op::Adc(Reg::D)),
    desc("ADC E", 1, 4, Op::Adc(Reg::E)),
    desc("ADC H", 1, 4, Op::Adc(Reg::H)),
    desc("ADC L", 1, 4, Op::Adc(Reg::L)),
    desc("ADC M", 1, 7, Op::Adc(Reg::M)),
    desc("ADC A", 1, 4, Op::Adc(Reg::A)),
    // 0x90
    desc("SUB B", 1, 4, Op::Sub(Reg::B)),
    desc("SUB C", 1, 4, Op::Sub(Reg::C)),
    desc("SUB D", 1, 4, Op::Sub(Reg::D)),
    desc("SUB E", 1, 4, Op::Sub(Reg::E)),
    desc("SUB H", 1, 4, Op::Sub(Reg::H)),
    desc("SUB L", 1, 4, Op::Sub(Reg::L)),
    desc("SUB M", 1, 7, Op::Sub(Reg::M)),
    desc("SUB A", 1, 4, Op::Sub(Reg::A)),
    desc("SBB B", 1, 4, Op::Sbb(Reg::B)),
    desc("SBB C", 1, 4, Op::Sbb(Reg::C)),
    desc("SBB D", 1, 4, Op::Sbb(Reg::D)),
    desc("SBB E", 1, 4, Op::Sbb(Reg::E)),
    desc("SBB H", 1, 4, Op::Sbb(Reg::H)),
    desc("SBB L", 1, 4, Op::Sbb(Reg::L)),
    desc("SBB M", 1, 7, Op::Sbb(Reg::M)),
    desc("SBB A", 1, 4, Op::Sbb(Reg::A)),
    // 0xA0
    desc("ANA B", 1, 4, Op::Ana(Reg::B)),
    desc("ANA C", 1, 4, Op::Ana(Reg::C)),
    desc("ANA D", 1, 4, Op::Ana(Reg::D)),
    desc("ANA E", 1, 4, Op::Ana(Reg::E)),
    desc("ANA H", 1, 4, Op::Ana(Reg::H)),
    desc("ANA L", 1, 4, Op::Ana(Reg::L)),
    desc("ANA M", 1, 7, Op::Ana(Reg::M)),
    desc("ANA A", 1, 4, Op::Ana(Reg::A)),
    desc("XRA B", 1, 4, Op::Xra(Reg::B)),
    desc("XRA C", 1, 4, Op::Xra(Reg::C)),
    desc("XRA D", 1, 4, Op::Xra(Reg::D)),
    desc("XRA E", 1, 4, Op::Xra(Reg::E)),
    desc("XRA H", 1, 4, Op::Xra(Reg::H)),
    desc("XRA L", 1, 4, Op::Xra(Reg::L)),
    desc("XRA M", 1, 7, Op::Xra(Reg::M)),
    desc("XRA A", 1, 4, Op::Xra(Reg::A)),
    // 0xB0
    desc("ORA B", 1, 4, Op::Ora(Reg::B)),
    desc("ORA C", 1, 4, Op::Ora(Reg::C)),
    desc("ORA D", 1, 4, Op::Ora(Reg::D)),
    desc("ORA E", 1, 4, Op::Ora(Reg::E)),
    desc("ORA H", 1, 4, Op::Ora(Reg::H)),
    desc("ORA L", 1, 4, Op::Ora(Reg::L)),
    desc("ORA M", 1, 7, Op::Ora(Reg::M)),
    desc("ORA A", 1, 4, Op::Ora(Reg::A)),
    desc("CMP B", 1, 4, Op::Cmp(Reg::B)),
    desc("CMP C", 1, 4, Op::Cmp(Reg::C)),
    desc("CMP D", 1, 4, Op::Cmp(Reg::D)),
    desc("CMP E", 1, 4, Op::Cmp(Reg::E)),
    desc("CMP H", 1, 4, Op::Cmp(Reg::H)),
    desc("CMP L", 1, 4, Op::Cmp(Reg::L)),
    desc("CMP M", 1, 7, Op::Cmp(Reg::M)),
    desc("CMP A", 1, 4, Op::Cmp(Reg::A)),
    // 0xC0
    desc("RNZ", 1, 5, Op::RetIf(Cond::Nz)),
    desc("POP B", 1, 10, Op::Pop(Pair::Bc)),
    desc("JNZ", 3, 10, Op::JmpIf(Cond::Nz)),
    desc("JMP", 3, 10, Op::Jmp),
    desc("CNZ", 3, 11, Op::CallIf(Cond::Nz)),
    desc("PUSH B", 1, 11, Op::Push(Pair::Bc)),
    desc("ADI", 2, 7, Op::Adi),
    desc("RST 0", 1, 11, Op::Rst(0)),
    desc("RZ", 1, 5, Op::RetIf(Cond::Z)),
    desc("RET", 1, 10, Op::Ret),
    desc("JZ", 3, 10, Op::JmpIf(Cond::Z)),
    desc("*JMP", 3, 10, Op::Jmp),
    desc("CZ", 3, 11, Op::CallIf(Cond::Z)),
    desc("CALL", 3, 17, Op::Call),
    desc("ACI", 2, 7, Op::Aci),
    desc("RST 1", 1, 11, Op::Rst(1)),
    // 0xD0
    desc("RNC", 1, 5, Op::RetIf(Cond::Nc)),
    desc("POP D", 1, 10, Op::Pop(Pair::De)),
    desc("JNC", 3, 10, Op::JmpIf(Cond::Nc)),
    desc("OUT", 2, 10, Op::Out),
    desc("CNC", 3, 11, Op::CallIf(Cond::Nc)),
    desc("PUSH D", 1, 11, Op::Push(Pair::De)),
    desc("SUI", 2, 7, Op::Sui),
    desc("RST 2", 1, 11, Op::Rst(2)),
    desc("RC", 1, 5, Op::RetIf(Cond::C)),
    desc("*RET", 1, 10, Op::Ret),
    desc("JC", 3, 10, Op::JmpIf(Cond::C)),
    desc("IN", 2, 10, Op::In),
    desc("CC", 3, 11, Op::CallIf(Cond::C)),
    desc("*CALL", 3, 17, Op::Call),
    desc("SBI", 2, 7, Op::Sbi),
    desc("RST 3", 1, 11, Op::Rst(3)),
    // 0xE0
    desc("RPO", 1, 5, Op::RetIf(Cond::Po)),
    desc("POP H", 1, 10, Op::Pop(Pair::Hl)),
    desc("JPO", 3, 10, Op::JmpIf(Cond::Po)),
    desc("XTHL", 1, 18, Op::Xthl),
    desc("CPO", 3, 11, Op::CallIf(Cond::Po)),
    desc("PUSH H", 1, 11, Op::Push(Pair::Hl)),
    desc("ANI", 2, 7, Op::Ani),
    desc("RST 4", 1, 11, Op::Rst(4)),
    desc("RPE", 1, 5, Op::RetIf(Cond::Pe)),
    desc("PCHL", 1, 5, Op::Pchl),
    desc("JPE", 3, 10, Op::JmpIf(Cond::Pe)),
    desc("XCHG", 1, 4, Op::Xchg),
    desc("CPE", 3, 11, Op::CallIf(Cond::Pe)),
    desc("*CALL", 3, 17, Op::Call),
    desc("XRI", 2, 7, Op::Xri),
    desc("RST 5", 1, 11, Op::Rst(5)),
    // 0xF0
    desc("RP", 1, 5, Op::RetIf(Cond::P)),
    desc("POP PSW", 1, 10, Op::PopPsw),
    desc("JP", 3, 10, Op::JmpIf(Cond::P)),
    desc("DI", 1, 4, Op::Di),
    desc("CP", 3, 11, Op::CallIf(Cond::P)),
    desc("PUSH PSW", 1, 11, Op::PushPsw),
    desc("ORI", 2, 7, Op::Ori),
    desc("RST 6", 1, 11, Op::Rst(6)),
    desc("RM", 1, 5, Op::RetIf(Cond::M)),
    desc("SPHL", 1, 5, Op::Sphl),
    desc("JM", 3, 10, Op::JmpIf(Cond::M)),
    desc("EI", 1, 4, Op::Ei),
    desc("CM", 3, 11, Op::CallIf(Cond::M)),
    desc("*CALL", 3, 17, Op::Call),
    desc("CPI", 2, 7, Op::Cpi),
    desc("RST 7", 1, 11, Op::Rst(7)),
];
