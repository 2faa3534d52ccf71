use bitflags::bitflags;
use rustvaders_8080::{Bus, Cpu};
use rustvaders_common::key::Key;

/// Full 8080 address space.
const MEMORY_SIZE: usize = 0x10000;

/// The frame buffer lives at 0x2400–0x3FFF: 224 columns of 32 bytes, one bit
/// per pixel. Only the renderer assigns this range any meaning.
const VRAM_START: usize = 0x2400;
const VRAM_SIZE: usize = 0x1C00;

/// Arcade clock and display timing.
pub const CPU_CLOCK_HZ: u32 = 2_000_000;
pub const FRAME_RATE_HZ: u32 = 60;
pub const CYCLES_PER_FRAME: u32 = CPU_CLOCK_HZ / FRAME_RATE_HZ;

/// The video hardware raises two interrupts per frame: RST 1 when the beam
/// reaches mid-screen and RST 2 at the start of vertical blank.
const MID_SCREEN_VECTOR: u8 = 1;
const VBLANK_VECTOR: u8 = 2;

bitflags! {
    /// Input port 1: coin, start buttons, player 1 controls. Bit 3 is wired
    /// high on the original board.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Port1: u8 {
        const COIN = 1 << 0;
        const P2_START = 1 << 1;
        const P1_START = 1 << 2;
        const WIRED_HIGH = 1 << 3;
        const P1_FIRE = 1 << 4;
        const P1_LEFT = 1 << 5;
        const P1_RIGHT = 1 << 6;
    }
}

bitflags! {
    /// Input port 2: DIP switches, tilt, and player 2 controls. Bits 0–1
    /// encode ships-per-credit, bit 3 moves the bonus ship from 1500 to
    /// 1000 points, bit 7 set hides the coin info line in attract mode.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Port2: u8 {
        const SHIPS_LOW = 1 << 0;
        const SHIPS_HIGH = 1 << 1;
        const TILT = 1 << 2;
        const BONUS_AT_1000 = 1 << 3;
        const P2_FIRE = 1 << 4;
        const P2_LEFT = 1 << 5;
        const P2_RIGHT = 1 << 6;
        const HIDE_COIN_INFO = 1 << 7;
    }
}

const SHIPS_MASK: u8 = Port2::SHIPS_LOW.bits() | Port2::SHIPS_HIGH.bits();

/// DIP switch settings surfaced on input port 2.
#[derive(Clone, Copy, Debug)]
pub struct DipSettings {
    /// Ships per credit, 3–6. Encoded on the port as `ships - 3`.
    pub ships_per_credit: u8,
    /// Award the bonus ship at 1000 points instead of 1500.
    pub bonus_ship_at_1000: bool,
    /// Show the coin info line in attract mode.
    pub show_coin_info: bool,
}

impl Default for DipSettings {
    fn default() -> Self {
        Self {
            ships_per_credit: 3,
            bonus_ship_at_1000: false,
            show_coin_info: true,
        }
    }
}

impl DipSettings {
    fn encode(&self, port2: Port2) -> Port2 {
        let ships = self.ships_per_credit.clamp(3, 6) - 3;
        let mut port2 = Port2::from_bits_retain((port2.bits() & !SHIPS_MASK) | ships);
        port2.set(Port2::BONUS_AT_1000, self.bonus_ship_at_1000);
        port2.set(Port2::HIDE_COIN_INFO, !self.show_coin_info);
        port2
    }
}

/// Memory and port state behind the CPU's bus interface.
struct InvadersBus {
    memory: [u8; MEMORY_SIZE],
    port1: Port1,
    port2: Port2,
    shift_register: u16,
    shift_offset: u8,
    sound_port3: u8,
    sound_port5: u8,
}

impl Default for InvadersBus {
    fn default() -> Self {
        Self {
            memory: [0; MEMORY_SIZE],
            port1: Port1::WIRED_HIGH,
            port2: Port2::empty(),
            shift_register: 0,
            shift_offset: 0,
            sound_port3: 0,
            sound_port5: 0,
        }
    }
}

impl Bus for InvadersBus {
    fn mem_read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn mem_write(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn io_read(&mut self, port: u8) -> u8 {
        match port {
            1 => self.port1.bits(),
            2 => self.port2.bits(),
            3 => {
                let shift = 8 - self.shift_offset;
                (self.shift_register >> shift) as u8
            }
            _ => 0,
        }
    }

    fn io_write(&mut self, port: u8, value: u8) {
        match port {
            2 => self.shift_offset = value & 0x07,
            3 => self.sound_port3 = value,
            4 => {
                self.shift_register = (self.shift_register >> 8) | (u16::from(value) << 8);
            }
            5 => self.sound_port5 = value,
            6 => {
                // Watchdog reset; nothing to feed here.
            }
            _ => {}
        }
    }
}

/// The Space Invaders cabinet: an 8080, 64 KiB of memory, and the handful of
/// ports that make up the board's peripheral set.
pub struct InvadersMachine {
    cpu: Cpu,
    bus: InvadersBus,
    dip: DipSettings,
}

impl InvadersMachine {
    pub fn new() -> Self {
        Self::with_dip(DipSettings::default())
    }

    pub fn with_dip(dip: DipSettings) -> Self {
        let mut machine = Self {
            cpu: Cpu::new(),
            bus: InvadersBus::default(),
            dip,
        };
        machine.apply_dip();
        machine
    }

    /// Return the machine to power-on state, preserving memory contents so
    /// the loaded ROM survives.
    pub fn reset(&mut self) {
        self.cpu.reset();
        let memory = self.bus.memory;
        self.bus = InvadersBus::default();
        self.bus.memory = memory;
        self.apply_dip();
    }

    /// Copy a ROM image to address 0 and start execution there.
    pub fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(MEMORY_SIZE);
        self.bus.memory[..len].copy_from_slice(&rom[..len]);
        self.cpu.regs.pc = 0x0000;
    }

    /// Run one 60 Hz frame.
    ///
    /// The CPU's cycle counter paces the two per-frame interrupts: run to the
    /// half-frame mark, deliver RST 1, run out the frame, deliver RST 2, then
    /// reset the counter for the next frame.
    pub fn step_frame(&mut self) {
        let half_frame = u64::from(CYCLES_PER_FRAME / 2);
        while self.cpu.cycles < half_frame {
            self.cpu.step(&mut self.bus);
        }
        self.cpu.interrupt(&mut self.bus, MID_SCREEN_VECTOR);

        while self.cpu.cycles < u64::from(CYCLES_PER_FRAME) {
            self.cpu.step(&mut self.bus);
        }
        self.cpu.interrupt(&mut self.bus, VBLANK_VECTOR);

        self.cpu.cycles = 0;
    }

    fn apply_dip(&mut self) {
        self.bus.port2 = self.dip.encode(self.bus.port2);
    }

    /// Map a logical key event onto the input port bits.
    ///
    /// Coin, start and movement bits follow the key while it is held; tilt
    /// latches on press and stays set until the game clears it.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        let port1 = &mut self.bus.port1;
        let port2 = &mut self.bus.port2;
        match key {
            Key::C => port1.set(Port1::COIN, pressed),
            Key::Num1 => port1.set(Port1::P1_START, pressed),
            Key::Num2 => port1.set(Port1::P2_START, pressed),
            Key::A | Key::Left => port1.set(Port1::P1_LEFT, pressed),
            Key::D | Key::Right => port1.set(Port1::P1_RIGHT, pressed),
            Key::S | Key::Space => port1.set(Port1::P1_FIRE, pressed),
            Key::J => port2.set(Port2::P2_LEFT, pressed),
            Key::L => port2.set(Port2::P2_RIGHT, pressed),
            Key::K => port2.set(Port2::P2_FIRE, pressed),
            Key::T if pressed => port2.insert(Port2::TILT),
            _ => {}
        }
    }

    /// The 1-bpp frame buffer window the renderer consumes.
    pub fn video_ram(&self) -> &[u8] {
        &self.bus.memory[VRAM_START..VRAM_START + VRAM_SIZE]
    }

    /// Current values of the two sound output latches (OUT 3, OUT 5).
    pub fn sound_outputs(&self) -> (u8, u8) {
        (self.bus.sound_port3, self.bus.sound_port5)
    }
}

impl Default for InvadersMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustvaders_8080::Bus;
    use rustvaders_common::key::Key;

    #[test]
    fn shift_register_windows_the_last_two_writes() {
        let mut bus = InvadersBus::default();
        bus.io_write(4, 0xAB);
        bus.io_write(4, 0xCD);
        // Register now holds 0xCDAB; offset 0 reads the newest byte.
        bus.io_write(2, 0);
        assert_eq!(bus.io_read(3), 0xCD);

        bus.io_write(2, 4);
        // Four bits of each byte: 0xCDAB << 4 keeps 0xDA in the window.
        assert_eq!(bus.io_read(3), 0xDA);

        bus.io_write(2, 7);
        assert_eq!(bus.io_read(3), 0xD5);
    }

    #[test]
    fn port_one_follows_key_state() {
        let mut machine = InvadersMachine::new();
        assert_eq!(machine.bus.io_read(1), Port1::WIRED_HIGH.bits());

        machine.handle_key(Key::C, true);
        machine.handle_key(Key::S, true);
        let bits = machine.bus.io_read(1);
        assert_ne!(bits & Port1::COIN.bits(), 0);
        assert_ne!(bits & Port1::P1_FIRE.bits(), 0);

        machine.handle_key(Key::C, false);
        assert_eq!(machine.bus.io_read(1) & Port1::COIN.bits(), 0);
    }

    #[test]
    fn tilt_latches_on_press() {
        let mut machine = InvadersMachine::new();
        machine.handle_key(Key::T, true);
        machine.handle_key(Key::T, false);
        assert_ne!(machine.bus.io_read(2) & Port2::TILT.bits(), 0);
    }

    #[test]
    fn dip_settings_encode_onto_port_two() {
        let machine = InvadersMachine::with_dip(DipSettings {
            ships_per_credit: 5,
            bonus_ship_at_1000: true,
            show_coin_info: false,
        });
        let bits = machine.bus.port2.bits();
        assert_eq!(bits & SHIPS_MASK, 2);
        assert_ne!(bits & Port2::BONUS_AT_1000.bits(), 0);
        assert_ne!(bits & Port2::HIDE_COIN_INFO.bits(), 0);
    }

    #[test]
    fn sound_latches_are_exposed() {
        let mut machine = InvadersMachine::new();
        machine.bus.io_write(3, 0x0A);
        machine.bus.io_write(5, 0x01);
        assert_eq!(machine.sound_outputs(), (0x0A, 0x01));
    }

    #[test]
    fn step_frame_delivers_both_interrupts_and_resets_the_counter() {
        let mut machine = InvadersMachine::new();
        // Handlers at both vectors re-enable interrupts and halt; the main
        // program does the same at address 0.
        let program = [0xFB, 0x76]; // EI, HLT
        machine.load_rom(&program);
        machine.bus.memory[0x08..0x0A].copy_from_slice(&program);
        machine.bus.memory[0x10..0x12].copy_from_slice(&program);
        machine.cpu.regs.sp = 0x2400;

        machine.step_frame();
        // RST 1 fired mid-frame and its handler halted at 0x0A; RST 2 fired
        // at frame end, so the new frame starts in the vblank handler.
        assert_eq!(machine.cpu.regs.pc, 0x0010);
        assert!(!machine.cpu.halted);
        assert_eq!(machine.cpu.cycles, 0);
        // Both interrupt entries pushed the interrupted PC.
        assert_eq!(machine.bus.memory[0x23FE], 0x02);
        assert_eq!(machine.bus.memory[0x23FC], 0x0A);
    }

    #[test]
    fn video_ram_window_tracks_memory_writes() {
        let mut machine = InvadersMachine::new();
        machine.bus.mem_write(0x2400, 0xFF);
        machine.bus.mem_write(0x3FFF, 0x80);
        let vram = machine.video_ram();
        assert_eq!(vram.len(), VRAM_SIZE);
        assert_eq!(vram[0], 0xFF);
        assert_eq!(vram[VRAM_SIZE - 1], 0x80);
    }
}
