/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NopKind {
    /// `cortex_m::asm::nop` on bare-metal ARM.
    CortexM,
    /// Inline `nop` instruction.
    Instruction,
    /// `core::hint::spin_loop` where inline asm is unavailable.
    SpinHint,
}

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub const NOP_KIND: NopKind = NopKind::CortexM;

#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    all(target_arch = "arm", not(target_os = "none")),
))]
pub const NOP_KIND: NopKind = NopKind::Instruction;

#[cfg(not(any(
    target_arch = "arm",
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
)))]
pub const NOP_KIND: NopKind = NopKind::SpinHint;

/// Emits a single `nop`. Touches no memory, stack or flags.
#[cfg(all(target_arch = "arm", target_os = "none"))]
#[inline(always)]
pub fn nop() {
    cortex_m::asm::nop();
}

/// Emits a single `nop`. Touches no memory, stack or flags.
#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    all(target_arch = "arm", not(target_os = "none")),
))]
#[inline(always)]
pub fn nop() {
    unsafe { core::arch::asm!("nop", options(nomem, nostack, preserves_flags)) };
}

#[cfg(not(any(
    target_arch = "arm",
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
)))]
#[inline(always)]
pub fn nop() {
    core::hint::spin_loop();
}

#[inline(always)]
pub fn nops(count: u32) {
    for _ in 0..count {
        nop();
    }
}

/// Polls `cond` with a `nop` between polls. Returns whether it ever held.
#[inline]
pub fn spin_until<F>(mut cond: F, max_spins: u32) -> bool
where
    F: FnMut() -> bool,
{
    if cond() {
        return true;
    }
    for _ in 0..max_spins {
        nop();
        if cond() {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nop_leaves_state_alone() {
        let value = core::hint::black_box(0x1234_5678u32);
        nop();
        nops(0);
        nops(16);
        assert_eq!(core::hint::black_box(value), 0x1234_5678);
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    #[test]
    fn hosted_targets_use_inline_nop() {
        assert_eq!(NOP_KIND, NopKind::Instruction);
    }

    #[test]
    fn spin_until_stops_on_first_success() {
        let mut polls = 0;
        let hit = spin_until(
            || {
                polls += 1;
                polls == 3
            },
            10,
        );
        assert!(hit);
        assert_eq!(polls, 3);
    }

    #[test]
    fn spin_until_gives_up() {
        let mut polls = 0;
        let hit = spin_until(
            || {
                polls += 1;
                false
            },
            5,
        );
        assert!(!hit);
        assert_eq!(polls, 6);
    }

    #[test]
    fn spin_until_zero_polls_once() {
        let mut polls = 0;
        assert!(!spin_until(
            || {
                polls += 1;
                false
            },
            0
        ));
        assert_eq!(polls, 1);
    }
}
