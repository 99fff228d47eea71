//! # Virtual Subroutine Registry
//!
//! A virtual subroutine (VSR) is a host callback transparently substituted
//! for code at a fixed address. When a `JSR` or `JMP` transfers control to a
//! registered address, the CPU invokes the callback instead of fetching
//! instruction bytes there; for `JSR` the engine then simulates the `RTS`, so
//! the callback behaves exactly like a native routine that returns.
//!
//! Registration is configuration: install hooks before or between run
//! phases. Mutating the registry from another thread while `step()` is
//! executing is unsupported.

use std::collections::HashMap;

use crate::cpu::Cpu;
use crate::memory::Memory;

/// Host callback invoked with mutable CPU access when control transfers to
/// its registered address.
///
/// A hook may mutate registers and memory freely, and may call
/// [`Cpu::request_exit`] to terminate the run with the accumulator as the
/// exit status.
pub type VsrHook<M> = fn(&mut Cpu<M>);

/// Address-keyed map of virtual subroutine hooks.
pub(crate) struct VsrRegistry<M: Memory> {
    hooks: HashMap<u16, VsrHook<M>>,
}

impl<M: Memory> VsrRegistry<M> {
    pub(crate) fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Installs `hook` at `addr`, replacing any previous hook there.
    pub(crate) fn register(&mut self, addr: u16, hook: VsrHook<M>) {
        self.hooks.insert(addr, hook);
    }

    /// Returns the hook registered at `addr`, if any.
    pub(crate) fn get(&self, addr: u16) -> Option<VsrHook<M>> {
        self.hooks.get(&addr).copied()
    }

    /// Removes all hooks. Used by `Cpu::power`.
    pub(crate) fn clear(&mut self) {
        self.hooks.clear();
    }
}
