//! In-process simulation of a character-device contract: read returns the
//! current offset's Fibonacci number, write selects the algorithm, seek
//! repositions. There is no `/dev` registration here — `cargo` cannot
//! build or exercise a real kernel module — so `open`/`read`/`write`/
//! `seek` are rendered as plain methods guarded by a `std::sync::Mutex`,
//! the userspace equivalent of a kernel mutex guarding exclusive access.

use fibdrv_ubn::{fib_doubling, fib_linear};
use std::sync::{Mutex, TryLockError};
use std::time::{Duration, Instant};

/// The device clamps the seekable offset to `[0, MAX_LENGTH]`, matching
/// `fib_device_lseek`.
pub const MAX_LENGTH: u64 = 100_000;

#[derive(Debug, PartialEq, Eq)]
pub enum DeviceError {
    /// Another handle already holds the device open (`EBUSY`-equivalent).
    Busy,
}

pub struct FibDevice {
    lock: Mutex<()>,
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl FibDevice {
    pub fn new() -> Self {
        Self { lock: Mutex::new(()) }
    }

    /// Acquire exclusive access, mirroring `fib_open`'s `mutex_trylock`.
    pub fn open(&self) -> Result<FibHandle<'_>, DeviceError> {
        match self.lock.try_lock() {
            Ok(guard) => {
                log::info!("fib device opened");
                Ok(FibHandle { _guard: guard, position: 0 })
            }
            Err(TryLockError::WouldBlock) => {
                log::warn!("fib device already in use");
                Err(DeviceError::Busy)
            }
            Err(TryLockError::Poisoned(_)) => {
                unreachable!("the guard never panics while held")
            }
        }
    }
}

/// An open handle; releasing it (dropping) frees the device the way
/// `fib_release` unlocks `fib_mutex`.
pub struct FibHandle<'a> {
    _guard: std::sync::MutexGuard<'a, ()>,
    position: u64,
}

/// `write(fd, ..., size)` mode selector, matching `fib_write`'s `switch
/// (size)` dispatch (`size == 0` selects the linear algorithm, `size == 1`
/// selects fast doubling; anything else is a no-op that returns zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    Linear,
    Doubling,
    Noop,
}

impl From<usize> for WriteMode {
    fn from(size: usize) -> Self {
        match size {
            0 => WriteMode::Linear,
            1 => WriteMode::Doubling,
            _ => WriteMode::Noop,
        }
    }
}

impl FibHandle<'_> {
    /// `lseek`, clamped to `[0, MAX_LENGTH]` the way `fib_device_lseek`
    /// clamps `new_pos`.
    pub fn seek(&mut self, whence: SeekFrom) -> u64 {
        let requested = match whence {
            SeekFrom::Start(offset) => offset,
            SeekFrom::Current(delta) => self.position as i64 + delta,
            SeekFrom::End(delta) => MAX_LENGTH as i64 - delta,
        };
        self.position = requested.clamp(0, MAX_LENGTH as i64) as u64;
        self.position
    }

    /// `read`: the decimal rendering of `F(position)`, always computed
    /// with the linear algorithm.
    pub fn read(&self) -> String {
        fib_linear(self.position).expect("allocation never fails on a host with ample memory").to_string()
    }

    /// `write`: dispatch on `mode` and return the elapsed compute time,
    /// matching `fib_write`'s `ktime_get`/`ktime_to_ns` measurement.
    pub fn write(&self, mode: WriteMode) -> Duration {
        let start = Instant::now();
        match mode {
            WriteMode::Linear => {
                fib_linear(self.position).expect("allocation never fails on a host with ample memory");
            }
            WriteMode::Doubling => {
                fib_doubling(self.position).expect("allocation never fails on a host with ample memory");
            }
            WriteMode::Noop => return Duration::ZERO,
        }
        start.elapsed()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum SeekFrom {
    Start(i64),
    Current(i64),
    End(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_while_held_is_busy() {
        let device = FibDevice::new();
        let _first = device.open().unwrap();
        assert_eq!(device.open().unwrap_err(), DeviceError::Busy);
    }

    #[test]
    fn seek_clamps_to_max_length() {
        let device = FibDevice::new();
        let mut handle = device.open().unwrap();
        assert_eq!(handle.seek(SeekFrom::Start(i64::MAX)), MAX_LENGTH);
        assert_eq!(handle.seek(SeekFrom::Start(-5)), 0);
    }

    #[test]
    fn read_after_seek_returns_the_fibonacci_string() {
        let device = FibDevice::new();
        let mut handle = device.open().unwrap();
        handle.seek(SeekFrom::Start(10));
        assert_eq!(handle.read(), "55");
    }

    #[test]
    fn write_mode_dispatches_by_size() {
        assert_eq!(WriteMode::from(0), WriteMode::Linear);
        assert_eq!(WriteMode::from(1), WriteMode::Doubling);
        assert_eq!(WriteMode::from(2), WriteMode::Noop);
    }
}
