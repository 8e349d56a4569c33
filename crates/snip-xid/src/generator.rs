use crate::{
    clock::{Clock, SystemClock},
    error::Error,
    Xid,
};
use std::sync::atomic::{AtomicU32, Ordering};
use typed_builder::TypedBuilder;

const COUNTER_MASK: u32 = (1 << 24) - 1;

/// Configures an [`XidGenerator`] instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct XidSettings {
    /// Three bytes identifying the host. Random per process when not set.
    #[builder(default = rand::random())]
    pub machine_id: [u8; 3],
    /// Defaults to the low 16 bits of the OS process id.
    #[builder(default = std::process::id() as u16)]
    pub process_id: u16,
}

/// Mints [`Xid`]s without any coordination between processes.
///
/// The counter starts at a random value and advances by one per id, wrapping
/// within 24 bits. Generation never blocks and never fails.
pub struct XidGenerator<C: Clock> {
    machine_id: [u8; 3],
    process_id: u16,
    clock: C,
    counter: AtomicU32,
}

impl XidGenerator<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new(settings: XidSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> XidGenerator<C> {
    pub fn with_clock(settings: XidSettings, clock: C) -> Self {
        Self::with_counter_start(settings, clock, rand::random())
    }

    fn with_counter_start(settings: XidSettings, clock: C, start: u32) -> Self {
        Self {
            machine_id: settings.machine_id,
            process_id: settings.process_id,
            clock,
            counter: AtomicU32::new(start & COUNTER_MASK),
        }
    }

    /// Generates the next id.
    pub fn next_id(&self) -> Xid {
        let counter = self.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;
        // Seconds before 1970 or after 2106 do not fit the 4-byte field.
        let seconds = self.clock.now().as_second().clamp(0, i64::from(u32::MAX)) as u32;
        Xid::from_parts(seconds, self.machine_id, self.process_id, counter)
    }
}

/// Parses a machine id given as six hex digits, e.g. `"0a1b2c"`.
pub fn parse_machine_id(value: &str) -> Result<[u8; 3], Error> {
    let invalid = || Error::InvalidMachineId(value.to_string());
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let parsed = u32::from_str_radix(value, 16).map_err(|_| invalid())?;
    let [_, high, mid, low] = parsed.to_be_bytes();
    Ok([high, mid, low])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock::TestClock;
    use jiff::Timestamp;
    use std::collections::HashSet;

    fn settings() -> XidSettings {
        XidSettings::builder()
            .machine_id([0x0a, 0x1b, 0x2c])
            .process_id(42)
            .build()
    }

    fn make_generator(clock_second: i64, counter_start: u32) -> (XidGenerator<TestClock>, TestClock) {
        let clock = TestClock::new(Timestamp::from_second(clock_second).unwrap());
        let generator = XidGenerator::with_counter_start(settings(), clock.clone(), counter_start);
        (generator, clock)
    }

    #[test]
    fn embeds_clock_machine_and_process() {
        let (generator, _) = make_generator(1_700_000_000, 0);
        let id = generator.next_id();
        assert_eq!(id.timestamp(), 1_700_000_000);
        assert_eq!(id.machine_id(), [0x0a, 0x1b, 0x2c]);
        assert_eq!(id.process_id(), 42);
        assert_eq!(id.counter(), 0);
    }

    #[test]
    fn same_second_increments_counter() {
        let (generator, _) = make_generator(100, 7);
        let id0 = generator.next_id();
        let id1 = generator.next_id();
        let id2 = generator.next_id();
        assert_eq!(id0.counter(), 7);
        assert_eq!(id1.counter(), 8);
        assert_eq!(id2.counter(), 9);
        assert!(id0.to_string() < id1.to_string());
        assert!(id1.to_string() < id2.to_string());
    }

    #[test]
    fn counter_wraps_within_24_bits() {
        let (generator, _) = make_generator(100, COUNTER_MASK);
        assert_eq!(generator.next_id().counter(), COUNTER_MASK);
        assert_eq!(generator.next_id().counter(), 0);
    }

    #[test]
    fn later_second_sorts_after_counter_wrap() {
        let (generator, clock) = make_generator(100, COUNTER_MASK);
        let before = generator.next_id();
        clock.set(Timestamp::from_second(101).unwrap());
        let after = generator.next_id();
        assert_eq!(after.counter(), 0);
        assert!(before.to_string() < after.to_string());
    }

    #[test]
    fn pre_epoch_clock_saturates_to_zero() {
        let (generator, _) = make_generator(-5, 0);
        assert_eq!(generator.next_id().timestamp(), 0);
    }

    #[test]
    fn system_clock_ids_are_unique() {
        let generator = XidGenerator::new(XidSettings::builder().build());
        let ids: HashSet<String> = (0..1_000).map(|_| generator.next_id().encode()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<XidGenerator<SystemClock>>();
    }

    #[test]
    fn parses_machine_id() {
        assert_eq!(parse_machine_id("0a1b2c"), Ok([0x0a, 0x1b, 0x2c]));
        assert_eq!(parse_machine_id("FFFFFF"), Ok([0xff, 0xff, 0xff]));
        assert!(parse_machine_id("0a1b2").is_err());
        assert!(parse_machine_id("0a1b2z").is_err());
        assert!(parse_machine_id("+a1b2c").is_err());
    }
}
