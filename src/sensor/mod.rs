// src/sensor/mod.rs

pub mod drivers;
pub mod variants;

pub use variants::{
    BarometerSensor, ClimateSensor, LightSensor, MoistureSensor, TemperatureSensor,
};

use crate::common::hal_traits::StatusDisplay;
use core::fmt;
use thiserror::Error;

/// A sensor that can be sampled and rendered in several forms.
///
/// `read` takes the measurement and caches it; the render methods then
/// format the cached value without touching the hardware again. A sensor
/// whose last read failed renders nothing, so one dead probe never
/// poisons a shared report buffer.
pub trait Sensor {
    /// One-time hardware initialization.
    fn setup(&mut self);

    /// Samples the hardware and caches the result.
    fn read(&mut self);

    /// Appends a human-readable summary of the cached value.
    fn render_text(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Appends line-protocol records for the cached value.
    fn render_record(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Paints the cached value onto a status display. Optional; the
    /// default renders nothing.
    fn render_display(&self, _display: &mut dyn StatusDisplay) {}
}

/// Returned by [`Registry::register`] when the slot table is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sensor registry full (capacity {capacity})")]
pub struct RegistryFull {
    pub capacity: usize,
}

/// A fixed-capacity collection of sensors, iterated most-recently
/// registered first.
///
/// Registration order is significant: later additions take precedence in
/// reports, so a board wires its primary sensor last.
pub struct Registry<'a, const N: usize> {
    sensors: heapless::Vec<&'a mut dyn Sensor, N>,
}

impl<'a, const N: usize> Registry<'a, N> {
    pub const fn new() -> Self {
        Registry {
            sensors: heapless::Vec::new(),
        }
    }

    /// Adds a sensor at the front of the iteration order.
    pub fn register(&mut self, sensor: &'a mut dyn Sensor) -> Result<(), RegistryFull> {
        self.sensors
            .insert(0, sensor)
            .map_err(|_| RegistryFull { capacity: N })
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Runs [`Sensor::setup`] on every registered sensor.
    pub fn setup_all(&mut self) {
        self.for_each(|sensor| sensor.setup());
    }

    /// Runs [`Sensor::read`] on every registered sensor.
    pub fn read_all(&mut self) {
        self.for_each(|sensor| sensor.read());
    }

    /// Visits every sensor exactly once, most recently registered first.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut dyn Sensor),
    {
        for sensor in self.sensors.iter_mut() {
            f(&mut **sensor);
        }
    }
}

impl<'a, const N: usize> Default for Registry<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write as _;
    use heapless::String as HeaplessString;

    struct TagSensor {
        tag: &'static str,
        reads: u32,
    }

    impl TagSensor {
        fn new(tag: &'static str) -> Self {
            TagSensor { tag, reads: 0 }
        }
    }

    impl Sensor for TagSensor {
        fn setup(&mut self) {}
        fn read(&mut self) {
            self.reads += 1;
        }
        fn render_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
            write!(out, "{} ", self.tag)
        }
        fn render_record(&self, out: &mut dyn fmt::Write) -> fmt::Result {
            writeln!(out, "{} value=1.00", self.tag)
        }
    }

    #[test]
    fn test_iteration_order_is_reverse_of_registration() {
        let mut a = TagSensor::new("a");
        let mut b = TagSensor::new("b");
        let mut c = TagSensor::new("c");

        let mut registry: Registry<4> = Registry::new();
        registry.register(&mut a).unwrap();
        registry.register(&mut b).unwrap();
        registry.register(&mut c).unwrap();
        assert_eq!(registry.len(), 3);

        let mut text = HeaplessString::<32>::new();
        registry.for_each(|sensor| sensor.render_text(&mut text).unwrap());
        assert_eq!(text.as_str(), "c b a ");
    }

    #[test]
    fn test_read_all_visits_each_sensor_once() {
        let mut a = TagSensor::new("a");
        let mut b = TagSensor::new("b");

        let mut registry: Registry<4> = Registry::new();
        registry.register(&mut a).unwrap();
        registry.register(&mut b).unwrap();
        registry.read_all();
        registry.read_all();
        drop(registry);

        assert_eq!(a.reads, 2);
        assert_eq!(b.reads, 2);
    }

    #[test]
    fn test_register_past_capacity_fails() {
        let mut a = TagSensor::new("a");
        let mut b = TagSensor::new("b");

        let mut registry: Registry<1> = Registry::new();
        registry.register(&mut a).unwrap();
        assert_eq!(registry.register(&mut b), Err(RegistryFull { capacity: 1 }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_records_append_to_shared_buffer() {
        let mut a = TagSensor::new("temperature,sensor=a");
        let mut b = TagSensor::new("humidity,sensor=b");

        let mut registry: Registry<4> = Registry::new();
        registry.register(&mut a).unwrap();
        registry.register(&mut b).unwrap();

        let mut report = HeaplessString::<128>::new();
        registry.for_each(|sensor| sensor.render_record(&mut report).unwrap());
        assert_eq!(
            report.as_str(),
            "humidity,sensor=b value=1.00\ntemperature,sensor=a value=1.00\n"
        );
    }
}
