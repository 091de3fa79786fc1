// src/sensor/variants.rs

//! Concrete sensor implementations over the driver traits.
//!
//! Every variant follows the same shape: `read` samples the probe and
//! caches the outcome, a failed sample caches `None`, and the render
//! methods emit nothing for a `None` reading. `device_tags` is a static
//! line-protocol tag fragment (e.g. `"location=attic"`) appended after
//! the variant's own `sensor=` tag; pass `""` for none.

use crate::common::hal_traits::StatusDisplay;
use crate::common::record::write_record;
use crate::sensor::drivers::{
    AnalogInput, DigitalInput, HumidityProbe, PressureProbe, TemperatureProbe,
};
use crate::sensor::Sensor;
use core::fmt;
use core::fmt::Write as _;

/// Divisor mapping the inverted 10-bit moisture ADC range onto 0..=100.
const MOISTURE_SCALE: f32 = 7.68;

fn emit(
    out: &mut dyn fmt::Write,
    measurement: &str,
    sensor_tag: &str,
    device_tags: &str,
    value: f32,
) -> fmt::Result {
    if device_tags.is_empty() {
        write_record(out, measurement, format_args!("sensor={}", sensor_tag), value)
    } else {
        write_record(
            out,
            measurement,
            format_args!("sensor={},{}", sensor_tag, device_tags),
            value,
        )
    }
}

// --- Light ---

/// An LDR on an ADC channel, reported as raw counts.
pub struct LightSensor<A: AnalogInput> {
    adc: A,
    device_tags: &'static str,
    value: Option<u16>,
}

impl<A: AnalogInput> LightSensor<A> {
    pub fn new(adc: A, device_tags: &'static str) -> Self {
        LightSensor {
            adc,
            device_tags,
            value: None,
        }
    }

    pub fn value(&self) -> Option<u16> {
        self.value
    }
}

impl<A: AnalogInput> Sensor for LightSensor<A> {
    fn setup(&mut self) {}

    fn read(&mut self) {
        self.value = self.adc.read_raw().ok();
    }

    fn render_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(value) = self.value {
            write!(out, "{} light ", value)?;
        }
        Ok(())
    }

    fn render_record(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(value) = self.value {
            emit(out, "ambient_light", "LDR", self.device_tags, value as f32)?;
        }
        Ok(())
    }
}

// --- Temperature ---

/// A temperature-only probe, typically a Dallas one-wire device.
pub struct TemperatureSensor<P: TemperatureProbe> {
    probe: P,
    device_tags: &'static str,
    celsius: Option<f32>,
}

impl<P: TemperatureProbe> TemperatureSensor<P> {
    pub fn new(probe: P, device_tags: &'static str) -> Self {
        TemperatureSensor {
            probe,
            device_tags,
            celsius: None,
        }
    }

    pub fn celsius(&self) -> Option<f32> {
        self.celsius
    }
}

impl<P: TemperatureProbe> Sensor for TemperatureSensor<P> {
    fn setup(&mut self) {}

    fn read(&mut self) {
        self.celsius = self.probe.read_celsius().ok();
    }

    fn render_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(celsius) = self.celsius {
            write!(out, "{:.2} degC ", celsius)?;
        }
        Ok(())
    }

    fn render_record(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(celsius) = self.celsius {
            emit(out, "temperature", "Dallas", self.device_tags, celsius)?;
        }
        Ok(())
    }
}

// --- Climate ---

/// A combined temperature/humidity probe, typically an SHT30.
pub struct ClimateSensor<P: HumidityProbe> {
    probe: P,
    device_tags: &'static str,
    reading: Option<(f32, f32)>,
}

impl<P: HumidityProbe> ClimateSensor<P> {
    pub fn new(probe: P, device_tags: &'static str) -> Self {
        ClimateSensor {
            probe,
            device_tags,
            reading: None,
        }
    }
}

impl<P: HumidityProbe> Sensor for ClimateSensor<P> {
    fn setup(&mut self) {}

    fn read(&mut self) {
        self.reading = self.probe.read_humidity().ok();
    }

    fn render_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some((celsius, humidity)) = self.reading {
            write!(out, "{:.2} degC {:.2} relH ", celsius, humidity)?;
        }
        Ok(())
    }

    fn render_record(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some((celsius, humidity)) = self.reading {
            emit(out, "temperature", "SHT30", self.device_tags, celsius)?;
            emit(out, "humidity", "SHT30", self.device_tags, humidity)?;
        }
        Ok(())
    }

    fn render_display(&self, display: &mut dyn StatusDisplay) {
        if let Some((celsius, humidity)) = self.reading {
            display.draw_value(1, format_args!("{:.2} degC", celsius));
            display.draw_value(2, format_args!("{:.2} relH", humidity));
        }
    }
}

// --- Barometer ---

/// A combined temperature/pressure probe, typically a BMP280.
///
/// Boards often mount the barometer close to a heat source, so a fixed
/// temperature correction can be applied to the reported temperature.
pub struct BarometerSensor<P: PressureProbe> {
    probe: P,
    device_tags: &'static str,
    correction: f32,
    reading: Option<(f32, f32)>,
}

impl<P: PressureProbe> BarometerSensor<P> {
    pub fn new(probe: P, device_tags: &'static str) -> Self {
        BarometerSensor {
            probe,
            device_tags,
            correction: 0.0,
            reading: None,
        }
    }

    /// Sets the offset added to every reported temperature, in degrees.
    pub fn with_correction(mut self, correction: f32) -> Self {
        self.correction = correction;
        self
    }
}

impl<P: PressureProbe> Sensor for BarometerSensor<P> {
    fn setup(&mut self) {}

    fn read(&mut self) {
        self.reading = self
            .probe
            .read_pressure()
            .ok()
            .map(|(celsius, pressure)| (celsius + self.correction, pressure));
    }

    fn render_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some((celsius, pressure)) = self.reading {
            write!(out, "{:.2} degC {:.1} hPa ", celsius, pressure)?;
        }
        Ok(())
    }

    fn render_record(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some((celsius, pressure)) = self.reading {
            emit(out, "temperature", "BMP280", self.device_tags, celsius)?;
            emit(out, "pressure", "BMP280", self.device_tags, pressure)?;
        }
        Ok(())
    }

    fn render_display(&self, display: &mut dyn StatusDisplay) {
        if let Some((celsius, pressure)) = self.reading {
            display.draw_value(1, format_args!("{:.2} degC", celsius));
            display.draw_value(3, format_args!("{:.1} hPa", pressure));
        }
    }
}

// --- Moisture ---

/// A resistive soil-moisture probe: an ADC channel for the level plus a
/// comparator output that goes high over a hardware-set threshold.
///
/// The raw ADC reading is inverted (wet soil conducts, pulling the
/// reading down) and scaled onto 0..=100.
pub struct MoistureSensor<A: AnalogInput, D: DigitalInput> {
    adc: A,
    threshold_pin: D,
    device_tags: &'static str,
    value: Option<f32>,
    over_threshold: bool,
}

impl<A: AnalogInput, D: DigitalInput> MoistureSensor<A, D> {
    pub fn new(adc: A, threshold_pin: D, device_tags: &'static str) -> Self {
        MoistureSensor {
            adc,
            threshold_pin,
            device_tags,
            value: None,
            over_threshold: false,
        }
    }

    pub fn over_threshold(&self) -> bool {
        self.over_threshold
    }
}

impl<A: AnalogInput, D: DigitalInput> Sensor for MoistureSensor<A, D> {
    fn setup(&mut self) {}

    fn read(&mut self) {
        self.value = self
            .adc
            .read_raw()
            .ok()
            .map(|raw| (1024.0 - raw as f32) / MOISTURE_SCALE);
        self.over_threshold = self.threshold_pin.is_high().unwrap_or(false);
    }

    fn render_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(value) = self.value {
            write!(out, "{:.1} soilM ", value)?;
        }
        Ok(())
    }

    fn render_record(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(value) = self.value {
            emit(out, "moisture", "Generic", self.device_tags, value)?;
        }
        Ok(())
    }

    fn render_display(&self, display: &mut dyn StatusDisplay) {
        if let Some(value) = self.value {
            display.draw_value(4, format_args!("{:.1} soilM", value));
        }
        if self.over_threshold {
            display.draw_star();
        }
    }
}
