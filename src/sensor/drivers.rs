// src/sensor/drivers.rs

//! Hardware-facing traits the sensor variants are generic over.
//!
//! Each trait covers one transducer shape rather than one part number, so
//! a variant works with any probe that can produce the right reading. The
//! `impl-hal` feature provides a digital-input adapter for `embedded-hal`
//! pins; analog and bus probes differ too much between HALs for a single
//! blanket adapter to be worth carrying.

use core::fmt::Debug;

/// A raw ADC channel, e.g. a light-dependent resistor on an analog pin.
pub trait AnalogInput {
    type Error: Debug;

    /// Samples the channel. Typical full scale is a 10-bit 0..=1023.
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// A single digital input, e.g. a moisture threshold comparator output.
pub trait DigitalInput {
    type Error: Debug;

    fn is_high(&mut self) -> Result<bool, Self::Error>;
}

/// A temperature-only probe such as a Dallas one-wire device.
pub trait TemperatureProbe {
    type Error: Debug;

    fn read_celsius(&mut self) -> Result<f32, Self::Error>;
}

/// A combined temperature and relative-humidity probe such as an SHT30.
pub trait HumidityProbe {
    type Error: Debug;

    /// Returns (degrees Celsius, percent relative humidity).
    fn read_humidity(&mut self) -> Result<(f32, f32), Self::Error>;
}

/// A combined temperature and barometric-pressure probe such as a BMP280.
pub trait PressureProbe {
    type Error: Debug;

    /// Returns (degrees Celsius, hectopascals).
    fn read_pressure(&mut self) -> Result<(f32, f32), Self::Error>;
}

/// Adapts an `embedded-hal` input pin to [`DigitalInput`].
#[cfg(feature = "impl-hal")]
pub struct HalInputPin<P>(pub P);

#[cfg(feature = "impl-hal")]
impl<P> DigitalInput for HalInputPin<P>
where
    P: embedded_hal::digital::InputPin,
{
    type Error = P::Error;

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }
}
