// devices/mod.rs
mod smart_light;
mod stereo;
mod tv;

pub use smart_light::SmartLight;
pub use stereo::Stereo;
pub use tv::Tv;

/// Common capability every device supports. Variant-specific operations
/// (change channel, adjust volume, ...) live on the concrete types.
pub trait Device: Send + Sync {
    fn turn_on(&self);
    fn turn_off(&self);
}
