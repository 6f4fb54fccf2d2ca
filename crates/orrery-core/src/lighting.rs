/// Light levels at a simulated time, used for the sun glow and body shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Sun light intensity, pulsing around 3
    pub sun_intensity: f32,
    /// Ambient fill, pulsing around 0.6
    pub ambient: f32,
}

impl Lighting {
    pub fn at(sim_time: f64) -> Self {
        let t = sim_time;
        Self {
            sun_intensity: (3.0 + 0.3 * (t * 0.5).sin()) as f32,
            ambient: (0.6 + 0.1 * (t * 0.3).sin()) as f32,
        }
    }

    /// Brightness multiplier for a body `distance` units from the Sun.
    ///
    /// Ambient plus a falloff of the sun light, capped at 1.
    pub fn shade(&self, distance: f32) -> f32 {
        let direct = self.sun_intensity / (1.0 + distance * 0.15);
        (self.ambient + direct * 0.25).min(1.0)
    }
}
