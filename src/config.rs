use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Tuning of the flocking rules.
///
/// Read, never written, during a tick. The control panel or the settings file
/// change it between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    /// Perception radius. Only drawn by the debug overlay, the rules ignore it.
    pub neighbor_distance: f32,
    /// Fraction (0..=1) of the heading gap closed per tick.
    pub alignment_strength: f32,
    /// Magnitude of the per-tick pull toward the flock centroid.
    pub cohesion_strength: f32,
    /// Gain applied to the repulsion from close neighbors.
    pub separation_strength: f32,
    /// Radius inside which neighbors repel.
    pub desired_separation: f32,
    /// Cap on the repulsion added per tick.
    pub max_separation_force: f32,
    pub max_speed: f32,
    pub add_noise: bool,
    /// Half-width of the uniform noise added to each velocity axis.
    pub randomness: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            neighbor_distance: 50.0,
            alignment_strength: 0.3,
            cohesion_strength: 0.05,
            separation_strength: 50.0,
            desired_separation: 70.0,
            max_separation_force: 70.0,
            max_speed: 0.5,
            add_noise: true,
            randomness: 0.03,
        }
    }
}

impl FlockConfig {
    pub fn validate(&self) -> Result<()> {
        check_num(self.neighbor_distance, 0.0..).context("invalid neighbor distance")?;
        check_num(self.alignment_strength, 0.0..=1.0).context("invalid alignment strength")?;
        check_num(self.cohesion_strength, 0.0..).context("invalid cohesion strength")?;
        check_num(self.separation_strength, 0.0..).context("invalid separation strength")?;
        check_num(self.desired_separation, 0.0..).context("invalid desired separation")?;
        check_num(self.max_separation_force, 0.0..)
            .context("invalid maximum separation force")?;
        if !(self.max_speed > 0.0 && self.max_speed.is_finite()) {
            bail!("maximum speed must be positive and finite, but is {}", self.max_speed);
        }
        check_num(self.randomness, 0.0..).context("invalid randomness")?;
        Ok(())
    }
}

/// How the initial flock is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationParams {
    pub flock_size: usize,
    /// Initial speed of every bird.
    pub avg_speed: f32,
    pub avg_size: f32,
    /// Sizes are drawn uniformly from `avg_size ± size_jitter`.
    pub size_jitter: f32,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            flock_size: 80,
            avg_speed: 0.8,
            avg_size: 20.0,
            size_jitter: 5.0,
        }
    }
}

impl PopulationParams {
    pub fn validate(&self) -> Result<()> {
        check_num(self.flock_size, 0..=10_000).context("invalid flock size")?;
        check_num(self.avg_speed, 0.0..).context("invalid average speed")?;
        check_num(self.size_jitter, 0.0..).context("invalid size jitter")?;
        if self.avg_size <= self.size_jitter {
            bail!(
                "average size must exceed the size jitter ({}), but is {}",
                self.size_jitter,
                self.avg_size
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Simulation ticks per second of wall time.
    pub physics_fps: f32,
    /// Ticks dropped beyond this count when a frame falls behind.
    pub max_ticks_per_frame: u32,
    pub show_debug: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
            title: "BirdFlockSimulator".to_string(),
            physics_fps: 60.0,
            max_ticks_per_frame: 8,
            show_debug: false,
        }
    }
}

impl WindowParams {
    pub fn validate(&self) -> Result<()> {
        check_num(self.width, 100..=16_384).context("invalid window width")?;
        check_num(self.height, 100..=16_384).context("invalid window height")?;
        check_num(self.physics_fps, 1.0..=1000.0).context("invalid physics rate")?;
        check_num(self.max_ticks_per_frame, 1..=1000).context("invalid tick cap")?;
        Ok(())
    }
}

/// Everything the application reads at startup.
///
/// Loaded from a TOML file whose sections (`[flock]`, `[population]`,
/// `[window]`) and fields are all optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub flock: FlockConfig,
    pub population: PopulationParams,
    pub window: WindowParams,
}

impl Settings {
    /// Load and validate [`Settings`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if any value
    /// is out of range.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents).with_context(|| format!("failed to load settings from {file:?}"))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents).context("failed to deserialize settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.flock.validate().context("invalid flock configuration")?;
        self.population.validate().context("invalid population parameters")?;
        self.window.validate().context("invalid window parameters")?;
        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_sample_file_matches_defaults() {
        let settings = Settings::from_toml(include_str!("../flock.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml(
            "[flock]\n\
             max_speed = 1.5\n\
             add_noise = false\n\
             \n\
             [population]\n\
             flock_size = 12\n",
        )
        .unwrap();

        assert_eq!(settings.flock.max_speed, 1.5);
        assert!(!settings.flock.add_noise);
        assert_eq!(settings.flock.cohesion_strength, 0.05);
        assert_eq!(settings.population.flock_size, 12);
        assert_eq!(settings.window, WindowParams::default());
    }

    #[test]
    fn test_rejects_alignment_above_one() {
        let error = Settings::from_toml("[flock]\nalignment_strength = 1.5\n").unwrap_err();
        let chain = format!("{error:#}");
        assert!(chain.contains("invalid alignment strength"), "{chain}");
    }

    #[test]
    fn test_rejects_zero_max_speed() {
        let config = FlockConfig {
            max_speed: 0.0,
            ..FlockConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_jitter_larger_than_size() {
        let params = PopulationParams {
            avg_size: 4.0,
            size_jitter: 5.0,
            ..PopulationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(Settings::from_toml("[flock\nmax_speed = ").is_err());
    }

    #[test]
    fn test_missing_file() {
        let error = Settings::from_file("/nonexistent/birdflock.toml").unwrap_err();
        assert!(format!("{error:#}").contains("failed to read"));
    }
}
