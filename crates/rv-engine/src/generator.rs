//! Generator facade: owns the uniform source and config, runs one request per call

use std::collections::BTreeSet;

use crate::charset::{self, CharsetPattern};
use crate::color::{self, ColorFormat};
use crate::config::EngineConfig;
use crate::error::GenResult;
use crate::list;
use crate::numeric;
use crate::request::{GenerationOutput, GenerationRequest};
use crate::source::{RngSource, UniformSource};
use crate::template;
use crate::wheel::WheelState;

/// Random value generator
///
/// Entropy-seeded by default; `seeded` or `EngineConfig::seed` make every
/// operation reproducible.
#[derive(Debug, Clone)]
pub struct RandomGenerator<S: UniformSource = RngSource> {
    source: S,
    config: EngineConfig,
}

impl RandomGenerator<RngSource> {
    /// Default config, entropy seed
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Seeded from `config.seed` when present.
    ///
    /// The config is not validated here; wheels reject an invalid wheel
    /// config on `reset` and `spin`. Call [`EngineConfig::validate`] to
    /// check it up front.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            source: RngSource::from_seed_option(config.seed),
            config,
        }
    }

    /// Reproducible generator for `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(EngineConfig::deterministic(seed))
    }

    /// Reseed for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.source = RngSource::seeded(seed);
    }
}

impl Default for RandomGenerator<RngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSource> RandomGenerator<S> {
    /// Generator drawing from a caller-supplied source
    pub fn with_source(source: S, config: EngineConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OPERATIONS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn sample_integers(
        &mut self,
        min: i64,
        max: i64,
        exclude: &BTreeSet<i64>,
        count: usize,
    ) -> GenResult<Vec<i64>> {
        numeric::sample_integers(
            &mut self.source,
            min,
            max,
            exclude,
            count,
            self.config.max_integer_domain,
        )
    }

    pub fn sample_floats(
        &mut self,
        min: f64,
        max: f64,
        decimals: u32,
        count: usize,
    ) -> GenResult<Vec<f64>> {
        numeric::sample_floats(&mut self.source, min, max, decimals, count)
    }

    pub fn generate_colors(&mut self, format: ColorFormat, count: usize) -> Vec<String> {
        color::generate_colors(&mut self.source, format, count)
    }

    pub fn generate_strings(
        &mut self,
        length: usize,
        pattern: CharsetPattern,
        exclude_chars: &str,
        count: usize,
    ) -> GenResult<Vec<String>> {
        charset::generate_strings(&mut self.source, length, pattern, exclude_chars, count)
    }

    pub fn expand_template(&mut self, template: &str, count: usize) -> Vec<String> {
        template::expand_template(&mut self.source, template, count)
    }

    pub fn select_from_list(
        &mut self,
        items: &[String],
        count: usize,
        unique: bool,
    ) -> GenResult<Vec<String>> {
        list::select_from_list(&mut self.source, items, count, unique)
    }

    /// Run one request
    pub fn generate(&mut self, request: &GenerationRequest) -> GenResult<GenerationOutput> {
        log::debug!("Request: {} x{}", request.mode(), request.count());
        let output = match request {
            GenerationRequest::Integers {
                min,
                max,
                exclude,
                count,
            } => GenerationOutput::Integers(self.sample_integers(*min, *max, exclude, *count)?),
            GenerationRequest::Floats {
                min,
                max,
                decimals,
                count,
            } => GenerationOutput::Floats(self.sample_floats(*min, *max, *decimals, *count)?),
            GenerationRequest::Colors { format, count } => {
                GenerationOutput::Text(self.generate_colors(*format, *count))
            }
            GenerationRequest::Strings {
                length,
                pattern,
                exclude_chars,
                count,
            } => GenerationOutput::Text(self.generate_strings(
                *length,
                *pattern,
                exclude_chars,
                *count,
            )?),
            GenerationRequest::Template { template, count } => {
                GenerationOutput::Text(self.expand_template(template, *count))
            }
            GenerationRequest::List {
                items,
                count,
                unique,
            } => GenerationOutput::Text(self.select_from_list(items, *count, *unique)?),
        };
        Ok(output)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // WHEEL
    // ═══════════════════════════════════════════════════════════════════════

    /// Idle wheel using this generator's wheel config
    pub fn new_wheel<I, T>(&self, items: I) -> GenResult<WheelState>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        WheelState::with_items(self.config.wheel, items)
    }

    /// Start `wheel` with a velocity drawn from this generator's source
    pub fn spin_wheel(&mut self, wheel: &mut WheelState) -> GenResult<f64> {
        wheel.spin(&mut self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use crate::source::FixedSource;

    #[test]
    fn test_seeded_generators_agree() {
        let request = GenerationRequest::strings(16, CharsetPattern::Alphanumeric, "", 5);
        let a = RandomGenerator::seeded(42).generate(&request).unwrap();
        let b = RandomGenerator::seeded(42).generate(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut generator = RandomGenerator::seeded(1);
        let first = generator.generate_colors(ColorFormat::Hex, 3);
        generator.seed(1);
        assert_eq!(generator.generate_colors(ColorFormat::Hex, 3), first);
        assert_eq!(generator.config().seed, Some(1));
    }

    #[test]
    fn test_dispatch_each_mode() {
        let mut generator = RandomGenerator::seeded(9);
        let requests = [
            GenerationRequest::integers(1, 10, BTreeSet::new(), 3),
            GenerationRequest::floats(0.0, 1.0, 3, 4),
            GenerationRequest::colors(ColorFormat::Hsl, 2),
            GenerationRequest::strings(6, CharsetPattern::Hex, "", 2),
            GenerationRequest::template("{x}{x}", 5),
            GenerationRequest::list(vec!["a".into(), "b".into()], 7, false),
        ];
        for request in &requests {
            let output = generator.generate(request).unwrap();
            assert_eq!(output.len(), request.count(), "mode {}", request.mode());
        }
    }

    #[test]
    fn test_domain_limit_from_config() {
        let config = EngineConfig::deterministic(3).with_max_integer_domain(100);
        let mut generator = RandomGenerator::with_config(config);
        assert!(matches!(
            generator.sample_integers(1, 101, &BTreeSet::new(), 1),
            Err(GenError::DomainTooLarge { size: 101, limit: 100 })
        ));
        assert!(generator.sample_integers(1, 100, &BTreeSet::new(), 1).is_ok());
    }

    #[test]
    fn test_wheel_uses_generator_source() {
        let mut generator =
            RandomGenerator::with_source(FixedSource::constant(0.0), EngineConfig::default());
        let mut wheel = generator.new_wheel(["x", "y", "z"]).unwrap();
        assert_eq!(generator.spin_wheel(&mut wheel).unwrap(), 25.0);
        assert_eq!(generator.source_mut().draws(), 1);
    }

    #[test]
    fn test_invalid_wheel_config_surfaces_on_new_wheel() {
        let config = EngineConfig::deterministic(5)
            .with_wheel(crate::config::WheelConfig::default().with_friction(1.0));
        let generator = RandomGenerator::with_config(config);
        assert!(matches!(
            generator.new_wheel(["a", "b"]),
            Err(GenError::Config(_))
        ));
    }
}
